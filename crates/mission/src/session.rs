//! Design session: the explicit state object behind the mitigation-design dashboard.
//!
//! Each [`DesignEvent`] mutates the current selection and triggers exactly one
//! recomputation of the feasibility calculator.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogError};
use crate::clock::{ClockError, MissionClock};
use crate::feasibility::{self, Assessment, FeasibilityInputs};
use crate::launch::{self, LaunchError, LaunchPlan};
use crate::state::MissionState;

/// Input changes coming from the design controls.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignEvent {
    SelectVehicle(String),
    SelectPropulsion(String),
    /// Switching material re-clamps the impactor mass to the new material's limit.
    SelectMaterial(String),
    SetImpactorMass(u32),
    /// Replaces any previously selected trajectory.
    SelectTrajectory(String),
    ClearTrajectory,
    AdvanceClock {
        days: f64,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Current choices, reported by catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub vehicle: String,
    pub propulsion: String,
    pub material: String,
    pub impactor_mass_kg: u32,
    pub trajectory: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct Cursor {
    vehicle: usize,
    propulsion: usize,
    material: usize,
    impactor_mass_kg: u32,
    trajectory: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct DesignSession {
    catalog: Catalog,
    mission: MissionState,
    clock: MissionClock,
    cursor: Cursor,
}

impl DesignSession {
    /// Open a session on the first entry of every catalog section, zero impactor mass and no
    /// trajectory.
    pub fn new(
        catalog: Catalog,
        mission: MissionState,
        clock: MissionClock,
    ) -> Result<Self, SessionError> {
        catalog.ensure_selectable()?;
        info!(
            budget_b = mission.starting_budget_b,
            probe_launched = mission.probe_launched,
            remaining_days = clock.remaining_days(),
            "mitigation design opened"
        );
        Ok(Self {
            catalog,
            mission,
            clock,
            cursor: Cursor {
                vehicle: 0,
                propulsion: 0,
                material: 0,
                impactor_mass_kg: 0,
                trajectory: None,
            },
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mission(&self) -> &MissionState {
        &self.mission
    }

    pub fn clock(&self) -> &MissionClock {
        &self.clock
    }

    pub fn selection(&self) -> Selection {
        let c = &self.cursor;
        Selection {
            vehicle: self.catalog.launch_vehicles[c.vehicle].key.clone(),
            propulsion: self.catalog.propulsion[c.propulsion].key.clone(),
            material: self.catalog.materials[c.material].key.clone(),
            impactor_mass_kg: c.impactor_mass_kg,
            trajectory: c.trajectory.map(|i| self.catalog.trajectories[i].key.clone()),
        }
    }

    /// Apply one input change and recompute. On error the selection is unchanged.
    pub fn apply(&mut self, event: DesignEvent) -> Result<Assessment, SessionError> {
        debug!(?event, "design input changed");
        match event {
            DesignEvent::SelectVehicle(key) => {
                self.cursor.vehicle = self.catalog.vehicle_index(&key)?;
            }
            DesignEvent::SelectPropulsion(key) => {
                self.cursor.propulsion = self.catalog.propulsion_index(&key)?;
            }
            DesignEvent::SelectMaterial(key) => {
                self.cursor.material = self.catalog.material_index(&key)?;
                self.set_mass(self.cursor.impactor_mass_kg);
            }
            DesignEvent::SetImpactorMass(mass_kg) => self.set_mass(mass_kg),
            DesignEvent::SelectTrajectory(key) => {
                self.cursor.trajectory = Some(self.catalog.trajectory_index(&key)?);
            }
            DesignEvent::ClearTrajectory => self.cursor.trajectory = None,
            DesignEvent::AdvanceClock { days } => self.clock.advance_days(days)?,
        }
        Ok(self.assess())
    }

    /// Calculator inputs for the current selection.
    pub fn inputs(&self) -> FeasibilityInputs<'_> {
        let c = &self.cursor;
        FeasibilityInputs {
            vehicle: &self.catalog.launch_vehicles[c.vehicle],
            propulsion: &self.catalog.propulsion[c.propulsion],
            material: &self.catalog.materials[c.material],
            impactor_mass_kg: c.impactor_mass_kg,
            trajectory: c.trajectory.map(|i| &self.catalog.trajectories[i]),
            starting_budget_b: self.mission.starting_budget_b,
            remaining_days_to_impact: self.clock.remaining_days(),
        }
    }

    pub fn assess(&self) -> Assessment {
        feasibility::assess(&self.inputs())
    }

    /// Launch the current design: the clock jumps forward by the preparation time.
    pub fn launch(&mut self) -> Result<LaunchPlan, LaunchError> {
        let assessment = self.assess();
        let plan = launch::plan_launch(&assessment, &self.clock)?;
        self.clock.advance_days(f64::from(plan.prep_days))?;
        info!(
            launch_time = %plan.request.launch_time_iso,
            travel_time_days = plan.request.trajectory.travel_time_days,
            "mitigation mission launched"
        );
        Ok(plan)
    }

    fn set_mass(&mut self, requested_kg: u32) {
        let material = &self.catalog.materials[self.cursor.material];
        let clamped = material.clamp_mass(requested_kg);
        if clamped != requested_kg {
            warn!(
                requested_kg,
                clamped_kg = clamped,
                material = %material.key,
                "impactor mass clamped to material limit"
            );
        }
        self.cursor.impactor_mass_kg = clamped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feasibility::BlockingReason;
    use chrono::{TimeZone, Utc};

    fn session() -> DesignSession {
        let clock =
            MissionClock::confirmed(Utc.with_ymd_and_hms(2025, 10, 14, 0, 0, 0).unwrap(), 90.0)
                .unwrap();
        DesignSession::new(Catalog::builtin(), MissionState::begin_design(false), clock)
            .expect("builtin catalog opens")
    }

    #[test]
    fn opens_on_first_catalog_entries() {
        let s = session();
        let sel = s.selection();
        assert_eq!(sel.vehicle, "falcon_heavy");
        assert_eq!(sel.propulsion, "hypergolic");
        assert_eq!(sel.material, "aluminum");
        assert_eq!(sel.impactor_mass_kg, 0);
        assert_eq!(sel.trajectory, None);
        assert_eq!(
            s.assess().blocking_reason,
            Some(BlockingReason::SelectTrajectory)
        );
    }

    #[test]
    fn mass_is_clamped_to_current_material() {
        let mut s = session();
        s.apply(DesignEvent::SetImpactorMass(12_000)).unwrap();
        assert_eq!(s.selection().impactor_mass_kg, 5_000);
    }

    #[test]
    fn material_change_reclamps_mass() {
        let mut s = session();
        s.apply(DesignEvent::SelectMaterial("tungsten".into())).unwrap();
        s.apply(DesignEvent::SetImpactorMass(12_000)).unwrap();
        assert_eq!(s.selection().impactor_mass_kg, 12_000);
        let a = s.apply(DesignEvent::SelectMaterial("aluminum".into())).unwrap();
        assert_eq!(s.selection().impactor_mass_kg, 5_000);
        assert_eq!(a.spacecraft_dry_mass_kg, 5_500.0);
    }

    #[test]
    fn trajectory_selection_is_exclusive() {
        let mut s = session();
        s.apply(DesignEvent::SelectTrajectory("fast".into())).unwrap();
        s.apply(DesignEvent::SelectTrajectory("efficient".into())).unwrap();
        assert_eq!(s.selection().trajectory.as_deref(), Some("efficient"));
        s.apply(DesignEvent::ClearTrajectory).unwrap();
        assert_eq!(s.selection().trajectory, None);
    }

    #[test]
    fn unknown_key_leaves_selection_untouched() {
        let mut s = session();
        let before = s.selection();
        let err = s
            .apply(DesignEvent::SelectVehicle("saturn_v".into()))
            .unwrap_err();
        assert!(err.to_string().contains("saturn_v"));
        assert_eq!(s.selection(), before);
    }

    #[test]
    fn every_event_recomputes_against_current_clock() {
        let mut s = session();
        s.apply(DesignEvent::SetImpactorMass(1_000)).unwrap();
        // prep 25 + 5 = 30 days, plus 45 days transit = 75 of the 83 usable days
        let a = s
            .apply(DesignEvent::SelectTrajectory("balanced".into()))
            .unwrap();
        assert!(a.feasible, "{:?}", a.blocking_reason);
        let a = s.apply(DesignEvent::AdvanceClock { days: 10.0 }).unwrap();
        assert_eq!(a.blocking_reason, Some(BlockingReason::LaunchWindowClosed));
    }

    #[test]
    fn clock_overflow_is_an_error_and_keeps_state() {
        let mut s = session();
        let before = *s.clock();
        let err = s
            .apply(DesignEvent::AdvanceClock { days: 1.0e9 })
            .unwrap_err();
        assert!(matches!(err, SessionError::Clock(_)));
        assert_eq!(*s.clock(), before);
    }

    #[test]
    fn launch_advances_clock_by_prep_time() {
        let mut s = session();
        s.apply(DesignEvent::SetImpactorMass(1_000)).unwrap();
        s.apply(DesignEvent::SelectTrajectory("balanced".into()))
            .unwrap();
        let plan = s.launch().expect("feasible design launches");
        assert_eq!(plan.prep_days, 30);
        assert_eq!(s.clock().remaining_days(), 60.0);
        assert_eq!(s.clock().now(), plan.launch_time);
    }
}
