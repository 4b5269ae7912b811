//! Mission feasibility calculator.
//!
//! Given a launch vehicle, propulsion system, impactor material and mass, an optional
//! trajectory option, the starting budget, and the time left before impact, this module
//! derives the cost, mass, delta-v, preparation time, and reliability figures shown on the
//! design dashboard, then runs an ordered feasibility gate that reports the first reason the
//! mission cannot launch.
//!
//! The calculation is pure: the same inputs always produce the same [`Assessment`].

use std::fmt;

use deflect_core::constants::REQUIRED_TIME_MARGIN_DAYS;
use deflect_core::units::kg_to_tonnes;
use deflect_propulsion::rocket::ideal_delta_v;
use deflect_propulsion::{ImpactorMaterial, LaunchVehicle, PropulsionSystem, TrajectoryOption};
use serde::Serialize;
use tracing::debug;

/// Everything the calculator reads. Mass must already be clamped to the material's maximum.
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityInputs<'a> {
    pub vehicle: &'a LaunchVehicle,
    pub propulsion: &'a PropulsionSystem,
    pub material: &'a ImpactorMaterial,
    pub impactor_mass_kg: u32,
    pub trajectory: Option<&'a TrajectoryOption>,
    pub starting_budget_b: f64,
    pub remaining_days_to_impact: f64,
}

/// Reasons the feasibility gate can block a launch, in display-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockingReason {
    LaunchWindowClosed,
    InsufficientBudget,
    PayloadExceedsMaxMass,
    SelectTrajectory,
    InsufficientDeltaV,
}

impl fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BlockingReason::LaunchWindowClosed => "launch window closed",
            BlockingReason::InsufficientBudget => "insufficient budget",
            BlockingReason::PayloadExceedsMaxMass => "payload exceeds max mass",
            BlockingReason::SelectTrajectory => "select a trajectory",
            BlockingReason::InsufficientDeltaV => "insufficient delta-v",
        };
        f.write_str(text)
    }
}

/// Overall verdict for the launch control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Ready,
    Blocked(BlockingReason),
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchStatus::Ready => f.write_str("ready to launch"),
            LaunchStatus::Blocked(reason) => reason.fmt(f),
        }
    }
}

/// Confidence band used to colour the reliability readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityTier {
    High,
    Acceptable,
    HighRisk,
}

impl ReliabilityTier {
    pub fn from_reliability(reliability: f64) -> Self {
        if reliability > 0.97 {
            ReliabilityTier::High
        } else if reliability > 0.92 {
            ReliabilityTier::Acceptable
        } else {
            ReliabilityTier::HighRisk
        }
    }
}

impl fmt::Display for ReliabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReliabilityTier::High => "high confidence",
            ReliabilityTier::Acceptable => "acceptable risk",
            ReliabilityTier::HighRisk => "high risk",
        })
    }
}

/// Demand placed on the spacecraft by the selected trajectory option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryDemand {
    pub travel_time_days: u32,
    pub required_delta_v_m_s: f64,
    /// Preparation plus transit time.
    pub total_mission_days: u32,
}

/// Derived dashboard metrics plus the feasibility verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub total_cost_b: f64,
    pub remaining_budget_b: f64,
    pub spacecraft_dry_mass_kg: f64,
    pub max_payload_kg: f64,
    pub is_overweight: bool,
    pub propellant_mass_kg: f64,
    pub exhaust_velocity_m_s: f64,
    pub delta_v_m_s: f64,
    pub total_prep_days: u32,
    /// Unclamped; heavy impactors can drive this below zero.
    pub total_reliability: f64,
    pub reliability_tier: ReliabilityTier,
    pub escape_burn_hours: f64,
    pub remaining_days_to_impact: f64,
    pub trajectory: Option<TrajectoryDemand>,
    pub feasible: bool,
    pub blocking_reason: Option<BlockingReason>,
}

impl Assessment {
    pub fn status(&self) -> LaunchStatus {
        match self.blocking_reason {
            Some(reason) => LaunchStatus::Blocked(reason),
            None => LaunchStatus::Ready,
        }
    }
}

type Check = fn(&Assessment) -> bool;

/// Feasibility gate. The first failing check decides the reported reason.
const GATE: [(BlockingReason, Check); 5] = [
    (BlockingReason::LaunchWindowClosed, within_launch_window),
    (BlockingReason::InsufficientBudget, within_budget),
    (BlockingReason::PayloadExceedsMaxMass, within_payload),
    (BlockingReason::SelectTrajectory, trajectory_selected),
    (BlockingReason::InsufficientDeltaV, sufficient_delta_v),
];

fn within_launch_window(a: &Assessment) -> bool {
    let usable_days = a.remaining_days_to_impact - REQUIRED_TIME_MARGIN_DAYS;
    a.trajectory
        .is_none_or(|t| f64::from(t.total_mission_days) <= usable_days)
}

fn within_budget(a: &Assessment) -> bool {
    a.remaining_budget_b >= 0.0
}

fn within_payload(a: &Assessment) -> bool {
    !a.is_overweight
}

fn trajectory_selected(a: &Assessment) -> bool {
    a.trajectory.is_some()
}

fn sufficient_delta_v(a: &Assessment) -> bool {
    a.trajectory
        .is_none_or(|t| a.delta_v_m_s >= t.required_delta_v_m_s)
}

/// Days of build, integration, and test before launch.
///
/// Heavier impactors add a super-linear integration penalty: `(tonnes)^1.5 × 5` days.
pub fn prep_time_days(
    vehicle: &LaunchVehicle,
    propulsion: &PropulsionSystem,
    impactor_mass_kg: u32,
) -> u32 {
    let base = vehicle.construction_time_days + propulsion.construction_time_days;
    let tonnes = kg_to_tonnes(f64::from(impactor_mass_kg));
    let penalty = tonnes.powf(1.5) * 5.0;
    (base + penalty).round().max(0.0) as u32
}

/// Combined launch and propulsion reliability less a quadratic mass penalty.
pub fn mission_reliability(
    vehicle: &LaunchVehicle,
    propulsion: &PropulsionSystem,
    impactor_mass_kg: u32,
) -> f64 {
    let scaled = f64::from(impactor_mass_kg) / 10_000.0;
    let penalty = scaled.powi(2) * 0.1;
    vehicle.reliability * propulsion.reliability - penalty
}

/// Run the calculator.
pub fn assess(inputs: &FeasibilityInputs<'_>) -> Assessment {
    let FeasibilityInputs {
        vehicle,
        propulsion,
        material,
        impactor_mass_kg,
        trajectory,
        starting_budget_b,
        remaining_days_to_impact,
    } = *inputs;
    debug_assert!(
        impactor_mass_kg <= material.max_mass_kg,
        "impactor mass must be clamped to the material limit"
    );

    let total_cost_b = vehicle.cost_b + propulsion.cost_b;
    let remaining_budget_b = starting_budget_b - total_cost_b;

    let spacecraft_dry_mass_kg = propulsion.mass_kg + f64::from(impactor_mass_kg);
    let max_payload_kg = vehicle.max_payload_kg;
    let is_overweight = spacecraft_dry_mass_kg > max_payload_kg;
    let propellant_mass_kg = max_payload_kg - spacecraft_dry_mass_kg;
    let delta_v_m_s = ideal_delta_v(
        propulsion.specific_impulse_s,
        spacecraft_dry_mass_kg,
        propellant_mass_kg,
    );

    let total_prep_days = prep_time_days(vehicle, propulsion, impactor_mass_kg);
    let total_reliability = mission_reliability(vehicle, propulsion, impactor_mass_kg);

    let trajectory = trajectory.map(|t| TrajectoryDemand {
        travel_time_days: t.travel_time_days,
        required_delta_v_m_s: t.required_delta_v_m_s,
        total_mission_days: total_prep_days.saturating_add(t.travel_time_days),
    });

    let mut assessment = Assessment {
        total_cost_b,
        remaining_budget_b,
        spacecraft_dry_mass_kg,
        max_payload_kg,
        is_overweight,
        propellant_mass_kg,
        exhaust_velocity_m_s: propulsion.exhaust_velocity_m_s(),
        delta_v_m_s,
        total_prep_days,
        total_reliability,
        reliability_tier: ReliabilityTier::from_reliability(total_reliability),
        escape_burn_hours: vehicle.escape_burn_hours,
        remaining_days_to_impact,
        trajectory,
        feasible: false,
        blocking_reason: None,
    };

    let blocking_reason = GATE
        .iter()
        .find(|(_, passes)| !passes(&assessment))
        .map(|(reason, _)| *reason);
    assessment.blocking_reason = blocking_reason;
    assessment.feasible = blocking_reason.is_none();

    debug!(
        vehicle = %vehicle.key,
        propulsion = %propulsion.key,
        material = %material.key,
        impactor_mass_kg,
        delta_v_m_s = assessment.delta_v_m_s,
        prep_days = assessment.total_prep_days,
        status = %assessment.status(),
        "assessed mission design"
    );
    assessment
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use deflect_core::constants::G0;

    fn falcon() -> LaunchVehicle {
        LaunchVehicle {
            key: "falcon_heavy".into(),
            name: "Falcon Heavy".into(),
            cost_b: 0.15,
            max_payload_kg: 26_700.0,
            construction_time_days: 20.0,
            reliability: 0.98,
            escape_burn_hours: 12.0,
        }
    }

    fn hypergolic() -> PropulsionSystem {
        PropulsionSystem {
            key: "hypergolic".into(),
            name: "Hypergolic Bipropellant".into(),
            cost_b: 0.05,
            mass_kg: 500.0,
            specific_impulse_s: 320.0,
            construction_time_days: 5.0,
            reliability: 0.99,
        }
    }

    fn tungsten() -> ImpactorMaterial {
        ImpactorMaterial {
            key: "tungsten".into(),
            name: "Tungsten".into(),
            density_kg_m3: 19_300.0,
            momentum_transfer_beta: 2.5,
            max_mass_kg: 30_000,
            description: String::new(),
        }
    }

    fn trajectory(travel_time_days: u32, required_delta_v_m_s: f64) -> TrajectoryOption {
        TrajectoryOption {
            key: "test".into(),
            label: "test".into(),
            travel_time_days,
            required_delta_v_m_s,
        }
    }

    struct Fixture {
        vehicle: LaunchVehicle,
        propulsion: PropulsionSystem,
        material: ImpactorMaterial,
        trajectory: TrajectoryOption,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                vehicle: falcon(),
                propulsion: hypergolic(),
                material: tungsten(),
                trajectory: trajectory(100, 4_000.0),
            }
        }

        fn inputs(&self, mass: u32, with_trajectory: bool) -> FeasibilityInputs<'_> {
            FeasibilityInputs {
                vehicle: &self.vehicle,
                propulsion: &self.propulsion,
                material: &self.material,
                impactor_mass_kg: mass,
                trajectory: with_trajectory.then_some(&self.trajectory),
                starting_budget_b: 2.0,
                remaining_days_to_impact: 1_000.0,
            }
        }
    }

    #[test]
    fn reference_design_is_ready_to_launch() {
        let fx = Fixture::new();
        let a = assess(&fx.inputs(5_000, true));
        assert_relative_eq!(a.remaining_budget_b, 1.80, epsilon = 1e-12);
        assert_eq!(a.spacecraft_dry_mass_kg, 5_500.0);
        assert!(!a.is_overweight);
        assert_eq!(a.propellant_mass_kg, 21_200.0);
        assert!(a.delta_v_m_s > 4_000.0);
        assert!(a.feasible);
        assert_eq!(a.status(), LaunchStatus::Ready);
        assert_eq!(a.escape_burn_hours, 12.0);
    }

    #[test]
    fn empty_impactor_delta_v_matches_rocket_equation() {
        let fx = Fixture::new();
        let a = assess(&fx.inputs(0, true));
        assert_relative_eq!(a.exhaust_velocity_m_s, 320.0 * G0, max_relative = 1e-12);
        let expected = 320.0 * G0 * ((500.0 + 26_200.0) / 500.0_f64).ln();
        assert_relative_eq!(a.delta_v_m_s, expected, max_relative = 1e-12);
    }

    #[test]
    fn overweight_design_has_no_delta_v_and_is_blocked_on_mass() {
        let fx = Fixture::new();
        let a = assess(&fx.inputs(26_500, true));
        assert!(a.is_overweight);
        assert!(a.propellant_mass_kg < 0.0);
        assert_eq!(a.delta_v_m_s, 0.0);
        assert!(!a.feasible);
        assert_eq!(a.blocking_reason, Some(BlockingReason::PayloadExceedsMaxMass));
    }

    #[test]
    fn exactly_full_payload_is_not_overweight_but_has_no_propellant() {
        let fx = Fixture::new();
        let a = assess(&fx.inputs(26_200, true));
        assert!(!a.is_overweight);
        assert_eq!(a.propellant_mass_kg, 0.0);
        assert_eq!(a.delta_v_m_s, 0.0);
        assert_eq!(a.blocking_reason, Some(BlockingReason::InsufficientDeltaV));
    }

    #[test]
    fn prep_time_and_reliability_follow_mass_penalties() {
        let v = falcon();
        let p = hypergolic();
        assert_eq!(prep_time_days(&v, &p, 0), 25);
        // 25 + 5^1.5 * 5 = 80.9
        assert_eq!(prep_time_days(&v, &p, 5_000), 81);
        assert_relative_eq!(mission_reliability(&v, &p, 0), 0.9702, epsilon = 1e-12);
        assert_relative_eq!(
            mission_reliability(&v, &p, 10_000),
            0.9702 - 0.1,
            epsilon = 1e-12
        );
    }

    #[test]
    fn reliability_is_left_unclamped_for_extreme_mass() {
        let v = falcon();
        let p = hypergolic();
        assert!(mission_reliability(&v, &p, 40_000) < 0.0);
    }

    #[test]
    fn reliability_tiers_use_dashboard_thresholds() {
        assert_eq!(ReliabilityTier::from_reliability(0.9702), ReliabilityTier::High);
        assert_eq!(ReliabilityTier::from_reliability(0.97), ReliabilityTier::Acceptable);
        assert_eq!(ReliabilityTier::from_reliability(0.93), ReliabilityTier::Acceptable);
        assert_eq!(ReliabilityTier::from_reliability(0.92), ReliabilityTier::HighRisk);
    }

    #[test]
    fn missing_trajectory_blocks_with_selection_prompt() {
        let fx = Fixture::new();
        let a = assess(&fx.inputs(1_000, false));
        assert!(a.trajectory.is_none());
        assert_eq!(a.blocking_reason, Some(BlockingReason::SelectTrajectory));
    }

    #[test]
    fn timeline_is_not_checked_until_a_trajectory_is_chosen() {
        let fx = Fixture::new();
        let mut inputs = fx.inputs(1_000, false);
        // prep alone is 30 days, leaving no room inside a 20-day window
        inputs.remaining_days_to_impact = 20.0;
        let a = assess(&inputs);
        assert_eq!(a.total_prep_days, 30);
        assert_eq!(a.blocking_reason, Some(BlockingReason::SelectTrajectory));

        inputs.trajectory = Some(&fx.trajectory);
        assert_eq!(
            assess(&inputs).blocking_reason,
            Some(BlockingReason::LaunchWindowClosed)
        );
    }

    #[test]
    fn extreme_travel_time_saturates_mission_days() {
        let mut fx = Fixture::new();
        fx.trajectory = trajectory(u32::MAX, 0.0);
        let a = assess(&fx.inputs(1_000, true));
        assert_eq!(a.trajectory.map(|t| t.total_mission_days), Some(u32::MAX));
        assert_eq!(a.blocking_reason, Some(BlockingReason::LaunchWindowClosed));
    }

    #[test]
    fn timeline_outranks_every_other_failure() {
        let fx = Fixture::new();
        let mut inputs = fx.inputs(26_500, true);
        inputs.starting_budget_b = 0.1;
        inputs.remaining_days_to_impact = 50.0;
        let a = assess(&inputs);
        assert_eq!(a.blocking_reason, Some(BlockingReason::LaunchWindowClosed));
    }

    #[test]
    fn timeline_requires_seven_day_margin() {
        let fx = Fixture::new();
        let mut inputs = fx.inputs(0, true);
        // prep 25 + travel 100 = 125 days
        inputs.remaining_days_to_impact = 132.0;
        assert!(assess(&inputs).feasible);
        inputs.remaining_days_to_impact = 131.9;
        assert_eq!(
            assess(&inputs).blocking_reason,
            Some(BlockingReason::LaunchWindowClosed)
        );
    }

    #[test]
    fn budget_outranks_mass() {
        let fx = Fixture::new();
        let mut inputs = fx.inputs(26_500, true);
        inputs.starting_budget_b = 0.1;
        assert_eq!(
            assess(&inputs).blocking_reason,
            Some(BlockingReason::InsufficientBudget)
        );
    }

    #[test]
    fn delta_v_shortfall_is_reported_last() {
        let mut fx = Fixture::new();
        fx.trajectory = trajectory(100, 9_000.0);
        let a = assess(&fx.inputs(5_000, true));
        assert_eq!(a.blocking_reason, Some(BlockingReason::InsufficientDeltaV));
        assert_eq!(a.status().to_string(), "insufficient delta-v");
    }

    #[test]
    fn blocking_reason_serializes_as_snake_case() {
        let json = serde_json::to_string(&BlockingReason::PayloadExceedsMaxMass).unwrap();
        assert_eq!(json, "\"payload_exceeds_max_mass\"");
    }
}
