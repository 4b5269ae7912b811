//! Runtime catalogs converted from configuration records.

use deflect_config::{
    CatalogConfig, LaunchVehicleConfig, MaterialConfig, PropulsionConfig, TrajectoryConfig,
};
use deflect_propulsion::{ImpactorMaterial, LaunchVehicle, PropulsionSystem, TrajectoryOption};
use thiserror::Error;

/// Errors surfaced when looking up catalog entries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{section} '{key}' not found in catalog")]
    NotFound { section: &'static str, key: String },
    #[error("{0} catalog is empty")]
    EmptySection(&'static str),
}

/// Reference data a design session selects from.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub launch_vehicles: Vec<LaunchVehicle>,
    pub propulsion: Vec<PropulsionSystem>,
    pub materials: Vec<ImpactorMaterial>,
    pub trajectories: Vec<TrajectoryOption>,
}

impl Catalog {
    /// Catalog shipped with the planner.
    pub fn builtin() -> Self {
        Self::from_config(&CatalogConfig::builtin())
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            launch_vehicles: config.launch_vehicles.iter().map(vehicle_from_config).collect(),
            propulsion: config.propulsion.iter().map(propulsion_from_config).collect(),
            materials: config.materials.iter().map(material_from_config).collect(),
            trajectories: config.trajectories.iter().map(trajectory_from_config).collect(),
        }
    }

    /// Fails when any section a design must choose from is empty. Trajectories may be empty.
    pub fn ensure_selectable(&self) -> Result<(), CatalogError> {
        if self.launch_vehicles.is_empty() {
            return Err(CatalogError::EmptySection("launch vehicle"));
        }
        if self.propulsion.is_empty() {
            return Err(CatalogError::EmptySection("propulsion"));
        }
        if self.materials.is_empty() {
            return Err(CatalogError::EmptySection("material"));
        }
        Ok(())
    }

    pub fn vehicle(&self, key: &str) -> Result<&LaunchVehicle, CatalogError> {
        self.vehicle_index(key).map(|i| &self.launch_vehicles[i])
    }

    pub fn propulsion_system(&self, key: &str) -> Result<&PropulsionSystem, CatalogError> {
        self.propulsion_index(key).map(|i| &self.propulsion[i])
    }

    pub fn material(&self, key: &str) -> Result<&ImpactorMaterial, CatalogError> {
        self.material_index(key).map(|i| &self.materials[i])
    }

    pub fn trajectory(&self, key: &str) -> Result<&TrajectoryOption, CatalogError> {
        self.trajectory_index(key).map(|i| &self.trajectories[i])
    }

    pub(crate) fn vehicle_index(&self, key: &str) -> Result<usize, CatalogError> {
        find(&self.launch_vehicles, |v| &v.key, "launch vehicle", key)
    }

    pub(crate) fn propulsion_index(&self, key: &str) -> Result<usize, CatalogError> {
        find(&self.propulsion, |p| &p.key, "propulsion", key)
    }

    pub(crate) fn material_index(&self, key: &str) -> Result<usize, CatalogError> {
        find(&self.materials, |m| &m.key, "material", key)
    }

    pub(crate) fn trajectory_index(&self, key: &str) -> Result<usize, CatalogError> {
        find(&self.trajectories, |t| &t.key, "trajectory", key)
    }
}

fn find<T>(
    items: &[T],
    key_of: impl Fn(&T) -> &String,
    section: &'static str,
    key: &str,
) -> Result<usize, CatalogError> {
    items
        .iter()
        .position(|item| key_of(item).eq_ignore_ascii_case(key))
        .ok_or_else(|| CatalogError::NotFound {
            section,
            key: key.to_string(),
        })
}

fn vehicle_from_config(config: &LaunchVehicleConfig) -> LaunchVehicle {
    LaunchVehicle {
        key: config.key.clone(),
        name: config.name.clone(),
        cost_b: config.cost_b,
        max_payload_kg: config.max_payload_kg,
        construction_time_days: config.construction_time_days,
        reliability: config.reliability,
        escape_burn_hours: config.escape_burn_hours,
    }
}

fn propulsion_from_config(config: &PropulsionConfig) -> PropulsionSystem {
    PropulsionSystem {
        key: config.key.clone(),
        name: config.name.clone(),
        cost_b: config.cost_b,
        mass_kg: config.mass_kg,
        specific_impulse_s: config.specific_impulse_s,
        construction_time_days: config.construction_time_days,
        reliability: config.reliability,
    }
}

fn material_from_config(config: &MaterialConfig) -> ImpactorMaterial {
    ImpactorMaterial {
        key: config.key.clone(),
        name: config.name.clone(),
        density_kg_m3: config.density_kg_m3,
        momentum_transfer_beta: config.momentum_transfer_beta,
        max_mass_kg: config.max_mass_kg,
        description: config.description.clone(),
    }
}

fn trajectory_from_config(config: &TrajectoryConfig) -> TrajectoryOption {
    let label = config.label.clone().unwrap_or_else(|| {
        format!(
            "{} days / {} m/s",
            config.travel_time_days, config.required_delta_v_m_s
        )
    });
    TrajectoryOption {
        key: config.key.clone(),
        label,
        travel_time_days: config.travel_time_days,
        required_delta_v_m_s: config.required_delta_v_m_s,
    }
}
