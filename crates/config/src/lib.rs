//! Catalog models and loaders for launch vehicles, propulsion systems, impactor materials,
//! and trajectory options.

mod builtin;

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Longest transit a trajectory option may declare (100 years).
pub const MAX_TRAVEL_TIME_DAYS: u32 = 36_500;

/// Launch vehicle entry parsed from catalog manifests.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LaunchVehicleConfig {
    pub key: String,
    pub name: String,
    pub cost_b: f64,
    pub max_payload_kg: f64,
    pub construction_time_days: f64,
    pub reliability: f64,
    pub escape_burn_hours: f64,
}

/// Propulsion system entry.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PropulsionConfig {
    pub key: String,
    pub name: String,
    pub cost_b: f64,
    pub mass_kg: f64,
    pub specific_impulse_s: f64,
    pub construction_time_days: f64,
    pub reliability: f64,
}

/// Impactor material entry.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MaterialConfig {
    pub key: String,
    pub name: String,
    pub density_kg_m3: f64,
    pub momentum_transfer_beta: f64,
    pub max_mass_kg: u32,
    #[serde(default)]
    pub description: String,
}

/// Precomputed launch-window (porkchop) option.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TrajectoryConfig {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    pub travel_time_days: u32,
    pub required_delta_v_m_s: f64,
}

/// Full set of catalogs a design session chooses from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    pub launch_vehicles: Vec<LaunchVehicleConfig>,
    pub propulsion: Vec<PropulsionConfig>,
    pub materials: Vec<MaterialConfig>,
    pub trajectories: Vec<TrajectoryConfig>,
}

impl CatalogConfig {
    /// Catalog shipped with the planner; mirrors the records under `configs/`.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Check every record for physically meaningful values and unique keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        unique_keys("launch_vehicles", self.launch_vehicles.iter().map(|v| &v.key))?;
        unique_keys("propulsion", self.propulsion.iter().map(|p| &p.key))?;
        unique_keys("materials", self.materials.iter().map(|m| &m.key))?;
        unique_keys("trajectories", self.trajectories.iter().map(|t| &t.key))?;

        for v in &self.launch_vehicles {
            check_reliability(&v.key, v.reliability)?;
            check(&v.key, "cost_b", v.cost_b >= 0.0)?;
            check(&v.key, "max_payload_kg", v.max_payload_kg > 0.0)?;
            check(&v.key, "construction_time_days", v.construction_time_days >= 0.0)?;
            check(&v.key, "escape_burn_hours", v.escape_burn_hours >= 0.0)?;
        }
        for p in &self.propulsion {
            check_reliability(&p.key, p.reliability)?;
            check(&p.key, "cost_b", p.cost_b >= 0.0)?;
            check(&p.key, "mass_kg", p.mass_kg > 0.0)?;
            check(&p.key, "specific_impulse_s", p.specific_impulse_s > 0.0)?;
            check(&p.key, "construction_time_days", p.construction_time_days >= 0.0)?;
        }
        for m in &self.materials {
            check(&m.key, "density_kg_m3", m.density_kg_m3 > 0.0)?;
            check(&m.key, "momentum_transfer_beta", m.momentum_transfer_beta > 0.0)?;
            check(&m.key, "max_mass_kg", m.max_mass_kg > 0)?;
        }
        for t in &self.trajectories {
            check(
                &t.key,
                "travel_time_days",
                (1..=MAX_TRAVEL_TIME_DAYS).contains(&t.travel_time_days),
            )?;
            check(&t.key, "required_delta_v_m_s", t.required_delta_v_m_s >= 0.0)?;
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid catalog entry '{key}': {field} out of range")]
    Invalid { key: String, field: &'static str },
    #[error("duplicate key '{key}' in {section} catalog")]
    DuplicateKey { section: &'static str, key: String },
}

/// Load launch vehicles from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_launch_vehicles<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<LaunchVehicleConfig>, ConfigError> {
    load_records(path)
}

/// Load propulsion systems.
pub fn load_propulsion<P: AsRef<Path>>(path: P) -> Result<Vec<PropulsionConfig>, ConfigError> {
    load_records(path)
}

/// Load impactor materials.
pub fn load_materials<P: AsRef<Path>>(path: P) -> Result<Vec<MaterialConfig>, ConfigError> {
    load_records(path)
}

/// Load trajectory options.
pub fn load_trajectories<P: AsRef<Path>>(path: P) -> Result<Vec<TrajectoryConfig>, ConfigError> {
    load_records(path)
}

/// Load and validate a full catalog from `root/{launch_vehicles,propulsion,materials,trajectories}`.
pub fn load_catalog<P: AsRef<Path>>(root: P) -> Result<CatalogConfig, ConfigError> {
    let root = root.as_ref();
    let catalog = CatalogConfig {
        launch_vehicles: load_launch_vehicles(root.join("launch_vehicles"))?,
        propulsion: load_propulsion(root.join("propulsion"))?,
        materials: load_materials(root.join("materials"))?,
        trajectories: load_trajectories(root.join("trajectories"))?,
    };
    catalog.validate()?;
    debug!(
        root = %root.display(),
        vehicles = catalog.launch_vehicles.len(),
        propulsion = catalog.propulsion.len(),
        materials = catalog.materials.len(),
        trajectories = catalog.trajectories.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        debug!(path = %path.display(), "reading catalog record");
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn unique_keys<'a>(
    section: &'static str,
    keys: impl Iterator<Item = &'a String>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.as_str()) {
            return Err(ConfigError::DuplicateKey {
                section,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

fn check_reliability(key: &str, reliability: f64) -> Result<(), ConfigError> {
    check(key, "reliability", reliability > 0.0 && reliability <= 1.0)
}

fn check(key: &str, field: &'static str, ok: bool) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key: key.to_string(),
            field,
        })
    }
}
