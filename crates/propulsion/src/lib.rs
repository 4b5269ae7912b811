//! Launch vehicle, propulsion system, and impactor material descriptors.

pub mod rocket;

use deflect_core::format::{cost_label, group_thousands};

/// Heavy-lift launcher that carries the kinetic impactor stack to escape.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchVehicle {
    pub key: String,
    pub name: String,
    /// Procurement cost in billions of US dollars.
    pub cost_b: f64,
    pub max_payload_kg: f64,
    pub construction_time_days: f64,
    pub reliability: f64,
    pub escape_burn_hours: f64,
}

impl LaunchVehicle {
    /// One-line capability summary shown next to the selector.
    pub fn spec(&self) -> String {
        format!(
            "Cost: {} | Max Payload: {} kg",
            cost_label(self.cost_b),
            group_thousands(self.max_payload_kg)
        )
    }
}

/// In-space propulsion module integrated with the impactor.
#[derive(Debug, Clone, PartialEq)]
pub struct PropulsionSystem {
    pub key: String,
    pub name: String,
    pub cost_b: f64,
    pub mass_kg: f64,
    pub specific_impulse_s: f64,
    pub construction_time_days: f64,
    pub reliability: f64,
}

impl PropulsionSystem {
    pub fn spec(&self) -> String {
        format!(
            "Isp: {}s | Mass: {} kg",
            group_thousands(self.specific_impulse_s),
            group_thousands(self.mass_kg)
        )
    }

    /// Effective exhaust velocity (m/s).
    pub fn exhaust_velocity_m_s(&self) -> f64 {
        rocket::exhaust_velocity(self.specific_impulse_s)
    }
}

/// Impactor body material. `max_mass_kg` bounds the mass a design may request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactorMaterial {
    pub key: String,
    pub name: String,
    pub density_kg_m3: f64,
    pub momentum_transfer_beta: f64,
    pub max_mass_kg: u32,
    pub description: String,
}

impl ImpactorMaterial {
    pub fn spec(&self) -> &str {
        &self.description
    }

    /// Clamp a requested impactor mass into `0..=max_mass_kg`.
    pub fn clamp_mass(&self, mass_kg: u32) -> u32 {
        mass_kg.min(self.max_mass_kg)
    }
}

/// Precomputed launch-window option characterised by transit time and required delta-v.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryOption {
    pub key: String,
    pub label: String,
    pub travel_time_days: u32,
    pub required_delta_v_m_s: f64,
}
