//! Ideal rocket equation helpers.

use deflect_core::constants::G0;

/// Effective exhaust velocity for a given specific impulse (m/s).
#[inline]
pub fn exhaust_velocity(isp_seconds: f64) -> f64 {
    isp_seconds * G0
}

/// Tsiolkovsky delta-v (m/s) for a stage of `dry_mass_kg` carrying `propellant_mass_kg`.
///
/// A stage with no propellant (or a negative budget when the dry mass already exceeds the
/// launcher's capacity) produces zero delta-v rather than an error.
pub fn ideal_delta_v(isp_seconds: f64, dry_mass_kg: f64, propellant_mass_kg: f64) -> f64 {
    if propellant_mass_kg <= 0.0 || dry_mass_kg <= 0.0 {
        return 0.0;
    }
    let initial_mass = dry_mass_kg + propellant_mass_kg;
    exhaust_velocity(isp_seconds) * (initial_mass / dry_mass_kg).ln()
}
