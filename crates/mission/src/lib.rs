//! Mission design crate: catalogs, mission state and clock, the feasibility calculator,
//! and launch planning for a kinetic-impactor deflection mission.

pub mod catalog;
pub mod clock;
pub mod feasibility;
pub mod launch;
pub mod session;
pub mod state;
pub mod sweep;

pub use facade::*;
pub use deflect_propulsion as propulsion;

mod facade;
