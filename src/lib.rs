//! Kinetic-impactor mission planner.
//!
//! The member crates hold the catalogs, the feasibility calculator, and the exporters.
//! Keeping them behind one library lets multiple front-ends (CLI, GUI, web) share them.

pub use deflect_config as config;
pub use deflect_core::{constants, format, time, units};
pub use deflect_export as export;
pub use deflect_mission as mission;
pub use deflect_propulsion as propulsion;
