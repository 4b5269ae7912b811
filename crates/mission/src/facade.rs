//! Re-exported APIs for consumers of the mission crate.

pub use crate::catalog::{Catalog, CatalogError};
pub use crate::clock::{ClockError, MissionClock};
pub use crate::feasibility::{
    Assessment, BlockingReason, FeasibilityInputs, LaunchStatus, ReliabilityTier,
    TrajectoryDemand, assess,
};
pub use crate::launch::{LaunchError, LaunchPlan, LaunchRequest, plan_launch};
pub use crate::session::{DesignEvent, DesignSession, Selection, SessionError};
pub use crate::state::{MissionState, Phase1Choice};
pub use crate::sweep::{SweepRow, sweep_impactor_mass};
pub use deflect_propulsion::{ImpactorMaterial, LaunchVehicle, PropulsionSystem, TrajectoryOption};
