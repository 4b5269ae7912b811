//! Mission-level state carried from threat confirmation into mitigation design.

use serde::Serialize;
use tracing::info;

use crate::clock::{ClockError, MissionClock};

/// Budget available to the design phase when no probe was flown (US$B).
pub const STARTING_BUDGET_B: f64 = 2.00;
/// Budget left after paying for a characterization probe (US$B).
pub const PROBE_BUDGET_B: f64 = 1.80;
/// Calendar time consumed by flying the characterization probe.
pub const PROBE_TIME_COST_DAYS: f64 = 30.0;

/// Budget and history fixed when the mitigation-design phase begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionState {
    pub starting_budget_b: f64,
    pub probe_launched: bool,
}

impl MissionState {
    pub fn begin_design(probe_launched: bool) -> Self {
        let starting_budget_b = if probe_launched {
            PROBE_BUDGET_B
        } else {
            STARTING_BUDGET_B
        };
        Self {
            starting_budget_b,
            probe_launched,
        }
    }
}

/// Decision taken once impact is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase1Choice {
    /// Fly a characterization probe first: better data, less money, less time.
    LaunchProbe,
    /// Skip characterization and go straight to mitigation design.
    ProceedBlind,
}

impl Phase1Choice {
    /// Apply the choice's time cost to `clock` and open the design phase.
    pub fn commit(self, clock: &mut MissionClock) -> Result<MissionState, ClockError> {
        let state = match self {
            Phase1Choice::LaunchProbe => {
                clock.advance_days(PROBE_TIME_COST_DAYS)?;
                info!(
                    remaining_days = clock.remaining_days(),
                    "characterization probe launched"
                );
                MissionState::begin_design(true)
            }
            Phase1Choice::ProceedBlind => {
                info!(
                    remaining_days = clock.remaining_days(),
                    "proceeding to mitigation design without a probe"
                );
                MissionState::begin_design(false)
            }
        };
        Ok(state)
    }
}
