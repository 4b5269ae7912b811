//! Launch planning and the request handed to the trajectory service.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::clock::{ClockError, MissionClock};
use crate::feasibility::{Assessment, BlockingReason};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LaunchError {
    #[error("no trajectory selected")]
    NoTrajectory,
    #[error("mission cannot launch: {0}")]
    Blocked(BlockingReason),
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Trajectory parameters as the trajectory service expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrajectoryRequest {
    pub travel_time_days: u32,
    #[serde(rename = "required_deltav")]
    pub required_delta_v_m_s: i64,
}

/// Body of the mitigation-launch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRequest {
    pub trajectory: TrajectoryRequest,
    #[serde(rename = "launchTimeISO")]
    pub launch_time_iso: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPlan {
    pub prep_days: u32,
    pub launch_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub request: LaunchRequest,
}

/// Schedule launch `total_prep_days` after the current simulated time.
pub fn plan_launch(
    assessment: &Assessment,
    clock: &MissionClock,
) -> Result<LaunchPlan, LaunchError> {
    let trajectory = assessment.trajectory.ok_or(LaunchError::NoTrajectory)?;
    if let Some(reason) = assessment.blocking_reason {
        return Err(LaunchError::Blocked(reason));
    }

    let prep_days = assessment.total_prep_days;
    let launch_time = clock.after_days(f64::from(prep_days))?;
    let arrival_time = clock.after_days(f64::from(trajectory.total_mission_days))?;

    Ok(LaunchPlan {
        prep_days,
        launch_time,
        arrival_time,
        request: LaunchRequest {
            trajectory: TrajectoryRequest {
                travel_time_days: trajectory.travel_time_days,
                required_delta_v_m_s: trajectory.required_delta_v_m_s.round() as i64,
            },
            launch_time_iso: launch_time.to_rfc3339_opts(SecondsFormat::Secs, true),
        },
    })
}
