//! Simulated mission time relative to the confirmed impact epoch.

use chrono::{DateTime, TimeDelta, Utc};
use deflect_core::time::{days_to_seconds, seconds_to_days, split_duration};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ClockError {
    #[error("time offset of {days} days is outside the supported calendar range")]
    OutOfRange { days: f64 },
}

/// Current simulated time and the impact epoch fixed when impact was confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionClock {
    now: DateTime<Utc>,
    impact: DateTime<Utc>,
}

impl MissionClock {
    pub fn new(now: DateTime<Utc>, impact: DateTime<Utc>) -> Self {
        Self { now, impact }
    }

    /// Clock for an impact confirmed at `now`, due `days_to_impact` days later.
    pub fn confirmed(now: DateTime<Utc>, days_to_impact: f64) -> Result<Self, ClockError> {
        Ok(Self {
            now,
            impact: offset(now, days_to_impact)?,
        })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn impact(&self) -> DateTime<Utc> {
        self.impact
    }

    /// Fractional days until impact; negative once impact has passed.
    pub fn remaining_days(&self) -> f64 {
        seconds_to_days(seconds_between(self.now, self.impact))
    }

    pub fn has_impacted(&self) -> bool {
        self.now >= self.impact
    }

    /// Move simulated time forward. The clock is left untouched on error.
    pub fn advance_days(&mut self, days_elapsed: f64) -> Result<(), ClockError> {
        self.now = offset(self.now, days_elapsed)?;
        Ok(())
    }

    /// Time after `days_ahead` days from the current simulated time.
    pub fn after_days(&self, days_ahead: f64) -> Result<DateTime<Utc>, ClockError> {
        offset(self.now, days_ahead)
    }

    /// Countdown display `DD:HH:MM:SS`, pinned at `00:00:00:00` after impact.
    pub fn countdown(&self) -> String {
        if self.has_impacted() {
            return "00:00:00:00".to_string();
        }
        let (d, h, m, s) = split_duration(seconds_between(self.now, self.impact));
        format!("{:02}:{:02}:{:02}:{:02}", d, h, m, s)
    }
}

fn offset(from: DateTime<Utc>, days: f64) -> Result<DateTime<Utc>, ClockError> {
    let millis = (days_to_seconds(days) * 1_000.0).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return Err(ClockError::OutOfRange { days });
    }
    TimeDelta::try_milliseconds(millis as i64)
        .and_then(|delta| from.checked_add_signed(delta))
        .ok_or(ClockError::OutOfRange { days })
}

fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1_000.0
}
