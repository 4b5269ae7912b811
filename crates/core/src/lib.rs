//! Core units, constants, and shared primitives for the impactor mission planner workspace.

/// Physical and mission constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Intercept must complete at least this many days before impact.
    pub const REQUIRED_TIME_MARGIN_DAYS: f64 = 7.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert billions of US dollars to millions.
    #[inline]
    pub fn billions_to_millions(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert kilograms to metric tonnes.
    #[inline]
    pub fn kg_to_tonnes(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Split a non-negative duration into whole (days, hours, minutes, seconds).
    pub fn split_duration(seconds: f64) -> (i64, i64, i64, i64) {
        let total = seconds.max(0.0).floor() as i64;
        let days = total / 86_400;
        let hours = (total % 86_400) / 3_600;
        let minutes = (total % 3_600) / 60;
        (days, hours, minutes, total % 60)
    }
}

/// Display formatting shared by the dashboard and catalog listings.
pub mod format {
    /// Group the integer part of a value with thousands separators (`26700.0` -> `"26,700"`).
    pub fn group_thousands(value: f64) -> String {
        let rounded = value.round() as i64;
        let digits = rounded.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if rounded < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format a cost given in billions as `$150M` below one billion and `$2.0B` otherwise.
    pub fn cost_label(cost_b: f64) -> String {
        if cost_b.abs() < 1.0 {
            format!("${}M", group_thousands(super::units::billions_to_millions(cost_b)))
        } else {
            format!("${:.1}B", cost_b)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::time::split_duration;

    #[test]
    fn splits_duration_into_components() {
        assert_eq!(split_duration(0.0), (0, 0, 0, 0));
        assert_eq!(split_duration(90.0 * 86_400.0 + 3_723.9), (90, 1, 2, 3));
        assert_eq!(split_duration(-5.0), (0, 0, 0, 0));
    }
}
