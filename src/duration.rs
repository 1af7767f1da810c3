// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Duration formatting for condition messages.
//!
//! Condition messages report elapsed times in the same notation Cluster API
//! controllers use (e.g. "12m30s", "1h0m5.25s"), so messages written by this crate
//! read the same as the ones written by the upstream controllers.

use chrono::{DateTime, Utc};
use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;
const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;

/// Format `value` divided by `10^scale` without trailing zeros in the fraction.
fn format_scaled(value: u128, scale: u32) -> String {
    let divisor = 10_u128.pow(scale);
    let whole = value / divisor;
    let fraction = value % divisor;
    if fraction == 0 {
        return whole.to_string();
    }

    let digits = format!("{fraction:0width$}", width = scale as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Format a duration in the compact `1h2m3.5s` notation used in condition messages.
///
/// Durations under a second use the largest of `ms`, `µs` and `ns` that keeps the
/// value at or above one.
///
/// # Examples
///
/// ```
/// use cluster_conditions::duration::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
/// assert_eq!(format_duration(Duration::from_secs(750)), "12m30s");
/// assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
/// assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }

    // Sub-second durations use the largest unit that keeps the value >= 1
    if duration < Duration::from_secs(1) {
        return if nanos < NANOS_PER_MICRO {
            format!("{nanos}ns")
        } else if nanos < NANOS_PER_MILLI {
            format!("{}µs", format_scaled(nanos, 3))
        } else {
            format!("{}ms", format_scaled(nanos, 6))
        };
    }

    let total_secs = duration.as_secs();
    let hours = total_secs / SECONDS_PER_HOUR;
    let minutes = (total_secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = u128::from(total_secs % SECONDS_PER_MINUTE) * 1_000_000_000
        + u128::from(duration.subsec_nanos());
    let seconds = format_scaled(seconds, 9);

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Time elapsed since `since`, or zero if `since` lies in the future.
#[must_use]
pub fn elapsed_since(since: DateTime<Utc>) -> Duration {
    (Utc::now() - since).to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod duration_tests;
