// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Log initialization for binaries and tests using this crate.
//!
//! Every condition change is logged at `debug` level through `tracing`. This
//! module installs a subscriber with the same output format the operators built
//! on this crate use:
//!
//! - `RUST_LOG` selects the filter (defaults to `info`)
//! - `RUST_LOG_FORMAT=json` switches from compact text to JSON lines
//!
//! ```text
//! RUST_LOG=cluster_conditions=debug RUST_LOG_FORMAT=json ./controller
//! ```

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG_FILTER, ENV_LOG_FORMAT};
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Output format of the log subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse a `RUST_LOG_FORMAT` value. Anything but `json` selects text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read the format from `RUST_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(ENV_LOG_FORMAT)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Build the filter from `RUST_LOG`, falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global tracing subscriber configured from the environment.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init() -> Result<()> {
    init_with_format(LogFormat::from_env())
}

/// Install the global tracing subscriber with an explicit output format.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_with_format(format: LogFormat) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(true).compact().try_init(),
    }
    .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod telemetry_tests;
