// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Condition status error types.
//!
//! This module provides the two error kinds controllers raise when a condition
//! does not look the way they need it to:
//!
//! - [`ConditionError::UnexpectedConditionStatus`] - the caller expected a specific
//!   status and observed another (or no condition at all)
//! - [`ConditionError::UnsupportedConditionStatus`] - the status is none of
//!   `True`, `False` or `Unknown`
//!
//! The predicates and mutators in this crate never return these errors. They are
//! built as values for the caller to return, and the caller decides whether to
//! requeue or fail.
//!
//! # Example
//!
//! ```rust
//! use anyhow::Context;
//! use cluster_conditions::crd::{Cluster, ClusterSpec};
//! use cluster_conditions::errors::{expect_condition_status, is_unexpected_condition_status};
//!
//! let cluster = Cluster::new("demo", ClusterSpec::default());
//! let err = expect_condition_status(&cluster, "Creating", "True")
//!     .context("cluster is not being created")
//!     .unwrap_err();
//!
//! assert!(is_unexpected_condition_status(&err));
//! ```

use crate::check;
use crate::constants::{CONDITION_STATUS_FALSE, CONDITION_STATUS_TRUE};
use crate::object::Getter;
use crate::status::get;
use crate::testutil::got_condition_status_string;
use thiserror::Error;

/// Errors describing a condition in an unexpected or unsupported state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// The condition does not have the status the caller expected.
    #[error("{message}")]
    UnexpectedConditionStatus {
        /// Type of the offending condition
        condition_type: String,
        /// Human-readable description including expected and observed status
        message: String,
    },

    /// The condition status is not one of `True`, `False` or `Unknown`.
    #[error("{message}")]
    UnsupportedConditionStatus {
        /// Type of the offending condition
        condition_type: String,
        /// Human-readable description including the observed status
        message: String,
    },
}

impl ConditionError {
    /// Name of the error kind, e.g. `UnexpectedConditionStatus`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedConditionStatus { .. } => "UnexpectedConditionStatus",
            Self::UnsupportedConditionStatus { .. } => "UnsupportedConditionStatus",
        }
    }

    /// Type of the condition the error is about.
    #[must_use]
    pub fn condition_type(&self) -> &str {
        match self {
            Self::UnexpectedConditionStatus { condition_type, .. }
            | Self::UnsupportedConditionStatus { condition_type, .. } => condition_type,
        }
    }
}

/// Message for an unexpected status: `Unexpected status for condition <type>, got <status>`.
#[must_use]
pub fn unexpected_condition_status_error_message<G: Getter + ?Sized>(
    object: &G,
    condition_type: &str,
) -> String {
    format!(
        "Unexpected status for condition {condition_type}, got {}",
        got_condition_status_string(object, condition_type)
    )
}

/// Message for an unexpected status that names the expected one.
#[must_use]
pub fn expected_status_error_message<G: Getter + ?Sized>(
    object: &G,
    condition_type: &str,
    expected_status: &str,
) -> String {
    format!(
        "Expected that condition {condition_type} on Object {} has status {expected_status}, but got {}",
        object.kind_name(),
        got_condition_status_string(object, condition_type)
    )
}

/// [`expected_status_error_message`] with expected status `True`.
#[must_use]
pub fn expected_true_error_message<G: Getter + ?Sized>(object: &G, condition_type: &str) -> String {
    expected_status_error_message(object, condition_type, CONDITION_STATUS_TRUE)
}

/// [`expected_status_error_message`] with expected status `False`.
#[must_use]
pub fn expected_false_error_message<G: Getter + ?Sized>(object: &G, condition_type: &str) -> String {
    expected_status_error_message(object, condition_type, CONDITION_STATUS_FALSE)
}

/// Message for an unsupported status: `Unsupported status for condition <type>, got <status>`.
#[must_use]
pub fn unsupported_condition_status_error_message<G: Getter + ?Sized>(
    object: &G,
    condition_type: &str,
) -> String {
    format!(
        "Unsupported status for condition {condition_type}, got {}",
        got_condition_status_string(object, condition_type)
    )
}

/// Build an [`ConditionError::UnexpectedConditionStatus`] for the condition of the
/// given type.
#[must_use]
pub fn unexpected_condition_status<G: Getter + ?Sized>(
    object: &G,
    condition_type: &str,
) -> ConditionError {
    ConditionError::UnexpectedConditionStatus {
        condition_type: condition_type.to_string(),
        message: unexpected_condition_status_error_message(object, condition_type),
    }
}

/// Build a [`ConditionError::UnsupportedConditionStatus`] for the condition of the
/// given type.
#[must_use]
pub fn unsupported_condition_status<G: Getter + ?Sized>(
    object: &G,
    condition_type: &str,
) -> ConditionError {
    ConditionError::UnsupportedConditionStatus {
        condition_type: condition_type.to_string(),
        message: unsupported_condition_status_error_message(object, condition_type),
    }
}

/// Fail with [`ConditionError::UnexpectedConditionStatus`] unless the condition of
/// the given type is set with `expected_status`.
///
/// # Errors
///
/// Returns an error if the condition is not set or has another status.
pub fn expect_condition_status<G: Getter + ?Sized>(
    object: &G,
    condition_type: &str,
    expected_status: &str,
) -> Result<(), ConditionError> {
    if get(object, condition_type).is_some_and(|c| c.status == expected_status) {
        return Ok(());
    }

    Err(ConditionError::UnexpectedConditionStatus {
        condition_type: condition_type.to_string(),
        message: expected_status_error_message(object, condition_type, expected_status),
    })
}

/// Fail with [`ConditionError::UnsupportedConditionStatus`] if the condition of the
/// given type has a status other than `True`, `False` or `Unknown`.
///
/// An absent condition is not an error.
///
/// # Errors
///
/// Returns an error if the stored status is unsupported.
pub fn check_condition_status<G: Getter + ?Sized>(
    object: &G,
    condition_type: &str,
) -> Result<(), ConditionError> {
    if check::is_unsupported(get(object, condition_type)) {
        return Err(unsupported_condition_status(object, condition_type));
    }
    Ok(())
}

fn find_condition_error(err: &anyhow::Error) -> Option<&ConditionError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ConditionError>())
}

/// Checks if the error, or any error in its chain, is an
/// [`ConditionError::UnexpectedConditionStatus`].
#[must_use]
pub fn is_unexpected_condition_status(err: &anyhow::Error) -> bool {
    matches!(
        find_condition_error(err),
        Some(ConditionError::UnexpectedConditionStatus { .. })
    )
}

/// Checks if the error, or any error in its chain, is an
/// [`ConditionError::UnsupportedConditionStatus`].
#[must_use]
pub fn is_unsupported_condition_status(err: &anyhow::Error) -> bool {
    matches!(
        find_condition_error(err),
        Some(ConditionError::UnsupportedConditionStatus { .. })
    )
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
