// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Predicates over a single condition.
//!
//! These functions answer "is this condition True / False / Unknown" for a
//! condition that may be absent, and compare conditions with each other.
//!
//! # Status Semantics
//!
//! | Condition                 | `is_true` | `is_false` | `is_unknown` |
//! |---------------------------|-----------|------------|--------------|
//! | absent                    | false     | false      | true         |
//! | `True`                    | true      | false      | false        |
//! | `False`                   | false     | true       | false        |
//! | `Unknown`                 | false     | false      | true         |
//! | any other value           | false     | false      | false        |
//!
//! Values other than `True`, `False` and `Unknown` are unsupported. They are
//! classified as none of the three; use [`is_unsupported`] or
//! [`crate::errors::check_condition_status`] to detect them explicitly.
//!
//! # Example
//!
//! ```rust
//! use cluster_conditions::check::{is_false, with_reason, with_severity_warning};
//! use cluster_conditions::crd::{Condition, ConditionSeverity};
//!
//! let condition = Condition {
//!     r#type: "InfrastructureReady".to_string(),
//!     status: "False".to_string(),
//!     severity: ConditionSeverity::Warning,
//!     reason: "InfrastructureObjectNotFound".to_string(),
//!     ..Condition::default()
//! };
//!
//! assert!(is_false(Some(&condition), &[]));
//! assert!(is_false(
//!     Some(&condition),
//!     &[with_reason("InfrastructureObjectNotFound"), with_severity_warning()]
//! ));
//! ```

use crate::constants::{CONDITION_STATUS_FALSE, CONDITION_STATUS_TRUE, CONDITION_STATUS_UNKNOWN};
use crate::crd::{Condition, ConditionSeverity};

/// An additional check applied to a condition by `is_*_false` functions.
///
/// A check never holds for an absent condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOption {
    /// The condition reason equals the given value.
    Reason(String),
    /// The condition severity equals the given value.
    Severity(ConditionSeverity),
}

impl CheckOption {
    /// Evaluate this check against a condition.
    #[must_use]
    pub fn check(&self, condition: Option<&Condition>) -> bool {
        let Some(condition) = condition else {
            return false;
        };

        match self {
            Self::Reason(reason) => condition.reason == *reason,
            Self::Severity(severity) => condition.severity == *severity,
        }
    }
}

/// Evaluate all checks against a condition, combined with logical AND.
#[must_use]
pub fn all_checks_pass(condition: Option<&Condition>, check_options: &[CheckOption]) -> bool {
    check_options
        .iter()
        .all(|check_option| check_option.check(condition))
}

/// Checks if specified condition is set and has status `True`.
#[must_use]
pub fn is_true(condition: Option<&Condition>) -> bool {
    condition.is_some_and(|c| c.status == CONDITION_STATUS_TRUE)
}

/// Checks if specified condition is set, has status `False`, and passes every
/// additional check.
///
/// With no check options this is a plain status check.
#[must_use]
pub fn is_false(condition: Option<&Condition>, check_options: &[CheckOption]) -> bool {
    if !condition.is_some_and(|c| c.status == CONDITION_STATUS_FALSE) {
        // Condition is not set or it does not have status False
        return false;
    }

    all_checks_pass(condition, check_options)
}

/// Checks if specified condition is either not set or has status `Unknown`.
#[must_use]
pub fn is_unknown(condition: Option<&Condition>) -> bool {
    condition.is_none_or(|c| c.status == CONDITION_STATUS_UNKNOWN)
}

/// Checks if specified condition is set with a status other than `True`,
/// `False` or `Unknown`.
#[must_use]
pub fn is_unsupported(condition: Option<&Condition>) -> bool {
    condition.is_some_and(|c| {
        c.status != CONDITION_STATUS_TRUE
            && c.status != CONDITION_STATUS_FALSE
            && c.status != CONDITION_STATUS_UNKNOWN
    })
}

/// Returns a [`CheckOption`] that checks if condition reason is set to the
/// specified value.
#[must_use]
pub fn with_reason(reason: &str) -> CheckOption {
    CheckOption::Reason(reason.to_string())
}

/// Returns a [`CheckOption`] that checks if condition severity is set to the
/// specified value.
#[must_use]
pub fn with_severity(severity: ConditionSeverity) -> CheckOption {
    CheckOption::Severity(severity)
}

/// Returns a [`CheckOption`] that checks if condition severity is set to Info.
#[must_use]
pub fn with_severity_info() -> CheckOption {
    with_severity(ConditionSeverity::Info)
}

/// Returns a [`CheckOption`] that checks if condition severity is set to Warning.
#[must_use]
pub fn with_severity_warning() -> CheckOption {
    with_severity(ConditionSeverity::Warning)
}

/// Returns a [`CheckOption`] that checks if condition severity is set to Error.
#[must_use]
pub fn with_severity_error() -> CheckOption {
    with_severity(ConditionSeverity::Error)
}

/// Returns a [`CheckOption`] that checks if condition severity is not set.
#[must_use]
pub fn without_severity() -> CheckOption {
    with_severity(ConditionSeverity::None)
}

/// Compare two conditions field by field, including message and
/// `lastTransitionTime`.
///
/// Two absent conditions are equal; an absent and a present one are not.
#[must_use]
pub fn are_equal(a: Option<&Condition>, b: Option<&Condition>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            are_equivalent(Some(a), Some(b))
                && a.message == b.message
                && a.last_transition_time == b.last_transition_time
        }
        _ => false,
    }
}

/// Compare the meaning of two conditions: type, status, severity and reason.
///
/// Message and `lastTransitionTime` are ignored. Two absent conditions are
/// equivalent; an absent and a present one are not.
#[must_use]
pub fn are_equivalent(a: Option<&Condition>, b: Option<&Condition>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.r#type == b.r#type
                && a.status == b.status
                && a.severity == b.severity
                && a.reason == b.reason
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
