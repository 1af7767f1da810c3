// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! String formatters for conditions.
//!
//! Used to build error messages and to print readable assertion failures.

use crate::constants::CONDITION_NOT_SET;
use crate::crd::Condition;
use crate::object::Getter;
use crate::status::get;

/// The status of the condition of the given type, or `condition not set`.
#[must_use]
pub fn got_condition_status_string<G: Getter + ?Sized>(object: &G, condition_type: &str) -> String {
    get(object, condition_type).map_or_else(|| CONDITION_NOT_SET.to_string(), |c| c.status.clone())
}

/// Render a condition as `Type: Status="..", Reason="..", Severity="..", Message=".."`.
#[must_use]
pub fn sprint_condition(condition: &Condition) -> String {
    format!(
        "{}: Status={:?}, Reason={:?}, Severity={:?}, Message={:?}",
        condition.r#type,
        condition.status,
        condition.reason,
        condition.severity.as_str(),
        condition.message
    )
}

/// Render the condition of the given type on an object, or `condition not set`.
#[must_use]
pub fn condition_string<G: Getter + ?Sized>(object: &G, condition_type: &str) -> String {
    get(object, condition_type).map_or_else(|| CONDITION_NOT_SET.to_string(), sprint_condition)
}

#[cfg(test)]
#[path = "testutil_tests.rs"]
mod testutil_tests;
