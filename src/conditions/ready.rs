// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `Ready` condition, the summary condition of every object.

use super::is_condition_false;
use crate::check::{self, CheckOption};
use crate::constants::CONDITION_TYPE_READY;
use crate::crd::Condition;
use crate::object::Getter;
use crate::status::{self, get};

/// Condition type summarizing the overall state of an object.
pub const READY: &str = CONDITION_TYPE_READY;

/// Returns a copy of the Ready condition, or `None` if it is not set.
#[must_use]
pub fn get_ready<G: Getter + ?Sized>(object: &G) -> Option<Condition> {
    get(object, READY).cloned()
}

/// Checks if the object is in Ready condition (Ready is set with status True).
#[must_use]
pub fn is_ready_true<G: Getter + ?Sized>(object: &G) -> bool {
    status::is_true(object, READY)
}

/// Checks if the object is not in Ready condition (Ready is set with status False)
/// and the optional checks pass.
#[must_use]
pub fn is_ready_false<G: Getter + ?Sized>(object: &G, check_options: &[CheckOption]) -> bool {
    is_condition_false(object, READY, check_options)
}

/// Checks if it is unknown whether the object is ready (Ready is not set, or set
/// with status Unknown).
#[must_use]
pub fn is_ready_unknown<G: Getter + ?Sized>(object: &G) -> bool {
    check::is_unknown(get(object, READY))
}
