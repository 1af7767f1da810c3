// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `ReplicasReady` condition reported by machine pools.

use super::is_condition_false;
use crate::check::{self, with_reason, CheckOption};
use crate::constants::CONDITION_TYPE_REPLICAS_READY;
use crate::crd::Condition;
use crate::object::Getter;
use crate::status::{self, get};
use crate::status_reasons::REASON_WAITING_FOR_REPLICAS_READY;

/// Condition type telling whether all replicas of a machine pool are ready.
pub const REPLICAS_READY: &str = CONDITION_TYPE_REPLICAS_READY;

/// Returns a copy of the `ReplicasReady` condition, or `None` if it is not set.
#[must_use]
pub fn get_replicas_ready<G: Getter + ?Sized>(machine_pool: &G) -> Option<Condition> {
    get(machine_pool, REPLICAS_READY).cloned()
}

/// Checks if the machine pool is in `ReplicasReady` condition (set with status True).
#[must_use]
pub fn is_replicas_ready_true<G: Getter + ?Sized>(machine_pool: &G) -> bool {
    status::is_true(machine_pool, REPLICAS_READY)
}

/// Checks if the machine pool is not in `ReplicasReady` condition (set with status
/// False) and the optional checks pass.
#[must_use]
pub fn is_replicas_ready_false<G: Getter + ?Sized>(
    machine_pool: &G,
    check_options: &[CheckOption],
) -> bool {
    is_condition_false(machine_pool, REPLICAS_READY, check_options)
}

/// Checks if it is unknown whether all replicas are ready (`ReplicasReady` is not
/// set, or set with status Unknown).
#[must_use]
pub fn is_replicas_ready_unknown<G: Getter + ?Sized>(machine_pool: &G) -> bool {
    check::is_unknown(get(machine_pool, REPLICAS_READY))
}

/// Returns a [`CheckOption`] that checks if the reason is `WaitingForReplicasReady`.
#[must_use]
pub fn with_waiting_for_replicas_ready_reason() -> CheckOption {
    with_reason(REASON_WAITING_FOR_REPLICAS_READY)
}
