// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `Upgrading` condition.
//!
//! `Upgrading` tells if a cluster, a node pool, a control plane, or anything else
//! that needs it is currently being upgraded.

use super::is_condition_false;
use crate::check::{self, with_reason, CheckOption};
use crate::crd::{Condition, ConditionSeverity};
use crate::duration::{elapsed_since, format_duration};
use crate::object::{Getter, Object};
use crate::status::{self, get};

/// Condition type for objects that are being upgraded.
pub const UPGRADING: &str = "Upgrading";

/// The upgrade has been completed successfully.
pub const UPGRADE_COMPLETED_REASON: &str = "UpgradeCompleted";

/// The upgrade has not started yet. Usually set during or right after creation,
/// but also after restoring an object from a backup.
pub const UPGRADE_NOT_STARTED_REASON: &str = "UpgradeNotStarted";

/// Returns a copy of the Upgrading condition, or `None` if it is not set.
#[must_use]
pub fn get_upgrading<G: Getter + ?Sized>(object: &G) -> Option<Condition> {
    get(object, UPGRADING).cloned()
}

/// Checks if the object is in Upgrading condition (Upgrading is set with status
/// True).
#[must_use]
pub fn is_upgrading_true<G: Getter + ?Sized>(object: &G) -> bool {
    status::is_true(object, UPGRADING)
}

/// Checks if the object is not in Upgrading condition (Upgrading is set with status
/// False) and the optional checks pass.
///
/// # Example
///
/// ```rust,ignore
/// is_upgrading_false(&cluster, &[]);
/// is_upgrading_false(&cluster, &[with_upgrade_completed_reason()]);
/// is_upgrading_false(&cluster, &[with_upgrade_not_started_reason()]);
/// ```
#[must_use]
pub fn is_upgrading_false<G: Getter + ?Sized>(object: &G, check_options: &[CheckOption]) -> bool {
    is_condition_false(object, UPGRADING, check_options)
}

/// Checks if it is unknown whether the object is being upgraded (Upgrading is not
/// set, or set with status Unknown).
#[must_use]
pub fn is_upgrading_unknown<G: Getter + ?Sized>(object: &G) -> bool {
    check::is_unknown(get(object, UPGRADING))
}

/// Returns a [`CheckOption`] that checks if the reason is `UpgradeCompleted`.
#[must_use]
pub fn with_upgrade_completed_reason() -> CheckOption {
    with_reason(UPGRADE_COMPLETED_REASON)
}

/// Returns a [`CheckOption`] that checks if the reason is `UpgradeNotStarted`.
#[must_use]
pub fn with_upgrade_not_started_reason() -> CheckOption {
    with_reason(UPGRADE_NOT_STARTED_REASON)
}

/// Sets Upgrading with status True.
pub fn mark_upgrading_true<O: Object + ?Sized>(object: &mut O) {
    status::mark_true(object, UPGRADING);
}

/// Sets Upgrading with status False, reason `UpgradeCompleted`, severity Info and
/// a message telling how long the upgrade took.
///
/// The duration is measured from the last transition of the current Upgrading
/// condition, which is when it was set to True.
pub fn mark_upgrading_false_with_upgrade_completed<O: Object + ?Sized>(object: &mut O) {
    let upgrade_time_message = match get(object, UPGRADING).and_then(|c| c.last_transition_time) {
        Some(started) => format!(" in {}", format_duration(elapsed_since(started))),
        None => ", but upgrade duration cannot be determined".to_string(),
    };

    status::mark_false(
        object,
        UPGRADING,
        UPGRADE_COMPLETED_REASON,
        ConditionSeverity::Info,
        &format!("Upgrade has been completed{upgrade_time_message}"),
    );
}

/// Sets Upgrading with status False, reason `UpgradeNotStarted`, severity Info and
/// a message telling that the upgrade has not been started.
pub fn mark_upgrading_false_with_upgrade_not_started<O: Object + ?Sized>(object: &mut O) {
    status::mark_false(
        object,
        UPGRADING,
        UPGRADE_NOT_STARTED_REASON,
        ConditionSeverity::Info,
        "Upgrade has not been started",
    );
}
