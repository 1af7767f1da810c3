// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `Creating` condition.
//!
//! `Creating` tells if a cluster, a node pool, a control plane, or anything else
//! that needs it is currently being created. While creation is in progress the
//! condition is `True`; once done it is set to `False` with one of the reasons
//! below.

use super::is_condition_false;
use crate::check::{self, with_reason, CheckOption};
use crate::crd::{Condition, ConditionSeverity};
use crate::duration::{elapsed_since, format_duration};
use crate::object::{Getter, Object};
use crate::status::{self, get};

/// Condition type for objects that are being created.
pub const CREATING: &str = "Creating";

/// The creation has been completed successfully.
pub const CREATION_COMPLETED_REASON: &str = "CreationCompleted";

/// Used when setting the Creating condition for the first time on an object that
/// was created before conditions were reported.
pub const EXISTING_OBJECT_REASON: &str = "ExistingObject";

/// Returns a copy of the Creating condition, or `None` if it is not set.
#[must_use]
pub fn get_creating<G: Getter + ?Sized>(object: &G) -> Option<Condition> {
    get(object, CREATING).cloned()
}

/// Checks if the object is in Creating condition (Creating is set with status
/// True).
#[must_use]
pub fn is_creating_true<G: Getter + ?Sized>(object: &G) -> bool {
    status::is_true(object, CREATING)
}

/// Checks if the object is not in Creating condition (Creating is set with status
/// False) and the optional checks pass.
///
/// # Example
///
/// ```rust
/// use cluster_conditions::conditions::{
///     is_creating_false, mark_creating_false_for_existing_object, with_existing_object_reason,
/// };
/// use cluster_conditions::crd::{Cluster, ClusterSpec};
///
/// let mut cluster = Cluster::new("demo", ClusterSpec::default());
/// mark_creating_false_for_existing_object(&mut cluster);
///
/// assert!(is_creating_false(&cluster, &[]));
/// assert!(is_creating_false(&cluster, &[with_existing_object_reason()]));
/// ```
#[must_use]
pub fn is_creating_false<G: Getter + ?Sized>(object: &G, check_options: &[CheckOption]) -> bool {
    is_condition_false(object, CREATING, check_options)
}

/// Checks if it is unknown whether the object is being created (Creating is not
/// set, or set with status Unknown).
#[must_use]
pub fn is_creating_unknown<G: Getter + ?Sized>(object: &G) -> bool {
    check::is_unknown(get(object, CREATING))
}

/// Returns a [`CheckOption`] that checks if the reason is `CreationCompleted`.
#[must_use]
pub fn with_creation_completed_reason() -> CheckOption {
    with_reason(CREATION_COMPLETED_REASON)
}

/// Returns a [`CheckOption`] that checks if the reason is `ExistingObject`.
#[must_use]
pub fn with_existing_object_reason() -> CheckOption {
    with_reason(EXISTING_OBJECT_REASON)
}

/// Sets Creating with status True.
pub fn mark_creating_true<O: Object + ?Sized>(object: &mut O) {
    status::mark_true(object, CREATING);
}

/// Sets Creating with status False, reason `CreationCompleted`, severity Info and
/// a message telling how long the creation took.
pub fn mark_creating_false_with_creation_completed<O: Object + ?Sized>(object: &mut O) {
    let message = match object.creation_timestamp() {
        Some(created) => format!(
            "Cluster creation has been completed in {}",
            format_duration(elapsed_since(created))
        ),
        None => {
            "Cluster creation has been completed, but creation duration cannot be determined"
                .to_string()
        }
    };

    status::mark_false(
        object,
        CREATING,
        CREATION_COMPLETED_REASON,
        ConditionSeverity::Info,
        &message,
    );
}

/// Sets Creating with status False, reason `ExistingObject`, severity Info and a
/// message telling that the object was already created.
pub fn mark_creating_false_for_existing_object<O: Object + ?Sized>(object: &mut O) {
    status::mark_false(
        object,
        CREATING,
        EXISTING_OBJECT_REASON,
        ConditionSeverity::Info,
        "Object was already created",
    );
}
