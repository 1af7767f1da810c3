// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `ControlPlaneReady` condition.
//!
//! `ControlPlaneReady` tells if the control plane of a cluster is ready, by
//! mirroring the Ready condition of the control plane object referenced by
//! `spec.controlPlaneRef`.

use super::{is_condition_false, reconcile_mirrored, MirrorPolicy};
use crate::check::{self, with_reason, CheckOption};
use crate::constants::{
    CONDITION_TYPE_CONTROL_PLANE_READY, WAITING_FOR_CONTROL_PLANE_WARNING_THRESHOLD,
};
use crate::crd::Condition;
use crate::object::{Getter, Object};
use crate::status::{self, get};
use crate::status_reasons::REASON_WAITING_FOR_CONTROL_PLANE_FALLBACK;

/// Condition type mirroring the Ready condition of the control plane object.
pub const CONTROL_PLANE_READY: &str = CONDITION_TYPE_CONTROL_PLANE_READY;

/// `ControlPlaneReady` is False because the control plane object is not found.
/// Used with severity Warning.
pub const CONTROL_PLANE_OBJECT_NOT_FOUND_REASON: &str = "ControlPlaneObjectNotFound";

const POLICY: MirrorPolicy = MirrorPolicy {
    condition_type: CONTROL_PLANE_READY,
    dependent: "control plane",
    not_found_subject: "Control plane object",
    not_found_reason: CONTROL_PLANE_OBJECT_NOT_FOUND_REASON,
    fallback_reason: REASON_WAITING_FOR_CONTROL_PLANE_FALLBACK,
    warning_threshold: WAITING_FOR_CONTROL_PLANE_WARNING_THRESHOLD,
};

/// Returns a copy of the `ControlPlaneReady` condition, or `None` if it is not set.
#[must_use]
pub fn get_control_plane_ready<G: Getter + ?Sized>(object: &G) -> Option<Condition> {
    get(object, CONTROL_PLANE_READY).cloned()
}

/// Checks if `ControlPlaneReady` is set with status True.
#[must_use]
pub fn is_control_plane_ready_true<G: Getter + ?Sized>(object: &G) -> bool {
    status::is_true(object, CONTROL_PLANE_READY)
}

/// Checks if `ControlPlaneReady` is set with status False and the optional checks
/// pass.
#[must_use]
pub fn is_control_plane_ready_false<G: Getter + ?Sized>(
    object: &G,
    check_options: &[CheckOption],
) -> bool {
    is_condition_false(object, CONTROL_PLANE_READY, check_options)
}

/// Checks if `ControlPlaneReady` is not set, or set with status Unknown.
#[must_use]
pub fn is_control_plane_ready_unknown<G: Getter + ?Sized>(object: &G) -> bool {
    check::is_unknown(get(object, CONTROL_PLANE_READY))
}

/// Returns a [`CheckOption`] that checks if the reason is `ControlPlaneObjectNotFound`.
#[must_use]
pub fn with_control_plane_object_not_found_reason() -> CheckOption {
    with_reason(CONTROL_PLANE_OBJECT_NOT_FOUND_REASON)
}

/// Returns a [`CheckOption`] that checks if the reason is `WaitingForControlPlane`.
#[must_use]
pub fn with_waiting_for_control_plane_reason() -> CheckOption {
    with_reason(REASON_WAITING_FOR_CONTROL_PLANE_FALLBACK)
}

/// Sets `ControlPlaneReady` on `object` by mirroring the Ready condition of the
/// control plane object.
///
/// - If there is no control plane object, `ControlPlaneReady` is set to False with
///   severity Warning and reason `ControlPlaneObjectNotFound`.
/// - If the control plane object has no Ready condition, `ControlPlaneReady` is set
///   to False with reason `WaitingForControlPlane`. Severity is Info for the first
///   10 minutes after `object` was created and Warning afterwards.
/// - Otherwise the Ready condition is copied.
///
/// # Example
///
/// ```rust
/// use cluster_conditions::conditions::{
///     is_control_plane_ready_false, reconcile_control_plane_ready,
///     with_control_plane_object_not_found_reason,
/// };
/// use cluster_conditions::crd::{Cluster, ClusterSpec};
///
/// let mut cluster = Cluster::new("demo", ClusterSpec::default());
/// reconcile_control_plane_ready(&mut cluster, None);
///
/// assert!(is_control_plane_ready_false(
///     &cluster,
///     &[with_control_plane_object_not_found_reason()]
/// ));
/// ```
pub fn reconcile_control_plane_ready<O: Object + ?Sized>(
    object: &mut O,
    control_plane: Option<&dyn Getter>,
) {
    reconcile_mirrored(object, control_plane, &POLICY);
}
