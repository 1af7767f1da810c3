// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `InfrastructureReady` condition.
//!
//! `InfrastructureReady` tells if the provider infrastructure of an object is
//! ready, by mirroring the Ready condition of the provider-specific object
//! referenced by `spec.infrastructureRef`. For a `Cluster` that is its
//! `InfrastructureCluster`; for a `MachinePool` it is the provider machine pool.

use super::{is_condition_false, reconcile_mirrored, MirrorPolicy};
use crate::check::{self, with_reason, CheckOption};
use crate::constants::{
    CONDITION_TYPE_INFRASTRUCTURE_READY, WAITING_FOR_INFRASTRUCTURE_WARNING_THRESHOLD,
};
use crate::crd::Condition;
use crate::object::{Getter, Object};
use crate::status::{self, get};
use crate::status_reasons::REASON_WAITING_FOR_INFRASTRUCTURE_FALLBACK;

/// Condition type mirroring the Ready condition of the infrastructure object.
pub const INFRASTRUCTURE_READY: &str = CONDITION_TYPE_INFRASTRUCTURE_READY;

/// `InfrastructureReady` is False because the provider-specific infrastructure
/// object is not found. Used with severity Warning.
pub const INFRASTRUCTURE_OBJECT_NOT_FOUND_REASON: &str = "InfrastructureObjectNotFound";

const POLICY: MirrorPolicy = MirrorPolicy {
    condition_type: INFRASTRUCTURE_READY,
    dependent: "infrastructure",
    not_found_subject: "Corresponding provider-specific infrastructure object",
    not_found_reason: INFRASTRUCTURE_OBJECT_NOT_FOUND_REASON,
    fallback_reason: REASON_WAITING_FOR_INFRASTRUCTURE_FALLBACK,
    warning_threshold: WAITING_FOR_INFRASTRUCTURE_WARNING_THRESHOLD,
};

/// Returns a copy of the `InfrastructureReady` condition, or `None` if it is not set.
#[must_use]
pub fn get_infrastructure_ready<G: Getter + ?Sized>(object: &G) -> Option<Condition> {
    get(object, INFRASTRUCTURE_READY).cloned()
}

/// Checks if `InfrastructureReady` is set with status True.
#[must_use]
pub fn is_infrastructure_ready_true<G: Getter + ?Sized>(object: &G) -> bool {
    status::is_true(object, INFRASTRUCTURE_READY)
}

/// Checks if `InfrastructureReady` is set with status False and the optional checks
/// pass.
#[must_use]
pub fn is_infrastructure_ready_false<G: Getter + ?Sized>(
    object: &G,
    check_options: &[CheckOption],
) -> bool {
    is_condition_false(object, INFRASTRUCTURE_READY, check_options)
}

/// Checks if `InfrastructureReady` is not set, or set with status Unknown.
#[must_use]
pub fn is_infrastructure_ready_unknown<G: Getter + ?Sized>(object: &G) -> bool {
    check::is_unknown(get(object, INFRASTRUCTURE_READY))
}

/// Returns a [`CheckOption`] that checks if the reason is `InfrastructureObjectNotFound`.
#[must_use]
pub fn with_infrastructure_object_not_found_reason() -> CheckOption {
    with_reason(INFRASTRUCTURE_OBJECT_NOT_FOUND_REASON)
}

/// Returns a [`CheckOption`] that checks if the reason is `WaitingForInfrastructure`.
#[must_use]
pub fn with_waiting_for_infrastructure_reason() -> CheckOption {
    with_reason(REASON_WAITING_FOR_INFRASTRUCTURE_FALLBACK)
}

/// Sets `InfrastructureReady` on `object` by mirroring the Ready condition of the
/// infrastructure object.
///
/// - If there is no infrastructure object, `InfrastructureReady` is set to False
///   with severity Warning and reason `InfrastructureObjectNotFound`.
/// - If the infrastructure object has no Ready condition, `InfrastructureReady` is
///   set to False with reason `WaitingForInfrastructure`. Severity is Info for the
///   first 10 minutes after `object` was created and Warning afterwards.
/// - Otherwise the Ready condition is copied.
pub fn reconcile_infrastructure_ready<O: Object + ?Sized>(
    object: &mut O,
    infrastructure: Option<&dyn Getter>,
) {
    reconcile_mirrored(object, infrastructure, &POLICY);
}
