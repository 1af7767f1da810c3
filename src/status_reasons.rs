// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Upstream condition reasons shared by the named conditions.
//!
//! Reasons are programmatic identifiers in CamelCase that explain why a condition has
//! a particular status. The reasons owned by a single condition type (for example
//! `CreationCompleted`) live next to that condition in [`crate::conditions`]; this
//! module holds the reasons defined by the upstream Cluster API schema, which several
//! conditions reuse when they fall back to `False`.
//!
//! # Localized Reasons
//!
//! When a condition is aggregated from several source objects, its reason is
//! suffixed with a reference to the object it was taken from:
//!
//! ```yaml
//! status:
//!   conditions:
//!     - type: NodePoolsReady
//!       status: "False"
//!       severity: Warning
//!       reason: "ScalingDown @ MachinePool/pool-a"
//!       message: "1 of 3 completed"
//! ```

// ============================================================================
// Mirror Fallback Reasons
// ============================================================================

/// The control plane object exists but has not reported a Ready condition yet.
///
/// Used as the fallback reason when mirroring `ControlPlaneReady`.
pub const REASON_WAITING_FOR_CONTROL_PLANE_FALLBACK: &str = "WaitingForControlPlane";

/// The infrastructure object exists but has not reported a Ready condition yet.
///
/// Used as the fallback reason when mirroring `InfrastructureReady`.
pub const REASON_WAITING_FOR_INFRASTRUCTURE_FALLBACK: &str = "WaitingForInfrastructure";

// ============================================================================
// MachinePool Specific Reasons
// ============================================================================

/// Not all replicas of the machine pool are ready yet.
pub const REASON_WAITING_FOR_REPLICAS_READY: &str = "WaitingForReplicasReady";

// ============================================================================
// Source References
// ============================================================================

/// Separator between a reason and the source object reference.
pub const SOURCE_REF_SEPARATOR: &str = " @ ";

/// Append a source object reference to a reason.
///
/// Reasons that already carry a reference are returned unchanged, so a reason
/// aggregated twice still points at the original source.
///
/// # Example
///
/// ```rust
/// use cluster_conditions::status_reasons::localize_reason;
///
/// assert_eq!(localize_reason("Scaling", "MachinePool/pool-a"), "Scaling @ MachinePool/pool-a");
/// assert_eq!(
///     localize_reason("Scaling @ MachinePool/pool-a", "Cluster/demo"),
///     "Scaling @ MachinePool/pool-a"
/// );
/// ```
#[must_use]
pub fn localize_reason(reason: &str, source_ref: &str) -> String {
    if reason.contains('@') {
        return reason.to_string();
    }
    format!("{reason}{SOURCE_REF_SEPARATOR}{source_ref}")
}

/// Split a localized reason into the bare reason and its source reference.
///
/// # Example
///
/// ```rust
/// use cluster_conditions::status_reasons::split_localized_reason;
///
/// assert_eq!(
///     split_localized_reason("Scaling @ MachinePool/pool-a"),
///     ("Scaling", Some("MachinePool/pool-a"))
/// );
/// assert_eq!(split_localized_reason("Scaling"), ("Scaling", None));
/// ```
#[must_use]
pub fn split_localized_reason(reason: &str) -> (&str, Option<&str>) {
    match reason.split_once(SOURCE_REF_SEPARATOR) {
        Some((bare, source)) => (bare, Some(source)),
        None => (reason, None),
    }
}
