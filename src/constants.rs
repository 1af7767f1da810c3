// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for cluster conditions.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

use std::time::Duration;

// ============================================================================
// API Constants
// ============================================================================

/// API group for the cluster resources
pub const API_GROUP: &str = "cluster.x-k8s.io";

/// API version for the cluster resources
pub const API_VERSION: &str = "v1alpha3";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "cluster.x-k8s.io/v1alpha3";

/// Kind name for `Cluster` resource
pub const KIND_CLUSTER: &str = "Cluster";

/// Kind name for `MachinePool` resource
pub const KIND_MACHINE_POOL: &str = "MachinePool";

/// API group for provider infrastructure resources
pub const INFRASTRUCTURE_API_GROUP: &str = "infrastructure.cluster.x-k8s.io";

/// Kind name for `InfrastructureCluster` resource
pub const KIND_INFRASTRUCTURE_CLUSTER: &str = "InfrastructureCluster";

// ============================================================================
// Condition Status Values
// ============================================================================

/// Condition status for a condition that holds.
pub const CONDITION_STATUS_TRUE: &str = "True";

/// Condition status for a condition that does not hold.
pub const CONDITION_STATUS_FALSE: &str = "False";

/// Condition status when the controller cannot tell.
pub const CONDITION_STATUS_UNKNOWN: &str = "Unknown";

// ============================================================================
// Condition Types
// ============================================================================

/// Summary condition for the overall state of an object.
pub const CONDITION_TYPE_READY: &str = "Ready";

/// Mirrors the Ready condition of the control plane object.
pub const CONDITION_TYPE_CONTROL_PLANE_READY: &str = "ControlPlaneReady";

/// Mirrors the Ready condition of the provider infrastructure object.
pub const CONDITION_TYPE_INFRASTRUCTURE_READY: &str = "InfrastructureReady";

/// Reports whether all replicas of a machine pool are ready.
pub const CONDITION_TYPE_REPLICAS_READY: &str = "ReplicasReady";

// ============================================================================
// Timing Constants
// ============================================================================

/// Seconds after creation during which a missing control plane Ready condition
/// is reported with severity Info. Warning is used afterwards.
pub const WAITING_FOR_CONTROL_PLANE_WARNING_THRESHOLD_SECS: u64 = 600;

/// Seconds after creation during which a missing infrastructure Ready condition
/// is reported with severity Info. Warning is used afterwards.
pub const WAITING_FOR_INFRASTRUCTURE_WARNING_THRESHOLD_SECS: u64 = 600;

/// [`WAITING_FOR_CONTROL_PLANE_WARNING_THRESHOLD_SECS`] as a `Duration`.
pub const WAITING_FOR_CONTROL_PLANE_WARNING_THRESHOLD: Duration =
    Duration::from_secs(WAITING_FOR_CONTROL_PLANE_WARNING_THRESHOLD_SECS);

/// [`WAITING_FOR_INFRASTRUCTURE_WARNING_THRESHOLD_SECS`] as a `Duration`.
pub const WAITING_FOR_INFRASTRUCTURE_WARNING_THRESHOLD: Duration =
    Duration::from_secs(WAITING_FOR_INFRASTRUCTURE_WARNING_THRESHOLD_SECS);

// ============================================================================
// Message Constants
// ============================================================================

/// Text used in messages in place of a status when the condition is absent.
pub const CONDITION_NOT_SET: &str = "condition not set";

// ============================================================================
// Logging Constants
// ============================================================================

/// Environment variable holding the tracing filter directives.
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

/// Environment variable selecting the log output format (`text` or `json`).
pub const ENV_LOG_FORMAT: &str = "RUST_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";
