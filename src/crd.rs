// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Condition types and the custom resources that carry them.
//!
//! This module defines the Cluster API style [`Condition`] stored in the status of
//! every resource handled by this crate, together with the custom resources the
//! named conditions in [`crate::conditions`] are written for.
//!
//! # Resource Types
//!
//! - [`Cluster`] - A workload cluster with control plane and infrastructure references
//! - [`MachinePool`] - A node pool belonging to a cluster
//! - [`InfrastructureCluster`] - Provider-specific infrastructure backing a cluster
//!
//! # Example: Reading Conditions From a Manifest
//!
//! ```rust
//! use cluster_conditions::crd::{Cluster, ConditionSeverity};
//! use cluster_conditions::object::Getter;
//!
//! let cluster: Cluster = serde_json::from_value(serde_json::json!({
//!     "apiVersion": "cluster.x-k8s.io/v1alpha3",
//!     "kind": "Cluster",
//!     "metadata": { "name": "demo", "namespace": "org-acme" },
//!     "spec": {},
//!     "status": {
//!         "conditions": [{
//!             "type": "Ready",
//!             "status": "False",
//!             "severity": "Warning",
//!             "reason": "WaitingForInfrastructure"
//!         }]
//!     }
//! }))
//! .unwrap();
//!
//! assert_eq!(cluster.conditions()[0].severity, ConditionSeverity::Warning);
//! ```

use chrono::{DateTime, Utc};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a `False` condition is.
///
/// Severity is only meaningful when the condition status is `False`; conditions
/// with any other status carry [`ConditionSeverity::None`].
///
/// Unlike [`Condition::status`], severity is a closed set. The generated CRD
/// schema enumerates these values, so the API server rejects any other severity
/// and deserializing one fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ConditionSeverity {
    /// No severity. Serialized as the empty string.
    #[default]
    #[serde(rename = "")]
    None,
    /// The condition is expected to resolve on its own.
    Info,
    /// Something may be wrong and could need attention.
    Warning,
    /// Something is wrong and needs attention.
    Error,
}

impl ConditionSeverity {
    /// Wire representation of the severity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Returns `true` for [`ConditionSeverity::None`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::None
    }
}

impl fmt::Display for ConditionSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition represents an observation of a resource's current state.
///
/// Conditions are used in status subresources to communicate the state of
/// a resource to users and controllers. The list of conditions on a resource is
/// unique by `type`.
///
/// `status` is kept as a string: values other than `True`, `False` and `Unknown`
/// are preserved so that they can be reported as unsupported instead of being
/// rejected during deserialization. `severity` is not: see [`ConditionSeverity`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition, e.g. Ready, Creating, `ControlPlaneReady`.
    pub r#type: String,

    /// Status of the condition: True, False, or Unknown.
    pub status: String,

    /// Severity of the condition when its status is False.
    #[serde(default, skip_serializing_if = "ConditionSeverity::is_none")]
    pub severity: ConditionSeverity,

    /// Brief CamelCase reason for the condition's last transition.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    /// Human-readable message indicating details about the transition.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// Last time the condition transitioned from one status to another.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub last_transition_time: Option<DateTime<Utc>>,
}

/// Reference to another object, as found in `controlPlaneRef` and `infrastructureRef`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    /// API version of the referenced object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Kind of the referenced object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Name of the referenced object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Namespace of the referenced object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// `Cluster` status
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

/// `Cluster` describes a workload cluster.
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "Cluster",
    namespaced,
    doc = "Cluster describes a workload cluster. Its status reports Creating, Upgrading, ControlPlaneReady, InfrastructureReady and NodePoolsReady conditions."
)]
#[kube(status = "ClusterStatus")]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Reference to the object providing the control plane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_ref: Option<ObjectReference>,

    /// Reference to the provider-specific infrastructure object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_ref: Option<ObjectReference>,
}

/// `MachinePool` status
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MachinePoolStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_replicas: Option<i32>,
}

/// `MachinePool` describes a group of worker nodes of a cluster.
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "MachinePool",
    namespaced,
    doc = "MachinePool describes a group of worker nodes. Its Ready condition feeds the NodePoolsReady condition of the owning Cluster."
)]
#[kube(status = "MachinePoolStatus")]
#[serde(rename_all = "camelCase")]
pub struct MachinePoolSpec {
    /// Name of the cluster this pool belongs to.
    #[serde(default)]
    pub cluster_name: String,

    /// Desired number of nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// Reference to the provider-specific infrastructure object of the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_ref: Option<ObjectReference>,
}

/// `InfrastructureCluster` status
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureClusterStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// `InfrastructureCluster` is the provider-specific counterpart of a [`Cluster`].
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "InfrastructureCluster",
    namespaced,
    doc = "InfrastructureCluster is the provider-specific infrastructure of a Cluster. Its Ready condition is mirrored into the Cluster InfrastructureReady condition."
)]
#[kube(status = "InfrastructureClusterStatus")]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureClusterSpec {
    /// Provider region or location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

crate::impl_condition_object!(Cluster);
crate::impl_condition_object!(MachinePool);
crate::impl_condition_object!(InfrastructureCluster);
