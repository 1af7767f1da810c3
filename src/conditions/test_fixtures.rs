// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared fixtures for the named condition tests.

use crate::crd::{
    Cluster, ClusterSpec, Condition, InfrastructureCluster, InfrastructureClusterSpec,
    MachinePool, MachinePoolSpec,
};
use crate::object::{Getter, Setter};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use std::time::Duration;

pub(super) const NAMESPACE: &str = "org-acme";
pub(super) const CLUSTER_NAME: &str = "demo";

/// A condition with the given type and status and nothing else set.
pub(super) fn condition(condition_type: &str, status: &str) -> Condition {
    Condition {
        r#type: condition_type.to_string(),
        status: status.to_string(),
        ..Condition::default()
    }
}

/// A namespaced `Cluster` without status and without creation timestamp.
pub(super) fn cluster() -> Cluster {
    let mut cluster = Cluster::new(CLUSTER_NAME, ClusterSpec::default());
    cluster.metadata.namespace = Some(NAMESPACE.to_string());
    cluster
}

/// A `Cluster` carrying the given conditions.
pub(super) fn cluster_with(conditions: Vec<Condition>) -> Cluster {
    let mut cluster = cluster();
    cluster.set_conditions(conditions);
    cluster
}

/// A `Cluster` whose creation timestamp lies `age` in the past.
pub(super) fn cluster_created_ago(age: Duration) -> Cluster {
    let created = Utc::now() - chrono::Duration::from_std(age).unwrap();

    serde_json::from_value(json!({
        "apiVersion": "cluster.x-k8s.io/v1alpha3",
        "kind": "Cluster",
        "metadata": {
            "name": CLUSTER_NAME,
            "namespace": NAMESPACE,
            "creationTimestamp": created.to_rfc3339_opts(SecondsFormat::Secs, true),
        },
        "spec": {}
    }))
    .unwrap()
}

/// A namespaced `MachinePool` of the demo cluster carrying the given conditions.
pub(super) fn machine_pool_with(name: &str, conditions: Vec<Condition>) -> MachinePool {
    let mut pool = MachinePool::new(
        name,
        MachinePoolSpec {
            cluster_name: CLUSTER_NAME.to_string(),
            replicas: Some(3),
            infrastructure_ref: None,
        },
    );
    pool.metadata.namespace = Some(NAMESPACE.to_string());
    if !conditions.is_empty() {
        pool.set_conditions(conditions);
    }
    pool
}

/// An `InfrastructureCluster` of the demo cluster carrying the given conditions.
pub(super) fn infrastructure_cluster_with(conditions: Vec<Condition>) -> InfrastructureCluster {
    let mut infrastructure =
        InfrastructureCluster::new(CLUSTER_NAME, InfrastructureClusterSpec::default());
    infrastructure.metadata.namespace = Some(NAMESPACE.to_string());
    if !conditions.is_empty() {
        infrastructure.set_conditions(conditions);
    }
    infrastructure
}

/// A control plane object that only exposes its conditions.
pub(super) struct ControlPlane {
    pub(super) conditions: Vec<Condition>,
}

impl Getter for ControlPlane {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    fn kind_name(&self) -> String {
        "KubeadmControlPlane".to_string()
    }

    fn object_name(&self) -> String {
        format!("{CLUSTER_NAME}-control-plane")
    }
}
