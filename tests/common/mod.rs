// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{SecondsFormat, Utc};
use cluster_conditions::crd::{Cluster, Condition, InfrastructureCluster, MachinePool};
use cluster_conditions::object::Getter;
use serde_json::json;
use std::time::Duration;

pub const NAMESPACE: &str = "org-acme";

/// Build a `Cluster` created `age` ago, as returned by the API server
pub fn cluster_created_ago(name: &str, age: Duration) -> Cluster {
    let created = Utc::now() - chrono::Duration::from_std(age).unwrap();

    serde_json::from_value(json!({
        "apiVersion": "cluster.x-k8s.io/v1alpha3",
        "kind": "Cluster",
        "metadata": {
            "name": name,
            "namespace": NAMESPACE,
            "creationTimestamp": created.to_rfc3339_opts(SecondsFormat::Secs, true),
        },
        "spec": {
            "controlPlaneRef": {
                "apiVersion": "controlplane.cluster.x-k8s.io/v1alpha3",
                "kind": "KubeadmControlPlane",
                "name": format!("{name}-control-plane"),
            },
            "infrastructureRef": {
                "apiVersion": "infrastructure.cluster.x-k8s.io/v1alpha3",
                "kind": "InfrastructureCluster",
                "name": name,
            }
        }
    }))
    .unwrap()
}

/// Build a `MachinePool` of the given cluster without status
pub fn machine_pool(cluster: &str, name: &str) -> MachinePool {
    serde_json::from_value(json!({
        "apiVersion": "cluster.x-k8s.io/v1alpha3",
        "kind": "MachinePool",
        "metadata": { "name": name, "namespace": NAMESPACE },
        "spec": { "clusterName": cluster, "replicas": 3 }
    }))
    .unwrap()
}

/// Build the `InfrastructureCluster` of the given cluster without status
pub fn infrastructure_cluster(name: &str) -> InfrastructureCluster {
    serde_json::from_value(json!({
        "apiVersion": "infrastructure.cluster.x-k8s.io/v1alpha3",
        "kind": "InfrastructureCluster",
        "metadata": { "name": name, "namespace": NAMESPACE },
        "spec": { "location": "westeurope" }
    }))
    .unwrap()
}

/// A control plane provider object that only reports conditions
pub struct ControlPlane {
    pub name: String,
    pub conditions: Vec<Condition>,
}

impl Getter for ControlPlane {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    fn kind_name(&self) -> String {
        "KubeadmControlPlane".to_string()
    }

    fn object_name(&self) -> String {
        self.name.clone()
    }
}
