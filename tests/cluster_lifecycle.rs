// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Integration tests for the condition lifecycle of a workload cluster
//!
//! These tests drive a `Cluster` through creation, provisioning of its
//! dependents, and an upgrade, the way a controller's reconcile loop would,
//! and check the conditions it reports at every step. They need no Kubernetes
//! cluster.
//!
//! Run with: cargo test --test cluster_lifecycle

mod common;

use cluster_conditions::check::{with_severity_info, with_severity_warning};
use cluster_conditions::conditions::*;
use cluster_conditions::crd::{Cluster, ConditionSeverity};
use cluster_conditions::errors::{
    check_condition_status, expect_condition_status, is_unexpected_condition_status,
};
use cluster_conditions::object::{Getter, Setter};
use cluster_conditions::status::{false_condition, mark_true, true_condition};
use cluster_conditions::testutil::condition_string;
use common::{cluster_created_ago, infrastructure_cluster, machine_pool, ControlPlane};
use std::time::Duration;

// ============================================================================
// Helper Functions
// ============================================================================

/// One reconcile pass over the cluster and whatever dependents exist
fn reconcile(
    cluster: &mut Cluster,
    control_plane: Option<&dyn Getter>,
    infrastructure: Option<&dyn Getter>,
    node_pools: &[&dyn Getter],
) {
    if get_creating(cluster).is_none() {
        mark_creating_true(cluster);
    }
    if get_upgrading(cluster).is_none() {
        mark_upgrading_false_with_upgrade_not_started(cluster);
    }

    reconcile_control_plane_ready(cluster, control_plane);
    reconcile_infrastructure_ready(cluster, infrastructure);
    update_node_pools_ready(cluster, node_pools);

    if is_creating_true(cluster)
        && is_control_plane_ready_true(cluster)
        && is_infrastructure_ready_true(cluster)
        && is_node_pools_ready_true(cluster)
    {
        mark_creating_false_with_creation_completed(cluster);
        mark_true(cluster, READY);
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[test]
fn test_new_cluster_without_dependents() {
    let mut cluster = cluster_created_ago("demo", Duration::from_secs(30));

    reconcile(&mut cluster, None, None, &[]);

    assert!(is_creating_true(&cluster));
    assert!(is_upgrading_false(
        &cluster,
        &[with_upgrade_not_started_reason()]
    ));
    assert!(is_control_plane_ready_false(
        &cluster,
        &[with_control_plane_object_not_found_reason()]
    ));
    assert!(is_infrastructure_ready_false(
        &cluster,
        &[with_infrastructure_object_not_found_reason()]
    ));
    assert!(is_node_pools_ready_false(
        &cluster,
        &[with_node_pools_not_found_reason()]
    ));
    assert!(is_ready_unknown(&cluster));
}

#[test]
fn test_cluster_becomes_ready() {
    let mut cluster = cluster_created_ago("demo", Duration::from_secs(3 * 60));
    let mut control_plane = ControlPlane {
        name: "demo-control-plane".to_string(),
        conditions: vec![],
    };
    let mut infrastructure = infrastructure_cluster("demo");
    let mut pool_a = machine_pool("demo", "pool-a");
    let mut pool_b = machine_pool("demo", "pool-b");

    // Dependents exist but have not reported yet
    {
        let pools: Vec<&dyn Getter> = vec![&pool_a, &pool_b];
        reconcile(
            &mut cluster,
            Some(&control_plane),
            Some(&infrastructure),
            &pools,
        );
    }
    assert!(is_control_plane_ready_false(
        &cluster,
        &[with_waiting_for_control_plane_reason(), with_severity_info()]
    ));
    assert!(is_infrastructure_ready_false(
        &cluster,
        &[with_waiting_for_infrastructure_reason(), with_severity_info()]
    ));
    assert!(
        is_node_pools_ready_unknown(&cluster),
        "{}",
        condition_string(&cluster, NODE_POOLS_READY)
    );

    // Infrastructure and control plane come up, one pool is still scaling
    mark_true(&mut infrastructure, READY);
    control_plane.conditions = vec![true_condition(READY)];
    mark_true(&mut pool_a, READY);
    pool_b.set_conditions(vec![false_condition(
        READY,
        "WaitingForReplicasReady",
        ConditionSeverity::Info,
        "2 of 3 replicas ready",
    )]);
    {
        let pools: Vec<&dyn Getter> = vec![&pool_a, &pool_b];
        reconcile(
            &mut cluster,
            Some(&control_plane),
            Some(&infrastructure),
            &pools,
        );
    }
    assert!(is_control_plane_ready_true(&cluster));
    assert!(is_infrastructure_ready_true(&cluster));
    assert!(is_node_pools_ready_false(&cluster, &[with_severity_info()]));
    assert_eq!(
        get_node_pools_ready(&cluster).unwrap().reason,
        "WaitingForReplicasReady @ MachinePool/pool-b"
    );
    assert!(is_creating_true(&cluster));

    // Last pool becomes ready
    mark_true(&mut pool_b, READY);
    {
        let pools: Vec<&dyn Getter> = vec![&pool_a, &pool_b];
        reconcile(
            &mut cluster,
            Some(&control_plane),
            Some(&infrastructure),
            &pools,
        );
    }
    assert!(is_node_pools_ready_true(&cluster));
    assert!(is_creating_false(
        &cluster,
        &[with_creation_completed_reason()]
    ));
    assert!(get_creating(&cluster)
        .unwrap()
        .message
        .starts_with("Cluster creation has been completed in 3m"));
    assert!(is_ready_true(&cluster));
    assert_eq!(cluster.conditions()[0].r#type, READY);
}

#[test]
fn test_stuck_cluster_escalates_to_warning() {
    let mut cluster = cluster_created_ago("stuck", Duration::from_secs(45 * 60));
    let control_plane = ControlPlane {
        name: "stuck-control-plane".to_string(),
        conditions: vec![],
    };
    let infrastructure = infrastructure_cluster("stuck");

    reconcile(
        &mut cluster,
        Some(&control_plane),
        Some(&infrastructure),
        &[],
    );

    assert!(is_control_plane_ready_false(
        &cluster,
        &[with_waiting_for_control_plane_reason(), with_severity_warning()]
    ));
    assert!(is_infrastructure_ready_false(
        &cluster,
        &[with_waiting_for_infrastructure_reason(), with_severity_warning()]
    ));
    assert!(get_infrastructure_ready(&cluster)
        .unwrap()
        .message
        .contains("for more than 45m"));

    let err = expect_condition_status(&cluster, CONTROL_PLANE_READY, "True")
        .map_err(anyhow::Error::from)
        .unwrap_err();
    assert!(is_unexpected_condition_status(&err));
}

#[test]
fn test_upgrade_cycle() {
    let mut cluster = cluster_created_ago("demo", Duration::from_secs(2 * 3600));
    mark_creating_false_for_existing_object(&mut cluster);
    mark_upgrading_false_with_upgrade_not_started(&mut cluster);

    mark_upgrading_true(&mut cluster);
    assert!(is_upgrading_true(&cluster));
    assert!(is_creating_false(&cluster, &[with_existing_object_reason()]));

    mark_upgrading_false_with_upgrade_completed(&mut cluster);
    assert!(is_upgrading_false(
        &cluster,
        &[with_upgrade_completed_reason()]
    ));
    assert!(get_upgrading(&cluster)
        .unwrap()
        .message
        .starts_with("Upgrade has been completed in "));
}

#[test]
fn test_status_survives_round_trip() {
    let mut cluster = cluster_created_ago("demo", Duration::from_secs(60));
    reconcile(&mut cluster, None, None, &[]);

    let yaml = serde_yaml::to_string(&cluster).unwrap();
    let restored: Cluster = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(restored.conditions(), cluster.conditions());
    for condition in restored.conditions() {
        assert!(check_condition_status(&restored, &condition.r#type).is_ok());
        assert!(condition.last_transition_time.is_some());
    }
    assert_eq!(
        get_node_pools_ready(&restored).unwrap().severity,
        ConditionSeverity::Warning
    );
}
