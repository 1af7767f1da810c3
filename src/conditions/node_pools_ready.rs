// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `NodePoolsReady` condition.
//!
//! `NodePoolsReady` tells if the node pools of a cluster are ready, by aggregating
//! the Ready conditions of all node pool objects (e.g. `MachinePool`s).

use super::is_condition_false;
use crate::check::{self, with_reason, CheckOption};
use crate::constants::CONDITION_TYPE_READY;
use crate::crd::{Condition, ConditionSeverity};
use crate::object::{Getter, Object};
use crate::status::{self, get, MergeOptions};
use crate::status_reasons::localize_reason;

/// Condition type aggregating the Ready conditions of all node pools.
pub const NODE_POOLS_READY: &str = "NodePoolsReady";

/// `NodePoolsReady` is False because no node pool objects were found.
pub const NODE_POOLS_NOT_FOUND_REASON: &str = "NodePoolObjectsNotFound";

/// `NodePoolsReady` is Unknown because a node pool has not reported a Ready
/// condition yet.
pub const WAITING_FOR_NODE_POOL_READY_REASON: &str = "WaitingForNodePoolReady";

/// Returns a copy of the `NodePoolsReady` condition, or `None` if it is not set.
#[must_use]
pub fn get_node_pools_ready<G: Getter + ?Sized>(object: &G) -> Option<Condition> {
    get(object, NODE_POOLS_READY).cloned()
}

/// Checks if `NodePoolsReady` is set with status True.
#[must_use]
pub fn is_node_pools_ready_true<G: Getter + ?Sized>(object: &G) -> bool {
    status::is_true(object, NODE_POOLS_READY)
}

/// Checks if `NodePoolsReady` is set with status False and the optional checks pass.
#[must_use]
pub fn is_node_pools_ready_false<G: Getter + ?Sized>(
    object: &G,
    check_options: &[CheckOption],
) -> bool {
    is_condition_false(object, NODE_POOLS_READY, check_options)
}

/// Checks if `NodePoolsReady` is not set, or set with status Unknown.
#[must_use]
pub fn is_node_pools_ready_unknown<G: Getter + ?Sized>(object: &G) -> bool {
    check::is_unknown(get(object, NODE_POOLS_READY))
}

/// Returns a [`CheckOption`] that checks if the reason is `NodePoolObjectsNotFound`.
#[must_use]
pub fn with_node_pools_not_found_reason() -> CheckOption {
    with_reason(NODE_POOLS_NOT_FOUND_REASON)
}

/// Sets `NodePoolsReady` on `object` by aggregating the Ready conditions of the
/// node pools.
///
/// - no node pools: False with severity Warning and reason `NodePoolObjectsNotFound`
/// - no pool is False but one is Unknown or has no Ready condition: Unknown, with
///   the reason taken from that pool
/// - otherwise the Ready conditions are merged, so any False pool makes the
///   result False and all True pools make it True
///
/// The message is a step counter (`<n> of <total> completed`) and the reason
/// points at the node pool it was taken from.
///
/// # Example
///
/// ```rust
/// use cluster_conditions::conditions::{is_node_pools_ready_true, update_node_pools_ready};
/// use cluster_conditions::crd::{Cluster, ClusterSpec, MachinePool, MachinePoolSpec};
/// use cluster_conditions::object::Getter;
/// use cluster_conditions::status::mark_true;
///
/// let mut cluster = Cluster::new("demo", ClusterSpec::default());
/// let mut pool = MachinePool::new("pool-a", MachinePoolSpec::default());
/// mark_true(&mut pool, "Ready");
///
/// let pools: Vec<&dyn Getter> = vec![&pool];
/// update_node_pools_ready(&mut cluster, &pools);
///
/// assert!(is_node_pools_ready_true(&cluster));
/// ```
pub fn update_node_pools_ready<O: Object + ?Sized>(object: &mut O, node_pools: &[&dyn Getter]) {
    if node_pools.is_empty() {
        let message = format!(
            "Node pools are not found for {} {}",
            object.kind_name(),
            object.namespaced_name()
        );
        status::mark_false(
            object,
            NODE_POOLS_READY,
            NODE_POOLS_NOT_FOUND_REASON,
            ConditionSeverity::Warning,
            &message,
        );
        return;
    }

    let any_false = node_pools
        .iter()
        .any(|pool| status::is_false(*pool, CONDITION_TYPE_READY));
    let pending = node_pools
        .iter()
        .find(|pool| status::is_unknown(**pool, CONDITION_TYPE_READY));

    if let (false, Some(pending)) = (any_false, pending) {
        let reason = match get(*pending, CONDITION_TYPE_READY) {
            Some(ready) if !ready.reason.is_empty() => ready.reason.as_str(),
            _ => WAITING_FOR_NODE_POOL_READY_REASON,
        };
        let completed = node_pools
            .iter()
            .filter(|pool| status::is_true(**pool, CONDITION_TYPE_READY))
            .count();
        status::mark_unknown(
            object,
            NODE_POOLS_READY,
            &localize_reason(reason, &pending.source_ref()),
            &format!("{completed} of {} completed", node_pools.len()),
        );
        return;
    }

    status::set_aggregate(
        object,
        NODE_POOLS_READY,
        node_pools,
        MergeOptions::default().with_step_counter().add_source_ref(),
    );
}
