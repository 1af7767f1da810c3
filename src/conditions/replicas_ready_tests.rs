// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the `ReplicasReady` condition

#[cfg(test)]
mod tests {
    use crate::conditions::replicas_ready::*;
    use crate::conditions::test_fixtures::{condition, machine_pool_with};
    use crate::crd::ConditionSeverity;
    use crate::status::false_condition;

    #[test]
    fn test_replicas_ready_not_set() {
        let pool = machine_pool_with("pool-a", vec![]);

        assert!(get_replicas_ready(&pool).is_none());
        assert!(!is_replicas_ready_true(&pool));
        assert!(!is_replicas_ready_false(&pool, &[]));
        assert!(is_replicas_ready_unknown(&pool));
    }

    #[test]
    fn test_replicas_ready_true() {
        let pool = machine_pool_with("pool-a", vec![condition(REPLICAS_READY, "True")]);

        assert!(is_replicas_ready_true(&pool));
        assert!(!is_replicas_ready_false(&pool, &[]));
        assert!(!is_replicas_ready_unknown(&pool));
    }

    #[test]
    fn test_replicas_ready_false_waiting_for_replicas() {
        let pool = machine_pool_with(
            "pool-a",
            vec![false_condition(
                REPLICAS_READY,
                "WaitingForReplicasReady",
                ConditionSeverity::Info,
                "2 of 3 replicas ready",
            )],
        );

        assert!(is_replicas_ready_false(&pool, &[]));
        assert!(is_replicas_ready_false(
            &pool,
            &[with_waiting_for_replicas_ready_reason()]
        ));
        assert!(!is_replicas_ready_unknown(&pool));
    }

    #[test]
    fn test_replicas_ready_false_other_reason() {
        let pool = machine_pool_with(
            "pool-a",
            vec![false_condition(
                REPLICAS_READY,
                "ScaleSetNotFound",
                ConditionSeverity::Error,
                "",
            )],
        );

        assert!(!is_replicas_ready_false(
            &pool,
            &[with_waiting_for_replicas_ready_reason()]
        ));
    }

    #[test]
    fn test_replicas_ready_unknown() {
        let pool = machine_pool_with("pool-a", vec![condition(REPLICAS_READY, "Unknown")]);

        assert!(is_replicas_ready_unknown(&pool));
        assert!(!is_replicas_ready_true(&pool));
    }
}
