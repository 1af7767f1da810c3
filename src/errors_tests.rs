// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `errors` module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::crd::{Cluster, ClusterSpec, Condition};
    use crate::object::Setter;
    use anyhow::{anyhow, Context};

    fn cluster_with_creating(status: &str) -> Cluster {
        let mut cluster = Cluster::new("demo", ClusterSpec::default());
        cluster.set_conditions(vec![Condition {
            r#type: "Creating".to_string(),
            status: status.to_string(),
            ..Condition::default()
        }]);
        cluster
    }

    // ============================================================================
    // Messages
    // ============================================================================

    #[test]
    fn test_unexpected_message() {
        let cluster = cluster_with_creating("False");

        assert_eq!(
            unexpected_condition_status_error_message(&cluster, "Creating"),
            "Unexpected status for condition Creating, got False"
        );
    }

    #[test]
    fn test_unexpected_message_condition_not_set() {
        let cluster = Cluster::new("demo", ClusterSpec::default());

        assert_eq!(
            unexpected_condition_status_error_message(&cluster, "Creating"),
            "Unexpected status for condition Creating, got condition not set"
        );
    }

    #[test]
    fn test_unsupported_message() {
        let cluster = cluster_with_creating("Maybe");

        assert_eq!(
            unsupported_condition_status_error_message(&cluster, "Creating"),
            "Unsupported status for condition Creating, got Maybe"
        );
    }

    #[test]
    fn test_expected_messages() {
        let cluster = cluster_with_creating("Unknown");

        assert_eq!(
            expected_true_error_message(&cluster, "Creating"),
            "Expected that condition Creating on Object Cluster has status True, but got Unknown"
        );
        assert_eq!(
            expected_false_error_message(&cluster, "Creating"),
            "Expected that condition Creating on Object Cluster has status False, but got Unknown"
        );
        assert_eq!(
            expected_status_error_message(&cluster, "Upgrading", "True"),
            "Expected that condition Upgrading on Object Cluster has status True, but got condition not set"
        );
    }

    // ============================================================================
    // Constructors
    // ============================================================================

    #[test]
    fn test_constructors() {
        let cluster = cluster_with_creating("Maybe");

        let unexpected = unexpected_condition_status(&cluster, "Creating");
        assert_eq!(unexpected.kind(), "UnexpectedConditionStatus");
        assert_eq!(unexpected.condition_type(), "Creating");
        assert_eq!(
            unexpected.to_string(),
            "Unexpected status for condition Creating, got Maybe"
        );

        let unsupported = unsupported_condition_status(&cluster, "Creating");
        assert_eq!(unsupported.kind(), "UnsupportedConditionStatus");
        assert_eq!(
            unsupported.to_string(),
            "Unsupported status for condition Creating, got Maybe"
        );
    }

    #[test]
    fn test_expect_condition_status() {
        let cluster = cluster_with_creating("True");

        assert!(expect_condition_status(&cluster, "Creating", "True").is_ok());

        let err = expect_condition_status(&cluster, "Creating", "False").unwrap_err();
        assert_eq!(err.kind(), "UnexpectedConditionStatus");
        assert_eq!(
            err.to_string(),
            "Expected that condition Creating on Object Cluster has status False, but got True"
        );
    }

    #[test]
    fn test_check_condition_status() {
        assert!(check_condition_status(&cluster_with_creating("True"), "Creating").is_ok());
        assert!(check_condition_status(&cluster_with_creating("Unknown"), "Creating").is_ok());
        assert!(check_condition_status(
            &Cluster::new("demo", ClusterSpec::default()),
            "Creating"
        )
        .is_ok());

        let err = check_condition_status(&cluster_with_creating("Maybe"), "Creating").unwrap_err();
        assert_eq!(err, unsupported_condition_status(&cluster_with_creating("Maybe"), "Creating"));
    }

    // ============================================================================
    // Classification
    // ============================================================================

    #[test]
    fn test_classification_of_plain_errors() {
        let cluster = cluster_with_creating("Maybe");

        let unexpected = anyhow::Error::from(unexpected_condition_status(&cluster, "Creating"));
        assert!(is_unexpected_condition_status(&unexpected));
        assert!(!is_unsupported_condition_status(&unexpected));

        let unsupported = anyhow::Error::from(unsupported_condition_status(&cluster, "Creating"));
        assert!(is_unsupported_condition_status(&unsupported));
        assert!(!is_unexpected_condition_status(&unsupported));
    }

    #[test]
    fn test_classification_through_context() {
        let cluster = cluster_with_creating("False");

        let err = expect_condition_status(&cluster, "Creating", "True")
            .context("cluster demo is not being created")
            .context("reconcile failed")
            .unwrap_err();

        assert!(is_unexpected_condition_status(&err));
        assert!(!is_unsupported_condition_status(&err));
        assert_eq!(err.to_string(), "reconcile failed");
    }

    #[test]
    fn test_classification_of_unrelated_errors() {
        let err = anyhow!("connection refused");

        assert!(!is_unexpected_condition_status(&err));
        assert!(!is_unsupported_condition_status(&err));
    }
}
