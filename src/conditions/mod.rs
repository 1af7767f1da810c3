// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Named conditions.
//!
//! Each submodule wraps one condition type with typed accessors, check options for
//! its reasons, and the mutators controllers use to set it.
//!
//! - [`creating`] - `Creating`, set while an object is being created
//! - [`upgrading`] - `Upgrading`, set while an object is being upgraded
//! - [`control_plane_ready`] - `ControlPlaneReady`, mirrored from the control plane object
//! - [`infrastructure_ready`] - `InfrastructureReady`, mirrored from the infrastructure object
//! - [`node_pools_ready`] - `NodePoolsReady`, aggregated from all node pools
//! - [`replicas_ready`] - `ReplicasReady`, reported by machine pools
//! - [`ready`] - `Ready`, the summary condition of every object

pub mod control_plane_ready;
pub mod creating;
pub mod infrastructure_ready;
pub mod node_pools_ready;
pub mod ready;
pub mod replicas_ready;
pub mod upgrading;

pub use control_plane_ready::*;
pub use creating::*;
pub use infrastructure_ready::*;
pub use node_pools_ready::*;
pub use ready::*;
pub use replicas_ready::*;
pub use upgrading::*;

use crate::check::{self, CheckOption};
use crate::crd::ConditionSeverity;
use crate::duration::{elapsed_since, format_duration};
use crate::object::{Getter, Object};
use crate::status::{self, get, with_fallback_value};
use std::time::Duration;
use tracing::debug;

/// Checks if the condition of the given type is set with status `False` and every
/// additional check passes.
fn is_condition_false<G: Getter + ?Sized>(
    object: &G,
    condition_type: &str,
    check_options: &[CheckOption],
) -> bool {
    check::is_false(get(object, condition_type), check_options)
}

/// How a condition mirrored from a dependent object falls back when the dependent
/// cannot provide a Ready condition.
struct MirrorPolicy {
    condition_type: &'static str,
    /// Used in messages, e.g. "control plane".
    dependent: &'static str,
    /// Subject of the not-found message.
    not_found_subject: &'static str,
    not_found_reason: &'static str,
    fallback_reason: &'static str,
    warning_threshold: Duration,
}

/// Severity and message suffix used while a dependent has not reported Ready.
///
/// Info while `age` is at most `threshold`, Warning with ` for more than <age>`
/// afterwards. An unknown age counts as past the threshold.
fn fallback_severity(age: Option<Duration>, threshold: Duration) -> (ConditionSeverity, String) {
    match age {
        // The dependent should report Ready soon after creation, so a brief
        // absence is expected
        Some(age) if age <= threshold => (ConditionSeverity::Info, String::new()),
        Some(age) => (
            ConditionSeverity::Warning,
            format!(" for more than {}", format_duration(age)),
        ),
        None => (ConditionSeverity::Warning, String::new()),
    }
}

/// Mirror the Ready condition of `dependent` onto `object` following `policy`.
///
/// - no dependent: False, severity Warning, the not-found reason
/// - dependent without Ready: False with the fallback reason, severity Info while
///   `object` is younger than the threshold and Warning afterwards
/// - dependent with Ready: copied verbatim
fn reconcile_mirrored<O: Object + ?Sized>(
    object: &mut O,
    dependent: Option<&dyn Getter>,
    policy: &MirrorPolicy,
) {
    let Some(dependent) = dependent else {
        debug!(
            "No {} object found for {}, setting {} to False",
            policy.dependent,
            object.source_ref(),
            policy.condition_type
        );
        let message = format!(
            "{} is not found for specified {} object {}",
            policy.not_found_subject,
            object.kind_name(),
            object.namespaced_name()
        );
        status::mark_false(
            object,
            policy.condition_type,
            policy.not_found_reason,
            ConditionSeverity::Warning,
            &message,
        );
        return;
    };

    let age = object.creation_timestamp().map(elapsed_since);
    let (severity, age_suffix) = fallback_severity(age, policy.warning_threshold);

    let fallback_to_false = with_fallback_value(
        false,
        policy.fallback_reason,
        severity,
        &format!(
            "Waiting for {} object of type {} to have Ready condition set{}",
            policy.dependent,
            dependent.kind_name(),
            age_suffix
        ),
    );

    status::set_mirror(
        object,
        policy.condition_type,
        dependent,
        Some(fallback_to_false),
    );
}

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
mod replicas_ready_tests;
