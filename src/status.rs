// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Condition list primitives.
//!
//! This module provides the in-memory operations every named condition is built
//! on: looking a condition up by type, setting it, and deriving it from other
//! objects by mirroring or aggregation.
//!
//! **Important:** None of these functions make Kubernetes API calls. They only
//! modify the in-memory conditions of the object; persisting the status is up to
//! the caller.
//!
//! # Ordering
//!
//! [`set`] keeps the conditions list sorted with `Ready` first and every other
//! type in lexicographic order, so the list renders the same way regardless of
//! the order conditions were set in.
//!
//! # Example
//!
//! ```rust
//! use cluster_conditions::crd::{Cluster, ClusterSpec, ConditionSeverity};
//! use cluster_conditions::status::{get, mark_false, mark_true};
//!
//! let mut cluster = Cluster::new("demo", ClusterSpec::default());
//! mark_true(&mut cluster, "Creating");
//! mark_false(
//!     &mut cluster,
//!     "Ready",
//!     "WaitingForInfrastructure",
//!     ConditionSeverity::Info,
//!     "Waiting for infrastructure",
//! );
//!
//! assert_eq!(get(&cluster, "Creating").unwrap().status, "True");
//! ```

use crate::check;
use crate::constants::{
    CONDITION_STATUS_FALSE, CONDITION_STATUS_TRUE, CONDITION_STATUS_UNKNOWN, CONDITION_TYPE_READY,
};
use crate::crd::{Condition, ConditionSeverity};
use crate::object::{Getter, Setter};
use crate::status_reasons::localize_reason;
use chrono::{SubsecRound, Utc};
use tracing::debug;

/// Find a condition by type on an object.
#[must_use]
pub fn get<'a, G: Getter + ?Sized>(object: &'a G, condition_type: &str) -> Option<&'a Condition> {
    object
        .conditions()
        .iter()
        .find(|c| c.r#type == condition_type)
}

/// Returns `true` if a condition of the given type is set on the object.
#[must_use]
pub fn has<G: Getter + ?Sized>(object: &G, condition_type: &str) -> bool {
    get(object, condition_type).is_some()
}

/// Checks if the condition of the given type is set with status `True`.
#[must_use]
pub fn is_true<G: Getter + ?Sized>(object: &G, condition_type: &str) -> bool {
    check::is_true(get(object, condition_type))
}

/// Checks if the condition of the given type is set with status `False`.
#[must_use]
pub fn is_false<G: Getter + ?Sized>(object: &G, condition_type: &str) -> bool {
    check::is_false(get(object, condition_type), &[])
}

/// Checks if the condition of the given type is not set or has status `Unknown`.
#[must_use]
pub fn is_unknown<G: Getter + ?Sized>(object: &G, condition_type: &str) -> bool {
    check::is_unknown(get(object, condition_type))
}

/// Create a condition with status `True`.
#[must_use]
pub fn true_condition(condition_type: &str) -> Condition {
    Condition {
        r#type: condition_type.to_string(),
        status: CONDITION_STATUS_TRUE.to_string(),
        ..Condition::default()
    }
}

/// Create a condition with status `False`.
#[must_use]
pub fn false_condition(
    condition_type: &str,
    reason: &str,
    severity: ConditionSeverity,
    message: &str,
) -> Condition {
    Condition {
        r#type: condition_type.to_string(),
        status: CONDITION_STATUS_FALSE.to_string(),
        severity,
        reason: reason.to_string(),
        message: message.to_string(),
        last_transition_time: None,
    }
}

/// Create a condition with status `Unknown`.
#[must_use]
pub fn unknown_condition(condition_type: &str, reason: &str, message: &str) -> Condition {
    Condition {
        r#type: condition_type.to_string(),
        status: CONDITION_STATUS_UNKNOWN.to_string(),
        reason: reason.to_string(),
        message: message.to_string(),
        ..Condition::default()
    }
}

fn has_same_state(a: &Condition, b: &Condition) -> bool {
    a.r#type == b.r#type
        && a.status == b.status
        && a.reason == b.reason
        && a.severity == b.severity
        && a.message == b.message
}

/// Update or add a condition on an object (in-memory, no API call).
///
/// The `lastTransitionTime` of an existing condition is preserved when nothing
/// but the timestamp would change. Otherwise it is set to the current time,
/// truncated to whole seconds. A new condition keeps a timestamp it already
/// carries, which is how mirrored conditions inherit the source's timestamp.
pub fn set<S: Setter + ?Sized>(object: &mut S, mut condition: Condition) {
    let mut conditions = object.conditions().to_vec();
    let now = Utc::now().trunc_subsecs(0);

    match conditions
        .iter()
        .position(|c| c.r#type == condition.r#type)
    {
        Some(index) => {
            if has_same_state(&conditions[index], &condition) {
                // Nothing to do, keep the original lastTransitionTime
                return;
            }
            condition.last_transition_time = Some(now);
            conditions[index] = condition.clone();
        }
        None => {
            if condition.last_transition_time.is_none() {
                condition.last_transition_time = Some(now);
            }
            conditions.push(condition.clone());
        }
    }

    conditions.sort_by(|a, b| {
        (a.r#type != CONDITION_TYPE_READY, &a.r#type)
            .cmp(&(b.r#type != CONDITION_TYPE_READY, &b.r#type))
    });

    debug!(
        "Set condition {} on {}: status={}, reason={}, severity={}",
        condition.r#type,
        object.source_ref(),
        condition.status,
        condition.reason,
        condition.severity
    );

    object.set_conditions(conditions);
}

/// Set the condition of the given type with status `True`.
pub fn mark_true<S: Setter + ?Sized>(object: &mut S, condition_type: &str) {
    set(object, true_condition(condition_type));
}

/// Set the condition of the given type with status `False`.
pub fn mark_false<S: Setter + ?Sized>(
    object: &mut S,
    condition_type: &str,
    reason: &str,
    severity: ConditionSeverity,
    message: &str,
) {
    set(
        object,
        false_condition(condition_type, reason, severity, message),
    );
}

/// Set the condition of the given type with status `Unknown`.
pub fn mark_unknown<S: Setter + ?Sized>(
    object: &mut S,
    condition_type: &str,
    reason: &str,
    message: &str,
) {
    set(object, unknown_condition(condition_type, reason, message));
}

/// Remove the condition of the given type from the object.
pub fn delete<S: Setter + ?Sized>(object: &mut S, condition_type: &str) {
    if !has(object, condition_type) {
        return;
    }

    let conditions = object
        .conditions()
        .iter()
        .filter(|c| c.r#type != condition_type)
        .cloned()
        .collect();

    debug!(
        "Deleted condition {} from {}",
        condition_type,
        object.source_ref()
    );

    object.set_conditions(conditions);
}

/// Condition used by [`set_mirror`] when the source has no Ready condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackValue {
    pub status: bool,
    pub reason: String,
    pub severity: ConditionSeverity,
    pub message: String,
}

/// Build a [`FallbackValue`].
///
/// Reason, severity and message are only used when `status` is `false`.
#[must_use]
pub fn with_fallback_value(
    status: bool,
    reason: &str,
    severity: ConditionSeverity,
    message: &str,
) -> FallbackValue {
    FallbackValue {
        status,
        reason: reason.to_string(),
        severity,
        message: message.to_string(),
    }
}

fn mirror<G: Getter + ?Sized>(
    source: &G,
    target_type: &str,
    fallback: Option<&FallbackValue>,
) -> Option<Condition> {
    let mirrored = match (get(source, CONDITION_TYPE_READY), fallback) {
        (Some(ready), _) => ready.clone(),
        (None, Some(fallback)) if fallback.status => true_condition(target_type),
        (None, Some(fallback)) => false_condition(
            target_type,
            &fallback.reason,
            fallback.severity,
            &fallback.message,
        ),
        (None, None) => return None,
    };

    Some(Condition {
        r#type: target_type.to_string(),
        ..mirrored
    })
}

/// Set a condition on `object` by copying the Ready condition of `source`.
///
/// Status, reason, severity and message are copied verbatim under
/// `target_type`. When the source has no Ready condition the fallback is used;
/// without a fallback the object is left untouched.
pub fn set_mirror<S, G>(
    object: &mut S,
    target_type: &str,
    source: &G,
    fallback: Option<FallbackValue>,
) where
    S: Setter + ?Sized,
    G: Getter + ?Sized,
{
    match mirror(source, target_type, fallback.as_ref()) {
        Some(condition) => set(object, condition),
        None => debug!(
            "Not mirroring {} onto {}: {} has no Ready condition",
            target_type,
            object.source_ref(),
            source.source_ref()
        ),
    }
}

/// Options for [`set_aggregate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Report `<n> of <total> completed` as message instead of the first message.
    pub step_counter: bool,
    /// Suffix the reason with ` @ Kind/name` of the object it was taken from.
    pub add_source_ref: bool,
}

impl MergeOptions {
    /// Enable the step counter message.
    #[must_use]
    pub fn with_step_counter(mut self) -> Self {
        self.step_counter = true;
        self
    }

    /// Enable source references on the reason.
    #[must_use]
    pub fn add_source_ref(mut self) -> Self {
        self.add_source_ref = true;
        self
    }
}

/// Conditions sharing the same status and severity.
struct ConditionGroup<'a> {
    status: &'a str,
    severity: ConditionSeverity,
    conditions: Vec<(&'a Condition, &'a dyn Getter)>,
}

impl ConditionGroup<'_> {
    /// Lower values win when picking the group that decides the merged status.
    fn merge_priority(&self) -> u8 {
        match (self.status, self.severity) {
            (CONDITION_STATUS_FALSE, ConditionSeverity::Error) => 0,
            (CONDITION_STATUS_FALSE, ConditionSeverity::Warning) => 1,
            (CONDITION_STATUS_FALSE, ConditionSeverity::Info) => 2,
            (CONDITION_STATUS_FALSE, ConditionSeverity::None) => 3,
            (CONDITION_STATUS_TRUE, _) => 4,
            (CONDITION_STATUS_UNKNOWN, _) => 5,
            _ => u8::MAX,
        }
    }
}

fn group_conditions<'a>(sources: &[&'a dyn Getter]) -> Vec<ConditionGroup<'a>> {
    let mut groups: Vec<ConditionGroup<'a>> = Vec::new();

    for &source in sources {
        let Some(ready) = get(source, CONDITION_TYPE_READY) else {
            continue;
        };

        match groups
            .iter_mut()
            .find(|g| g.status == ready.status && g.severity == ready.severity)
        {
            Some(group) => group.conditions.push((ready, source)),
            None => groups.push(ConditionGroup {
                status: ready.status.as_str(),
                severity: ready.severity,
                conditions: vec![(ready, source)],
            }),
        }
    }

    groups.sort_by_key(|g| g.merge_priority());
    groups
}

fn merge(
    sources: &[&dyn Getter],
    target_type: &str,
    options: &MergeOptions,
) -> Option<Condition> {
    let groups = group_conditions(sources);
    let top_group = groups.first()?;
    let (first, first_source) = top_group.conditions.first()?;

    if top_group.status == CONDITION_STATUS_TRUE {
        return Some(true_condition(target_type));
    }

    let reason = if options.add_source_ref && !first.reason.is_empty() {
        localize_reason(&first.reason, &first_source.source_ref())
    } else {
        first.reason.clone()
    };

    let message = if options.step_counter {
        let completed: usize = groups
            .iter()
            .filter(|g| g.status == CONDITION_STATUS_TRUE)
            .map(|g| g.conditions.len())
            .sum();
        format!("{completed} of {} completed", sources.len())
    } else {
        first.message.clone()
    };

    if top_group.status == CONDITION_STATUS_FALSE {
        return Some(false_condition(
            target_type,
            &reason,
            top_group.severity,
            &message,
        ));
    }

    Some(unknown_condition(target_type, &reason, &message))
}

/// Set a condition on `object` by aggregating the Ready conditions of `sources`.
///
/// Source Ready conditions are grouped by status and severity. The group with the
/// highest priority decides the result, in this order: False/Error,
/// False/Warning, False/Info, False without severity, True, Unknown. Sources
/// without a Ready condition are skipped; if none of them has one, the object is
/// left untouched.
pub fn set_aggregate<S: Setter + ?Sized>(
    object: &mut S,
    target_type: &str,
    sources: &[&dyn Getter],
    options: MergeOptions,
) {
    match merge(sources, target_type, &options) {
        Some(condition) => set(object, condition),
        None => debug!(
            "Not aggregating {} onto {}: none of {} source(s) has a Ready condition",
            target_type,
            object.source_ref(),
            sources.len()
        ),
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
