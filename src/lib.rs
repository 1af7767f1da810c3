// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#![allow(unexpected_cfgs)]

//! # Cluster Conditions - status condition helpers for Kubernetes
//!
//! This crate provides helpers for reading and writing Cluster API style status
//! conditions on Kubernetes custom resources: a list of typed, timestamped
//! `True`/`False`/`Unknown` states with reason, severity and message, used by
//! controllers to report progress and to pass state from a resource to the
//! resources that depend on it.
//!
//! ## Overview
//!
//! - Predicates over a single condition, with reason and severity checks
//! - In-memory condition list operations: set, mark, mirror, aggregate
//! - Named conditions (`Creating`, `Upgrading`, `ControlPlaneReady`,
//!   `InfrastructureReady`, `NodePoolsReady`, `ReplicasReady`, `Ready`) with canned
//!   reasons and messages
//! - Typed errors for unexpected and unsupported condition statuses
//!
//! ## Modules
//!
//! - [`check`] - Predicates over a single condition
//! - [`status`] - Condition list primitives (get, set, mirror, aggregate)
//! - [`conditions`] - Named conditions
//! - [`errors`] - Condition status errors
//! - [`object`] - The object capability consumed by all helpers
//! - [`crd`] - Condition types and custom resources
//!
//! ## Example
//!
//! ```rust
//! use cluster_conditions::conditions::{
//!     is_creating_false, is_creating_true, mark_creating_false_with_creation_completed,
//!     mark_creating_true, with_creation_completed_reason,
//! };
//! use cluster_conditions::crd::{Cluster, ClusterSpec};
//!
//! let mut cluster = Cluster::new("demo", ClusterSpec::default());
//!
//! mark_creating_true(&mut cluster);
//! assert!(is_creating_true(&cluster));
//!
//! mark_creating_false_with_creation_completed(&mut cluster);
//! assert!(is_creating_false(&cluster, &[with_creation_completed_reason()]));
//! ```
//!
//! None of the helpers call the Kubernetes API. They change the in-memory object,
//! and persisting its status is left to the caller's reconciliation loop.

pub mod check;
pub mod conditions;
pub mod constants;
pub mod crd;
pub mod duration;
pub mod errors;
pub mod object;
pub mod status;
pub mod status_reasons;
pub mod telemetry;
pub mod testutil;
