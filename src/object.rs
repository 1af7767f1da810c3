// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The object capability consumed by the condition helpers.
//!
//! Every function in this crate operates on a resource through these traits rather
//! than on a concrete type, so the same helpers work for [`crate::crd::Cluster`],
//! [`crate::crd::MachinePool`] and any other resource whose status carries a
//! conditions list.
//!
//! - [`Getter`] - read access to the conditions plus the identity used in messages
//! - [`Setter`] - write access to the conditions
//! - [`Object`] - a [`Setter`] that also knows its namespace and creation time
//!
//! Kubernetes custom resources get all three through [`impl_condition_object!`].

use crate::crd::Condition;
use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Read access to the conditions of a resource.
///
/// This trait is object safe so that dependents of different kinds can be passed
/// together, e.g. as `&[&dyn Getter]` when aggregating node pools.
pub trait Getter {
    /// The conditions currently stored in the resource status.
    fn conditions(&self) -> &[Condition];

    /// Kind of the resource, e.g. `Cluster`.
    fn kind_name(&self) -> String;

    /// Name of the resource.
    fn object_name(&self) -> String;

    /// Reference used when localizing reasons, formatted as `Kind/name`.
    fn source_ref(&self) -> String {
        format!("{}/{}", self.kind_name(), self.object_name())
    }
}

/// Write access to the conditions of a resource.
pub trait Setter: Getter {
    /// Replace the conditions stored in the resource status.
    fn set_conditions(&mut self, conditions: Vec<Condition>);
}

/// A resource whose conditions can be read and written, with the metadata the
/// named conditions need to build their messages.
pub trait Object: Setter {
    /// Namespace of the resource, empty for cluster-scoped resources.
    fn object_namespace(&self) -> String;

    /// When the resource was created, if known.
    fn creation_timestamp(&self) -> Option<DateTime<Utc>>;

    /// `namespace/name` of the resource.
    fn namespaced_name(&self) -> String {
        format!("{}/{}", self.object_namespace(), self.object_name())
    }
}

/// Read the creation timestamp of an object, keeping sub-second precision.
#[must_use]
pub fn creation_time(meta: &ObjectMeta) -> Option<DateTime<Utc>> {
    let nanos = meta.creation_timestamp.as_ref()?.0.as_nanosecond();
    i64::try_from(nanos).ok().map(DateTime::from_timestamp_nanos)
}

/// Implement [`Getter`], [`Setter`] and [`Object`] for a custom resource.
///
/// The resource must be a `kube` custom resource with `DynamicType = ()` and an
/// `Option` status struct that implements `Default` and has a
/// `conditions: Vec<Condition>` field.
///
/// # Example
///
/// ```ignore
/// impl_condition_object!(Cluster);
/// ```
#[macro_export]
macro_rules! impl_condition_object {
    ($resource:ty) => {
        impl $crate::object::Getter for $resource {
            fn conditions(&self) -> &[$crate::crd::Condition] {
                match &self.status {
                    Some(status) => status.conditions.as_slice(),
                    None => &[],
                }
            }

            fn kind_name(&self) -> String {
                <$resource as ::kube::Resource>::kind(&()).to_string()
            }

            fn object_name(&self) -> String {
                ::kube::ResourceExt::name_any(self)
            }
        }

        impl $crate::object::Setter for $resource {
            fn set_conditions(&mut self, conditions: Vec<$crate::crd::Condition>) {
                self.status.get_or_insert_with(Default::default).conditions = conditions;
            }
        }

        impl $crate::object::Object for $resource {
            fn object_namespace(&self) -> String {
                ::kube::ResourceExt::namespace(self).unwrap_or_default()
            }

            fn creation_timestamp(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
                $crate::object::creation_time(::kube::Resource::meta(self))
            }
        }
    };
}

#[cfg(test)]
#[path = "object_tests.rs"]
mod object_tests;
