// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: container wiring, field bindings, and introspection.
//!
//! This module contains the composition container that wires services to
//! their configuration, the lazy [`ConfigField`] bindings installed during
//! construction, and the [`collect_all`] aggregate introspection entry point.

pub mod container;
pub mod field;
pub mod introspect;

// Re-export commonly used types
pub use container::{Binding, BindingKind, Container, Scope, Service};
pub use field::{ConfigField, ConfigPrimitive};
pub use introspect::collect_all;
