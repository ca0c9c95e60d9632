// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed configuration layer for declaratively wired service components.
//!
//! Services declare their configuration fields — key, primitive type,
//! optional default — as metadata. At read time the value is resolved through
//! a pluggable resolver (an in-memory map, a snapshot of the process
//! environment) and returned coerced into the declared type.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`ConfigKey`,
//!   `SupportedType` coercion, declarations and the declaration registry,
//!   errors)
//! - **Ports**: The `ConfigResolver` trait — raw lookup plus derived typed
//!   operations
//! - **Adapters**: Resolver implementations (`MapResolver`, `EnvResolver`)
//! - **Service**: The composition container, lazy field bindings, and
//!   aggregate introspection
//!
//! # Semantics worth knowing
//!
//! - Field reads are never cached: every read goes back to the resolver
//!   currently bound in the container.
//! - Boolean coercion is exact: only the literal `"true"` reads as true;
//!   everything else, `"false"` included, reads as false.
//! - A present but uncoercible value is treated as absent (default, then a
//!   missing-configuration error) — a debug-level trace event records the
//!   failed coercion.
//! - Declaration problems (unsupported type names, empty keys, mistyped
//!   wiring) fail during wiring, not on first access.
//!
//! # Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use wirecfg::prelude::*;
//!
//! struct Server {
//!     host: ConfigField<String>,
//!     port: ConfigField<f64>,
//! }
//!
//! impl Service for Server {
//!     fn spec() -> ServiceSpec {
//!         ServiceSpec::new::<Server>()
//!             .field(FieldSpec::text("HOST").with_default("127.0.0.1"))
//!             .field(FieldSpec::number("PORT"))
//!     }
//!
//!     fn construct(scope: &Scope) -> Result<Self> {
//!         Ok(Server {
//!             host: scope.field("HOST")?,
//!             port: scope.field("PORT")?,
//!         })
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let container = Container::new();
//! container.register::<Server>()?;
//! container.bind_resolver(Rc::new(MapResolver::new([("PORT", Some("8080"))])));
//!
//! let server = container.resolve::<Server>()?;
//! assert_eq!(server.host.get()?, "127.0.0.1"); // from the default
//! assert_eq!(server.port.get()?, 8080.0);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::adapters::{EnvResolver, MapResolver};
    pub use crate::domain::{
        ConfigError, ConfigFieldDeclaration, ConfigKey, ConfigScalar, ConfigValue,
        DeclarationRegistry, FieldSpec, Result, ServiceId, ServiceSpec, SupportedType,
    };
    pub use crate::ports::ConfigResolver;
    pub use crate::service::{
        collect_all, Binding, BindingKind, ConfigField, Container, Scope, Service,
    };
}
