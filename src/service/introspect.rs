// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregate introspection over a container's configuration declarations.
//!
//! Reporting and startup-validation tooling want one answer to "what
//! configuration does this whole application consume?". [`collect_all`]
//! produces it by walking a container's service bindings and pulling each
//! one's declarations (own plus inherited) from the registry.

use crate::domain::ConfigFieldDeclaration;
use crate::service::container::{BindingKind, Container};

/// Collects every configuration declaration across a container.
///
/// Walks the container's service bindings (constant bindings carry no
/// declarations and are excluded), concatenates the declarations of each
/// service and its ancestors, and returns them sorted ascending by key. The
/// sort is stable, so declarations sharing a key keep their encounter order.
/// Duplicate keys are kept: declarations with the same key on different
/// services are independent and a report should show both.
///
/// Purely observational — calling this has no effect on resolution.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::{FieldSpec, Result, ServiceSpec};
/// use wirecfg::service::{collect_all, ConfigField, Container, Scope, Service};
///
/// struct Api {
///     port: ConfigField<f64>,
/// }
///
/// impl Service for Api {
///     fn spec() -> ServiceSpec {
///         ServiceSpec::new::<Api>().field(FieldSpec::number("PORT"))
///     }
///
///     fn construct(scope: &Scope) -> Result<Self> {
///         Ok(Api { port: scope.field("PORT")? })
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let container = Container::new();
/// container.register::<Api>()?;
///
/// let declarations = collect_all(&container);
/// assert_eq!(declarations.len(), 1);
/// assert_eq!(declarations[0].key().as_str(), "PORT");
/// # Ok(())
/// # }
/// ```
pub fn collect_all(container: &Container) -> Vec<ConfigFieldDeclaration> {
    let registry = container.registry();
    let mut declarations = Vec::new();
    for binding in container.bindings() {
        if binding.kind == BindingKind::Service {
            declarations.extend(registry.declarations_for(binding.id));
        }
    }
    declarations.sort_by(|a, b| a.key().as_str().cmp(b.key().as_str()));
    declarations
}
