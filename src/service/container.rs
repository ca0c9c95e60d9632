// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal composition container for wiring services to configuration.
//!
//! The container plays the composition-root role the rest of the crate hangs
//! off: it registers service types (recording their configuration
//! declarations as a side effect), holds the constant
//! [`ConfigResolver`](crate::ports::ConfigResolver) binding, constructs
//! service instances on demand, and enumerates its bindings for
//! introspection.
//!
//! Everything here is single-threaded and synchronous: wiring happens once at
//! startup and resolution is pure in-memory lookup, so the container uses
//! `Rc`/`RefCell` rather than locking.

use crate::domain::{ConfigError, DeclarationRegistry, Result, ServiceId, ServiceSpec};
use crate::ports::ConfigResolver;
use crate::service::field::{ConfigField, ConfigPrimitive};
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// A constructible component with declared configuration fields.
///
/// Implementors describe their configuration via [`Service::spec`] (consumed
/// at registration time) and build themselves from a [`Scope`] handed over by
/// the container at resolution time.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::{FieldSpec, Result, ServiceSpec};
/// use wirecfg::service::{ConfigField, Scope, Service};
///
/// struct Greeter {
///     greeting: ConfigField<String>,
/// }
///
/// impl Service for Greeter {
///     fn spec() -> ServiceSpec {
///         ServiceSpec::new::<Greeter>()
///             .field(FieldSpec::text("GREETING").with_default("hello"))
///     }
///
///     fn construct(scope: &Scope) -> Result<Self> {
///         Ok(Greeter {
///             greeting: scope.field("GREETING")?,
///         })
///     }
/// }
/// ```
pub trait Service: Any {
    /// Returns the declaration metadata for this service type.
    fn spec() -> ServiceSpec
    where
        Self: Sized;

    /// Builds an instance inside a container scope.
    ///
    /// Wiring errors (undeclared fields, type mismatches) surface here,
    /// during construction, not on first field read.
    fn construct(scope: &Scope) -> Result<Self>
    where
        Self: Sized;
}

/// Whether a binding is a constructible service or a fixed constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingKind {
    /// A constructible service type.
    Service,
    /// A fixed instance, such as the bound resolver.
    Constant,
}

/// One registered binding, as reported by [`Container::bindings`].
#[derive(Clone, Copy, Debug)]
pub struct Binding {
    /// The bound type's identity token.
    pub id: ServiceId,
    /// Whether this is a service or a constant binding.
    pub kind: BindingKind,
}

type Constructor = Rc<dyn Fn(&Scope) -> Result<Rc<dyn Any>>>;

struct BindingEntry {
    id: ServiceId,
    kind: BindingKind,
    ctor: Option<Constructor>,
}

pub(crate) struct ContainerInner {
    registry: Rc<DeclarationRegistry>,
    bindings: RefCell<Vec<BindingEntry>>,
    instances: RefCell<HashMap<TypeId, Rc<dyn Any>>>,
    resolver: RefCell<Option<Rc<dyn ConfigResolver>>>,
}

impl ContainerInner {
    pub(crate) fn registry(&self) -> &DeclarationRegistry {
        &self.registry
    }

    pub(crate) fn resolver(&self) -> Option<Rc<dyn ConfigResolver>> {
        self.resolver.borrow().clone()
    }
}

/// The composition container.
///
/// Owns the declaration registry, the service and constant bindings, and the
/// cache of constructed instances. Instances constructed by the container
/// keep a weak reference back to it, which is how field bindings find the
/// active resolver at read time.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use wirecfg::adapters::MapResolver;
/// use wirecfg::domain::{FieldSpec, Result, ServiceSpec};
/// use wirecfg::service::{ConfigField, Container, Scope, Service};
///
/// struct Greeter {
///     greeting: ConfigField<String>,
/// }
///
/// impl Service for Greeter {
///     fn spec() -> ServiceSpec {
///         ServiceSpec::new::<Greeter>().field(FieldSpec::text("GREETING"))
///     }
///
///     fn construct(scope: &Scope) -> Result<Self> {
///         Ok(Greeter {
///             greeting: scope.field("GREETING")?,
///         })
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let container = Container::new();
/// container.register::<Greeter>()?;
/// container.bind_resolver(Rc::new(MapResolver::new([("GREETING", Some("hi"))])));
///
/// let greeter = container.resolve::<Greeter>()?;
/// assert_eq!(greeter.greeting.get()?, "hi");
/// # Ok(())
/// # }
/// ```
pub struct Container {
    inner: Rc<ContainerInner>,
}

impl Container {
    /// Creates a container with its own empty declaration registry.
    pub fn new() -> Self {
        Self::with_registry(Rc::new(DeclarationRegistry::new()))
    }

    /// Creates a container over an existing declaration registry.
    ///
    /// Lets several containers (or standalone tooling) share one set of
    /// declarations.
    pub fn with_registry(registry: Rc<DeclarationRegistry>) -> Self {
        Container {
            inner: Rc::new(ContainerInner {
                registry,
                bindings: RefCell::new(Vec::new()),
                instances: RefCell::new(HashMap::new()),
                resolver: RefCell::new(None),
            }),
        }
    }

    /// Registers a service type.
    ///
    /// Records a service binding and registers the type's configuration
    /// declarations (including any ancestors from
    /// [`ServiceSpec::extends`](crate::domain::ServiceSpec::extends)).
    /// Registering the same type again is a no-op.
    pub fn register<S: Service>(&self) -> Result<()> {
        let spec = S::spec();
        self.inner.registry.register(&spec)?;

        let mut bindings = self.inner.bindings.borrow_mut();
        if bindings.iter().any(|b| b.id == spec.id()) {
            return Ok(());
        }

        tracing::debug!(service = spec.id().short_name(), "registered service");
        let ctor: Constructor =
            Rc::new(|scope| Ok(Rc::new(S::construct(scope)?) as Rc<dyn Any>));
        bindings.push(BindingEntry {
            id: spec.id(),
            kind: BindingKind::Service,
            ctor: Some(ctor),
        });
        Ok(())
    }

    /// Binds a resolver instance as the container's configuration source.
    ///
    /// This is the constant binding field reads go through. Binding again
    /// replaces the previous resolver; subsequent reads see the new one
    /// (reads are never cached).
    pub fn bind_resolver(&self, resolver: Rc<dyn ConfigResolver>) {
        tracing::debug!(resolver = resolver.name(), "bound configuration resolver");
        let mut bindings = self.inner.bindings.borrow_mut();
        let id = ServiceId::of::<dyn ConfigResolver>();
        if !bindings.iter().any(|b| b.id == id) {
            bindings.push(BindingEntry {
                id,
                kind: BindingKind::Constant,
                ctor: None,
            });
        }
        *self.inner.resolver.borrow_mut() = Some(resolver);
    }

    /// Returns the currently bound resolver, if any.
    pub fn resolver(&self) -> Option<Rc<dyn ConfigResolver>> {
        self.inner.resolver()
    }

    /// Resolves (constructing on first use) a registered service instance.
    ///
    /// Instances are cached: later calls return the same `Rc`. Fails with
    /// [`ConfigError::ServiceNotRegistered`] for unregistered types and
    /// propagates any wiring error from the service's `construct`.
    pub fn resolve<S: Service>(&self) -> Result<Rc<S>> {
        let type_id = TypeId::of::<S>();
        if let Some(existing) = self.inner.instances.borrow().get(&type_id) {
            if let Ok(instance) = existing.clone().downcast::<S>() {
                return Ok(instance);
            }
        }

        let id = ServiceId::of::<S>();
        let ctor = {
            let bindings = self.inner.bindings.borrow();
            bindings
                .iter()
                .find(|b| b.id == id && b.kind == BindingKind::Service)
                .and_then(|b| b.ctor.clone())
        };
        let ctor = ctor.ok_or_else(|| ConfigError::ServiceNotRegistered {
            service: id.short_name().to_string(),
        })?;

        let scope = Scope {
            container: Rc::downgrade(&self.inner),
            service: id,
        };
        let instance = ctor(&scope)?;
        self.inner
            .instances
            .borrow_mut()
            .insert(type_id, instance.clone());

        instance
            .downcast::<S>()
            .map_err(|_| ConfigError::ServiceNotRegistered {
                service: id.short_name().to_string(),
            })
    }

    /// Enumerates all bindings, in registration order.
    pub fn bindings(&self) -> Vec<Binding> {
        self.inner
            .bindings
            .borrow()
            .iter()
            .map(|b| Binding {
                id: b.id,
                kind: b.kind,
            })
            .collect()
    }

    /// Returns the container's declaration registry.
    pub fn registry(&self) -> Rc<DeclarationRegistry> {
        self.inner.registry.clone()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// A service instance's view of the container that is constructing it.
///
/// Handed to [`Service::construct`]; its only job is to mint connected
/// [`ConfigField`] bindings for the service's declared fields.
pub struct Scope {
    container: Weak<ContainerInner>,
    service: ServiceId,
}

impl Scope {
    /// Returns the service type this scope belongs to.
    pub fn service(&self) -> ServiceId {
        self.service
    }

    /// Wires a configuration field for a declared key.
    ///
    /// Looks the declaration up ancestor-aware and checks that the declared
    /// type matches `T`, so a mistyped wiring fails here rather than on first
    /// read. Fails with [`ConfigError::UndeclaredField`] for keys the service
    /// (and its ancestors) never declared.
    pub fn field<T: ConfigPrimitive>(&self, key: impl Into<String>) -> Result<ConfigField<T>> {
        let key = key.into();
        let inner = self
            .container
            .upgrade()
            .ok_or_else(|| ConfigError::NotConnected {
                service: self.service.short_name().to_string(),
            })?;

        let declaration = inner
            .registry()
            .declaration(self.service, &key)
            .ok_or_else(|| ConfigError::UndeclaredField {
                service: self.service.short_name().to_string(),
                key: key.clone(),
            })?;

        if declaration.value_type() != T::VALUE_TYPE {
            return Err(ConfigError::TypeMismatch {
                key,
                declared: declaration.value_type(),
                requested: T::VALUE_TYPE,
            });
        }

        Ok(ConfigField::connected(declaration, self.container.clone()))
    }
}
