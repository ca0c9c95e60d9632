// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration field declarations and the per-service declaration registry.
//!
//! Services declare their configuration fields once, as metadata, through a
//! [`ServiceSpec`]. The [`DeclarationRegistry`] stores that metadata keyed by
//! service type, with an explicit parent link standing in for class
//! inheritance: querying a service returns its own declarations plus those of
//! every ancestor.

use crate::domain::config_key::ConfigKey;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::scalar::SupportedType;
use serde::ser::Serializer;
use serde::Serialize;
use std::any::TypeId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// A token identifying a service type.
///
/// Wraps the type's `TypeId` (identity) together with its type name (for
/// error messages and reports). Equality and hashing use the `TypeId` only.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::declaration::ServiceId;
///
/// struct Worker;
///
/// let id = ServiceId::of::<Worker>();
/// assert_eq!(id, ServiceId::of::<Worker>());
/// assert_eq!(id.short_name(), "Worker");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ServiceId {
    type_id: TypeId,
    name: &'static str,
}

impl ServiceId {
    /// Returns the `ServiceId` for a type.
    pub fn of<T: 'static + ?Sized>() -> Self {
        ServiceId {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the underlying `TypeId`.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full type name, including the module path.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type name without its module path.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for ServiceId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ServiceId {}

impl std::hash::Hash for ServiceId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl Serialize for ServiceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_name())
    }
}

/// One configuration field as declared by a service spec.
///
/// Holds the key, the declared type, and an optional default in raw string
/// form. The default is stringified when the spec is built, so it re-enters
/// the normal coercion path on use (`42` becomes `"42"`, `true` becomes
/// `"true"`).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    key: ConfigKey,
    value_type: SupportedType,
    default_value: Option<String>,
}

impl FieldSpec {
    /// Creates a field spec for the given key and type, with no default.
    pub fn new(key: impl Into<ConfigKey>, value_type: SupportedType) -> Self {
        FieldSpec {
            key: key.into(),
            value_type,
            default_value: None,
        }
    }

    /// Creates a text field spec.
    pub fn text(key: impl Into<ConfigKey>) -> Self {
        Self::new(key, SupportedType::Text)
    }

    /// Creates a number field spec.
    pub fn number(key: impl Into<ConfigKey>) -> Self {
        Self::new(key, SupportedType::Number)
    }

    /// Creates a boolean field spec.
    pub fn boolean(key: impl Into<ConfigKey>) -> Self {
        Self::new(key, SupportedType::Boolean)
    }

    /// Creates a field spec from a textual type name.
    ///
    /// Fails with [`ConfigError::UnsupportedType`] for anything outside
    /// `text` / `number` / `boolean`. This is the entry point for metadata
    /// that arrives untyped, keeping the unsupported-type check at
    /// declaration time.
    ///
    /// # Examples
    ///
    /// ```
    /// use wirecfg::domain::declaration::FieldSpec;
    ///
    /// let field = FieldSpec::with_type_name("PORT", "number").unwrap();
    /// assert!(FieldSpec::with_type_name("PORT", "duration").is_err());
    /// # let _ = field;
    /// ```
    pub fn with_type_name(key: impl Into<ConfigKey>, type_name: &str) -> Result<Self> {
        Ok(Self::new(key, SupportedType::from_name(type_name)?))
    }

    /// Attaches a default value, stringified.
    pub fn with_default(mut self, default: impl ToString) -> Self {
        self.default_value = Some(default.to_string());
        self
    }

    /// Returns the field's key.
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// Returns the field's declared type.
    pub fn value_type(&self) -> SupportedType {
        self.value_type
    }

    /// Returns the field's default value, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// Declaration metadata for a service type: its configuration fields and an
/// optional parent spec.
///
/// The parent link is the explicit stand-in for class inheritance: fields
/// declared on an ancestor are visible when querying any of its descendants.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::declaration::{FieldSpec, ServiceSpec};
///
/// struct Base;
/// struct Worker;
///
/// let spec = ServiceSpec::new::<Worker>()
///     .field(FieldSpec::number("PORT").with_default(8080))
///     .extends(ServiceSpec::new::<Base>().field(FieldSpec::text("LOG_LEVEL")));
/// # let _ = spec;
/// ```
#[derive(Clone, Debug)]
pub struct ServiceSpec {
    id: ServiceId,
    parent: Option<Box<ServiceSpec>>,
    fields: Vec<FieldSpec>,
}

impl ServiceSpec {
    /// Creates an empty spec for a service type.
    pub fn new<S: 'static>() -> Self {
        ServiceSpec {
            id: ServiceId::of::<S>(),
            parent: None,
            fields: Vec::new(),
        }
    }

    /// Adds a configuration field declaration.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets the parent spec this service inherits declarations from.
    pub fn extends(mut self, parent: ServiceSpec) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Returns the service's identity token.
    pub fn id(&self) -> ServiceId {
        self.id
    }

    /// Returns the parent spec, if any.
    pub fn parent(&self) -> Option<&ServiceSpec> {
        self.parent.as_deref()
    }

    /// Returns the declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// A registered configuration field declaration.
///
/// Immutable once created. Serializable so introspection output can feed
/// documentation or startup-validation tooling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigFieldDeclaration {
    key: ConfigKey,
    value_type: SupportedType,
    default_value: Option<String>,
    owner: ServiceId,
}

impl ConfigFieldDeclaration {
    pub(crate) fn from_spec(field: &FieldSpec, owner: ServiceId) -> Self {
        ConfigFieldDeclaration {
            key: field.key().clone(),
            value_type: field.value_type(),
            default_value: field.default_value().map(str::to_string),
            owner,
        }
    }

    /// Returns the declared key.
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// Returns the declared type.
    pub fn value_type(&self) -> SupportedType {
        self.value_type
    }

    /// Returns the raw default value, if one was declared.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Returns the service type that declared this field.
    pub fn owner(&self) -> ServiceId {
        self.owner
    }
}

#[derive(Debug)]
struct ServiceEntry {
    parent: Option<ServiceId>,
    declarations: Vec<ConfigFieldDeclaration>,
}

/// Storage for configuration field declarations, keyed by service type.
///
/// Populated once per service type during wiring and read many times after.
/// Not a process-wide singleton: the registry is owned by (and injectable
/// into) a container, so independent containers can carry independent
/// declaration sets.
///
/// Interior mutability uses `RefCell`: declaration happens during
/// single-threaded wiring, before any resolution, and reads never mutate.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::declaration::{DeclarationRegistry, FieldSpec, ServiceId, ServiceSpec};
///
/// struct Worker;
///
/// let registry = DeclarationRegistry::new();
/// registry
///     .register(&ServiceSpec::new::<Worker>().field(FieldSpec::text("NAME")))
///     .unwrap();
///
/// let declarations = registry.declarations_for(ServiceId::of::<Worker>());
/// assert_eq!(declarations.len(), 1);
/// assert_eq!(declarations[0].key().as_str(), "NAME");
/// ```
#[derive(Debug, Default)]
pub struct DeclarationRegistry {
    services: RefCell<HashMap<TypeId, ServiceEntry>>,
}

impl DeclarationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a service spec and, transitively, its ancestors.
    ///
    /// Each hierarchy level is recorded under its own [`ServiceId`] with a
    /// link to its parent. Registration is idempotent per service type, so a
    /// shared ancestor reached through two subtypes is recorded once.
    ///
    /// Fails with [`ConfigError::EmptyKey`] if any field declares an empty
    /// key. The failure is raised here, at declaration time, so bad metadata
    /// surfaces during wiring rather than on first field access.
    pub fn register(&self, spec: &ServiceSpec) -> Result<()> {
        let mut current = Some(spec);
        while let Some(level) = current {
            self.register_level(level)?;
            current = level.parent();
        }
        Ok(())
    }

    fn register_level(&self, spec: &ServiceSpec) -> Result<()> {
        let mut services = self.services.borrow_mut();
        if services.contains_key(&spec.id().type_id()) {
            return Ok(());
        }

        let mut declarations = Vec::with_capacity(spec.fields().len());
        for field in spec.fields() {
            if field.key().as_str().is_empty() {
                return Err(ConfigError::EmptyKey {
                    service: spec.id().short_name().to_string(),
                });
            }
            declarations.push(ConfigFieldDeclaration::from_spec(field, spec.id()));
        }

        tracing::debug!(
            service = spec.id().short_name(),
            fields = declarations.len(),
            "registered configuration declarations"
        );

        services.insert(
            spec.id().type_id(),
            ServiceEntry {
                parent: spec.parent().map(|p| p.id()),
                declarations,
            },
        );
        Ok(())
    }

    /// Returns true if the service type has been registered.
    pub fn is_registered(&self, id: ServiceId) -> bool {
        self.services.borrow().contains_key(&id.type_id())
    }

    /// Returns all declarations for a service and every ancestor.
    ///
    /// The order is repeatable for the same registrations: the service's own
    /// declarations first (in declaration order), then each ancestor level in
    /// turn. Callers must not rely on any particular ordering across
    /// hierarchy levels.
    pub fn declarations_for(&self, id: ServiceId) -> Vec<ConfigFieldDeclaration> {
        let services = self.services.borrow();
        let mut out = Vec::new();
        let mut current = Some(id);
        while let Some(level) = current {
            match services.get(&level.type_id()) {
                Some(entry) => {
                    out.extend(entry.declarations.iter().cloned());
                    current = entry.parent;
                }
                None => break,
            }
        }
        out
    }

    /// Looks up a single declaration by key, ancestor-aware.
    ///
    /// Walks from the service itself up through its ancestors and returns the
    /// first declaration matching the key, so a subtype's declaration shadows
    /// an ancestor's for the same key.
    pub fn declaration(&self, id: ServiceId, key: &str) -> Option<ConfigFieldDeclaration> {
        let services = self.services.borrow();
        let mut current = Some(id);
        while let Some(level) = current {
            let entry = services.get(&level.type_id())?;
            if let Some(decl) = entry.declarations.iter().find(|d| d.key().as_str() == key) {
                return Some(decl.clone());
            }
            current = entry.parent;
        }
        None
    }
}
