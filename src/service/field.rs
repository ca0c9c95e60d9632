// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazy configuration field bindings.
//!
//! A [`ConfigField`] is the computed-accessor stand-in for a "configuration
//! value" field on a service: it holds the field's declaration metadata and a
//! weak link to the container that wired it. Every read walks to the
//! container, takes the currently bound resolver, and performs a typed
//! lookup — nothing is cached, so reads always reflect the live resolver.

use crate::domain::{
    ConfigError, ConfigFieldDeclaration, ConfigKey, FieldSpec, Result, ServiceId, SupportedType,
};
use crate::ports::ConfigResolver;
use crate::service::container::ContainerInner;
use std::marker::PhantomData;
use std::rc::Weak;

mod private {
    pub trait Sealed {}
    impl Sealed for String {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// The Rust-side types a configuration field can be wired as.
///
/// Sealed: exactly `String` (text), `f64` (number) and `bool` (boolean),
/// mirroring the closed [`SupportedType`] set.
pub trait ConfigPrimitive: Sized + private::Sealed {
    /// The declared type this Rust type corresponds to.
    const VALUE_TYPE: SupportedType;

    #[doc(hidden)]
    fn fetch(resolver: &dyn ConfigResolver, key: &ConfigKey, default: Option<&str>)
        -> Result<Self>;
}

impl ConfigPrimitive for String {
    const VALUE_TYPE: SupportedType = SupportedType::Text;

    fn fetch(
        resolver: &dyn ConfigResolver,
        key: &ConfigKey,
        default: Option<&str>,
    ) -> Result<Self> {
        resolver.get_string(key, default)
    }
}

impl ConfigPrimitive for f64 {
    const VALUE_TYPE: SupportedType = SupportedType::Number;

    fn fetch(
        resolver: &dyn ConfigResolver,
        key: &ConfigKey,
        default: Option<&str>,
    ) -> Result<Self> {
        resolver.get_number(key, default)
    }
}

impl ConfigPrimitive for bool {
    const VALUE_TYPE: SupportedType = SupportedType::Boolean;

    fn fetch(
        resolver: &dyn ConfigResolver,
        key: &ConfigKey,
        default: Option<&str>,
    ) -> Result<Self> {
        resolver.get_boolean(key, default)
    }
}

/// A lazily evaluated, container-connected configuration field.
///
/// Obtained from [`Scope::field`](crate::service::Scope::field) during
/// service construction. [`get`](ConfigField::get) performs the read:
///
/// 1. reach the owning container — [`ConfigError::NotConnected`] if the field
///    was built detached or the container has been dropped;
/// 2. take the resolver bound in that container —
///    [`ConfigError::ResolverNotBound`] if none;
/// 3. typed lookup with the declared key, type and default.
pub struct ConfigField<T: ConfigPrimitive> {
    declaration: ConfigFieldDeclaration,
    container: Weak<ContainerInner>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ConfigPrimitive> ConfigField<T> {
    pub(crate) fn connected(
        declaration: ConfigFieldDeclaration,
        container: Weak<ContainerInner>,
    ) -> Self {
        ConfigField {
            declaration,
            container,
            _marker: PhantomData,
        }
    }

    /// Creates a field with no container scope.
    ///
    /// Reading it always fails with [`ConfigError::NotConnected`]. Exists for
    /// constructing services outside a container (for example in unit tests
    /// that never touch configuration).
    pub fn detached(owner: ServiceId, spec: FieldSpec) -> Self {
        ConfigField {
            declaration: ConfigFieldDeclaration::from_spec(&spec, owner),
            container: Weak::new(),
            _marker: PhantomData,
        }
    }

    /// Reads the field's current value through the bound resolver.
    ///
    /// A missing value with no usable default fails with
    /// [`ConfigError::KeyMissing`].
    pub fn get(&self) -> Result<T> {
        let container = self
            .container
            .upgrade()
            .ok_or_else(|| ConfigError::NotConnected {
                service: self.declaration.owner().short_name().to_string(),
            })?;
        let resolver = container.resolver().ok_or(ConfigError::ResolverNotBound)?;
        T::fetch(
            resolver.as_ref(),
            self.declaration.key(),
            self.declaration.default_value(),
        )
    }

    /// Returns the declaration this field was wired from.
    pub fn declaration(&self) -> &ConfigFieldDeclaration {
        &self.declaration
    }
}

impl<T: ConfigPrimitive> std::fmt::Debug for ConfigField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigField")
            .field("key", &self.declaration.key().as_str())
            .field("value_type", &self.declaration.value_type())
            .field("connected", &(self.container.upgrade().is_some()))
            .finish()
    }
}
