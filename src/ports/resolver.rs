// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration resolver trait definition.
//!
//! This module defines the `ConfigResolver` trait, the primary port
//! (interface) for implementing configuration sources. A resolver only has to
//! supply the primitive raw lookup; every typed operation — coercion,
//! defaults, fail-fast on missing — is derived from it as a provided method.

use crate::domain::{ConfigError, ConfigKey, ConfigScalar, ConfigValue, Result, SupportedType};

/// A source of raw configuration values with typed, defaulted derivations.
///
/// Implementations supply [`resolve`](ConfigResolver::resolve), a pure,
/// synchronous, in-memory lookup. `resolve` must be idempotent and
/// side-effect-free; no caching layer sits above it, so repeated lookups
/// reflect the current state of the backing source.
///
/// # Examples
///
/// ```rust
/// use wirecfg::ports::ConfigResolver;
/// use wirecfg::domain::{ConfigKey, ConfigValue};
///
/// #[derive(Debug)]
/// struct Fixed;
///
/// impl ConfigResolver for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn resolve(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         (key.as_str() == "GREETING").then(|| ConfigValue::from("hello"))
///     }
/// }
///
/// let resolver = Fixed;
/// let value = resolver.get_string(&ConfigKey::from("GREETING"), None).unwrap();
/// assert_eq!(value, "hello");
/// ```
pub trait ConfigResolver: std::fmt::Debug {
    /// Returns the name of this resolver.
    ///
    /// Used for logging and debugging. It should be a short identifier like
    /// `"map"` or `"env"`.
    fn name(&self) -> &str;

    /// Retrieves the raw value for a key.
    ///
    /// Returns `None` when the key is absent from the backing source. This is
    /// the only operation an implementation must provide.
    fn resolve(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Typed lookup returning `None` when no value can be produced.
    ///
    /// Resolution order:
    ///
    /// 1. `resolve(key)`; if absent, substitute the supplied default.
    /// 2. If still absent, return `None`.
    /// 3. Coerce the resulting string for the declared type. A present but
    ///    uncoercible value degrades to `None`, exactly as if the key were
    ///    missing; a debug event records the failed coercion.
    fn get_or_null(
        &self,
        key: &ConfigKey,
        value_type: SupportedType,
        default: Option<&str>,
    ) -> Option<ConfigScalar> {
        let raw = match self.resolve(key) {
            Some(value) => value.into_string(),
            None => default?.to_string(),
        };
        let coerced = value_type.coerce(&raw);
        if coerced.is_none() {
            tracing::debug!(
                resolver = self.name(),
                key = %key,
                value_type = %value_type,
                raw = %raw,
                "value failed coercion, treating as absent"
            );
        }
        coerced
    }

    /// Typed lookup that fails when no value can be produced.
    ///
    /// Identical to [`get_or_null`](ConfigResolver::get_or_null) but an
    /// absent result becomes [`ConfigError::KeyMissing`]. This is the
    /// fail-fast entry point used by field bindings.
    fn get(
        &self,
        key: &ConfigKey,
        value_type: SupportedType,
        default: Option<&str>,
    ) -> Result<ConfigScalar> {
        self.get_or_null(key, value_type, default)
            .ok_or_else(|| ConfigError::KeyMissing {
                key: key.as_str().to_string(),
            })
    }

    /// Returns true if the raw key is present in the backing source.
    ///
    /// Ignores defaults: a key that would resolve only through a default is
    /// not reported as present.
    fn has_key(&self, key: &ConfigKey) -> bool {
        self.resolve(key).is_some()
    }

    /// Typed convenience wrapper: [`get`](ConfigResolver::get) as text.
    fn get_string(&self, key: &ConfigKey, default: Option<&str>) -> Result<String> {
        match self.get(key, SupportedType::Text, default)? {
            ConfigScalar::Text(value) => Ok(value),
            other => Err(type_mismatch(key, SupportedType::Text, &other)),
        }
    }

    /// Typed convenience wrapper: [`get`](ConfigResolver::get) as a number.
    fn get_number(&self, key: &ConfigKey, default: Option<&str>) -> Result<f64> {
        match self.get(key, SupportedType::Number, default)? {
            ConfigScalar::Number(value) => Ok(value),
            other => Err(type_mismatch(key, SupportedType::Number, &other)),
        }
    }

    /// Typed convenience wrapper: [`get`](ConfigResolver::get) as a boolean.
    fn get_boolean(&self, key: &ConfigKey, default: Option<&str>) -> Result<bool> {
        match self.get(key, SupportedType::Boolean, default)? {
            ConfigScalar::Boolean(value) => Ok(value),
            other => Err(type_mismatch(key, SupportedType::Boolean, &other)),
        }
    }
}

// Coercion always yields the requested variant, so these arms are
// unreachable unless a custom `get` override misbehaves.
fn type_mismatch(key: &ConfigKey, requested: SupportedType, got: &ConfigScalar) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.as_str().to_string(),
        declared: got.value_type(),
        requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct TestResolver {
        values: HashMap<String, String>,
    }

    impl TestResolver {
        fn new(entries: &[(&str, &str)]) -> Self {
            TestResolver {
                values: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl ConfigResolver for TestResolver {
        fn name(&self) -> &str {
            "test"
        }

        fn resolve(&self, key: &ConfigKey) -> Option<ConfigValue> {
            self.values.get(key.as_str()).map(|v| ConfigValue::from(v.as_str()))
        }
    }

    #[test]
    fn test_get_or_null_present_value() {
        let resolver = TestResolver::new(&[("PORT", "8080")]);
        let value = resolver.get_or_null(&ConfigKey::from("PORT"), SupportedType::Number, None);
        assert_eq!(value, Some(ConfigScalar::Number(8080.0)));
    }

    #[test]
    fn test_get_or_null_absent_without_default() {
        let resolver = TestResolver::new(&[]);
        let value = resolver.get_or_null(&ConfigKey::from("PORT"), SupportedType::Number, None);
        assert_eq!(value, None);
    }

    #[test]
    fn test_get_or_null_absent_uses_default() {
        let resolver = TestResolver::new(&[]);
        let value =
            resolver.get_or_null(&ConfigKey::from("PORT"), SupportedType::Number, Some("9090"));
        assert_eq!(value, Some(ConfigScalar::Number(9090.0)));
    }

    #[test]
    fn test_get_or_null_present_value_wins_over_default() {
        let resolver = TestResolver::new(&[("PORT", "8080")]);
        let value =
            resolver.get_or_null(&ConfigKey::from("PORT"), SupportedType::Number, Some("9090"));
        assert_eq!(value, Some(ConfigScalar::Number(8080.0)));
    }

    #[test]
    fn test_get_or_null_uncoercible_degrades_to_absent() {
        let resolver = TestResolver::new(&[("PORT", "not-a-port")]);
        let value = resolver.get_or_null(&ConfigKey::from("PORT"), SupportedType::Number, None);
        assert_eq!(value, None);
    }

    #[test]
    fn test_get_or_null_uncoercible_default_is_absent() {
        let resolver = TestResolver::new(&[]);
        let value =
            resolver.get_or_null(&ConfigKey::from("PORT"), SupportedType::Number, Some("oops"));
        assert_eq!(value, None);
    }

    #[test]
    fn test_get_or_null_uncoercible_value_not_rescued_by_default() {
        // default substitution happens only when the key is absent; a
        // present value that fails coercion must not fall back to it
        let resolver = TestResolver::new(&[("PORT", "oops")]);
        let value =
            resolver.get_or_null(&ConfigKey::from("PORT"), SupportedType::Number, Some("42"));
        assert_eq!(value, None);
    }

    #[test]
    fn test_get_uncoercible_value_with_default_fails_as_missing() {
        let resolver = TestResolver::new(&[("PORT", "oops")]);
        let result = resolver.get(&ConfigKey::from("PORT"), SupportedType::Number, Some("42"));
        assert!(matches!(result, Err(ConfigError::KeyMissing { .. })));
    }

    #[test]
    fn test_get_missing_fails() {
        let resolver = TestResolver::new(&[]);
        let result = resolver.get(&ConfigKey::from("PORT"), SupportedType::Number, None);
        assert!(matches!(result, Err(ConfigError::KeyMissing { .. })));
    }

    #[test]
    fn test_get_uncoercible_fails_as_missing() {
        let resolver = TestResolver::new(&[("PORT", "oops")]);
        let result = resolver.get(&ConfigKey::from("PORT"), SupportedType::Number, None);
        assert!(matches!(result, Err(ConfigError::KeyMissing { .. })));
    }

    #[test]
    fn test_has_key_ignores_defaults() {
        let resolver = TestResolver::new(&[("PRESENT", "x")]);
        assert!(resolver.has_key(&ConfigKey::from("PRESENT")));
        assert!(!resolver.has_key(&ConfigKey::from("ABSENT")));
    }

    #[test]
    fn test_get_string() {
        let resolver = TestResolver::new(&[("NAME", "svc")]);
        assert_eq!(
            resolver.get_string(&ConfigKey::from("NAME"), None).unwrap(),
            "svc"
        );
    }

    #[test]
    fn test_get_number() {
        let resolver = TestResolver::new(&[("PORT", "111")]);
        assert_eq!(
            resolver.get_number(&ConfigKey::from("PORT"), None).unwrap(),
            111.0
        );
    }

    #[test]
    fn test_get_boolean_true_literal_only() {
        let resolver = TestResolver::new(&[("ON", "true"), ("OFF", "TRUE")]);
        assert!(resolver.get_boolean(&ConfigKey::from("ON"), None).unwrap());
        assert!(!resolver.get_boolean(&ConfigKey::from("OFF"), None).unwrap());
    }

    #[test]
    fn test_get_string_empty_value_is_present() {
        let resolver = TestResolver::new(&[("EMPTY", "")]);
        assert_eq!(
            resolver.get_string(&ConfigKey::from("EMPTY"), Some("fallback")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_resolver_is_object_safe() {
        let resolver = TestResolver::new(&[("NAME", "svc")]);
        let boxed: Box<dyn ConfigResolver> = Box::new(resolver);
        assert_eq!(boxed.name(), "test");
        assert!(boxed.has_key(&ConfigKey::from("NAME")));
    }
}
