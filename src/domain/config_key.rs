// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around
//! `String` that provides type safety for configuration keys and prevents
//! accidental string confusion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for configuration keys.
///
/// Keys are case-sensitive and compared exactly. A key is expected to be
/// non-empty; that invariant is enforced when a declaration is registered,
/// not here, so ad-hoc lookups stay cheap.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("DATABASE_URL");
/// assert_eq!(key.as_str(), "DATABASE_URL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_new() {
        let key = ConfigKey::new("PORT".to_string());
        assert_eq!(key.as_str(), "PORT");
    }

    #[test]
    fn test_config_key_from_str() {
        let key = ConfigKey::from("PORT");
        assert_eq!(key.as_str(), "PORT");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("PORT");
        assert_eq!(key.into_string(), "PORT");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("PORT");
        assert_eq!(format!("{}", key), "PORT");
    }

    #[test]
    fn test_config_key_case_sensitive() {
        let upper = ConfigKey::from("PORT");
        let lower = ConfigKey::from("port");
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_config_key_hash() {
        let key1 = ConfigKey::from("PORT");
        let key2 = ConfigKey::from("PORT");

        let mut map = HashMap::new();
        map.insert(key1, "8080");
        assert_eq!(map.get(&key2), Some(&"8080"));
    }

    #[test]
    fn test_config_key_as_ref() {
        let key = ConfigKey::from("PORT");
        let s: &str = key.as_ref();
        assert_eq!(s, "PORT");
    }

    #[test]
    fn test_string_from_config_key() {
        let key = ConfigKey::from("PORT");
        let s: String = key.into();
        assert_eq!(s, "PORT");
    }
}
