// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw configuration value type.
//!
//! This module provides the `ConfigValue` type, the uncoerced string form of
//! a configuration value as returned by a resolver's primitive lookup. Typed
//! coercion into text, number or boolean lives in [`crate::domain::scalar`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw configuration value.
///
/// Resolvers return values as strings regardless of the declared field type;
/// coercion happens afterwards against the declaration's
/// [`SupportedType`](crate::domain::scalar::SupportedType). Keeping the raw
/// form separate means every backing source only has to speak strings.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("8080");
/// assert_eq!(value.as_str(), "8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
