// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supported primitive types and string-to-typed coercion.
//!
//! Configuration fields are limited to a closed set of primitive types:
//! text, number and boolean. This module defines that set
//! ([`SupportedType`]), the coerced value representation ([`ConfigScalar`]),
//! and the coercion rules mapping a raw string to each type.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of primitive types a configuration field may declare.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::scalar::{ConfigScalar, SupportedType};
///
/// let coerced = SupportedType::Number.coerce("111");
/// assert_eq!(coerced, Some(ConfigScalar::Number(111.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedType {
    /// A free-form string value.
    Text,
    /// A finite decimal number, represented as `f64`.
    Number,
    /// A boolean value; only the exact literal `"true"` reads as true.
    Boolean,
}

impl SupportedType {
    /// Parses a lowercase type name into a `SupportedType`.
    ///
    /// This is the declaration-time gate for metadata that arrives as text
    /// (for example a spec loaded from a description file): anything outside
    /// the supported set fails immediately with
    /// [`ConfigError::UnsupportedType`], rather than lazily on first access.
    ///
    /// # Examples
    ///
    /// ```
    /// use wirecfg::domain::scalar::SupportedType;
    ///
    /// assert_eq!(SupportedType::from_name("number").unwrap(), SupportedType::Number);
    /// assert!(SupportedType::from_name("uuid").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(SupportedType::Text),
            "number" => Ok(SupportedType::Number),
            "boolean" => Ok(SupportedType::Boolean),
            other => Err(ConfigError::UnsupportedType {
                type_name: other.to_string(),
            }),
        }
    }

    /// Returns the lowercase name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            SupportedType::Text => "text",
            SupportedType::Number => "number",
            SupportedType::Boolean => "boolean",
        }
    }

    /// Coerces a raw string into a value of this type.
    ///
    /// Returns `None` when the string cannot be coerced. The rules per type:
    ///
    /// - **Text**: identity, always succeeds.
    /// - **Number**: decimal parse; fails unless the result is a finite
    ///   number, so the empty string, non-numeric text, `"NaN"` and
    ///   infinities all coerce to `None`.
    /// - **Boolean**: the exact literal `"true"` yields `true`; every other
    ///   string (including `"false"`, `"1"`, `"TRUE"`) yields `false`. Never
    ///   fails. The asymmetry is a deliberate policy: only the exact truthy
    ///   literal reads as true.
    ///
    /// # Examples
    ///
    /// ```
    /// use wirecfg::domain::scalar::{ConfigScalar, SupportedType};
    ///
    /// assert_eq!(
    ///     SupportedType::Boolean.coerce("yes"),
    ///     Some(ConfigScalar::Boolean(false))
    /// );
    /// assert_eq!(SupportedType::Number.coerce("not a number"), None);
    /// ```
    pub fn coerce(&self, raw: &str) -> Option<ConfigScalar> {
        match self {
            SupportedType::Text => Some(ConfigScalar::Text(raw.to_string())),
            SupportedType::Number => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(ConfigScalar::Number),
            SupportedType::Boolean => Some(ConfigScalar::Boolean(raw == "true")),
        }
    }
}

impl fmt::Display for SupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A configuration value coerced into its declared type.
///
/// Produced by [`SupportedType::coerce`] and by the typed resolver
/// operations; the variant always matches the declared type of the field
/// being resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigScalar {
    /// A text value.
    Text(String),
    /// A finite number value.
    Number(f64),
    /// A boolean value.
    Boolean(bool),
}

impl ConfigScalar {
    /// Returns the [`SupportedType`] of this value.
    pub fn value_type(&self) -> SupportedType {
        match self {
            ConfigScalar::Text(_) => SupportedType::Text,
            ConfigScalar::Number(_) => SupportedType::Number,
            ConfigScalar::Boolean(_) => SupportedType::Boolean,
        }
    }

    /// Returns the text value, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigScalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ConfigScalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a `Boolean`.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            ConfigScalar::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigScalar::Text(s) => write!(f, "{}", s),
            ConfigScalar::Number(n) => write!(f, "{}", n),
            ConfigScalar::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_valid() {
        assert_eq!(SupportedType::from_name("text").unwrap(), SupportedType::Text);
        assert_eq!(
            SupportedType::from_name("number").unwrap(),
            SupportedType::Number
        );
        assert_eq!(
            SupportedType::from_name("boolean").unwrap(),
            SupportedType::Boolean
        );
    }

    #[test]
    fn test_from_name_invalid() {
        let result = SupportedType::from_name("integer");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_from_name_rejects_capitalized() {
        assert!(SupportedType::from_name("Text").is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for ty in [
            SupportedType::Text,
            SupportedType::Number,
            SupportedType::Boolean,
        ] {
            assert_eq!(SupportedType::from_name(ty.name()).unwrap(), ty);
        }
    }

    #[test]
    fn test_coerce_text_identity() {
        let coerced = SupportedType::Text.coerce("anything at all");
        assert_eq!(coerced, Some(ConfigScalar::Text("anything at all".to_string())));
    }

    #[test]
    fn test_coerce_text_empty() {
        let coerced = SupportedType::Text.coerce("");
        assert_eq!(coerced, Some(ConfigScalar::Text(String::new())));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(
            SupportedType::Number.coerce("111"),
            Some(ConfigScalar::Number(111.0))
        );
        assert_eq!(
            SupportedType::Number.coerce("-3.5"),
            Some(ConfigScalar::Number(-3.5))
        );
    }

    #[test]
    fn test_coerce_number_invalid() {
        assert_eq!(SupportedType::Number.coerce(""), None);
        assert_eq!(SupportedType::Number.coerce("abc"), None);
        assert_eq!(SupportedType::Number.coerce("12abc"), None);
    }

    #[test]
    fn test_coerce_number_rejects_non_finite() {
        assert_eq!(SupportedType::Number.coerce("NaN"), None);
        assert_eq!(SupportedType::Number.coerce("inf"), None);
        assert_eq!(SupportedType::Number.coerce("-inf"), None);
    }

    #[test]
    fn test_coerce_boolean_exact_true() {
        assert_eq!(
            SupportedType::Boolean.coerce("true"),
            Some(ConfigScalar::Boolean(true))
        );
    }

    #[test]
    fn test_coerce_boolean_everything_else_is_false() {
        for raw in ["false", "1", "TRUE", "True", "yes", "on", "", "anything"] {
            assert_eq!(
                SupportedType::Boolean.coerce(raw),
                Some(ConfigScalar::Boolean(false)),
                "expected '{}' to coerce to false",
                raw
            );
        }
    }

    #[test]
    fn test_scalar_value_type() {
        assert_eq!(
            ConfigScalar::Text("x".to_string()).value_type(),
            SupportedType::Text
        );
        assert_eq!(ConfigScalar::Number(1.0).value_type(), SupportedType::Number);
        assert_eq!(
            ConfigScalar::Boolean(true).value_type(),
            SupportedType::Boolean
        );
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(ConfigScalar::Text("x".to_string()).as_text(), Some("x"));
        assert_eq!(ConfigScalar::Number(2.0).as_number(), Some(2.0));
        assert_eq!(ConfigScalar::Boolean(true).as_boolean(), Some(true));
        assert_eq!(ConfigScalar::Number(2.0).as_text(), None);
        assert_eq!(ConfigScalar::Text("x".to_string()).as_boolean(), None);
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(format!("{}", ConfigScalar::Text("x".to_string())), "x");
        assert_eq!(format!("{}", ConfigScalar::Number(111.0)), "111");
        assert_eq!(format!("{}", ConfigScalar::Boolean(false)), "false");
    }

    #[test]
    fn test_supported_type_display() {
        assert_eq!(format!("{}", SupportedType::Number), "number");
    }

    #[test]
    fn test_supported_type_serde_lowercase() {
        let json = serde_json::to_string(&SupportedType::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
    }
}
