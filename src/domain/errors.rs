// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when declaring, wiring,
//! or resolving configuration values. All errors use `thiserror` for proper
//! error handling and conversion.

use crate::domain::scalar::SupportedType;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur while declaring
/// configuration fields, wiring services into a container, or resolving
/// values at read time. It is marked as `#[non_exhaustive]` to allow for
/// future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use wirecfg::domain::errors::ConfigError;
///
/// fn read_required_value() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyMissing {
///         key: "DATABASE_URL".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required configuration value resolved to absent, with no usable default.
    #[error("Configuration {key} is missing")]
    KeyMissing {
        /// The key that could not be resolved
        key: String,
    },

    /// A declaration named a type outside the supported set.
    #[error("Configuration fields must be text, number or boolean, got '{type_name}'")]
    UnsupportedType {
        /// The unrecognized type name
        type_name: String,
    },

    /// A declaration used an empty configuration key.
    #[error("Service '{service}' declared a configuration field with an empty key")]
    EmptyKey {
        /// The service that carried the offending declaration
        service: String,
    },

    /// A field was wired with a Rust type that does not match its declared type.
    #[error("Configuration {key} is declared as {declared} but was bound as {requested}")]
    TypeMismatch {
        /// The key being wired
        key: String,
        /// The type named in the declaration
        declared: SupportedType,
        /// The type the field binding asked for
        requested: SupportedType,
    },

    /// A configuration field was read on an instance with no container scope.
    #[error("Could not read configuration field: {service} not connected to a container")]
    NotConnected {
        /// The service that owns the field
        service: String,
    },

    /// No resolver instance is bound in the container scope.
    #[error("No configuration resolver is bound in this container")]
    ResolverNotBound,

    /// A type was resolved from a container it was never registered in.
    #[error("Service '{service}' is not registered in this container")]
    ServiceNotRegistered {
        /// The requested service type
        service: String,
    },

    /// A field was wired for a key the owning service never declared.
    #[error("Service '{service}' has no declared configuration field '{key}'")]
    UndeclaredField {
        /// The service whose scope was used
        service: String,
        /// The undeclared key
        key: String,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_missing_error() {
        let error = ConfigError::KeyMissing {
            key: "PORT".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration PORT is missing");
    }

    #[test]
    fn test_unsupported_type_error() {
        let error = ConfigError::UnsupportedType {
            type_name: "uuid".to_string(),
        };
        assert!(error.to_string().contains("uuid"));
        assert!(error.to_string().contains("text, number or boolean"));
    }

    #[test]
    fn test_empty_key_error() {
        let error = ConfigError::EmptyKey {
            service: "Worker".to_string(),
        };
        assert!(error.to_string().contains("Worker"));
        assert!(error.to_string().contains("empty key"));
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ConfigError::TypeMismatch {
            key: "PORT".to_string(),
            declared: SupportedType::Number,
            requested: SupportedType::Text,
        };
        assert!(error.to_string().contains("PORT"));
        assert!(error.to_string().contains("number"));
        assert!(error.to_string().contains("text"));
    }

    #[test]
    fn test_not_connected_error() {
        let error = ConfigError::NotConnected {
            service: "Worker".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Could not read configuration field: Worker not connected to a container"
        );
    }

    #[test]
    fn test_resolver_not_bound_error() {
        let error = ConfigError::ResolverNotBound;
        assert!(error.to_string().contains("resolver"));
    }

    #[test]
    fn test_service_not_registered_error() {
        let error = ConfigError::ServiceNotRegistered {
            service: "Worker".to_string(),
        };
        assert!(error.to_string().contains("Worker"));
    }

    #[test]
    fn test_undeclared_field_error() {
        let error = ConfigError::UndeclaredField {
            service: "Worker".to_string(),
            key: "PORT".to_string(),
        };
        assert!(error.to_string().contains("Worker"));
        assert!(error.to_string().contains("PORT"));
    }
}
