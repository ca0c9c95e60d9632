// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types for the configuration crate:
//! keys and raw values, the supported primitive types with their coercion
//! rules, field declarations, and the declaration registry.

pub mod config_key;
pub mod config_value;
pub mod declaration;
pub mod errors;
pub mod scalar;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use declaration::{
    ConfigFieldDeclaration, DeclarationRegistry, FieldSpec, ServiceId, ServiceSpec,
};
pub use errors::{ConfigError, Result};
pub use scalar::{ConfigScalar, SupportedType};
