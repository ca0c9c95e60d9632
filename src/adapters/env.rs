// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-environment configuration resolver.
//!
//! This module provides a resolver whose backing map is initialized from the
//! process's environment variables.

use crate::adapters::MapResolver;
use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigResolver;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// A resolver backed by a snapshot of the process environment.
///
/// The environment is read once, at construction; later changes to the
/// process environment are not visible through an existing instance. Keys and
/// values are both treated as opaque strings and nothing is ever written back
/// to the environment.
///
/// # Examples
///
/// ```
/// use wirecfg::adapters::EnvResolver;
/// use wirecfg::domain::ConfigKey;
/// use wirecfg::ports::ConfigResolver;
///
/// let resolver = EnvResolver::new();
/// // PATH is present in any reasonable test environment
/// assert!(resolver.has_key(&ConfigKey::from("PATH")));
/// ```
#[derive(Debug)]
pub struct EnvResolver {
    inner: MapResolver,
}

impl EnvResolver {
    /// Creates a resolver from a snapshot of the current environment.
    ///
    /// Oversized entries are skipped with a debug log rather than stored.
    pub fn new() -> Self {
        let mut skipped = 0usize;
        let inner = MapResolver::new(env::vars().filter_map(|(key, value)| {
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                skipped += 1;
                tracing::debug!(
                    key_len = key.len(),
                    value_len = value.len(),
                    "skipping oversized environment variable"
                );
                return None;
            }
            Some((key, Some(value)))
        }));

        tracing::debug!(
            entries = inner.len(),
            skipped,
            "snapshotted process environment"
        );

        EnvResolver { inner }
    }
}

impl Default for EnvResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver for EnvResolver {
    fn name(&self) -> &str {
        "env"
    }

    fn resolve(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.inner.resolve(key)
    }
}
