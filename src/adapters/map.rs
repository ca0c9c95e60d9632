// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory map configuration resolver.
//!
//! This module provides a resolver backed by a fixed key/value mapping,
//! constructed once from a finite set of pairs. It is the simplest concrete
//! resolver and the base for [`EnvResolver`](crate::adapters::EnvResolver).

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigResolver;
use std::collections::HashMap;

/// A resolver backed by a static key-to-string mapping.
///
/// The mapping is fixed at construction. Entries whose value is `None` are
/// dropped immediately, never stored as present-but-null, so
/// [`has_key`](ConfigResolver::has_key) reflects only entries that carried an
/// actual value.
///
/// # Examples
///
/// ```
/// use wirecfg::adapters::MapResolver;
/// use wirecfg::domain::ConfigKey;
/// use wirecfg::ports::ConfigResolver;
///
/// let resolver = MapResolver::new([
///     ("HOST", Some("localhost")),
///     ("OPTIONAL", None),
/// ]);
///
/// assert!(resolver.has_key(&ConfigKey::from("HOST")));
/// assert!(!resolver.has_key(&ConfigKey::from("OPTIONAL")));
/// ```
#[derive(Debug, Default)]
pub struct MapResolver {
    values: HashMap<String, String>,
}

impl MapResolver {
    /// Creates a resolver from `(key, Option<value>)` pairs.
    ///
    /// Pairs with a `None` value are dropped at construction.
    pub fn new<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.into(), v.into())))
            .collect();
        MapResolver { values }
    }

    /// Creates an empty resolver.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for MapResolver {
    fn from(values: HashMap<String, String>) -> Self {
        MapResolver { values }
    }
}

impl ConfigResolver for MapResolver {
    fn name(&self) -> &str {
        "map"
    }

    fn resolve(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|value| ConfigValue::from(value.as_str()))
    }
}
