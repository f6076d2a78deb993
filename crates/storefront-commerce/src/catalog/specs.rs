//! Open product specifications and per-category requirements.

use crate::catalog::Category;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Processor model.
pub const CPU: &str = "cpu";
/// Processor generation.
pub const GENERATION: &str = "generation";
/// Installed memory (e.g., "32GB DDR5").
pub const RAM: &str = "ram";
/// Primary storage.
pub const STORAGE: &str = "storage";
/// Bundled display, if any.
pub const DISPLAY: &str = "display";

/// Attribute key to display string. Keys vary by category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specifications(BTreeMap<String, String>);

impl Specifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value. Keys are lowercased; blank values remove the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into().trim().to_lowercase();
        let value = value.into().trim().to_string();
        if key.is_empty() {
            return;
        }
        if value.is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Specifications {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specs = Specifications::new();
        for (k, v) in iter {
            specs.insert(k, v);
        }
        specs
    }
}

/// Specification keys each category must provide.
pub struct SpecSchema;

impl SpecSchema {
    /// Keys required for `category`.
    pub fn required_keys(category: &Category) -> &'static [&'static str] {
        if category.is_computer() {
            &[CPU, RAM, STORAGE]
        } else {
            &[]
        }
    }

    /// Check that every required key is present.
    pub fn validate(category: &Category, specs: &Specifications) -> Result<(), CommerceError> {
        for key in Self::required_keys(category) {
            if !specs.contains(key) {
                return Err(CommerceError::MissingSpecification {
                    category: category.label().to_string(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}
