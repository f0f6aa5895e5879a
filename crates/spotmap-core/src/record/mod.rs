//! Record-source data model.
//!
//! Records carry user-defined, typed properties. Property lookups go through
//! the [`Property`] tag rather than probing loosely-typed JSON.

mod database;
mod property;

pub use database::{DatabaseSummary, PropertyDefinition, PropertySchema};
pub use property::{Property, RichText, SelectOption};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier of the record.
    pub id: String,

    /// Property name to value. The schema is user-defined per database.
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style helper to attach a property.
    pub fn with(mut self, name: impl Into<String>, property: Property) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// The record's `title`-typed property, whatever its name.
    pub fn title_property(&self) -> Option<(&str, &Property)> {
        self.properties
            .iter()
            .find(|(_, p)| matches!(p, Property::Title { .. }))
            .map(|(name, p)| (name.as_str(), p))
    }

    /// First segment of a `rich_text` property, if present.
    pub fn rich_text(&self, name: &str) -> Option<&str> {
        match self.property(name)? {
            Property::RichText { rich_text } => rich_text.first().map(|t| t.plain_text.as_str()),
            _ => None,
        }
    }

    /// Selected option name of a `select` property, if any.
    pub fn select(&self, name: &str) -> Option<&str> {
        match self.property(name)? {
            Property::Select { select } => select.as_ref().map(|s| s.name.as_str()),
            _ => None,
        }
    }

    pub fn url(&self, name: &str) -> Option<&str> {
        match self.property(name)? {
            Property::Url { url } => url.as_deref(),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.property(name)? {
            Property::Number { number } => *number,
            _ => None,
        }
    }
}
