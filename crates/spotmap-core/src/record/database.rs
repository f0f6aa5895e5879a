//! Database-level types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Result;
use crate::types::DatabaseId;

use super::RichText;

/// A database as listed by the record source's search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSummary {
    pub id: String,
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(default)]
    pub archived: bool,
}

impl DatabaseSummary {
    /// First title segment, or `"Untitled"`.
    pub fn display_title(&self) -> &str {
        self.title
            .first()
            .map(|t| t.plain_text.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled")
    }

    /// The summary's id as a validated [`DatabaseId`].
    pub fn database_id(&self) -> Result<DatabaseId> {
        DatabaseId::new(&self.id)
    }
}

/// Column definition of a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Column name to definition.
pub type PropertySchema = BTreeMap<String, PropertyDefinition>;
