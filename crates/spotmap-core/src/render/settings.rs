//! Saved-map settings.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::traits::MapConfigStore;
use crate::types::DatabaseId;

/// Display settings a user picks for a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    pub database: DatabaseId,
    pub name: String,
    /// Column driving marker color.
    #[serde(default)]
    pub marker_color_column: Option<String>,
    /// Columns shown in the sidebar.
    #[serde(default)]
    pub visible_columns: Vec<String>,
}

/// Accepts settings and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMapConfigStore;

#[async_trait]
impl MapConfigStore for NoopMapConfigStore {
    async fn save(&self, settings: &MapSettings) -> Result<()> {
        debug!(database = %settings.database, name = %settings.name, "Map settings not persisted");
        Ok(())
    }
}
