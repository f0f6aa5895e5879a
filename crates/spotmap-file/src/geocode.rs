//! Geocoding from a lookup table on disk.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, instrument};

use spotmap_core::{Coordinate, GeocodeBackend, Result};

use crate::store::FileStore;

/// Geocoding backend answering from `geocode.json`, a JSON object mapping
/// query strings to `{ "lat": .., "lon": .. }`.
///
/// The table is loaded once. Queries match exactly; a missing table knows
/// no addresses.
#[derive(Debug, Clone, Default)]
pub struct FileGeocoder {
    table: HashMap<String, Coordinate>,
}

impl FileGeocoder {
    /// Load the table of the workspace at `root`.
    pub async fn load(root: impl AsRef<Path>) -> Result<Self> {
        let store = FileStore::new(root);
        let table: HashMap<String, Coordinate> = store
            .read_optional(&store.geocode_path())
            .await?
            .unwrap_or_default();
        debug!(entries = table.len(), "Loaded geocode table");
        Ok(Self::from_table(table))
    }

    pub fn from_table(table: HashMap<String, Coordinate>) -> Self {
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[async_trait]
impl GeocodeBackend for FileGeocoder {
    #[instrument(skip(self))]
    async fn lookup(&self, query: &str) -> Result<Option<Coordinate>> {
        Ok(self.table.get(query).copied())
    }
}
