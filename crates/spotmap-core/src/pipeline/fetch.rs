//! Record source wired to the resolver.

use tracing::{error, info, instrument};

use crate::Result;
use crate::record::{DatabaseSummary, Record};
use crate::traits::{Geocode, RecordSource};
use crate::types::{DatabaseId, Spot};

use super::dedupe::unique_databases;
use super::resolver::{Resolution, ResolveOptions, SpotResolver};

/// Fetches a database's records and resolves them into spots.
#[derive(Debug, Clone)]
pub struct SpotPipeline<S, G> {
    source: S,
    resolver: SpotResolver<G>,
}

impl<S: RecordSource, G: Geocode> SpotPipeline<S, G> {
    pub fn new(source: S, geocoder: G) -> Self {
        Self::with_options(source, geocoder, ResolveOptions::default())
    }

    pub fn with_options(source: S, geocoder: G, options: ResolveOptions) -> Self {
        Self {
            source,
            resolver: SpotResolver::with_options(geocoder, options),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resolver(&self) -> &SpotResolver<G> {
        &self.resolver
    }

    /// The deduplicated database list. A failed listing is logged and
    /// yields an empty list.
    #[instrument(skip(self))]
    pub async fn databases(&self) -> Vec<DatabaseSummary> {
        match self.source.list_databases().await {
            Ok(dbs) => unique_databases(dbs),
            Err(e) => {
                error!(error = %e, "Failed to list databases");
                Vec::new()
            }
        }
    }

    /// Fetch and resolve a database, propagating a failed fetch.
    #[instrument(skip(self), fields(%id))]
    pub async fn try_resolve(&self, id: &DatabaseId) -> Result<Resolution> {
        let records: Vec<Record> = self.source.query_database(id).await?;
        info!(records = records.len(), "Fetched records");
        Ok(self.resolver.resolve_report(records).await)
    }

    /// Fetch and resolve a database. A failed fetch is logged and yields no
    /// spots, indistinguishable from a database without locations.
    pub async fn fetch_spots(&self, id: &DatabaseId) -> Vec<Spot> {
        match self.try_resolve(id).await {
            Ok(resolution) => resolution.spots,
            Err(e) => {
                error!(error = %e, %id, "Failed to fetch records");
                Vec::new()
            }
        }
    }
}
