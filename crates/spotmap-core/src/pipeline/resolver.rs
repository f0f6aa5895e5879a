//! Spot resolution across a record set.

use std::collections::HashSet;

use futures_util::{StreamExt, stream};
use tracing::{debug, instrument, trace, warn};

use crate::record::Record;
use crate::traits::Geocode;
use crate::types::{Coordinate, Spot};

use super::normalize::{display_address, raw_coordinates};

/// Tuning for a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Records resolved at once. `1` resolves strictly one after another;
    /// output order matches input order either way.
    pub concurrency: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

/// Outcome of a resolution pass.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Resolved spots, in input order.
    pub spots: Vec<Spot>,
    /// Ids of records that produced no spot.
    pub unresolved: Vec<String>,
}

/// Turns records into spots, geocoding records without stored coordinates.
#[derive(Debug, Clone)]
pub struct SpotResolver<G> {
    geocoder: G,
    options: ResolveOptions,
}

impl<G: Geocode> SpotResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self::with_options(geocoder, ResolveOptions::default())
    }

    pub fn with_options(geocoder: G, options: ResolveOptions) -> Self {
        Self { geocoder, options }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Resolve every record, keeping only those that end up with a coordinate.
    pub async fn resolve_all(&self, records: Vec<Record>) -> Vec<Spot> {
        self.resolve_report(records).await.spots
    }

    /// Like [`resolve_all`](Self::resolve_all), also reporting which records
    /// were dropped.
    ///
    /// A record id seen more than once is resolved only the first time, so
    /// every spot id maps to exactly one marker.
    #[instrument(skip_all, fields(records = records.len(), concurrency = self.options.concurrency))]
    pub async fn resolve_report(&self, records: Vec<Record>) -> Resolution {
        let mut seen = HashSet::new();
        let records = records.into_iter().filter(|record| {
            let first = seen.insert(record.id.clone());
            if !first {
                warn!(record = %record.id, "Skipping repeated record id");
            }
            first
        });

        let outcomes: Vec<(String, Option<Spot>)> = stream::iter(records)
            .map(|record| async move {
                let id = record.id.clone();
                (id, self.resolve_record(record).await)
            })
            .buffered(self.options.concurrency.max(1))
            .collect()
            .await;

        let mut resolution = Resolution::default();
        for (id, spot) in outcomes {
            match spot {
                Some(spot) => resolution.spots.push(spot),
                None => resolution.unresolved.push(id),
            }
        }

        debug!(
            spots = resolution.spots.len(),
            unresolved = resolution.unresolved.len(),
            "Resolution pass finished"
        );
        resolution
    }

    /// Resolve one record. Stored coordinates are used when both are present;
    /// otherwise the display address is geocoded.
    pub async fn resolve_record(&self, record: Record) -> Option<Spot> {
        let display_address = display_address(&record);

        let coordinate = match raw_coordinates(&record).both() {
            Some((lat, lon)) => Coordinate::parse(lat, lon),
            None => self.geocoder.resolve(&display_address).await,
        };

        let Some(coordinate) = coordinate else {
            trace!(record = %record.id, address = %display_address, "No coordinate, dropping");
            return None;
        };

        Some(Spot {
            record,
            display_address,
            coordinate,
        })
    }
}
