//! Direct OpenStreetMap Nominatim backend.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use spotmap_core::error::InvalidInputError;
use spotmap_core::{Coordinate, GeocodeBackend, Result};

use crate::client::{http_client, read_json, transport};
use crate::geocode::{Component, coordinate};

/// Public Nominatim search endpoint.
pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

#[derive(Debug, Deserialize)]
struct Place {
    lat: Component,
    lon: Component,
}

/// Geocoding backend querying a Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    endpoint: Url,
}

impl NominatimGeocoder {
    /// Backend for the public OpenStreetMap instance.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(NOMINATIM_SEARCH_URL)
    }

    /// Backend for a self-hosted instance's search endpoint.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| InvalidInputError::Other {
            message: format!("invalid Nominatim endpoint '{}': {}", endpoint, e),
        })?;
        Ok(Self {
            client: http_client()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GeocodeBackend for NominatimGeocoder {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn lookup(&self, query: &str) -> Result<Option<Coordinate>> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await
            .map_err(transport)?;

        let places: Vec<Place> = read_json(response).await?;
        debug!(matches = places.len(), "Nominatim search");

        Ok(places.first().and_then(|p| coordinate(&p.lat, &p.lon)))
    }
}
