//! Geocoding through the `/api/geocode` route.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{instrument, trace};

use spotmap_core::{ApiUrl, Coordinate, Error, GeocodeBackend, Result};

use crate::client::ApiClient;

/// A coordinate component, sent as either a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Component {
    Number(f64),
    Text(String),
}

impl Component {
    fn text(&self) -> String {
        match self {
            Component::Number(n) => n.to_string(),
            Component::Text(s) => s.clone(),
        }
    }
}

/// Coordinate from two loosely typed components, if both are finite numbers.
pub(crate) fn coordinate(lat: &Component, lon: &Component) -> Option<Coordinate> {
    Coordinate::parse(&lat.text(), &lon.text())
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    success: bool,
    lat: Option<Component>,
    lon: Option<Component>,
}

/// Geocoding backend using a deployment's `/api/geocode` route.
///
/// A `success: false` body or any non-2xx status is `Ok(None)`, so the
/// regional retry still applies. Only transport and decode failures are
/// errors.
#[derive(Debug, Clone)]
pub struct ApiGeocoder {
    client: ApiClient,
}

impl ApiGeocoder {
    pub fn new(api: ApiUrl) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(api)?,
        })
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeocodeBackend for ApiGeocoder {
    #[instrument(skip(self))]
    async fn lookup(&self, query: &str) -> Result<Option<Coordinate>> {
        let response: GeocodeResponse = match self.client.get("geocode", &[("address", query)]).await
        {
            Ok(response) => response,
            // Any error status is "no data", whatever the body says.
            Err(Error::Protocol(e)) => {
                trace!(status = e.status, "No results");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if !response.success {
            trace!("No results");
            return Ok(None);
        }

        Ok(match (&response.lat, &response.lon) {
            (Some(lat), Some(lon)) => coordinate(lat, lon),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_accept_numbers_and_strings() {
        let lat: Component = serde_json::from_str("\"37.7749\"").unwrap();
        let lon: Component = serde_json::from_str("-122.4194").unwrap();
        let c = coordinate(&lat, &lon).unwrap();
        assert_eq!((c.lat, c.lon), (37.7749, -122.4194));
    }

    #[test]
    fn garbage_component_is_no_coordinate() {
        let lat = Component::Text("somewhere".to_string());
        let lon = Component::Number(1.0);
        assert!(coordinate(&lat, &lon).is_none());
    }
}
