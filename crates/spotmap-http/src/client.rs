//! HTTP client for the record API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use spotmap_core::error::{Error, ProtocolError, TransportError};
use spotmap_core::{ApiUrl, Result};

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of every failed API response.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Build the shared HTTP client.
pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("spotmap/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(transport)
}

/// Map a reqwest failure onto the transport error taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

/// Read a JSON body, or turn a non-success status into a [`ProtocolError`].
pub(crate) async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    trace!(status = %status, "API response");

    let body = response.bytes().await.map_err(transport)?;

    if status.is_success() {
        Ok(serde_json::from_slice(&body)?)
    } else {
        Err(protocol_error(status, &body).into())
    }
}

fn protocol_error(status: StatusCode, body: &[u8]) -> ProtocolError {
    let message = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message);
    ProtocolError::new(status.as_u16(), message)
}

/// HTTP client for the `/api/...` routes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a client for the given API base URL.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            api,
        })
    }

    /// Returns the API URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET an API route and decode the JSON body.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get<R>(&self, route: &str, query: &[(&str, &str)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.api.api_url(route);
        debug!(%url, "API query");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("https://maps.example.com").unwrap();
        let client = ApiClient::new(api.clone()).unwrap();
        assert_eq!(client.api(), &api);
    }

    #[test]
    fn protocol_error_reads_message() {
        let err = protocol_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"success":false,"message":"Notion is down"}"#,
        );
        assert_eq!(err.status, 500);
        assert_eq!(err.message.as_deref(), Some("Notion is down"));

        let err = protocol_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.status, 502);
        assert!(err.message.is_none());
    }
}
