//! Record source backed by the `/api/databases` routes.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use spotmap_core::error::ProtocolError;
use spotmap_core::{
    ApiUrl, DatabaseId, DatabaseSummary, PropertySchema, Record, RecordSource, Result,
    active_databases,
};

use crate::client::ApiClient;

/// Response of the list routes (`databases`, `databases/<id>/pages`).
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default)]
    success: bool,
    #[serde(default = "Vec::new")]
    results: Vec<T>,
    #[serde(default)]
    message: Option<String>,
}

/// Response of `databases/<id>`.
#[derive(Debug, Deserialize)]
struct SchemaResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    properties: PropertySchema,
    #[serde(default)]
    message: Option<String>,
}

// A 2xx answer that still says `success: false`.
fn unsuccessful(message: Option<String>) -> ProtocolError {
    ProtocolError::new(200, message)
}

/// A record source reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: ApiClient,
}

impl HttpSource {
    pub fn new(api: ApiUrl) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(api)?,
        })
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn api(&self) -> &ApiUrl {
        self.client.api()
    }

    async fn list<T: serde::de::DeserializeOwned>(&self, route: &str) -> Result<Vec<T>> {
        let response: ListResponse<T> = self.client.get(route, &[]).await?;
        if !response.success {
            return Err(unsuccessful(response.message).into());
        }
        Ok(response.results)
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    #[instrument(skip(self))]
    async fn list_databases(&self) -> Result<Vec<DatabaseSummary>> {
        let databases = self.list::<DatabaseSummary>("databases").await?;
        debug!(count = databases.len(), "Listed databases");
        // The server filters and dedupes too; repeat it here.
        Ok(active_databases(databases))
    }

    #[instrument(skip(self), fields(%id))]
    async fn database_schema(&self, id: &DatabaseId) -> Result<PropertySchema> {
        let response: SchemaResponse = self
            .client
            .get(&format!("databases/{}", id), &[])
            .await?;
        if !response.success {
            return Err(unsuccessful(response.message).into());
        }
        Ok(response.properties)
    }

    #[instrument(skip(self), fields(%id))]
    async fn query_database(&self, id: &DatabaseId) -> Result<Vec<Record>> {
        let records = self.list::<Record>(&format!("databases/{}/pages", id)).await?;
        debug!(count = records.len(), "Queried database");
        Ok(records)
    }
}
