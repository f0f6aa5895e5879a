//! Record source trait.

use async_trait::async_trait;

use crate::Result;
use crate::record::{DatabaseSummary, PropertySchema, Record};
use crate::types::DatabaseId;

/// A hosted structured-data workspace. Reads are always live.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// List the databases visible to this source.
    ///
    /// Implementations filter out archived databases; the list may still
    /// contain the same id more than once.
    async fn list_databases(&self) -> Result<Vec<DatabaseSummary>>;

    /// Fetch the column definitions of a database.
    async fn database_schema(&self, id: &DatabaseId) -> Result<PropertySchema>;

    /// Fetch every record of a database.
    async fn query_database(&self, id: &DatabaseId) -> Result<Vec<Record>>;
}
