//! File-backed record source.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, instrument};

use spotmap_core::{
    DatabaseId, DatabaseSummary, PropertySchema, Record, RecordSource, Result, active_databases,
};

use crate::store::FileStore;

/// A record source reading an exported workspace from disk.
///
/// Applies the same archived filter and dedupe the API server applies.
#[derive(Debug, Clone)]
pub struct FileSource {
    store: FileStore,
}

impl FileSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            store: FileStore::new(root),
        }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }
}

#[async_trait]
impl RecordSource for FileSource {
    #[instrument(skip(self), fields(root = %self.store.root().display()))]
    async fn list_databases(&self) -> Result<Vec<DatabaseSummary>> {
        let databases: Vec<DatabaseSummary> =
            self.store.read_json(&self.store.databases_path()).await?;
        debug!(count = databases.len(), "Read databases");
        Ok(active_databases(databases))
    }

    #[instrument(skip(self), fields(%id))]
    async fn database_schema(&self, id: &DatabaseId) -> Result<PropertySchema> {
        self.store.read_json(&self.store.schema_path(id)).await
    }

    #[instrument(skip(self), fields(%id))]
    async fn query_database(&self, id: &DatabaseId) -> Result<Vec<Record>> {
        let records: Vec<Record> = self.store.read_json(&self.store.pages_path(id)).await?;
        debug!(count = records.len(), "Read records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn write(path: std::path::PathBuf, value: serde_json::Value) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
    }

    #[tokio::test]
    async fn lists_active_unique_databases() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        write(
            source.store().databases_path(),
            json!([
                { "id": "a", "title": [{ "plain_text": "A" }] },
                { "id": "b", "title": [], "archived": true },
                { "id": "a", "title": [{ "plain_text": "A again" }] }
            ]),
        );

        let dbs = source.list_databases().await.unwrap();
        assert_eq!(dbs.len(), 1);
        assert_eq!(dbs[0].display_title(), "A");
    }

    #[tokio::test]
    async fn reads_schema_and_pages() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        let id = DatabaseId::new("abc").unwrap();
        write(
            source.store().schema_path(&id),
            json!({ "Name": { "id": "title", "name": "Name", "type": "title" } }),
        );
        write(
            source.store().pages_path(&id),
            json!([{ "id": "p1", "properties": {
                "Name": { "type": "title", "title": [{ "plain_text": "HQ" }] }
            }}]),
        );

        assert_eq!(source.database_schema(&id).await.unwrap()["Name"].kind, "title");
        let records = source.query_database(&id).await.unwrap();
        assert_eq!(records[0].id, "p1");
    }

    #[tokio::test]
    async fn unknown_database_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        let id = DatabaseId::new("missing").unwrap();
        assert!(source.query_database(&id).await.is_err());
    }
}
