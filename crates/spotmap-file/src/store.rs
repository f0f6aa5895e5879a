//! Workspace file layout.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::trace;

use spotmap_core::error::ProtocolError;
use spotmap_core::{DatabaseId, Result};

const DATABASES_FILE: &str = "databases.json";
const DATABASES_DIR: &str = "databases";
const SCHEMA_FILE: &str = "schema.json";
const PAGES_FILE: &str = "pages.json";
const GEOCODE_FILE: &str = "geocode.json";

/// Paths and JSON reads for an exported workspace.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn databases_path(&self) -> PathBuf {
        self.root.join(DATABASES_FILE)
    }

    pub fn database_dir(&self, id: &DatabaseId) -> PathBuf {
        self.root.join(DATABASES_DIR).join(id.as_str())
    }

    pub fn schema_path(&self, id: &DatabaseId) -> PathBuf {
        self.database_dir(id).join(SCHEMA_FILE)
    }

    pub fn pages_path(&self, id: &DatabaseId) -> PathBuf {
        self.database_dir(id).join(PAGES_FILE)
    }

    pub fn geocode_path(&self) -> PathBuf {
        self.root.join(GEOCODE_FILE)
    }

    /// Read and decode a JSON file. A missing file is a 404, the way the
    /// API reports an unknown object.
    pub(crate) async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        trace!(path = %path.display(), "Reading");
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProtocolError::new(
                    404,
                    Some(format!("{} not found", path.display())),
                )
                .into());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Like [`read_json`](Self::read_json), but a missing file is `None`.
    pub(crate) async fn read_optional<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let store = FileStore::new("/ws");
        let id = DatabaseId::new("abc").unwrap();
        assert_eq!(store.databases_path(), PathBuf::from("/ws/databases.json"));
        assert_eq!(store.pages_path(&id), PathBuf::from("/ws/databases/abc/pages.json"));
        assert_eq!(store.schema_path(&id), PathBuf::from("/ws/databases/abc/schema.json"));
        assert_eq!(store.geocode_path(), PathBuf::from("/ws/geocode.json"));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let err = store
            .read_json::<serde_json::Value>(&store.databases_path())
            .await
            .unwrap_err();
        assert!(matches!(err, spotmap_core::Error::Protocol(ref e) if e.is_not_found()));

        let missing: Option<serde_json::Value> =
            store.read_optional(&store.geocode_path()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn malformed_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("databases.json"), "{not json").unwrap();
        let store = FileStore::new(dir.path());
        let err = store
            .read_json::<serde_json::Value>(&store.databases_path())
            .await
            .unwrap_err();
        assert!(matches!(err, spotmap_core::Error::Decode(_)));
    }
}
