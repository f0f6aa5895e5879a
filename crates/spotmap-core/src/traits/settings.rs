//! Saved-map configuration trait.

use async_trait::async_trait;

use crate::Result;
use crate::render::MapSettings;

/// Persistence for per-map display settings.
///
/// No write-back target exists yet; the only implementation is
/// [`NoopMapConfigStore`](crate::render::NoopMapConfigStore).
#[async_trait]
pub trait MapConfigStore: Send + Sync {
    async fn save(&self, settings: &MapSettings) -> Result<()>;
}
