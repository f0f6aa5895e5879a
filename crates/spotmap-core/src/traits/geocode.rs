//! Geocoding traits.

use async_trait::async_trait;

use crate::Result;
use crate::types::Coordinate;

/// A geocoding service answering one query at a time.
#[async_trait]
pub trait GeocodeBackend: Send + Sync {
    /// Look up `query` and return the first match.
    ///
    /// `Ok(None)` means the service answered but found nothing.
    async fn lookup(&self, query: &str) -> Result<Option<Coordinate>>;
}

/// Address resolution as seen by the spot resolver. Never fails; an
/// unresolvable address is `None`.
#[async_trait]
pub trait Geocode: Send + Sync {
    async fn resolve(&self, address: &str) -> Option<Coordinate>;
}
