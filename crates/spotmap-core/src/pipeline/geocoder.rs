//! Address geocoding with a single regional-qualifier retry.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::traits::{Geocode, GeocodeBackend};
use crate::types::Coordinate;

/// When and how an unqualified address is retried.
///
/// An address is *qualified* when it contains one of `qualifiers` as a whole
/// word, compared case-insensitively. An unqualified address that finds no
/// match is retried once with `suffix` appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPolicy {
    qualifiers: Vec<String>,
    suffix: String,
}

impl Default for RegionPolicy {
    fn default() -> Self {
        Self::new(["CA", "USA"], ", CA, USA")
    }
}

impl RegionPolicy {
    pub fn new<I, S>(qualifiers: I, suffix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            qualifiers: qualifiers.into_iter().map(Into::into).collect(),
            suffix: suffix.into(),
        }
    }

    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self::new(Vec::<String>::new(), "")
    }

    pub fn qualifiers(&self) -> &[String] {
        &self.qualifiers
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// True if `address` already names one of the qualifiers.
    pub fn is_qualified(&self, address: &str) -> bool {
        address
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|word| !word.is_empty())
            .any(|word| self.qualifiers.iter().any(|q| q.eq_ignore_ascii_case(word)))
    }

    /// The retry query for `address`, or `None` if it must not be retried.
    pub fn retry_query(&self, address: &str) -> Option<String> {
        if self.suffix.is_empty() || self.is_qualified(address) {
            return None;
        }
        Some(format!("{}{}", address, self.suffix))
    }
}

/// Resolves addresses through a [`GeocodeBackend`].
///
/// Backend errors are logged and treated as "no coordinate"; they never
/// trigger the retry.
#[derive(Debug, Clone)]
pub struct Geocoder<B> {
    backend: B,
    policy: RegionPolicy,
}

impl<B: GeocodeBackend> Geocoder<B> {
    /// Create a geocoder with the default region policy.
    pub fn new(backend: B) -> Self {
        Self::with_policy(backend, RegionPolicy::default())
    }

    pub fn with_policy(backend: B, policy: RegionPolicy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> &RegionPolicy {
        &self.policy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn attempt(&self, query: &str) -> Result<Option<Coordinate>, ()> {
        self.backend.lookup(query).await.map_err(|e| {
            warn!(error = %e, query, "Geocoding lookup failed");
        })
    }
}

#[async_trait]
impl<B: GeocodeBackend> Geocode for Geocoder<B> {
    #[instrument(skip(self))]
    async fn resolve(&self, address: &str) -> Option<Coordinate> {
        match self.attempt(address).await {
            Ok(Some(coordinate)) => return Some(coordinate),
            Ok(None) => {}
            Err(()) => return None,
        }

        let retry = self.policy.retry_query(address)?;
        debug!(%retry, "No match, retrying with regional qualifier");

        self.attempt(&retry).await.ok().flatten()
    }
}
