//! Resolved spot type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::Record;

use super::Coordinate;

/// Identity of a spot: the id of the record it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(String);

impl SpotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record resolved to a concrete coordinate, ready for map placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    /// The record this spot was resolved from.
    pub record: Record,
    /// Display name, also used as the geocoding query.
    pub display_address: String,
    pub coordinate: Coordinate,
}

impl Spot {
    pub fn id(&self) -> SpotId {
        SpotId::new(self.record.id.clone())
    }
}
