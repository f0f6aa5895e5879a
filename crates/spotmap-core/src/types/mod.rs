//! Core spotmap types.
//!
//! Identifiers and URLs are validated at construction time; coordinates are
//! always finite.

mod api_url;
mod database_id;
mod geo;
mod marker;
mod spot;

pub use api_url::ApiUrl;
pub use database_id::DatabaseId;
pub use geo::{Bounds, Coordinate, Padding};
pub use marker::{MarkerHandle, MarkerIcon, MarkerSpec};
pub use spot::{Spot, SpotId};
