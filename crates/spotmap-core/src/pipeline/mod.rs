//! The spot-resolution pipeline.
//!
//! Database summaries are deduplicated, records are normalized, missing
//! coordinates are geocoded, and the survivors become [`Spot`](crate::Spot)s.

mod dedupe;
mod fetch;
mod geocoder;
mod normalize;
mod resolver;

pub use dedupe::{active_databases, unique_databases};
pub use fetch::SpotPipeline;
pub use geocoder::{Geocoder, RegionPolicy};
pub use normalize::{
    LATITUDE_PROPERTY, LONGITUDE_PROPERTY, NO_TITLE, RawCoordinates, display_address,
    raw_coordinates,
};
pub use resolver::{Resolution, ResolveOptions, SpotResolver};
