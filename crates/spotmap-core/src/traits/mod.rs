//! Traits at the seams of the pipeline: where records come from, how
//! addresses are geocoded, and what the markers are drawn on.

mod geocode;
mod map;
mod settings;
mod source;

pub use geocode::{Geocode, GeocodeBackend};
pub use map::MapView;
pub use settings::MapConfigStore;
pub use source::RecordSource;
