//! spotmap-http - HTTP record source and geocoding backends.
//!
//! [`HttpSource`] and [`ApiGeocoder`] talk to a deployment serving the
//! `/api/...` routes; [`NominatimGeocoder`] queries OpenStreetMap Nominatim
//! directly.

mod client;
mod geocode;
mod nominatim;
mod source;

pub use client::ApiClient;
pub use geocode::ApiGeocoder;
pub use nominatim::{NOMINATIM_SEARCH_URL, NominatimGeocoder};
pub use source::HttpSource;
