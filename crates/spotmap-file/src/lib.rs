//! spotmap-file - Filesystem-backed record source.
//!
//! Reads an exported workspace laid out as:
//!
//! ```text
//! <root>/databases.json              search results, as the API returns them
//! <root>/databases/<id>/schema.json  column definitions
//! <root>/databases/<id>/pages.json   records
//! <root>/geocode.json                optional address -> coordinate table
//! ```

mod geocode;
mod source;
mod store;

pub use geocode::FileGeocoder;
pub use source::FileSource;
pub use store::FileStore;
