//! spotmap-core - Core types, traits and the spot-resolution pipeline.
//!
//! Records from a structured-data source are turned into [`Spot`]s (records
//! with a concrete coordinate) and rendered as markers through a [`MapView`].
//!
//! # Example
//!
//! ```no_run
//! use spotmap_core::{DatabaseId, Geocoder, MapSession, MemoryMap, RenderConfig, SpotPipeline};
//! # use spotmap_core::{RecordSource, GeocodeBackend};
//!
//! # async fn example(source: impl RecordSource, backend: impl GeocodeBackend) -> spotmap_core::Result<()> {
//! let pipeline = SpotPipeline::new(source, Geocoder::new(backend));
//! let session = MapSession::new(MemoryMap::new(), RenderConfig::default());
//!
//! let db = DatabaseId::new("0f3c1a2b-4d5e-6f70-8192-a3b4c5d6e7f8")?;
//! if let Some(summary) = session.open(&pipeline, &db).await {
//!     println!("{} markers", summary.markers);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod traits;
pub mod types;

pub use error::Error;
pub use pipeline::{
    Geocoder, RegionPolicy, Resolution, ResolveOptions, SpotPipeline, SpotResolver,
    active_databases, display_address, raw_coordinates, unique_databases,
};
pub use record::{
    DatabaseSummary, Property, PropertyDefinition, PropertySchema, Record, RichText,
    SelectOption,
};
pub use render::{
    MapSession, MapSettings, MemoryMap, NoopMapConfigStore, PassToken, RenderConfig,
    RenderSummary, SidebarEntry, Viewport,
};
pub use traits::{Geocode, GeocodeBackend, MapConfigStore, MapView, RecordSource};
pub use types::{
    ApiUrl, Bounds, Coordinate, DatabaseId, MarkerHandle, MarkerIcon, MarkerSpec, Padding,
    Spot, SpotId,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
