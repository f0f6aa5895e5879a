//! Record source and geocoder selection.

use anyhow::{Context, Result};
use async_trait::async_trait;

use spotmap_core::{
    Coordinate, DatabaseId, DatabaseSummary, GeocodeBackend, Geocoder, PropertySchema, Record,
    RecordSource, SpotPipeline,
};
use spotmap_file::{FileGeocoder, FileSource};
use spotmap_http::{ApiGeocoder, HttpSource, NominatimGeocoder};

use crate::config::{GeocoderKind, Settings};

/// Record source wrapper for CLI use.
#[derive(Debug)]
pub enum CliSource {
    File(FileSource),
    Http(HttpSource),
}

impl CliSource {
    pub fn open(settings: &Settings) -> Result<Self> {
        if settings.api.is_local() {
            let path = settings
                .api
                .to_file_path()
                .context("Failed to convert file:// URL to path")?;
            Ok(CliSource::File(FileSource::new(path)))
        } else {
            let source = HttpSource::new(settings.api.clone()).context("Failed to build HTTP client")?;
            Ok(CliSource::Http(source))
        }
    }
}

#[async_trait]
impl RecordSource for CliSource {
    async fn list_databases(&self) -> spotmap_core::Result<Vec<DatabaseSummary>> {
        match self {
            CliSource::File(source) => source.list_databases().await,
            CliSource::Http(source) => source.list_databases().await,
        }
    }

    async fn database_schema(&self, id: &DatabaseId) -> spotmap_core::Result<PropertySchema> {
        match self {
            CliSource::File(source) => source.database_schema(id).await,
            CliSource::Http(source) => source.database_schema(id).await,
        }
    }

    async fn query_database(&self, id: &DatabaseId) -> spotmap_core::Result<Vec<Record>> {
        match self {
            CliSource::File(source) => source.query_database(id).await,
            CliSource::Http(source) => source.query_database(id).await,
        }
    }
}

/// Geocoding backend wrapper for CLI use.
#[derive(Debug)]
pub enum CliGeocoder {
    Api(ApiGeocoder),
    Nominatim(NominatimGeocoder),
    File(FileGeocoder),
    Disabled,
}

impl CliGeocoder {
    pub async fn open(settings: &Settings) -> Result<Self> {
        let geocoder = match settings.geocoder {
            // Settings::load resolves auto; it only appears here for exhaustiveness.
            GeocoderKind::Api | GeocoderKind::Auto => {
                anyhow::ensure!(
                    settings.api.is_network(),
                    "The api geocoder needs a network API URL"
                );
                CliGeocoder::Api(
                    ApiGeocoder::new(settings.api.clone()).context("Failed to build HTTP client")?,
                )
            }
            GeocoderKind::Nominatim => CliGeocoder::Nominatim(
                NominatimGeocoder::new().context("Failed to build HTTP client")?,
            ),
            GeocoderKind::File => {
                let root = settings
                    .api
                    .to_file_path()
                    .context("The file geocoder needs a file:// API URL")?;
                CliGeocoder::File(
                    FileGeocoder::load(root)
                        .await
                        .context("Failed to load geocode table")?,
                )
            }
            GeocoderKind::None => CliGeocoder::Disabled,
        };
        Ok(geocoder)
    }
}

#[async_trait]
impl GeocodeBackend for CliGeocoder {
    async fn lookup(&self, query: &str) -> spotmap_core::Result<Option<Coordinate>> {
        match self {
            CliGeocoder::Api(backend) => backend.lookup(query).await,
            CliGeocoder::Nominatim(backend) => backend.lookup(query).await,
            CliGeocoder::File(backend) => backend.lookup(query).await,
            CliGeocoder::Disabled => Ok(None),
        }
    }
}

pub type CliPipeline = SpotPipeline<CliSource, Geocoder<CliGeocoder>>;

/// Build the pipeline described by `settings`.
pub async fn pipeline(settings: &Settings) -> Result<CliPipeline> {
    let source = CliSource::open(settings)?;
    let geocoder = Geocoder::with_policy(
        CliGeocoder::open(settings).await?,
        settings.region.clone(),
    );
    Ok(SpotPipeline::with_options(source, geocoder, settings.resolve))
}
