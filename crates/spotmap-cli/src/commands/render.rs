//! Render command implementation.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Value, json};

use spotmap_core::{MapSession, MarkerHandle, MemoryMap, RenderConfig, SidebarEntry};

use crate::backend;
use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Database id
    pub id: String,

    /// Write the markers as a GeoJSON FeatureCollection
    #[arg(long)]
    pub geojson: Option<PathBuf>,

    /// Select column holding the listing status
    #[arg(long)]
    pub status_property: Option<String>,

    /// Status value shown with the warning style
    #[arg(long)]
    pub off_market: Option<String>,
}

pub async fn run(args: RenderArgs, settings: &Settings) -> Result<()> {
    let id = super::database_id(&args.id)?;
    let pipeline = backend::pipeline(settings).await?;

    let defaults = RenderConfig::default();
    let config = RenderConfig {
        status_property: args.status_property.unwrap_or(defaults.status_property),
        off_market: args.off_market.unwrap_or(defaults.off_market),
        // Headless: there is no layout to wait for.
        settle_delay: Duration::ZERO,
        ..defaults
    };
    let session = MapSession::new(MemoryMap::new(), config);

    let token = session.begin(&id);
    let resolution = pipeline
        .try_resolve(&id)
        .await
        .context("Failed to fetch records")?;
    let summary = session
        .show(token, resolution.spots)
        .await
        .context("Render was superseded")?;

    let sidebar = session.sidebar().await;
    for entry in &sidebar {
        output::sidebar_entry(entry);
    }

    if let Some(path) = &args.geojson {
        let mut rows = Vec::with_capacity(sidebar.len());
        for entry in sidebar {
            if let Some(handle) = session.marker_for(&entry.spot).await {
                rows.push((entry, handle));
            }
        }
        let collection = session.with_map(|map| feature_collection(map, &rows)).await;
        let json = serde_json::to_string_pretty(&collection)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        output::field("GeoJSON", &path.display().to_string());
    }

    output::success(&format!(
        "{} markers ({} records without a location)",
        summary.markers,
        resolution.unresolved.len()
    ));
    if let Some(bounds) = summary.bounds {
        output::field(
            "Bounds",
            &format!("{} .. {}", bounds.south_west, bounds.north_east),
        );
    }

    Ok(())
}

fn feature_collection(map: &MemoryMap, rows: &[(SidebarEntry, MarkerHandle)]) -> Value {
    let features: Vec<Value> = rows
        .iter()
        .filter_map(|(entry, handle)| {
            let marker = map.marker(*handle)?;
            Some(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [marker.position.lon, marker.position.lat],
                },
                "properties": {
                    "id": entry.spot,
                    "popup": marker.popup,
                    "icon": marker.icon,
                    "link": entry.link,
                    "sqft": entry.area,
                    "price": entry.price,
                    "off_market": entry.off_market,
                },
            }))
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
