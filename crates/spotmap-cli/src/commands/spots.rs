//! Resolve spots command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::backend;
use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct SpotsArgs {
    /// Database id
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Serialize)]
struct SpotLine<'a> {
    id: &'a str,
    address: &'a str,
    lat: f64,
    lon: f64,
}

pub async fn run(args: SpotsArgs, settings: &Settings) -> Result<()> {
    let id = super::database_id(&args.id)?;
    let pipeline = backend::pipeline(settings).await?;

    let resolution = pipeline
        .try_resolve(&id)
        .await
        .context("Failed to fetch records")?;

    for spot in &resolution.spots {
        let line = SpotLine {
            id: &spot.record.id,
            address: &spot.display_address,
            lat: spot.coordinate.lat,
            lon: spot.coordinate.lon,
        };
        output::json(&line, args.pretty)?;
    }

    output::note(&format!(
        "{} spots, {} records without a location",
        resolution.spots.len(),
        resolution.unresolved.len()
    ));

    Ok(())
}
