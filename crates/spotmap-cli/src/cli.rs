//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::databases::DatabasesArgs;
use crate::commands::render::RenderArgs;
use crate::commands::schema::SchemaArgs;
use crate::commands::spots::SpotsArgs;
use crate::commands::url::UrlArgs;
use crate::config::GeocoderKind;

/// Resolve database records into map spots.
#[derive(Parser, Debug)]
#[command(name = "spotmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Record API base URL (https://..., or file:///path for an exported workspace)
    #[arg(long, env = "SPOTMAP_API", global = true)]
    pub api: Option<String>,

    /// Geocoding backend
    #[arg(long, value_enum, global = true)]
    pub geocoder: Option<GeocoderKind>,

    /// Records resolved at once (output order is preserved)
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    /// Word that marks an address as already qualified (repeatable; replaces the defaults)
    #[arg(long = "region-qualifier", value_name = "Q", global = true)]
    pub region_qualifiers: Vec<String>,

    /// Text appended to an unqualified address on the retry lookup
    #[arg(long, value_name = "S", global = true)]
    pub region_suffix: Option<String>,

    /// Configuration file (defaults to config.json in the platform config directory)
    #[arg(long, env = "SPOTMAP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List databases
    Databases(DatabasesArgs),

    /// Show a database's columns
    Schema(SchemaArgs),

    /// Resolve a database's records into spots
    Spots(SpotsArgs),

    /// Resolve and render a database, printing the sidebar list
    Render(RenderArgs),

    /// Print the shareable map address of a database
    Url(UrlArgs),
}
