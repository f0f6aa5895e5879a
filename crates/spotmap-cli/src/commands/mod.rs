//! Subcommand implementations.

pub mod databases;
pub mod render;
pub mod schema;
pub mod spots;
pub mod url;

use anyhow::{Context, Result};

use spotmap_core::DatabaseId;

use crate::cli::{Cli, Commands};
use crate::config::Settings;

pub async fn handle(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli)?;
    tracing::debug!(
        api = %settings.api,
        geocoder = ?settings.geocoder,
        concurrency = settings.resolve.concurrency,
        "Resolved settings"
    );

    match cli.command {
        Commands::Databases(args) => databases::run(args, &settings).await,
        Commands::Schema(args) => schema::run(args, &settings).await,
        Commands::Spots(args) => spots::run(args, &settings).await,
        Commands::Render(args) => render::run(args, &settings).await,
        Commands::Url(args) => url::run(args, &settings),
    }
}

/// Parse a database id argument.
fn database_id(raw: &str) -> Result<DatabaseId> {
    DatabaseId::new(raw).context("Invalid database id")
}
