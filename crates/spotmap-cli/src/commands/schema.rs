//! Database schema command implementation.

use anyhow::{Context, Result};
use clap::Args;

use spotmap_core::RecordSource;

use crate::backend::CliSource;
use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Database id
    pub id: String,

    /// Print the raw schema as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SchemaArgs, settings: &Settings) -> Result<()> {
    let id = super::database_id(&args.id)?;
    let source = CliSource::open(settings)?;

    let schema = source
        .database_schema(&id)
        .await
        .context("Failed to fetch database schema")?;

    if args.json {
        return output::json(&schema, true);
    }

    for (name, definition) in &schema {
        output::field(name, &definition.kind);
    }

    Ok(())
}
