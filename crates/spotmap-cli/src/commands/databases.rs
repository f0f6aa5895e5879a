//! List databases command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use spotmap_core::{RecordSource, unique_databases};

use crate::backend::CliSource;
use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct DatabasesArgs {
    /// Print each database as a JSON line
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    id: &'a str,
    title: &'a str,
}

pub async fn run(args: DatabasesArgs, settings: &Settings) -> Result<()> {
    let source = CliSource::open(settings)?;

    let databases = source
        .list_databases()
        .await
        .context("Failed to list databases")?;
    let databases = unique_databases(databases);

    if databases.is_empty() {
        output::note("No databases found.");
        return Ok(());
    }

    for db in &databases {
        if args.json {
            output::json(
                &Listing {
                    id: &db.id,
                    title: db.display_title(),
                },
                false,
            )?;
        } else {
            println!("{}  {}", db.id.dimmed(), db.display_title());
        }
    }

    Ok(())
}
