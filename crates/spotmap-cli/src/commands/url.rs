//! Map address command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Database id
    pub id: String,
}

pub fn run(args: UrlArgs, settings: &Settings) -> Result<()> {
    let id = super::database_id(&args.id)?;
    println!("{}", settings.api.map_url(&id));
    Ok(())
}
