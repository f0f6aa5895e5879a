//! Settings resolution: flags, then environment, then the config file, then
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use spotmap_core::{ApiUrl, RegionPolicy, ResolveOptions};

use crate::cli::Cli;

/// Which geocoding backend resolves addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeocoderKind {
    /// `api` for network APIs, `file` for file:// workspaces
    #[default]
    Auto,
    /// The API's /api/geocode route
    Api,
    /// OpenStreetMap Nominatim, queried directly
    Nominatim,
    /// The workspace's geocode.json table
    File,
    /// Never geocode; only stored coordinates are used
    None,
}

/// Contents of `config.json`. Every key is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api: Option<String>,
    geocoder: Option<GeocoderKind>,
    concurrency: Option<usize>,
    region_qualifiers: Option<Vec<String>>,
    region_suffix: Option<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiUrl,
    pub geocoder: GeocoderKind,
    pub resolve: ResolveOptions,
    pub region: RegionPolicy,
}

impl Settings {
    /// Resolve settings for this invocation.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => read_config(path)?
                .with_context(|| format!("Config file {} not found", path.display()))?,
            None => match default_config_path() {
                Some(path) => read_config(&path)?.unwrap_or_default(),
                None => {
                    tracing::warn!("No platform config directory, using defaults");
                    FileConfig::default()
                }
            },
        };

        Self::merge(cli, file)
    }

    fn merge(cli: &Cli, file: FileConfig) -> Result<Self> {
        let api = cli
            .api
            .clone()
            .or(file.api)
            .context("No API configured. Pass --api or set SPOTMAP_API.")?;
        let api = ApiUrl::new(&api).context("Invalid API URL")?;

        let geocoder = match cli.geocoder.or(file.geocoder).unwrap_or_default() {
            GeocoderKind::Auto if api.is_local() => GeocoderKind::File,
            GeocoderKind::Auto => GeocoderKind::Api,
            kind => kind,
        };

        let concurrency = cli
            .concurrency
            .or(file.concurrency)
            .unwrap_or(ResolveOptions::default().concurrency);
        anyhow::ensure!(concurrency > 0, "concurrency must be at least 1");

        let defaults = RegionPolicy::default();
        let qualifiers = if cli.region_qualifiers.is_empty() {
            file.region_qualifiers
                .unwrap_or_else(|| defaults.qualifiers().to_vec())
        } else {
            cli.region_qualifiers.clone()
        };
        let suffix = cli
            .region_suffix
            .clone()
            .or(file.region_suffix)
            .unwrap_or_else(|| defaults.suffix().to_string());
        let region = RegionPolicy::new(qualifiers, suffix);

        Ok(Self {
            api,
            geocoder,
            resolve: ResolveOptions { concurrency },
            region,
        })
    }
}

/// `config.json` in the platform config directory.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "spotmap").map(|dirs| dirs.config_dir().join("config.json"))
}

fn read_config(path: &Path) -> Result<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["spotmap"];
        argv.extend_from_slice(args);
        argv.push("databases");
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            api: Some("https://file.example.com".to_string()),
            concurrency: Some(8),
            ..Default::default()
        };
        let settings = Settings::merge(
            &cli(&["--api", "https://flag.example.com", "--concurrency", "2"]),
            file,
        )
        .unwrap();

        assert_eq!(settings.api.as_str(), "https://flag.example.com/");
        assert_eq!(settings.resolve.concurrency, 2);
    }

    #[test]
    fn auto_geocoder_follows_api_kind() {
        let network = Settings::merge(&cli(&["--api", "https://a.example.com"]), FileConfig::default()).unwrap();
        assert_eq!(network.geocoder, GeocoderKind::Api);

        let local = Settings::merge(&cli(&["--api", "file:///tmp/ws"]), FileConfig::default()).unwrap();
        assert_eq!(local.geocoder, GeocoderKind::File);
    }

    #[test]
    fn region_policy_from_file() {
        let file = FileConfig {
            api: Some("https://a.example.com".to_string()),
            region_qualifiers: Some(vec!["UK".to_string()]),
            region_suffix: Some(", London, UK".to_string()),
            ..Default::default()
        };
        let settings = Settings::merge(&cli(&[]), file).unwrap();
        assert!(settings.region.is_qualified("10 Downing St, uk"));
        assert_eq!(settings.region.suffix(), ", London, UK");
    }

    #[test]
    fn region_flags_override_file() {
        let file = FileConfig {
            api: Some("https://a.example.com".to_string()),
            region_qualifiers: Some(vec!["UK".to_string()]),
            region_suffix: Some(", London, UK".to_string()),
            ..Default::default()
        };
        let settings = Settings::merge(
            &cli(&[
                "--region-qualifier",
                "OR",
                "--region-qualifier",
                "Oregon",
                "--region-suffix",
                ", OR, USA",
            ]),
            file,
        )
        .unwrap();

        assert_eq!(settings.region.qualifiers(), ["OR", "Oregon"]);
        assert_eq!(settings.region.suffix(), ", OR, USA");
        assert!(!settings.region.is_qualified("10 Downing St, UK"));
    }

    #[test]
    fn region_suffix_flag_keeps_file_qualifiers() {
        let file = FileConfig {
            api: Some("https://a.example.com".to_string()),
            region_qualifiers: Some(vec!["UK".to_string()]),
            ..Default::default()
        };
        let settings = Settings::merge(&cli(&["--region-suffix", ", UK"]), file).unwrap();

        assert_eq!(settings.region.qualifiers(), ["UK"]);
        assert_eq!(settings.region.suffix(), ", UK");
    }

    #[test]
    fn missing_api_is_an_error() {
        assert!(Settings::merge(&cli(&[]), FileConfig::default()).is_err());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let result = Settings::merge(
            &cli(&["--api", "https://a.example.com", "--concurrency", "0"]),
            FileConfig::default(),
        );
        assert!(result.is_err());
    }
}
