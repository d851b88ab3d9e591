use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use logiref_core::{CatalogOptions, TimestampPolicy, app_dirs};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources};

/// `[catalog]` table as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) path: Option<PathBuf>,
	pub(super) timestamps: Option<String>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.path = Some(path);
		}
		if let Some(policy) = cli.timestamps {
			self.timestamps = Some(policy.id().to_string());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<(PathBuf, CatalogOptions)> {
		let path = match self.path {
			Some(path) if path.is_relative() => env::current_dir()
				.context("failed to resolve current directory for catalog path")?
				.join(path),
			Some(path) => path,
			None => default_catalog_path()?,
		};

		let timestamps = match self.timestamps {
			Some(value) => value.parse::<TimestampPolicy>().map_err(|err| {
				ConfigError::invalid(
					"catalog.timestamps",
					value.clone(),
					sources.source_for_timestamps(),
					err.to_string(),
				)
			})?,
			None => TimestampPolicy::default(),
		};

		Ok((path, CatalogOptions::default().with_timestamps(timestamps)))
	}
}

/// `./data/catalog.json` when present, otherwise the data directory copy.
fn default_catalog_path() -> Result<PathBuf> {
	let local = env::current_dir()
		.context("failed to determine working directory")?
		.join("data")
		.join(app_dirs::CATALOG_FILE);
	if local.is_file() {
		return Ok(local);
	}
	app_dirs::installed_catalog()
}
