use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::{CliArgs, Command};

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod listing;
mod search;

use catalog::CatalogSection;
use listing::ListingSection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	search: SearchSection,
	listing: ListingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.listing.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			timestamps: detect_source(
				cli.timestamps.is_some(),
				self.catalog.timestamps.is_some(),
				"LOGIREF__CATALOG__TIMESTAMPS",
				"--timestamps",
				"catalog.timestamps",
			),
			strategy: detect_source(
				cli.strategy.is_some(),
				self.search.strategy.is_some(),
				"LOGIREF__SEARCH__STRATEGY",
				"--strategy",
				"search.strategy",
			),
			fuzzy_min_score: detect_source(
				cli.min_score.is_some(),
				self.search.fuzzy_min_score.is_some(),
				"LOGIREF__SEARCH__FUZZY_MIN_SCORE",
				"--min-score",
				"search.fuzzy_min_score",
			),
			fuzzy_min_quality: detect_source(
				cli.min_quality.is_some(),
				self.search.fuzzy_min_quality.is_some(),
				"LOGIREF__SEARCH__FUZZY_MIN_QUALITY",
				"--min-quality",
				"search.fuzzy_min_quality",
			),
			sort: detect_source(
				cli.command.filters().is_some_and(|filters| filters.sort.is_some()),
				self.listing.sort.is_some(),
				"LOGIREF__LISTING__SORT",
				"--sort",
				"listing.sort",
			),
			similar_limit: detect_source(
				matches!(cli.command, Command::Similar { limit: Some(_), .. }),
				self.listing.similar_limit.is_some(),
				"LOGIREF__LISTING__SIMILAR_LIMIT",
				"--limit",
				"listing.similar_limit",
			),
		};

		let (catalog_path, catalog) = self.catalog.resolve(&sources)?;
		let (search, custom_synonyms) = self.search.resolve(&sources)?;
		let (sort, similar_limit) = self.listing.resolve(&sources)?;

		let config = ResolvedConfig {
			catalog_path,
			catalog,
			search,
			custom_synonyms,
			sort,
			similar_limit,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
