use anyhow::Result;
use indexmap::IndexMap;
use logiref_core::{FuzzyOptions, MatchStrategy, SearchOptions, SynonymTable};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources};

/// `[search]` table as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) strategy: Option<String>,
	pub(super) fuzzy_min_score: Option<f32>,
	pub(super) fuzzy_min_quality: Option<f32>,
	pub(super) expand_synonyms: Option<bool>,
	/// Extra synonym entries merged over the built-in table, in file order.
	pub(super) synonyms: IndexMap<String, Vec<String>>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(strategy) = cli.strategy {
			self.strategy = Some(strategy.as_str().to_string());
		}
		if let Some(score) = cli.min_score {
			self.fuzzy_min_score = Some(score);
		}
		if let Some(quality) = cli.min_quality {
			self.fuzzy_min_quality = Some(quality);
		}
		if let Some(enabled) = cli.synonyms {
			self.expand_synonyms = Some(enabled);
		}
	}

	/// Returns the options and the number of configured synonym entries.
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<(SearchOptions, usize)> {
		let defaults = FuzzyOptions::default();
		let fuzzy = defaults
			.with_min_score(self.fuzzy_min_score.unwrap_or(defaults.min_score))
			.with_min_quality(self.fuzzy_min_quality.unwrap_or(defaults.min_quality));
		let strategy = match self.strategy.as_deref().map(str::trim) {
			None | Some("substring") => MatchStrategy::Substring,
			Some("fuzzy") => MatchStrategy::Fuzzy(fuzzy),
			Some(other) => {
				return Err(ConfigError::invalid(
					"search.strategy",
					other,
					sources.source_for_strategy(),
					"expected `substring` or `fuzzy`",
				)
				.into());
			}
		};

		let custom: SynonymTable = self.synonyms.into_iter().collect();
		let custom_entries = custom.len();
		let options = SearchOptions::default()
			.with_strategy(strategy)
			.with_synonyms(SynonymTable::builtin().merged_with(&custom))
			.with_expansion(self.expand_synonyms.unwrap_or(true));
		Ok((options, custom_entries))
	}
}
