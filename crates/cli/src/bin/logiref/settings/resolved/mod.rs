use std::path::PathBuf;

use logiref_core::{CatalogOptions, SearchOptions, SortOrder};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub catalog_path: PathBuf,
	pub catalog: CatalogOptions,
	pub search: SearchOptions,
	/// Number of synonym entries contributed by configuration.
	pub custom_synonyms: usize,
	pub sort: SortOrder,
	pub similar_limit: usize,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(crate) fn sample_config() -> ResolvedConfig {
	ResolvedConfig {
		catalog_path: PathBuf::from("/tmp/catalog.json"),
		catalog: CatalogOptions::default(),
		search: SearchOptions::default(),
		custom_synonyms: 0,
		sort: SortOrder::default(),
		similar_limit: logiref_core::DEFAULT_SIMILAR_LIMIT,
	}
}
