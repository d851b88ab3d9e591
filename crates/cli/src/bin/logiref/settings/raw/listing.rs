use anyhow::Result;
use logiref_core::{DEFAULT_SIMILAR_LIMIT, SortOrder};
use serde::Deserialize;

use crate::cli::{CliArgs, Command};

use super::super::resolved::{ConfigError, ConfigSources};

/// `[listing]` table as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ListingSection {
	pub(super) sort: Option<String>,
	pub(super) similar_limit: Option<usize>,
}

impl ListingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(sort) = cli.command.filters().and_then(|filters| filters.sort) {
			self.sort = Some(sort.id().to_string());
		}
		if let Command::Similar {
			limit: Some(limit), ..
		} = &cli.command
		{
			self.similar_limit = Some(*limit);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<(SortOrder, usize)> {
		let sort = match self.sort {
			Some(value) => value.parse::<SortOrder>().map_err(|err| {
				ConfigError::invalid(
					"listing.sort",
					value.clone(),
					sources.source_for_sort(),
					err.to_string(),
				)
			})?,
			None => SortOrder::default(),
		};
		Ok((sort, self.similar_limit.unwrap_or(DEFAULT_SIMILAR_LIMIT)))
	}
}
