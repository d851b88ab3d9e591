use std::fmt;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) timestamps: Option<SettingSource>,
	pub(crate) strategy: Option<SettingSource>,
	pub(crate) fuzzy_min_score: Option<SettingSource>,
	pub(crate) fuzzy_min_quality: Option<SettingSource>,
	pub(crate) sort: Option<SettingSource>,
	pub(crate) similar_limit: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_timestamps(&self) -> SettingSource {
		self.timestamps
			.clone()
			.unwrap_or(SettingSource::ConfigKey("catalog.timestamps"))
	}

	pub(crate) fn source_for_strategy(&self) -> SettingSource {
		self.strategy
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.strategy"))
	}

	pub(crate) fn source_for_min_score(&self) -> SettingSource {
		self.fuzzy_min_score
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.fuzzy_min_score"))
	}

	pub(crate) fn source_for_min_quality(&self) -> SettingSource {
		self.fuzzy_min_quality
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.fuzzy_min_quality"))
	}

	pub(crate) fn source_for_sort(&self) -> SettingSource {
		self.sort
			.clone()
			.unwrap_or(SettingSource::ConfigKey("listing.sort"))
	}

	pub(crate) fn source_for_similar_limit(&self) -> SettingSource {
		self.similar_limit
			.clone()
			.unwrap_or(SettingSource::ConfigKey("listing.similar_limit"))
	}
}
