use logiref_core::MatchStrategy;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let MatchStrategy::Fuzzy(options) = &config.search.strategy
		&& !(options.min_score.is_finite() && options.min_score >= 0.0)
	{
		return Err(ConfigError::invalid(
			"search.fuzzy_min_score",
			options.min_score.to_string(),
			sources.source_for_min_score(),
			"must be a finite, non-negative number",
		));
	}

	if let MatchStrategy::Fuzzy(options) = &config.search.strategy
		&& !(options.min_quality > 0.0 && options.min_quality <= 1.0)
	{
		return Err(ConfigError::invalid(
			"search.fuzzy_min_quality",
			options.min_quality.to_string(),
			sources.source_for_min_quality(),
			"must be greater than 0 and at most 1",
		));
	}

	if config.similar_limit == 0 {
		return Err(ConfigError::invalid(
			"listing.similar_limit",
			config.similar_limit.to_string(),
			sources.source_for_similar_limit(),
			"must be greater than zero",
		));
	}

	Ok(())
}
