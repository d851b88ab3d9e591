use logiref_core::MatchStrategy;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let strategy = match &config.search.strategy {
		MatchStrategy::Substring => "substring".to_string(),
		MatchStrategy::Fuzzy(options) => format!(
			"fuzzy (min score {}, min quality {})",
			options.min_score, options.min_quality
		),
	};
	vec![
		"Effective configuration:".to_string(),
		format!("  Catalog: {}", config.catalog_path.display()),
		format!("  Timestamps: {}", config.catalog.timestamps),
		format!("  Strategy: {strategy}"),
		format!(
			"  Synonym expansion: {}",
			bool_to_word(config.search.expand_synonyms)
		),
		format!(
			"  Synonym entries: {} ({} from configuration)",
			config.search.synonyms.len(),
			config.custom_synonyms
		),
		format!("  Sort: {}", config.sort),
		format!("  Similar limit: {}", config.similar_limit),
	]
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
