use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use indexmap::IndexMap;
use logiref_core::{MatchStrategy, SortOrder, TimestampPolicy};

use super::RawConfig;
use crate::cli::CliArgs;

fn parse(args: &[&str]) -> CliArgs {
	let mut argv = vec!["logiref", "--no-config"];
	argv.extend_from_slice(args);
	CliArgs::parse_from(argv)
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = parse(&[
		"--catalog",
		"/srv/catalog.json",
		"--timestamps",
		"list-position",
		"--strategy",
		"fuzzy",
		"--min-score",
		"12.5",
		"--min-quality",
		"0.8",
		"--synonyms",
		"false",
		"list",
		"--sort",
		"date-desc",
	]);

	let mut config = RawConfig::default();
	config.search.strategy = Some("substring".into());
	config.listing.sort = Some("name-desc".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/catalog.json")));
	assert_eq!(config.catalog.timestamps.as_deref(), Some("list-position"));
	assert_eq!(config.search.strategy.as_deref(), Some("fuzzy"));
	assert_eq!(config.search.fuzzy_min_score, Some(12.5));
	assert_eq!(config.search.expand_synonyms, Some(false));
	assert_eq!(config.listing.sort.as_deref(), Some("date-desc"));

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.catalog.timestamps, TimestampPolicy::ListPosition);
	assert!(matches!(
		resolved.search.strategy,
		MatchStrategy::Fuzzy(options) if options.min_score == 12.5 && options.min_quality == 0.8
	));
	assert!(!resolved.search.expand_synonyms);
	assert_eq!(resolved.sort, SortOrder::DateDesc);
}

#[test]
fn similar_limit_flag_overrides_config() {
	let cli = parse(&["similar", "kahoot", "--limit", "7"]);
	let mut config = RawConfig::default();
	config.listing.similar_limit = Some(2);
	config.apply_cli_overrides(&cli);
	assert_eq!(config.listing.similar_limit, Some(7));
}

#[test]
fn configured_synonyms_extend_the_builtin_table() {
	let cli = parse(&["tags"]);
	let mut config = RawConfig::default();
	config.catalog.path = Some(PathBuf::from("/srv/catalog.json"));
	config.search.synonyms = IndexMap::from([(
		"maths".to_string(),
		vec!["mathématiques".to_string(), "géométrie".to_string()],
	)]);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.custom_synonyms, 1);
	let terms = resolved.search.terms("maths");
	assert_eq!(terms, vec!["maths", "mathematiques", "geometrie"]);
	assert!(resolved.search.terms("ia").len() > 1);
}

#[test]
fn configured_synonyms_expand_in_file_order() {
	let mut file = tempfile::Builder::new()
		.suffix(".toml")
		.tempfile()
		.expect("create temp config");
	writeln!(
		file,
		"[catalog]\npath = \"/srv/catalog.json\"\n\n[search.synonyms]\nzz = [\"zulu\"]\naa = [\"alpha\"]"
	)
	.expect("write config");

	let path = file.path().to_string_lossy().into_owned();
	let cli = parse(&["-c", path.as_str(), "tags"]);
	let resolved = crate::settings::load(&cli).expect("config loads");
	assert_eq!(resolved.custom_synonyms, 2);
	assert_eq!(resolved.search.terms("zz aa"), vec!["zz aa", "zulu", "alpha"]);
}

#[test]
fn unknown_values_report_their_origin() {
	let cli = parse(&["tags"]);
	let mut config = RawConfig::default();
	config.catalog.path = Some(PathBuf::from("/srv/catalog.json"));
	config.listing.sort = Some("newest".into());

	let err = config.resolve(&cli).expect_err("unknown sort rejected");
	let message = err.to_string();
	assert!(message.contains("listing.sort"));
	assert!(message.contains("configuration key"));
}

#[test]
fn fuzzy_min_score_must_be_non_negative() {
	let cli = parse(&["--strategy", "fuzzy", "--min-score=-3", "tags"]);
	let mut config = RawConfig::default();
	config.catalog.path = Some(PathBuf::from("/srv/catalog.json"));
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("negative score rejected");
	assert!(err.to_string().contains("--min-score"));
}
