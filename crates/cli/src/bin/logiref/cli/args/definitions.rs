use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};
use logiref_core::{PopularFilter, SortOrder, TimestampPolicy};

use super::options::{KeyArg, LogFormat, OutputFormat, StrategyArg, TagKindArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `logiref` binary.
#[derive(Parser, Debug)]
#[command(
	name = "logiref",
	version,
	long_version = long_version(),
	about = "Browse the educational software catalog and its data-protection ratings",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LOGIREF_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		global = true,
		help = "Catalog JSON file to load (default: ./data/catalog.json or the data directory)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		long,
		value_name = "POLICY",
		global = true,
		help = "How missing dates are filled: authored, list-position, id-hash (default: authored)"
	)]
	pub(crate) timestamps: Option<TimestampPolicy>,
	#[arg(
		long,
		value_enum,
		global = true,
		help = "Free-text matching strategy (default: substring)"
	)]
	pub(crate) strategy: Option<StrategyArg>,
	#[arg(
		long = "min-score",
		value_name = "SCORE",
		global = true,
		help = "Minimum weighted relevance for fuzzy matches (default: 0)"
	)]
	pub(crate) min_score: Option<f32>,
	#[arg(
		long = "min-quality",
		value_name = "RATIO",
		global = true,
		help = "Share of a word's exact-match score a misspelling must reach (default: 0.5)"
	)]
	pub(crate) min_quality: Option<f32>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		global = true,
		help = "Expand queries with synonyms (default: enabled)"
	)]
	pub(crate) synonyms: Option<bool>,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		global = true,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		global = true,
		help = "Increase log verbosity; repeat for more detail"
	)]
	pub(crate) verbose: u8,
	#[arg(long, global = true, help = "Disable logging entirely")]
	pub(crate) quiet: bool,
	#[arg(
		long = "log-format",
		value_enum,
		default_value_t = LogFormat::Text,
		global = true,
		help = "Format of log lines written to stderr"
	)]
	pub(crate) log_format: LogFormat,
	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
	/// List catalog entries matching the given filters.
	List(FilterArgs),
	/// Show autocomplete suggestions for a query.
	Suggest {
		query: String,
		#[arg(
			long,
			value_enum,
			value_delimiter = ',',
			value_name = "KEY",
			help = "Replay navigation keys against the suggestions (up, down, enter, escape)"
		)]
		keys: Vec<KeyArg>,
	},
	/// Recommend tools similar to a catalog entry.
	Similar {
		id: String,
		#[arg(short, long, value_name = "NUM", help = "Maximum number of recommendations (default: 3)")]
		limit: Option<usize>,
	},
	/// Show one entry with its alternatives and its neighbours in a listing.
	Show {
		id: String,
		#[command(flatten)]
		filters: FilterArgs,
	},
	/// List the distinct tags used across the catalog.
	Tags {
		#[arg(value_enum, default_value_t = TagKindArg::All)]
		kind: TagKindArg,
	},
}

impl Command {
	pub(crate) fn filters(&self) -> Option<&FilterArgs> {
		match self {
			Command::List(filters) | Command::Show { filters, .. } => Some(filters),
			_ => None,
		}
	}
}

/// Filter and sort selection shared by listing commands.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct FilterArgs {
	#[arg(short, long, value_name = "TEXT", help = "Free-text query")]
	pub(crate) query: Option<String>,
	#[arg(long = "category", value_name = "TAG", help = "Keep entries in this category (repeatable)")]
	pub(crate) categories: Vec<String>,
	#[arg(long = "discipline", value_name = "TAG", help = "Keep entries for this discipline (repeatable)")]
	pub(crate) disciplines: Vec<String>,
	#[arg(long = "activity", value_name = "TAG", help = "Keep entries supporting this activity (repeatable)")]
	pub(crate) activities: Vec<String>,
	#[arg(
		long = "level",
		value_name = "LEVEL",
		value_parser = clap::value_parser!(u8).range(1..=3),
		help = "Keep entries with this certification level (repeatable)"
	)]
	pub(crate) levels: Vec<u8>,
	#[arg(
		long = "popular",
		value_name = "FILTER",
		help = "Require a popular filter: personal-data, supported, campus-training, free, approved"
	)]
	pub(crate) popular: Vec<PopularFilter>,
	#[arg(short, long, value_name = "ORDER", help = "Sort order (default: name-asc)")]
	pub(crate) sort: Option<SortOrder>,
}
