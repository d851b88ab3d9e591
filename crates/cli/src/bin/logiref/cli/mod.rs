mod args;
mod output;

pub(crate) use args::{
	CliArgs, Command, FilterArgs, KeyArg, LogFormat, OutputFormat, StrategyArg, TagKindArg,
	parse_cli,
};
pub(crate) use output::{print_json, print_plain};
