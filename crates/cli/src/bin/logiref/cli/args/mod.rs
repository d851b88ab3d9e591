mod definitions;
mod options;
mod styles;

use clap::Parser;
pub(crate) use definitions::{CliArgs, Command, FilterArgs};
pub(crate) use options::{KeyArg, LogFormat, OutputFormat, StrategyArg, TagKindArg};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
