//! Command-line entry point for the logiref software catalog.

mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{Command, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::Workflow;

/// Entry point for the logiref command-line application.
fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(&cli);

	let config = settings::load(&cli)?;

	if cli.print_config {
		config.print_summary();
	}

	run_command(cli.output, &cli.command, config)
}

/// Answer the command against the catalog and print it in the chosen format.
fn run_command(format: OutputFormat, command: &Command, config: ResolvedConfig) -> Result<()> {
	let workflow = Workflow::from_config(config)?;
	let report = workflow.run(command)?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
