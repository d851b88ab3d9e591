use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{CliArgs, LogFormat};

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
pub(crate) fn initialize(cli: &CliArgs) {
	if cli.quiet {
		return;
	}

	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directives(cli.verbose)));

	match cli.log_format {
		LogFormat::Json => tracing_subscriber::registry()
			.with(env_filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init(),
		LogFormat::Text => tracing_subscriber::registry()
			.with(env_filter)
			.with(fmt::layer().with_writer(std::io::stderr))
			.init(),
	}
}

fn default_directives(verbose: u8) -> &'static str {
	match verbose {
		0 => "warn",
		1 => "warn,logiref=info,logiref_core=info",
		2 => "info,logiref=debug,logiref_core=debug",
		_ => "trace",
	}
}
