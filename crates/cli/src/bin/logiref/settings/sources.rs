use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use logiref_core::app_dirs;
use tracing::debug;

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "LOGIREF";

/// A configuration file and whether it must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FileLayer {
	pub(super) path: PathBuf,
	pub(super) required: bool,
}

/// Files to merge, lowest precedence first: the optional defaults unless
/// `--no-config` is set, then every `--config` file.
pub(super) fn file_layers(cli: &CliArgs) -> Vec<FileLayer> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = defaults.into_iter().map(|path| FileLayer {
		path,
		required: false,
	});
	let explicit = cli.config.iter().cloned().map(|path| FileLayer {
		path,
		required: true,
	});
	optional.chain(explicit).collect()
}

/// Merge the file layers and `LOGIREF__SECTION__KEY` variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let builder = file_layers(cli)
		.into_iter()
		.fold(Config::builder(), |builder, layer| {
			debug!(path = %layer.path.display(), required = layer.required, "config layer");
			builder.add_source(File::from(layer.path).required(layer.required))
		})
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		);

	builder.build().context("failed to read configuration")
}

/// Platform `config.toml`, then `.logiref.toml` and `logiref.toml` in the
/// working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let platform = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir().ok().into_iter().flat_map(|cwd| {
		[".logiref.toml", "logiref.toml"].map(|name| cwd.join(name))
	});
	platform.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	#[test]
	fn working_directory_files_override_the_platform_file() {
		let files = default_config_files();
		let hidden = files.iter().position(|path| path.ends_with(".logiref.toml"));
		let plain = files.iter().position(|path| path.ends_with("logiref.toml"));
		assert!(hidden.is_some());
		assert!(hidden < plain);
	}

	#[test]
	fn no_config_keeps_only_explicit_files() {
		let cli = CliArgs::parse_from(["logiref", "-n", "-c", "team.toml", "tags"]);
		assert_eq!(
			file_layers(&cli),
			vec![FileLayer {
				path: PathBuf::from("team.toml"),
				required: true,
			}]
		);
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("create temp config");
		writeln!(file, "[listing]\nsimilar_limit = 5").expect("write config");

		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["logiref", "--no-config", "-c", path.as_str(), "tags"]);
		let config = build_config(&cli).expect("config builds");
		assert_eq!(config.get_int("listing.similar_limit").expect("key present"), 5);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("create temp dir");
		let path = dir.path().join("absent.toml").to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["logiref", "--no-config", "-c", path.as_str(), "tags"]);
		assert!(build_config(&cli).is_err());
	}
}
