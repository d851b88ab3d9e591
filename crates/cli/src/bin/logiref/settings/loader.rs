use anyhow::{Context, Result};
use tracing::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Merge config files and `LOGIREF__*` variables, then apply CLI flags on top.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the expected layout")?;
	raw.apply_cli_overrides(cli);

	let resolved = raw.resolve(cli)?;
	debug!(
		catalog = %resolved.catalog_path.display(),
		strategy = resolved.search.strategy.name(),
		sort = %resolved.sort,
		"resolved configuration"
	);
	Ok(resolved)
}
