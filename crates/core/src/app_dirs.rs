//! Where logiref looks for its configuration and catalog on this machine.
//!
//! Each directory can be pinned with an environment variable; otherwise the
//! platform location from `directories` is used.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

pub const CONFIG_DIR_ENV: &str = "LOGIREF_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "LOGIREF_DATA_DIR";
pub const CACHE_DIR_ENV: &str = "LOGIREF_CACHE_DIR";

/// File name of the catalog fixture inside the data directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Directory holding the installed catalog.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

pub fn get_cache_dir() -> Result<PathBuf> {
	resolve(CACHE_DIR_ENV, ProjectDirs::cache_dir)
}

/// The catalog inside the data directory.
pub fn installed_catalog() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(CATALOG_FILE))
}

fn resolve(variable: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	if let Some(dir) = override_from(env::var_os(variable)) {
		return Ok(dir);
	}
	let dirs = ProjectDirs::from("org", "logiref", "logiref")
		.ok_or_else(|| anyhow!("no home directory to place logiref files under"))?;
	Ok(platform(&dirs).to_path_buf())
}

/// An empty value counts as unset.
fn override_from(value: Option<std::ffi::OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}
