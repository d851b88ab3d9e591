use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use logiref_core::app_dirs;

/// Version banner listing the directories logiref reads from.
pub(super) fn long_version() -> &'static str {
	let mut banner = format!("logiref {}\n", env!("CARGO_PKG_VERSION"));
	for (label, dir) in [
		("config", app_dirs::get_config_dir()),
		("data", app_dirs::get_data_dir()),
		("cache", app_dirs::get_cache_dir()),
	] {
		let _ = writeln!(banner, "{label} directory: {}", describe(dir));
	}
	let _ = writeln!(
		banner,
		"fallback catalog: {}",
		describe(app_dirs::installed_catalog())
	);

	Box::leak(banner.into_boxed_str())
}

fn describe(path: anyhow::Result<PathBuf>) -> String {
	match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Magenta.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.invalid(AnsiColor::Yellow.on_default())
}
