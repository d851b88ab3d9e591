use clap::ValueEnum;
use logiref_core::NavigationKey;

/// Matching strategies accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum StrategyArg {
	Substring,
	Fuzzy,
}

impl StrategyArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			StrategyArg::Substring => "substring",
			StrategyArg::Fuzzy => "fuzzy",
		}
	}
}

/// Tag dimensions listed by the `tags` command.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum TagKindArg {
	#[default]
	All,
	Categories,
	Disciplines,
	Activities,
}

impl TagKindArg {
	pub(crate) fn includes(self, other: TagKindArg) -> bool {
		self == TagKindArg::All || self == other
	}
}

/// Keys replayed against the suggestion dropdown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum KeyArg {
	Up,
	Down,
	Enter,
	#[value(alias = "esc")]
	Escape,
}

impl From<KeyArg> for NavigationKey {
	fn from(key: KeyArg) -> Self {
		match key {
			KeyArg::Up => NavigationKey::Up,
			KeyArg::Down => NavigationKey::Down,
			KeyArg::Enter => NavigationKey::Enter,
			KeyArg::Escape => NavigationKey::Escape,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Log line formats written to stderr.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
	Text,
	Json,
}
