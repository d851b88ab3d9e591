//! Text matching over catalog records: normalization, synonym expansion,
//! substring and fuzzy matchers, autocomplete suggestions and the keyboard
//! navigation that walks them.

mod matcher;
pub mod navigation;
mod normalize;
pub mod suggestions;
mod synonyms;

pub use matcher::{
	DEFAULT_MIN_QUALITY, FuzzyOptions, MatchStrategy, RankedRecord, config_for_query, matches, rank,
	typo_budget,
};
pub use navigation::{NavigationKey, Navigator, Section, SelectionHandler};
pub use normalize::normalize;
pub use suggestions::{Suggestions, suggest};
pub use synonyms::{SynonymTable, expand};

/// Matching configuration shared by the filter pipeline and the suggestion engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
	pub strategy: MatchStrategy,
	pub synonyms: SynonymTable,
	/// When disabled, only the normalized query itself is matched.
	pub expand_synonyms: bool,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			strategy: MatchStrategy::Substring,
			synonyms: SynonymTable::builtin(),
			expand_synonyms: true,
		}
	}
}

impl SearchOptions {
	#[must_use]
	pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
		self.strategy = strategy;
		self
	}

	#[must_use]
	pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
		self.synonyms = synonyms;
		self
	}

	#[must_use]
	pub fn with_expansion(mut self, enabled: bool) -> Self {
		self.expand_synonyms = enabled;
		self
	}

	/// Terms to match for `query`, the normalized query always first.
	#[must_use]
	pub fn terms(&self, query: &str) -> Vec<String> {
		if self.expand_synonyms {
			self.synonyms.expand(query)
		} else {
			vec![normalize(query.trim())]
		}
	}
}
