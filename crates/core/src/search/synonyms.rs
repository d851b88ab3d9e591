use std::sync::LazyLock;

use indexmap::IndexMap;

use super::normalize::normalize;

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
	("ia", &["intelligence artificielle", "ai", "artificial intelligence"]),
	("intelligence artificielle", &["ia", "ai"]),
	("ai", &["ia", "intelligence artificielle"]),
	("visio", &["visioconférence", "video"]),
	("texte", &["traitement de texte", "word"]),
	("tableur", &["excel", "feuille de calcul"]),
	("presentation", &["powerpoint", "diaporama"]),
];

static BUILTIN: LazyLock<SynonymTable> = LazyLock::new(SynonymTable::builtin);

/// Ordered mapping from a short surface form to its equivalent phrases.
///
/// Keys and values are stored normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
	entries: IndexMap<String, Vec<String>>,
}

impl SynonymTable {
	/// A table with no entries; expansion returns only the query.
	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// The table shipped with the catalog.
	#[must_use]
	pub fn builtin() -> Self {
		let mut table = Self::empty();
		for (key, values) in BUILTIN_SYNONYMS {
			table.insert(key, values.iter().copied());
		}
		table
	}

	/// Add or replace the phrases for `key`.
	pub fn insert<I, S>(&mut self, key: &str, values: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let values = values.into_iter().map(|v| normalize(v.as_ref())).collect();
		self.entries.insert(normalize(key), values);
	}

	/// Merge entries from `other`; its phrases replace existing ones for the same key.
	#[must_use]
	pub fn merged_with(mut self, other: &SynonymTable) -> Self {
		for (key, values) in &other.entries {
			self.entries.insert(key.clone(), values.clone());
		}
		self
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Return the normalized query followed by the phrases of every key it contains.
	///
	/// Duplicates are kept: callers only care whether any term matches.
	#[must_use]
	pub fn expand(&self, query: &str) -> Vec<String> {
		let normalized = normalize(query.trim());
		let mut terms = vec![normalized.clone()];
		for (key, values) in &self.entries {
			if normalized.contains(key.as_str()) {
				terms.extend(values.iter().cloned());
			}
		}
		terms
	}
}

impl<K, V, S> FromIterator<(K, V)> for SynonymTable
where
	K: AsRef<str>,
	V: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut table = Self::empty();
		for (key, values) in iter {
			table.insert(key.as_ref(), values);
		}
		table
	}
}

/// Expand `query` with the built-in synonym table.
#[must_use]
pub fn expand(query: &str) -> Vec<String> {
	BUILTIN.expand(query)
}
