use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use super::{SearchOptions, rank};
use crate::model::SoftwareRecord;

/// Queries shorter than this (after trimming) produce no suggestions.
pub const MIN_QUERY_CHARS: usize = 2;
/// Maximum number of category, discipline and activity suggestions each.
pub const MAX_TAG_SUGGESTIONS: usize = 3;
/// Maximum number of software suggestions.
pub const MAX_SOFTWARE_SUGGESTIONS: usize = 6;

/// Autocomplete payload for a live query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions<'a> {
	pub query: String,
	/// Number of matching records before capping.
	pub total_results: usize,
	pub categories: Vec<String>,
	pub disciplines: Vec<String>,
	pub activities: Vec<String>,
	pub software: Vec<&'a SoftwareRecord>,
}

impl Suggestions<'_> {
	#[must_use]
	pub fn has_suggestions(&self) -> bool {
		self.total_results > 0
	}

	/// Whether every list the dropdown renders is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
			&& self.disciplines.is_empty()
			&& self.activities.is_empty()
			&& self.software.is_empty()
	}
}

/// Build autocomplete suggestions for `query` over `records`.
///
/// Tags are only suggested when they match the query themselves, not merely
/// because they belong to a matching record.
pub fn suggest<'a>(
	records: &'a [SoftwareRecord],
	query: &str,
	options: &SearchOptions,
) -> Suggestions<'a> {
	let trimmed = query.trim();
	if trimmed.chars().count() < MIN_QUERY_CHARS {
		return Suggestions::default();
	}

	let terms = options.terms(trimmed);
	let candidates: Vec<&SoftwareRecord> = records.iter().collect();
	let hits = rank(&candidates, &terms, &options.strategy);

	let mut categories = TagCollector::default();
	let mut disciplines = TagCollector::default();
	let mut activities = TagCollector::default();
	for hit in &hits {
		categories.extend(&hit.record.categories, |tag| {
			options.strategy.matches_text(tag, &terms)
		});
		disciplines.extend(&hit.record.disciplines, |tag| {
			options.strategy.matches_text(tag, &terms)
		});
		activities.extend(&hit.record.activities, |tag| {
			options.strategy.matches_text(tag, &terms)
		});
	}

	debug!(query = trimmed, hits = hits.len(), "computed suggestions");

	Suggestions {
		query: query.to_string(),
		total_results: hits.len(),
		categories: categories.into_vec(),
		disciplines: disciplines.into_vec(),
		activities: activities.into_vec(),
		software: hits
			.iter()
			.take(MAX_SOFTWARE_SUGGESTIONS)
			.map(|hit| hit.record)
			.collect(),
	}
}

/// Insertion-ordered, capped set of distinct tags.
#[derive(Default)]
struct TagCollector<'a> {
	tags: IndexSet<&'a str>,
}

impl<'a> TagCollector<'a> {
	fn extend<F>(&mut self, tags: &'a [String], mut accept: F)
	where
		F: FnMut(&str) -> bool,
	{
		for tag in tags {
			if self.tags.len() >= MAX_TAG_SUGGESTIONS {
				return;
			}
			if !self.tags.contains(tag.as_str()) && accept(tag) {
				self.tags.insert(tag.as_str());
			}
		}
	}

	fn into_vec(self) -> Vec<String> {
		self.tags.into_iter().map(str::to_string).collect()
	}
}
