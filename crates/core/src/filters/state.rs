use std::collections::BTreeSet;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use super::{PopularFilter, SortOrder};
use crate::model::CertificationLevel;

/// Which tag dimension a selection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
	Category,
	Discipline,
	Activity,
}

/// User-controlled filter and sort selection for the catalog listing.
///
/// Only the action methods mutate the state, so each of them can keep the
/// selections consistent with one another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
	query: String,
	categories: IndexSet<String>,
	disciplines: IndexSet<String>,
	activities: IndexSet<String>,
	levels: BTreeSet<CertificationLevel>,
	popular: BTreeSet<PopularFilter>,
	sort: SortOrder,
}

impl FilterState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn categories(&self) -> &IndexSet<String> {
		&self.categories
	}

	#[must_use]
	pub fn disciplines(&self) -> &IndexSet<String> {
		&self.disciplines
	}

	#[must_use]
	pub fn activities(&self) -> &IndexSet<String> {
		&self.activities
	}

	#[must_use]
	pub fn levels(&self) -> &BTreeSet<CertificationLevel> {
		&self.levels
	}

	#[must_use]
	pub fn popular(&self) -> &BTreeSet<PopularFilter> {
		&self.popular
	}

	#[must_use]
	pub fn sort(&self) -> SortOrder {
		self.sort
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn set_sort(&mut self, sort: SortOrder) {
		self.sort = sort;
	}

	pub fn toggle_popular(&mut self, filter: PopularFilter) {
		if !self.popular.remove(&filter) {
			self.popular.insert(filter);
		}
	}

	pub fn toggle_level(&mut self, level: CertificationLevel) {
		if !self.levels.remove(&level) {
			self.levels.insert(level);
		}
	}

	pub fn toggle_category(&mut self, tag: impl Into<String>) {
		toggle(&mut self.categories, tag.into());
	}

	pub fn toggle_discipline(&mut self, tag: impl Into<String>) {
		toggle(&mut self.disciplines, tag.into());
	}

	pub fn toggle_activity(&mut self, tag: impl Into<String>) {
		toggle(&mut self.activities, tag.into());
	}

	/// Make `tag` the only category selected and mirror it into the query.
	pub fn select_category(&mut self, tag: impl Into<String>) {
		self.select(TagKind::Category, tag.into());
	}

	/// Make `tag` the only discipline selected and mirror it into the query.
	pub fn select_discipline(&mut self, tag: impl Into<String>) {
		self.select(TagKind::Discipline, tag.into());
	}

	/// Make `tag` the only activity selected and mirror it into the query.
	pub fn select_activity(&mut self, tag: impl Into<String>) {
		self.select(TagKind::Activity, tag.into());
	}

	/// Exclusive selection: the other two tag dimensions are cleared.
	pub fn select(&mut self, kind: TagKind, tag: String) {
		self.categories.clear();
		self.disciplines.clear();
		self.activities.clear();
		self.query.clone_from(&tag);
		let set = match kind {
			TagKind::Category => &mut self.categories,
			TagKind::Discipline => &mut self.disciplines,
			TagKind::Activity => &mut self.activities,
		};
		set.insert(tag);
		debug!(?kind, query = %self.query, "selected tag");
	}

	/// Drop every selection and the query; the sort order is kept.
	pub fn clear_all(&mut self) {
		self.query.clear();
		self.categories.clear();
		self.disciplines.clear();
		self.activities.clear();
		self.levels.clear();
		self.popular.clear();
	}

	/// Number of individual selections across every filter dimension.
	#[must_use]
	pub fn active_filters_count(&self) -> usize {
		self.categories.len()
			+ self.disciplines.len()
			+ self.activities.len()
			+ self.levels.len()
			+ self.popular.len()
	}

	/// Whether any filter or a non-blank query narrows the listing.
	#[must_use]
	pub fn has_active_filters(&self) -> bool {
		self.active_filters_count() > 0 || !self.query.trim().is_empty()
	}

	/// Whether the query only restates a single selected tag.
	pub(crate) fn query_mirrors_selection(&self) -> bool {
		let query = self.query.trim();
		[&self.categories, &self.disciplines, &self.activities]
			.into_iter()
			.any(|set| set.len() == 1 && set.first().is_some_and(|tag| tag == query))
	}
}

fn toggle(set: &mut IndexSet<String>, tag: String) {
	if !set.shift_remove(&tag) {
		set.insert(tag);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggles_are_symmetric() {
		let mut state = FilterState::new();
		state.toggle_category("Quiz");
		state.toggle_category("Design");
		state.toggle_category("Quiz");
		assert_eq!(state.categories().iter().collect::<Vec<_>>(), vec!["Design"]);

		state.toggle_level(CertificationLevel::Restricted);
		state.toggle_level(CertificationLevel::Restricted);
		assert!(state.levels().is_empty());

		state.toggle_popular(PopularFilter::Free);
		assert!(state.popular().contains(&PopularFilter::Free));
	}

	#[test]
	fn select_is_exclusive_and_mirrors_query() {
		let mut state = FilterState::new();
		state.toggle_category("Quiz");
		state.toggle_activity("Révision");
		state.toggle_discipline("Maths");
		state.select_discipline("Langues");

		assert!(state.categories().is_empty());
		assert!(state.activities().is_empty());
		assert_eq!(state.disciplines().len(), 1);
		assert_eq!(state.query(), "Langues");
		assert!(state.query_mirrors_selection());

		state.set_query("lang");
		assert!(!state.query_mirrors_selection());
	}

	#[test]
	fn clear_all_resets_everything_but_sort() {
		let mut state = FilterState::new();
		state.set_query("quiz");
		state.set_sort(SortOrder::DateDesc);
		state.toggle_category("Quiz");
		state.toggle_level(CertificationLevel::Authorized);
		state.toggle_popular(PopularFilter::Approved);
		assert_eq!(state.active_filters_count(), 3);

		state.clear_all();
		assert!(!state.has_active_filters());
		assert_eq!(state.query(), "");
		assert_eq!(state.sort(), SortOrder::DateDesc);
	}

	#[test]
	fn blank_query_is_not_a_filter() {
		let mut state = FilterState::new();
		state.set_query("   ");
		assert!(!state.has_active_filters());
		state.set_query("canva");
		assert!(state.has_active_filters());
		assert_eq!(state.active_filters_count(), 0);
	}
}
