//! Filter and sort pipeline applied to the catalog listing.

mod popular;
mod sort;
mod state;

pub use popular::{PopularFilter, UnknownPopularFilter};
pub use sort::{SortOrder, UnknownSortOrder, compare_names};
pub use state::{FilterState, TagKind};

use indexmap::IndexSet;
use tracing::debug;

use crate::model::SoftwareRecord;
use crate::search::{SearchOptions, rank};

/// Apply every active stage of `state` to `records`, then sort.
///
/// Stages are conjunctive and each one is a no-op when its selection is
/// empty. The result is a fresh `Vec`; `records` is never reordered.
pub fn filtered_sorted<'a>(
	records: &'a [SoftwareRecord],
	state: &FilterState,
	options: &SearchOptions,
) -> Vec<&'a SoftwareRecord> {
	let mut result: Vec<&SoftwareRecord> = records
		.iter()
		.filter(|record| any_tag(&record.categories, state.categories()))
		.filter(|record| any_tag(&record.disciplines, state.disciplines()))
		.filter(|record| any_tag(&record.activities, state.activities()))
		.filter(|record| {
			state.levels().is_empty()
				|| record
					.certification_level()
					.is_some_and(|level| state.levels().contains(&level))
		})
		.collect();

	let query = state.query().trim();
	if !query.is_empty() && !state.query_mirrors_selection() {
		let terms = options.terms(query);
		result = rank(&result, &terms, &options.strategy)
			.into_iter()
			.map(|hit| hit.record)
			.collect();
	}

	result.retain(|record| state.popular().iter().all(|filter| filter.accepts(record)));

	state.sort().sort(&mut result);
	debug!(
		total = records.len(),
		shown = result.len(),
		sort = %state.sort(),
		strategy = options.strategy.name(),
		"recomputed listing"
	);
	result
}

fn any_tag(tags: &[String], selected: &IndexSet<String>) -> bool {
	selected.is_empty() || tags.iter().any(|tag| selected.contains(tag))
}
