//! "Similar tools" recommendations based on shared tags.

use std::cmp::Ordering;

use crate::filters::compare_names;
use crate::model::{CertificationLevel, SoftwareRecord};

/// Number of recommendations shown when the caller has no preference.
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;

const CATEGORY_WEIGHT: f32 = 3.0;
const ACTIVITY_WEIGHT: f32 = 2.0;
const DISCIPLINE_WEIGHT: f32 = 1.0;
const AUTHORIZED_BONUS: f32 = 0.5;

/// Score `candidate` against `reference`; zero means unrelated.
#[must_use]
pub fn similarity(reference: &SoftwareRecord, candidate: &SoftwareRecord) -> f32 {
	let shared = |ours: &[String], theirs: &[String]| {
		theirs.iter().filter(|tag| ours.contains(tag)).count() as f32
	};

	let mut score = CATEGORY_WEIGHT * shared(&reference.categories, &candidate.categories)
		+ ACTIVITY_WEIGHT * shared(&reference.activities, &candidate.activities)
		+ DISCIPLINE_WEIGHT * shared(&reference.disciplines, &candidate.disciplines);
	if candidate.certification_level().is_some_and(CertificationLevel::is_best) {
		score += AUTHORIZED_BONUS;
	}
	score
}

/// Up to `limit` records most similar to `record`.
///
/// The record itself and prohibited tools are never recommended. Ties are
/// broken by name.
pub fn similar_to<'a>(
	records: &'a [SoftwareRecord],
	record: &SoftwareRecord,
	limit: usize,
) -> Vec<&'a SoftwareRecord> {
	let mut scored: Vec<(f32, &SoftwareRecord)> = records
		.iter()
		.filter(|candidate| candidate.id != record.id)
		.filter(|candidate| {
			!candidate
				.certification_level()
				.is_some_and(CertificationLevel::is_worst)
		})
		.map(|candidate| (similarity(record, candidate), candidate))
		.filter(|(score, _)| *score > 0.0)
		.collect();

	scored.sort_by(|(a_score, a), (b_score, b)| {
		b_score
			.partial_cmp(a_score)
			.unwrap_or(Ordering::Equal)
			.then_with(|| compare_names(&a.name, &b.name))
	});
	scored.into_iter().take(limit).map(|(_, candidate)| candidate).collect()
}
