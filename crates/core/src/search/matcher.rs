use std::cmp::Ordering;

use frizbee::{Config, match_list};
use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use crate::model::SoftwareRecord;

const NAME_WEIGHT: f32 = 2.0;
const DESCRIPTION_WEIGHT: f32 = 1.5;
const CATEGORY_WEIGHT: f32 = 1.0;
const DISCIPLINE_WEIGHT: f32 = 1.0;
const ACTIVITY_WEIGHT: f32 = 0.8;

/// Share of a word's self-match score a misspelling needs by default.
pub const DEFAULT_MIN_QUALITY: f32 = 0.5;

/// Return `true` when any of the normalized `terms` is a substring of `haystack`.
#[must_use]
pub fn matches<S: AsRef<str>>(haystack: &str, terms: &[S]) -> bool {
	let haystack = normalize(haystack);
	terms.iter().any(|term| {
		let term: &str = term.as_ref();
		haystack.contains(term)
	})
}

/// Typos tolerated for one query word: none up to four characters, one up to
/// eight, two beyond.
///
/// The budget bounds both the letters the query word may lack and the extra
/// letters the matched word may carry.
#[must_use]
pub fn typo_budget(word: &str) -> u16 {
	match word.chars().count() {
		0..=4 => 0,
		5..=8 => 1,
		_ => 2,
	}
}

/// Builds fuzzy matching options for a single query word.
pub fn config_for_query(word: &str) -> Config {
	Config {
		prefilter: true,
		max_typos: Some(typo_budget(word)),
		sort: false,
		..Config::default()
	}
}

/// Tuning for the fuzzy strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyOptions {
	/// Minimum weighted relevance a record needs to be kept. Any positive
	/// relevance passes when this is zero.
	pub min_score: f32,
	/// Fraction of a query word's exact-match score a misspelled word must
	/// reach, in `0.0..=1.0`.
	pub min_quality: f32,
}

impl Default for FuzzyOptions {
	fn default() -> Self {
		Self {
			min_score: 0.0,
			min_quality: DEFAULT_MIN_QUALITY,
		}
	}
}

impl FuzzyOptions {
	#[must_use]
	pub fn with_min_score(mut self, min_score: f32) -> Self {
		self.min_score = min_score;
		self
	}

	#[must_use]
	pub fn with_min_quality(mut self, min_quality: f32) -> Self {
		self.min_quality = min_quality;
		self
	}
}

/// How free-text terms are matched against records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MatchStrategy {
	/// Exact containment of a normalized term.
	#[default]
	Substring,
	/// Weighted fuzzy relevance across name, descriptions and tags.
	Fuzzy(FuzzyOptions),
}

impl MatchStrategy {
	/// Whether a single piece of text matches any of the terms.
	///
	/// Under the fuzzy strategy the text weighs one, so `min_score` applies
	/// to the best term quality directly.
	#[must_use]
	pub fn matches_text<S: AsRef<str>>(&self, text: &str, terms: &[S]) -> bool {
		match self {
			MatchStrategy::Substring => matches(text, terms),
			MatchStrategy::Fuzzy(options) => {
				let field = Field::new(text);
				let quality = terms
					.iter()
					.map(|term| Needle::new(term.as_ref()).quality(&field, options))
					.fold(0.0, f32::max);
				quality > 0.0 && quality >= options.min_score
			}
		}
	}

	#[must_use]
	pub fn name(&self) -> &'static str {
		match self {
			MatchStrategy::Substring => "substring",
			MatchStrategy::Fuzzy(_) => "fuzzy",
		}
	}
}

/// A record accepted by [`rank`] together with its relevance.
#[derive(Debug, Clone, Copy)]
pub struct RankedRecord<'a> {
	pub record: &'a SoftwareRecord,
	/// Position in the input slice.
	pub index: usize,
	pub score: f32,
}

/// Match `records` against the expanded `terms`.
///
/// Substring hits keep input order. Fuzzy hits are ordered by relevance
/// descending, ties broken by input order.
pub fn rank<'a, S: AsRef<str>>(
	records: &[&'a SoftwareRecord],
	terms: &[S],
	strategy: &MatchStrategy,
) -> Vec<RankedRecord<'a>> {
	match strategy {
		MatchStrategy::Substring => records
			.iter()
			.copied()
			.enumerate()
			.filter(|(_, record)| matches(&record.search_text(), terms))
			.map(|(index, record)| RankedRecord {
				record,
				index,
				score: 1.0,
			})
			.collect(),
		MatchStrategy::Fuzzy(options) => rank_fuzzy(records, terms, options),
	}
}

fn rank_fuzzy<'a, S: AsRef<str>>(
	records: &[&'a SoftwareRecord],
	terms: &[S],
	options: &FuzzyOptions,
) -> Vec<RankedRecord<'a>> {
	let needles: Vec<Needle<'_>> = terms
		.iter()
		.map(|term| Needle::new(term.as_ref()))
		.filter(|needle| !needle.phrase.is_empty())
		.collect();

	let mut ranked: Vec<RankedRecord<'a>> = records
		.iter()
		.copied()
		.enumerate()
		.filter_map(|(index, record)| {
			let score: f32 = weighted_fields(record)
				.iter()
				.map(|(weight, text)| {
					let field = Field::new(text);
					let best = needles
						.iter()
						.map(|needle| needle.quality(&field, options))
						.fold(0.0, f32::max);
					weight * best
				})
				.sum();
			(score > 0.0 && score >= options.min_score).then_some(RankedRecord {
				record,
				index,
				score,
			})
		})
		.collect();

	ranked.sort_by(|a, b| {
		b.score
			.partial_cmp(&a.score)
			.unwrap_or(Ordering::Equal)
			.then_with(|| a.index.cmp(&b.index))
	});
	ranked
}

fn weighted_fields(record: &SoftwareRecord) -> [(f32, String); 6] {
	[
		(NAME_WEIGHT, record.name.clone()),
		(DESCRIPTION_WEIGHT, record.short_description.clone()),
		(
			DESCRIPTION_WEIGHT,
			record.description.clone().unwrap_or_default(),
		),
		(CATEGORY_WEIGHT, record.categories.join(" ")),
		(DISCIPLINE_WEIGHT, record.disciplines.join(" ")),
		(ACTIVITY_WEIGHT, record.activities.join(" ")),
	]
}

/// Normalized text of one record field and its words.
struct Field {
	text: String,
	words: Vec<String>,
}

impl Field {
	fn new(raw: &str) -> Self {
		let text = normalize(raw);
		let words = text
			.split(|c: char| !c.is_alphanumeric())
			.filter(|word| !word.is_empty())
			.map(str::to_string)
			.collect();
		Self { text, words }
	}
}

/// One expanded term, already normalized.
struct Needle<'t> {
	phrase: &'t str,
	words: Vec<NeedleWord<'t>>,
}

impl<'t> Needle<'t> {
	fn new(term: &'t str) -> Self {
		let phrase = term.trim();
		let words = phrase
			.split(|c: char| !c.is_alphanumeric())
			.filter(|word| !word.is_empty())
			.map(NeedleWord::new)
			.collect();
		Self { phrase, words }
	}

	/// `1.0` when the field contains the phrase; otherwise every word of the
	/// phrase must hit some word of the field, and the weakest hit counts.
	fn quality(&self, field: &Field, options: &FuzzyOptions) -> f32 {
		if self.phrase.is_empty() {
			return 0.0;
		}
		if field.text.contains(self.phrase) {
			return 1.0;
		}
		if self.words.is_empty() {
			return 0.0;
		}
		self.words
			.iter()
			.map(|word| word.quality(&field.words, options.min_quality))
			.fold(1.0, f32::min)
	}
}

struct NeedleWord<'t> {
	text: &'t str,
	config: Config,
	exact_score: u16,
}

impl<'t> NeedleWord<'t> {
	fn new(text: &'t str) -> Self {
		let config = config_for_query(text);
		let exact_score = best_score(text, text, &config);
		Self {
			text,
			config,
			exact_score,
		}
	}

	fn quality(&self, words: &[String], min_quality: f32) -> f32 {
		if words.iter().any(|word| word.contains(self.text)) {
			return 1.0;
		}
		if self.config.max_typos == Some(0) || self.exact_score == 0 {
			return 0.0;
		}

		let haystacks: Vec<&str> = words.iter().map(String::as_str).collect();
		match_list(self.text, &haystacks, &self.config)
			.iter()
			.filter(|entry| entry.score > 0)
			.filter_map(|entry| {
				let word = haystacks.get(entry.index as usize)?;
				let quality =
					(f32::from(entry.score) / f32::from(self.exact_score)).min(1.0);
				// The matched word may not carry more extra letters than the budget.
				let close = best_score(word, self.text, &self.config) > 0;
				(close && quality >= min_quality).then_some(quality)
			})
			.fold(0.0, f32::max)
	}
}

fn best_score(needle: &str, haystack: &str, config: &Config) -> u16 {
	match_list(needle, &[haystack], config)
		.iter()
		.map(|entry| entry.score)
		.max()
		.unwrap_or(0)
}
