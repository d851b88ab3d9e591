//! The in-memory record store and its fixture loader.
//!
//! A [`Catalog`] owns every [`SoftwareRecord`] together with the taxonomy the
//! records are tagged with. Everything else in the crate borrows from it.

mod neighbors;
mod timestamps;

pub use neighbors::{Neighbors, neighbors};
pub use timestamps::{SYNTHETIC_EPOCH_MS, TimestampPolicy, UnknownTimestampPolicy};

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::filters::{FilterState, filtered_sorted};
use crate::model::{SoftwareRecord, Taxonomy};
use crate::search::{SearchOptions, Suggestions, suggest};
use crate::similarity::similar_to;

/// Knobs applied while building a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
	pub timestamps: TimestampPolicy,
}

impl CatalogOptions {
	#[must_use]
	pub fn with_timestamps(mut self, timestamps: TimestampPolicy) -> Self {
		self.timestamps = timestamps;
		self
	}
}

/// On-disk layout of a catalog fixture.
#[derive(Debug, Deserialize)]
struct CatalogFile {
	#[serde(flatten)]
	taxonomy: Taxonomy,
	#[serde(default)]
	software: Vec<SoftwareRecord>,
}

/// Validated, immutable collection of software records.
#[derive(Debug, Clone)]
pub struct Catalog {
	taxonomy: Taxonomy,
	records: Vec<SoftwareRecord>,
	by_id: HashMap<String, usize>,
}

impl Catalog {
	/// Build a catalog, rejecting duplicate ids.
	///
	/// Tags missing from a non-empty taxonomy and dangling green alternatives
	/// are reported at debug level but accepted.
	pub fn new(
		taxonomy: Taxonomy,
		mut records: Vec<SoftwareRecord>,
		options: CatalogOptions,
	) -> Result<Self> {
		let mut by_id = HashMap::with_capacity(records.len());
		for (index, record) in records.iter().enumerate() {
			if by_id.insert(record.id.clone(), index).is_some() {
				return Err(CatalogError::DuplicateId {
					id: record.id.clone(),
				});
			}
		}

		let filled = options.timestamps.apply(&mut records);
		if filled > 0 {
			debug!(policy = %options.timestamps, filled, "synthesized timestamps");
		}

		let catalog = Self {
			taxonomy,
			records,
			by_id,
		};
		catalog.report_soft_issues();
		Ok(catalog)
	}

	/// Parse a JSON fixture.
	pub fn from_json_str(json: &str, options: CatalogOptions) -> Result<Self> {
		let file: CatalogFile = serde_json::from_str(json)?;
		Self::new(file.taxonomy, file.software, options)
	}

	/// Read and parse a JSON fixture from disk.
	pub fn from_path(path: impl AsRef<Path>, options: CatalogOptions) -> Result<Self> {
		let path = path.as_ref();
		let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = Self::from_json_str(&json, options)?;
		info!(
			path = %path.display(),
			records = catalog.len(),
			"loaded catalog"
		);
		Ok(catalog)
	}

	#[must_use]
	pub fn taxonomy(&self) -> &Taxonomy {
		&self.taxonomy
	}

	/// Records in fixture order.
	#[must_use]
	pub fn records(&self) -> &[SoftwareRecord] {
		&self.records
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&SoftwareRecord> {
		self.by_id.get(id).map(|index| &self.records[*index])
	}

	/// Like [`Catalog::get`], for callers that treat a missing id as an error.
	pub fn require(&self, id: &str) -> Result<&SoftwareRecord> {
		self.get(id).ok_or_else(|| CatalogError::UnknownRecord { id: id.to_string() })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	#[must_use]
	pub fn unique_categories(&self) -> Vec<&str> {
		unique(self.records.iter().flat_map(|record| &record.categories))
	}

	#[must_use]
	pub fn unique_disciplines(&self) -> Vec<&str> {
		unique(self.records.iter().flat_map(|record| &record.disciplines))
	}

	#[must_use]
	pub fn unique_activities(&self) -> Vec<&str> {
		unique(self.records.iter().flat_map(|record| &record.activities))
	}

	/// Resolve the record's greener alternatives, skipping unknown ids.
	#[must_use]
	pub fn green_alternatives(&self, record: &SoftwareRecord) -> Vec<&SoftwareRecord> {
		record
			.green_alternatives
			.iter()
			.filter_map(|id| self.get(id))
			.collect()
	}

	/// The listing for `state`; see [`filtered_sorted`].
	#[must_use]
	pub fn filtered_sorted(&self, state: &FilterState, options: &SearchOptions) -> Vec<&SoftwareRecord> {
		filtered_sorted(&self.records, state, options)
	}

	#[must_use]
	pub fn suggest(&self, query: &str, options: &SearchOptions) -> Suggestions<'_> {
		suggest(&self.records, query, options)
	}

	/// Up to `limit` records similar to the one with `id`.
	pub fn similar_to(&self, id: &str, limit: usize) -> Result<Vec<&SoftwareRecord>> {
		let record = self.require(id)?;
		Ok(similar_to(&self.records, record, limit))
	}

	fn report_soft_issues(&self) {
		for record in &self.records {
			for id in &record.green_alternatives {
				if !self.by_id.contains_key(id) {
					debug!(record = %record.id, alternative = %id, "dangling green alternative");
				}
			}
			self.report_unknown_tags(record);
		}
	}

	fn report_unknown_tags(&self, record: &SoftwareRecord) {
		let taxonomy = &self.taxonomy;
		if !taxonomy.categories.is_empty() {
			for tag in record.categories.iter().filter(|tag| !taxonomy.knows_category(tag)) {
				debug!(record = %record.id, category = %tag, "category missing from taxonomy");
			}
		}
		if !taxonomy.disciplines.is_empty() {
			for tag in record.disciplines.iter().filter(|tag| !taxonomy.knows_discipline(tag)) {
				debug!(record = %record.id, discipline = %tag, "discipline missing from taxonomy");
			}
		}
		if !taxonomy.activities.is_empty() {
			for tag in record.activities.iter().filter(|tag| !taxonomy.knows_activity(tag)) {
				debug!(record = %record.id, activity = %tag, "activity missing from taxonomy");
			}
		}
	}
}

fn unique<'a>(tags: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
	tags.map(String::as_str)
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::Category;

	const FIXTURE: &str = r#"{
		"categories": [{ "id": "quiz", "name": "Quiz & Évaluation" }],
		"software": [
			{
				"id": "kahoot",
				"name": "Kahoot!",
				"cost": "Freemium",
				"categories": ["Quiz & Évaluation", "Jeux"],
				"pedagogicalActivities": ["Quiz en direct"],
				"greenAlternatives": ["wooclap", "ghost"]
			},
			{
				"id": "wooclap",
				"name": "Wooclap",
				"cost": "Gratuit",
				"categories": ["Quiz & Évaluation"],
				"lgpd": { "hosting": 1, "rgpd": 1, "dataCollection": 2 }
			}
		]
	}"#;

	#[test]
	fn parses_fixture_with_taxonomy() {
		let catalog = Catalog::from_json_str(FIXTURE, CatalogOptions::default())
			.expect("fixture parses");
		assert_eq!(catalog.len(), 2);
		assert_eq!(
			catalog.taxonomy().categories,
			vec![Category {
				id: "quiz".into(),
				name: "Quiz & Évaluation".into(),
				description: String::new(),
			}]
		);
		let wooclap = catalog.get("wooclap").expect("wooclap present");
		assert_eq!(wooclap.certification_level().map(|level| level.value()), Some(2));
	}

	#[test]
	fn rejects_duplicate_ids() {
		let records = vec![SoftwareRecord::new("a", "A"), SoftwareRecord::new("a", "B")];
		let error = Catalog::new(Taxonomy::default(), records, CatalogOptions::default())
			.expect_err("duplicates rejected");
		assert!(matches!(error, CatalogError::DuplicateId { id } if id == "a"));
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let error = Catalog::from_json_str("{ nope", CatalogOptions::default())
			.expect_err("invalid json");
		assert!(matches!(error, CatalogError::Parse(_)));
	}

	#[test]
	fn unique_tags_are_sorted_and_distinct() {
		let catalog = Catalog::from_json_str(FIXTURE, CatalogOptions::default())
			.expect("fixture parses");
		assert_eq!(catalog.unique_categories(), vec!["Jeux", "Quiz & Évaluation"]);
		assert_eq!(catalog.unique_activities(), vec!["Quiz en direct"]);
		assert!(catalog.unique_disciplines().is_empty());
	}

	#[test]
	fn green_alternatives_skip_unknown_ids() {
		let catalog = Catalog::from_json_str(FIXTURE, CatalogOptions::default())
			.expect("fixture parses");
		let kahoot = catalog.require("kahoot").expect("kahoot present");
		let alternatives = catalog.green_alternatives(kahoot);
		assert_eq!(alternatives.len(), 1);
		assert_eq!(alternatives[0].id, "wooclap");
	}

	#[test]
	fn unknown_record_is_reported() {
		let catalog = Catalog::from_json_str(FIXTURE, CatalogOptions::default())
			.expect("fixture parses");
		assert!(matches!(
			catalog.similar_to("ghost", 3),
			Err(CatalogError::UnknownRecord { .. })
		));
		let similar = catalog.similar_to("kahoot", 3).expect("kahoot present");
		assert_eq!(similar.len(), 1);
	}

	#[test]
	fn options_synthesize_dates() {
		let options = CatalogOptions::default().with_timestamps(TimestampPolicy::ListPosition);
		let catalog = Catalog::from_json_str(FIXTURE, options).expect("fixture parses");
		assert!(catalog.records().iter().all(|record| record.timestamp() >= SYNTHETIC_EPOCH_MS));
	}
}
