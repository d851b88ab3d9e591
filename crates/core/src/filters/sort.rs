use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{CertificationLevel, SoftwareRecord};
use crate::search::normalize;

/// Named ordering strategies for the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
	#[default]
	NameAsc,
	NameDesc,
	/// Best certification level first.
	CertificationAsc,
	CertificationDesc,
	/// Oldest first.
	DateAsc,
	DateDesc,
	/// Approved tools first, then by level, then by name.
	#[serde(alias = "approved-first")]
	Recommended,
}

impl SortOrder {
	pub const ALL: [SortOrder; 7] = [
		SortOrder::NameAsc,
		SortOrder::NameDesc,
		SortOrder::CertificationAsc,
		SortOrder::CertificationDesc,
		SortOrder::DateAsc,
		SortOrder::DateDesc,
		SortOrder::Recommended,
	];

	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			SortOrder::NameAsc => "name-asc",
			SortOrder::NameDesc => "name-desc",
			SortOrder::CertificationAsc => "certification-asc",
			SortOrder::CertificationDesc => "certification-desc",
			SortOrder::DateAsc => "date-asc",
			SortOrder::DateDesc => "date-desc",
			SortOrder::Recommended => "recommended",
		}
	}

	/// Total order between two records under this strategy.
	#[must_use]
	pub fn compare(self, a: &SoftwareRecord, b: &SoftwareRecord) -> Ordering {
		match self {
			SortOrder::NameAsc => compare_names(&a.name, &b.name),
			SortOrder::NameDesc => compare_names(&b.name, &a.name),
			SortOrder::CertificationAsc => {
				compare_levels(a.certification_level(), b.certification_level(), false)
			}
			SortOrder::CertificationDesc => {
				compare_levels(a.certification_level(), b.certification_level(), true)
			}
			SortOrder::DateAsc => a.timestamp().cmp(&b.timestamp()),
			SortOrder::DateDesc => b.timestamp().cmp(&a.timestamp()),
			SortOrder::Recommended => b
				.is_approved()
				.cmp(&a.is_approved())
				.then_with(|| {
					compare_levels(a.certification_level(), b.certification_level(), false)
				})
				.then_with(|| compare_names(&a.name, &b.name)),
		}
	}

	/// Stable in-place sort of `records`.
	pub fn sort(self, records: &mut [&SoftwareRecord]) {
		records.sort_by(|a, b| self.compare(a, b));
	}
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Raised when parsing an unknown sort order id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order '{0}'")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
	type Err = UnknownSortOrder;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim() {
			"approved-first" => Ok(SortOrder::Recommended),
			other => SortOrder::ALL
				.into_iter()
				.find(|order| order.id() == other)
				.ok_or_else(|| UnknownSortOrder(value.to_string())),
		}
	}
}

/// Case- and accent-insensitive name comparison, raw text as tie-break.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
	normalize(a).cmp(&normalize(b)).then_with(|| a.cmp(b))
}

/// Compare levels; unrated records always sort last.
fn compare_levels(
	a: Option<CertificationLevel>,
	b: Option<CertificationLevel>,
	descending: bool,
) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) if descending => b.cmp(&a),
		(Some(a), Some(b)) => a.cmp(&b),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}
