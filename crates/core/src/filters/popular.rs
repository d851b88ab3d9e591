use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{CostTier, SoftwareRecord};

/// Editorial shortcut filters shown above the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopularFilter {
	/// Pupils' personal data may be entered.
	PersonalData,
	/// Officially supported by the institution.
	#[serde(alias = "supported-cejef")]
	Supported,
	/// A training course is available.
	CampusTraining,
	/// No cost at all.
	Free,
	/// Supported, trained and rated level 1.
	Approved,
}

impl PopularFilter {
	pub const ALL: [PopularFilter; 5] = [
		PopularFilter::PersonalData,
		PopularFilter::Supported,
		PopularFilter::CampusTraining,
		PopularFilter::Free,
		PopularFilter::Approved,
	];

	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			PopularFilter::PersonalData => "personal-data",
			PopularFilter::Supported => "supported",
			PopularFilter::CampusTraining => "campus-training",
			PopularFilter::Free => "free",
			PopularFilter::Approved => "approved",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			PopularFilter::PersonalData => "Données élèves autorisées",
			PopularFilter::Supported => "Support CEJEF",
			PopularFilter::CampusTraining => "Formation disponible",
			PopularFilter::Free => "100% gratuit",
			PopularFilter::Approved => "Recommandé",
		}
	}

	/// Whether `record` passes this filter.
	#[must_use]
	pub fn accepts(self, record: &SoftwareRecord) -> bool {
		match self {
			PopularFilter::PersonalData => record.personal_data,
			PopularFilter::Supported => record.supported,
			PopularFilter::CampusTraining => record.campus_training,
			PopularFilter::Free => record.cost == CostTier::Free,
			PopularFilter::Approved => record.is_approved(),
		}
	}
}

impl fmt::Display for PopularFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Raised when parsing an unknown popular filter id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown popular filter '{0}' (expected one of: personal-data, supported, campus-training, free, approved)")]
pub struct UnknownPopularFilter(pub String);

impl FromStr for PopularFilter {
	type Err = UnknownPopularFilter;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim() {
			"supported-cejef" => Ok(PopularFilter::Supported),
			other => PopularFilter::ALL
				.into_iter()
				.find(|filter| filter.id() == other)
				.ok_or_else(|| UnknownPopularFilter(value.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::CertificationLevel;

	#[test]
	fn parses_ids_and_legacy_alias() {
		assert_eq!("free".parse(), Ok(PopularFilter::Free));
		assert_eq!("supported-cejef".parse(), Ok(PopularFilter::Supported));
		assert!("cheap".parse::<PopularFilter>().is_err());
		for filter in PopularFilter::ALL {
			assert_eq!(filter.id().parse(), Ok(filter));
		}
	}

	#[test]
	fn free_filter_checks_cost_tier() {
		let record = SoftwareRecord::new("a", "A").with_cost(CostTier::Freemium);
		assert!(!PopularFilter::Free.accepts(&record));
		assert!(PopularFilter::Free.accepts(&record.with_cost(CostTier::Free)));
	}

	#[test]
	fn personal_data_requires_the_flag() {
		let record = SoftwareRecord::new("a", "A").with_level(CertificationLevel::Authorized);
		assert!(!PopularFilter::PersonalData.accepts(&record));
		assert!(PopularFilter::PersonalData.accepts(&record.with_personal_data(true)));
	}

	#[test]
	fn approved_is_a_compound_predicate() {
		let record = SoftwareRecord::new("a", "A")
			.with_supported(true)
			.with_campus_training(true)
			.with_level(CertificationLevel::Authorized);
		assert!(PopularFilter::Approved.accepts(&record));
		assert!(!PopularFilter::Approved.accepts(&record.with_campus_training(false)));
	}
}
