use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal data-protection rating shared by the LGPD sub-ratings and the
/// overall certification level. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CertificationLevel {
	/// Level 1: usage authorized.
	Authorized = 1,
	/// Level 2: usage with precautions.
	Restricted = 2,
	/// Level 3: usage prohibited.
	Prohibited = 3,
}

/// A single LGPD sub-rating uses the same three-level scale.
pub type Rating = CertificationLevel;

impl CertificationLevel {
	/// Every level, best first.
	pub const ALL: [CertificationLevel; 3] = [
		CertificationLevel::Authorized,
		CertificationLevel::Restricted,
		CertificationLevel::Prohibited,
	];

	/// Numeric value in `1..=3`.
	#[must_use]
	pub fn value(self) -> u8 {
		self as u8
	}

	/// Short label displayed next to the badge.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			CertificationLevel::Authorized => "Validé",
			CertificationLevel::Restricted => "Restreint",
			CertificationLevel::Prohibited => "Interdit",
		}
	}

	#[must_use]
	pub fn is_best(self) -> bool {
		self == CertificationLevel::Authorized
	}

	#[must_use]
	pub fn is_worst(self) -> bool {
		self == CertificationLevel::Prohibited
	}
}

/// Raised for a rating outside `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("certification level must be 1, 2 or 3 (got {0})")]
pub struct InvalidLevel(pub u8);

impl TryFrom<u8> for CertificationLevel {
	type Error = InvalidLevel;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(CertificationLevel::Authorized),
			2 => Ok(CertificationLevel::Restricted),
			3 => Ok(CertificationLevel::Prohibited),
			other => Err(InvalidLevel(other)),
		}
	}
}

impl From<CertificationLevel> for u8 {
	fn from(level: CertificationLevel) -> Self {
		level.value()
	}
}

impl fmt::Display for CertificationLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.value())
	}
}

/// The three independent LGPD sub-ratings of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LgpdRatings {
	/// Where the data is hosted.
	pub hosting: Rating,
	/// Compliance with the data-protection regulation.
	pub rgpd: Rating,
	/// How much data the tool collects.
	pub data_collection: Rating,
}

impl LgpdRatings {
	#[must_use]
	pub fn new(hosting: Rating, rgpd: Rating, data_collection: Rating) -> Self {
		Self {
			hosting,
			rgpd,
			data_collection,
		}
	}

	/// The overall level is the worst of the three sub-ratings.
	#[must_use]
	pub fn overall(&self) -> CertificationLevel {
		self.hosting.max(self.rgpd).max(self.data_collection)
	}
}
