use serde::{Deserialize, Serialize};

use super::certification::{CertificationLevel, LgpdRatings};

/// Cost tier of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostTier {
	#[serde(rename = "free", alias = "Gratuit")]
	Free,
	#[serde(rename = "paid", alias = "Payant")]
	Paid,
	#[serde(rename = "freemium", alias = "Freemium")]
	Freemium,
	#[serde(rename = "institution-funded", alias = "Financé CEJEF")]
	InstitutionFunded,
}

impl CostTier {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			CostTier::Free => "free",
			CostTier::Paid => "paid",
			CostTier::Freemium => "freemium",
			CostTier::InstitutionFunded => "institution-funded",
		}
	}
}

/// A catalog entry: one software tool and its compliance metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareRecord {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub short_description: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub lgpd: Option<LgpdRatings>,
	#[serde(default)]
	pub certification_level: Option<CertificationLevel>,
	pub cost: CostTier,
	#[serde(default)]
	pub personal_data: bool,
	#[serde(default, alias = "supportedByCEJEF")]
	pub supported: bool,
	#[serde(default)]
	pub campus_training: bool,
	#[serde(default, alias = "cejefFavorite")]
	pub favorite: bool,
	#[serde(default)]
	pub categories: Vec<String>,
	#[serde(default)]
	pub disciplines: Vec<String>,
	#[serde(default, alias = "pedagogicalActivities")]
	pub activities: Vec<String>,
	#[serde(default)]
	pub green_alternatives: Vec<String>,
	#[serde(default)]
	pub data_location: Option<String>,
	#[serde(default)]
	pub tool_url: Option<String>,
	#[serde(default)]
	pub documentation: Option<String>,
	#[serde(default)]
	pub target_audience: Option<String>,
	#[serde(default)]
	pub usage_notes: Option<String>,
	#[serde(default)]
	pub created_at: Option<i64>,
	#[serde(default)]
	pub updated_at: Option<i64>,
}

impl SoftwareRecord {
	/// Create a record with empty metadata and a free cost tier.
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			short_description: String::new(),
			description: None,
			lgpd: None,
			certification_level: None,
			cost: CostTier::Free,
			personal_data: false,
			supported: false,
			campus_training: false,
			favorite: false,
			categories: Vec::new(),
			disciplines: Vec::new(),
			activities: Vec::new(),
			green_alternatives: Vec::new(),
			data_location: None,
			tool_url: None,
			documentation: None,
			target_audience: None,
			usage_notes: None,
			created_at: None,
			updated_at: None,
		}
	}

	#[must_use]
	pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
		self.short_description = text.into();
		self
	}

	#[must_use]
	pub fn with_description(mut self, text: impl Into<String>) -> Self {
		self.description = Some(text.into());
		self
	}

	#[must_use]
	pub fn with_lgpd(mut self, lgpd: LgpdRatings) -> Self {
		self.lgpd = Some(lgpd);
		self
	}

	#[must_use]
	pub fn with_level(mut self, level: CertificationLevel) -> Self {
		self.certification_level = Some(level);
		self
	}

	#[must_use]
	pub fn with_cost(mut self, cost: CostTier) -> Self {
		self.cost = cost;
		self
	}

	#[must_use]
	pub fn with_personal_data(mut self, allowed: bool) -> Self {
		self.personal_data = allowed;
		self
	}

	#[must_use]
	pub fn with_supported(mut self, supported: bool) -> Self {
		self.supported = supported;
		self
	}

	#[must_use]
	pub fn with_campus_training(mut self, available: bool) -> Self {
		self.campus_training = available;
		self
	}

	#[must_use]
	pub fn with_categories<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.categories = tags.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_disciplines<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.disciplines = tags.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_activities<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.activities = tags.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_timestamps(mut self, created_at: i64, updated_at: i64) -> Self {
		self.created_at = Some(created_at);
		self.updated_at = Some(updated_at);
		self
	}

	/// The precomputed level when present, otherwise the worst LGPD rating.
	#[must_use]
	pub fn certification_level(&self) -> Option<CertificationLevel> {
		self.certification_level
			.or_else(|| self.lgpd.as_ref().map(LgpdRatings::overall))
	}

	/// Supported, with training available, and rated level 1.
	#[must_use]
	pub fn is_approved(&self) -> bool {
		self.supported
			&& self.campus_training
			&& self.certification_level().is_some_and(CertificationLevel::is_best)
	}

	/// Timestamp used for date ordering; missing values count as epoch 0.
	#[must_use]
	pub fn timestamp(&self) -> i64 {
		self.updated_at.or(self.created_at).unwrap_or(0)
	}

	/// Name, descriptions and every tag joined into a single searchable string.
	#[must_use]
	pub fn search_text(&self) -> String {
		let mut parts: Vec<&str> = vec![self.name.as_str(), self.short_description.as_str()];
		if let Some(description) = &self.description {
			parts.push(description);
		}
		parts.extend(self.tags().map(String::as_str));
		parts.join(" ")
	}

	/// Iterate category, discipline and activity tags in that order.
	pub fn tags(&self) -> impl Iterator<Item = &String> {
		self.categories
			.iter()
			.chain(&self.disciplines)
			.chain(&self.activities)
	}
}
