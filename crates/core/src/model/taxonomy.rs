use serde::{Deserialize, Serialize};

/// Functional category a tool belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
}

/// Academic discipline a tool is used in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub department: Option<String>,
}

/// Pedagogical activity a tool supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	/// Bloom taxonomy level.
	#[serde(default)]
	pub taxonomy_level: Option<String>,
}

/// Lookup tables for the tags referenced by records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
	#[serde(default)]
	pub categories: Vec<Category>,
	#[serde(default)]
	pub disciplines: Vec<Discipline>,
	#[serde(default)]
	pub activities: Vec<Activity>,
}

impl Taxonomy {
	#[must_use]
	pub fn category_by_id(&self, id: &str) -> Option<&Category> {
		self.categories.iter().find(|category| category.id == id)
	}

	#[must_use]
	pub fn discipline_by_id(&self, id: &str) -> Option<&Discipline> {
		self.disciplines.iter().find(|discipline| discipline.id == id)
	}

	#[must_use]
	pub fn activity_by_id(&self, id: &str) -> Option<&Activity> {
		self.activities.iter().find(|activity| activity.id == id)
	}

	/// Disciplines attached to the given department.
	pub fn disciplines_by_department<'a>(
		&'a self,
		department: &'a str,
	) -> impl Iterator<Item = &'a Discipline> + 'a {
		self.disciplines
			.iter()
			.filter(move |discipline| discipline.department.as_deref() == Some(department))
	}

	/// Activities attached to the given taxonomy level.
	pub fn activities_by_taxonomy_level<'a>(
		&'a self,
		level: &'a str,
	) -> impl Iterator<Item = &'a Activity> + 'a {
		self.activities
			.iter()
			.filter(move |activity| activity.taxonomy_level.as_deref() == Some(level))
	}

	/// Whether a record tag names a known category.
	#[must_use]
	pub fn knows_category(&self, tag: &str) -> bool {
		self.categories
			.iter()
			.any(|category| category.name == tag || category.id == tag)
	}

	#[must_use]
	pub fn knows_discipline(&self, tag: &str) -> bool {
		self.disciplines
			.iter()
			.any(|discipline| discipline.name == tag || discipline.id == tag)
	}

	#[must_use]
	pub fn knows_activity(&self, tag: &str) -> bool {
		self.activities
			.iter()
			.any(|activity| activity.name == tag || activity.id == tag)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn taxonomy() -> Taxonomy {
		Taxonomy {
			categories: vec![Category {
				id: "quiz".into(),
				name: "Quiz & Évaluation".into(),
				description: String::new(),
			}],
			disciplines: vec![
				Discipline {
					id: "arts".into(),
					name: "Arts & Design".into(),
					description: String::new(),
					department: Some("Arts appliqués".into()),
				},
				Discipline {
					id: "transversal".into(),
					name: "Transversal".into(),
					description: String::new(),
					department: None,
				},
			],
			activities: vec![Activity {
				id: "revision".into(),
				name: "Révision".into(),
				description: String::new(),
				taxonomy_level: Some("Mémoriser".into()),
			}],
		}
	}

	#[test]
	fn looks_up_entries_by_id() {
		let taxonomy = taxonomy();
		assert_eq!(
			taxonomy.category_by_id("quiz").map(|c| c.name.as_str()),
			Some("Quiz & Évaluation")
		);
		assert!(taxonomy.discipline_by_id("missing").is_none());
		assert!(taxonomy.activity_by_id("revision").is_some());
	}

	#[test]
	fn filters_by_department_and_level() {
		let taxonomy = taxonomy();
		let arts: Vec<_> = taxonomy
			.disciplines_by_department("Arts appliqués")
			.map(|d| d.id.as_str())
			.collect();
		assert_eq!(arts, vec!["arts"]);
		assert_eq!(taxonomy.activities_by_taxonomy_level("Mémoriser").count(), 1);
	}

	#[test]
	fn known_tags_match_by_name_or_id() {
		let taxonomy = taxonomy();
		assert!(taxonomy.knows_category("quiz"));
		assert!(taxonomy.knows_category("Quiz & Évaluation"));
		assert!(!taxonomy.knows_activity("Gamification"));
	}
}
