//! End-to-end behaviour of the catalog store, filters and search working
//! together over the bundled sample catalog.

use std::io::Write;
use std::path::PathBuf;

use logiref_core::{
	Catalog, CatalogError, CatalogOptions, CertificationLevel, CostTier, FilterState,
	FuzzyOptions, MatchStrategy, NavigationKey, Navigator, PopularFilter, SearchOptions,
	SelectionHandler, SoftwareRecord, SortOrder, Taxonomy, TimestampPolicy, filtered_sorted,
	neighbors, normalize,
};

fn sample_path() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog.json")
}

fn sample() -> Catalog {
	Catalog::from_path(sample_path(), CatalogOptions::default()).expect("sample catalog loads")
}

fn ids(records: &[&SoftwareRecord]) -> Vec<String> {
	records.iter().map(|record| record.id.clone()).collect()
}

#[test]
fn free_quiz_tools_only() {
	let records = vec![
		SoftwareRecord::new("kahoot", "Kahoot!")
			.with_categories(["Quiz"])
			.with_level(CertificationLevel::Authorized)
			.with_cost(CostTier::Free),
		SoftwareRecord::new("duolingo", "Duolingo")
			.with_categories(["Langues"])
			.with_level(CertificationLevel::Prohibited)
			.with_cost(CostTier::Paid),
	];
	let mut state = FilterState::new();
	state.toggle_popular(PopularFilter::Free);
	state.toggle_category("Quiz");

	let result = filtered_sorted(&records, &state, &SearchOptions::default());
	let names: Vec<&str> = result.iter().map(|record| record.name.as_str()).collect();
	assert_eq!(names, vec!["Kahoot!"]);
}

#[test]
fn ia_query_finds_artificial_intelligence_tools() {
	let catalog = sample();
	let mut state = FilterState::new();
	state.set_query("ia");

	let found = ids(&catalog.filtered_sorted(&state, &SearchOptions::default()));
	for id in ["chatgpt", "magicschool", "notebooklm"] {
		assert!(found.contains(&id.to_string()), "{id} missing from {found:?}");
	}

	let literal = SearchOptions::default().with_expansion(false);
	let found_literal = ids(&catalog.filtered_sorted(&state, &literal));
	assert!(!found_literal.contains(&"chatgpt".to_string()));
}

#[test]
fn fuzzy_search_forgives_typos_without_matching_everything() {
	let catalog = sample();
	let fuzzy = SearchOptions::default().with_strategy(MatchStrategy::Fuzzy(FuzzyOptions::default()));
	let search = |query: &str| {
		let mut state = FilterState::new();
		state.set_query(query);
		ids(&catalog.filtered_sorted(&state, &fuzzy))
	};

	assert_eq!(search("kahot"), vec!["kahoot"]);
	assert_eq!(search("moodel"), vec!["moodle"]);
	assert_eq!(search("padlte"), vec!["padlet"]);
	assert!(search("zotero").is_empty());
}

#[test]
fn every_result_satisfies_every_active_filter() {
	let catalog = sample();
	let mut state = FilterState::new();
	state.toggle_discipline("Transversal");
	state.toggle_level(CertificationLevel::Authorized);
	state.toggle_popular(PopularFilter::Supported);

	let result = catalog.filtered_sorted(&state, &SearchOptions::default());
	assert!(!result.is_empty());
	for record in &result {
		assert!(record.disciplines.iter().any(|tag| tag == "Transversal"));
		assert_eq!(record.certification_level(), Some(CertificationLevel::Authorized));
		assert!(record.supported);
	}
}

#[test]
fn clear_all_restores_the_full_listing() {
	let catalog = sample();
	let options = SearchOptions::default();
	let mut state = FilterState::new();
	state.set_query("quiz");
	state.toggle_popular(PopularFilter::CampusTraining);
	assert!(catalog.filtered_sorted(&state, &options).len() < catalog.len());

	state.clear_all();
	assert_eq!(catalog.filtered_sorted(&state, &options).len(), catalog.len());
	assert_eq!(catalog.records()[0].id, "kahoot");
}

#[test]
fn name_order_is_case_and_accent_insensitive() {
	let catalog = sample();
	let state = FilterState::new();
	let result = catalog.filtered_sorted(&state, &SearchOptions::default());
	let keys: Vec<String> = result.iter().map(|record| normalize(&record.name)).collect();
	let mut sorted = keys.clone();
	sorted.sort();
	assert_eq!(keys, sorted);
}

#[test]
fn recommended_lists_approved_tools_first() {
	let catalog = sample();
	let mut state = FilterState::new();
	state.set_sort(SortOrder::Recommended);
	let result = catalog.filtered_sorted(&state, &SearchOptions::default());

	assert_eq!(
		ids(&result[..3]),
		vec!["teams", "moodle", "wooclap"],
		"approved tools sorted by name"
	);
	assert!(result[3..].iter().all(|record| !record.is_approved()));
}

#[test]
fn similar_tools_skip_self_and_prohibited() {
	let catalog = sample();
	let similar = catalog.similar_to("kahoot", 3).expect("kahoot exists");
	assert_eq!(ids(&similar), vec!["wooclap", "quizlet", "moodle"]);

	for id in ["kahoot", "duolingo", "chatgpt", "padlet"] {
		let record = catalog.get(id).expect("record exists");
		let similar = catalog.similar_to(id, 10).expect("record exists");
		assert!(similar.iter().all(|candidate| candidate.id != record.id));
		assert!(
			similar
				.iter()
				.all(|candidate| candidate.certification_level() != Some(CertificationLevel::Prohibited))
		);
	}
}

#[test]
fn green_alternatives_resolve_known_ids() {
	let catalog = sample();
	let chrome = catalog.get("google-chrome").expect("chrome exists");
	assert_eq!(ids(&catalog.green_alternatives(chrome)), vec!["mozilla-firefox"]);
}

#[test]
fn neighbors_follow_the_filtered_listing() {
	let catalog = sample();
	let mut state = FilterState::new();
	state.toggle_category("Intelligence Artificielle");
	let listing = catalog.filtered_sorted(&state, &SearchOptions::default());
	assert_eq!(ids(&listing), vec!["chatgpt", "magicschool", "notebooklm"]);

	let around = neighbors(&listing, "chatgpt").expect("chatgpt listed");
	assert_eq!(around.previous.id, "notebooklm");
	assert_eq!(around.next.id, "magicschool");
	assert_eq!((around.position, around.total), (1, 3));
	assert!(neighbors(&listing, "kahoot").is_none());
}

struct ApplyToState<'s> {
	state: &'s mut FilterState,
	opened: Option<String>,
}

impl SelectionHandler for ApplyToState<'_> {
	fn on_category(&mut self, category: &str) {
		self.state.select_category(category);
	}

	fn on_discipline(&mut self, discipline: &str) {
		self.state.select_discipline(discipline);
	}

	fn on_activity(&mut self, activity: &str) {
		self.state.select_activity(activity);
	}

	fn on_software(&mut self, id: &str) {
		self.opened = Some(id.to_string());
	}

	fn on_enter_without_selection(&mut self) {}
}

#[test]
fn choosing_a_suggested_category_filters_the_listing() {
	let catalog = sample();
	let options = SearchOptions::default();
	let suggestions = catalog.suggest("quiz", &options);
	assert_eq!(suggestions.categories.first().map(String::as_str), Some("Quiz & Évaluation"));

	let mut state = FilterState::new();
	let mut handler = ApplyToState {
		state: &mut state,
		opened: None,
	};
	let mut navigator = Navigator::new();
	navigator.handle(NavigationKey::Down, &suggestions, &mut handler);
	navigator.handle(NavigationKey::Enter, &suggestions, &mut handler);
	assert!(handler.opened.is_none());

	assert_eq!(state.query(), "Quiz & Évaluation");
	let listing = catalog.filtered_sorted(&state, &options);
	assert_eq!(ids(&listing), vec!["kahoot", "quizlet", "wooclap"]);
}

#[test]
fn loads_fixture_from_a_temporary_file() {
	let mut file = tempfile::NamedTempFile::new().expect("create temp file");
	write!(
		file,
		r#"{{ "software": [
			{{ "id": "a", "name": "Alpha", "cost": "free" }},
			{{ "id": "b", "name": "Beta", "cost": "paid", "createdAt": 42 }}
		] }}"#
	)
	.expect("write fixture");

	let options = CatalogOptions::default().with_timestamps(TimestampPolicy::IdHash);
	let catalog = Catalog::from_path(file.path(), options).expect("fixture loads");
	assert_eq!(catalog.len(), 2);
	assert_eq!(catalog.taxonomy(), &Taxonomy::default());
	assert!(catalog.get("a").is_some_and(|record| record.updated_at.is_some()));
	assert_eq!(catalog.get("b").and_then(|record| record.updated_at), Some(42));
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().expect("create temp dir");
	let error = Catalog::from_path(dir.path().join("absent.json"), CatalogOptions::default())
		.expect_err("missing file");
	assert!(matches!(error, CatalogError::Io { .. }));
}
