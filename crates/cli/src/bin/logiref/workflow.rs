use anyhow::{Context, Result};
use logiref_core::{
	Catalog, CertificationLevel, FilterState, Navigator, Neighbors, Section, SelectionHandler,
	SoftwareRecord, SortOrder, Suggestions, neighbors,
};
use tracing::{debug, info};

use crate::cli::{Command, FilterArgs, KeyArg, TagKindArg};
use crate::settings::ResolvedConfig;

/// Result of one command, ready to be printed.
#[derive(Debug)]
pub(crate) enum Report<'a> {
	Listing {
		state: FilterState,
		records: Vec<&'a SoftwareRecord>,
	},
	Suggestions {
		suggestions: Suggestions<'a>,
		replay: Option<Replay<'a>>,
	},
	Similar {
		record: &'a SoftwareRecord,
		similar: Vec<&'a SoftwareRecord>,
	},
	Detail {
		record: &'a SoftwareRecord,
		alternatives: Vec<&'a SoftwareRecord>,
		similar: Vec<&'a SoftwareRecord>,
		neighbors: Option<Neighbors<'a>>,
	},
	Tags {
		categories: Option<Vec<&'a str>>,
		disciplines: Option<Vec<&'a str>>,
		activities: Option<Vec<&'a str>>,
	},
}

/// Outcome of replaying navigation keys over the suggestion dropdown.
#[derive(Debug)]
pub(crate) struct Replay<'a> {
	pub(crate) events: Vec<String>,
	pub(crate) section: &'static str,
	pub(crate) index: Option<usize>,
	pub(crate) opened: Option<&'a SoftwareRecord>,
	/// Listing after the selection was applied, when it changed the filters.
	pub(crate) listing: Option<Vec<&'a SoftwareRecord>>,
}

/// Loads the catalog once and answers commands against it.
pub(crate) struct Workflow {
	catalog: Catalog,
	config: ResolvedConfig,
}

impl Workflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalog = Catalog::from_path(&config.catalog_path, config.catalog).with_context(|| {
			format!(
				"failed to load catalog from {}",
				config.catalog_path.display()
			)
		})?;
		Ok(Self { catalog, config })
	}

	#[cfg(test)]
	pub(crate) fn with_catalog(catalog: Catalog, config: ResolvedConfig) -> Self {
		Self { catalog, config }
	}

	pub(crate) fn run(&self, command: &Command) -> Result<Report<'_>> {
		match command {
			Command::List(filters) => {
				let state = self.filter_state(filters)?;
				let records = self.catalog.filtered_sorted(&state, &self.config.search);
				info!(shown = records.len(), total = self.catalog.len(), "listed catalog");
				Ok(Report::Listing { state, records })
			}
			Command::Suggest { query, keys } => Ok(self.suggest(query, keys)),
			Command::Similar { id, .. } => {
				let record = self.catalog.require(id)?;
				let similar = self.catalog.similar_to(id, self.config.similar_limit)?;
				Ok(Report::Similar { record, similar })
			}
			Command::Show { id, filters } => {
				let record = self.catalog.require(id)?;
				let state = self.filter_state(filters)?;
				let listing = self.catalog.filtered_sorted(&state, &self.config.search);
				Ok(Report::Detail {
					record,
					alternatives: self.catalog.green_alternatives(record),
					similar: self.catalog.similar_to(id, self.config.similar_limit)?,
					neighbors: neighbors(&listing, id),
				})
			}
			Command::Tags { kind } => Ok(self.tags(*kind)),
		}
	}

	fn filter_state(&self, filters: &FilterArgs) -> Result<FilterState> {
		let mut state = FilterState::new();
		state.set_sort(self.config.sort);
		if let Some(query) = &filters.query {
			state.set_query(query.clone());
		}
		for tag in &filters.categories {
			state.toggle_category(tag.clone());
		}
		for tag in &filters.disciplines {
			state.toggle_discipline(tag.clone());
		}
		for tag in &filters.activities {
			state.toggle_activity(tag.clone());
		}
		for level in &filters.levels {
			let level = CertificationLevel::try_from(*level)?;
			state.toggle_level(level);
		}
		for filter in &filters.popular {
			state.toggle_popular(*filter);
		}
		debug!(active = state.active_filters_count(), "built filter state");
		Ok(state)
	}

	fn suggest(&self, query: &str, keys: &[KeyArg]) -> Report<'_> {
		let suggestions = self.catalog.suggest(query, &self.config.search);
		if keys.is_empty() {
			return Report::Suggestions {
				suggestions,
				replay: None,
			};
		}

		let mut navigator = Navigator::new();
		let mut handler = ReplayHandler::new(query, self.config.sort);
		for key in keys {
			navigator.handle((*key).into(), &suggestions, &mut handler);
		}

		let listing = handler
			.state
			.has_active_filters()
			.then(|| self.catalog.filtered_sorted(&handler.state, &self.config.search));
		let replay = Replay {
			events: handler.events,
			section: section_name(navigator.section()),
			index: navigator.index(),
			opened: handler.opened.as_deref().and_then(|id| self.catalog.get(id)),
			listing,
		};
		Report::Suggestions {
			suggestions,
			replay: Some(replay),
		}
	}

	fn tags(&self, kind: TagKindArg) -> Report<'_> {
		let pick = |wanted, tags| kind.includes(wanted).then_some(tags);
		Report::Tags {
			categories: pick(TagKindArg::Categories, self.catalog.unique_categories()),
			disciplines: pick(TagKindArg::Disciplines, self.catalog.unique_disciplines()),
			activities: pick(TagKindArg::Activities, self.catalog.unique_activities()),
		}
	}
}

/// Applies confirmed selections the way the catalog page does.
struct ReplayHandler {
	query: String,
	state: FilterState,
	events: Vec<String>,
	opened: Option<String>,
}

impl ReplayHandler {
	fn new(query: &str, sort: SortOrder) -> Self {
		let mut state = FilterState::new();
		state.set_sort(sort);
		Self {
			query: query.to_string(),
			state,
			events: Vec::new(),
			opened: None,
		}
	}
}

impl SelectionHandler for ReplayHandler {
	fn on_category(&mut self, category: &str) {
		self.events.push(format!("category: {category}"));
		self.state.select_category(category);
	}

	fn on_discipline(&mut self, discipline: &str) {
		self.events.push(format!("discipline: {discipline}"));
		self.state.select_discipline(discipline);
	}

	fn on_activity(&mut self, activity: &str) {
		self.events.push(format!("activity: {activity}"));
		self.state.select_activity(activity);
	}

	fn on_software(&mut self, id: &str) {
		self.events.push(format!("software: {id}"));
		self.opened = Some(id.to_string());
	}

	fn on_enter_without_selection(&mut self) {
		self.events.push(format!("search: {}", self.query));
		self.state.set_query(self.query.clone());
	}
}

fn section_name(section: Section) -> &'static str {
	match section {
		Section::Search => "search",
		Section::Category => "category",
		Section::Discipline => "discipline",
		Section::Activity => "activity",
		Section::Software => "software",
	}
}
