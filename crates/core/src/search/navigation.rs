//! Keyboard navigation through the autocomplete dropdown.
//!
//! The dropdown is split into four sections walked in a fixed order:
//! categories, disciplines, activities, then software. Empty sections are
//! skipped in both directions, and moving up past the first item returns the
//! focus to the search box.

use super::suggestions::Suggestions;

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
	Up,
	Down,
	Enter,
	Escape,
}

/// Which part of the dropdown holds the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
	/// Focus is in the search box; nothing is selected.
	#[default]
	Search,
	Category,
	Discipline,
	Activity,
	Software,
}

const SECTION_ORDER: [Section; 4] = [
	Section::Category,
	Section::Discipline,
	Section::Activity,
	Section::Software,
];

impl Section {
	fn len(self, suggestions: &Suggestions<'_>) -> usize {
		match self {
			Section::Search => 0,
			Section::Category => suggestions.categories.len(),
			Section::Discipline => suggestions.disciplines.len(),
			Section::Activity => suggestions.activities.len(),
			Section::Software => suggestions.software.len(),
		}
	}

	fn position(self) -> Option<usize> {
		SECTION_ORDER.iter().position(|section| *section == self)
	}
}

/// Callbacks fired when the user confirms a choice.
pub trait SelectionHandler {
	fn on_category(&mut self, category: &str);
	fn on_discipline(&mut self, discipline: &str);
	fn on_activity(&mut self, activity: &str);
	/// Receives the id of the selected record.
	fn on_software(&mut self, id: &str);
	/// Enter was pressed while nothing was selected.
	fn on_enter_without_selection(&mut self);
}

/// Selection cursor over a [`Suggestions`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
	section: Section,
	index: Option<usize>,
}

impl Navigator {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn section(&self) -> Section {
		self.section
	}

	/// Selected index within the current section, `None` while in the search box.
	#[must_use]
	pub fn index(&self) -> Option<usize> {
		self.index
	}

	pub fn reset(&mut self) {
		self.section = Section::Search;
		self.index = None;
	}

	/// Apply `key` against the current suggestions.
	///
	/// Returns `false` when the key was ignored because every section is empty.
	pub fn handle<H>(
		&mut self,
		key: NavigationKey,
		suggestions: &Suggestions<'_>,
		handler: &mut H,
	) -> bool
	where
		H: SelectionHandler + ?Sized,
	{
		if suggestions.is_empty() {
			return false;
		}

		match key {
			NavigationKey::Down => self.move_down(suggestions),
			NavigationKey::Up => self.move_up(suggestions),
			NavigationKey::Enter => self.confirm(suggestions, handler),
			NavigationKey::Escape => self.reset(),
		}
		true
	}

	fn move_down(&mut self, suggestions: &Suggestions<'_>) {
		let next_from = match (self.section.position(), self.index) {
			(None, _) | (_, None) => 0,
			(Some(position), Some(index)) => {
				if index + 1 < self.section.len(suggestions) {
					self.index = Some(index + 1);
					return;
				}
				position + 1
			}
		};

		if let Some(section) = SECTION_ORDER[next_from.min(SECTION_ORDER.len())..]
			.iter()
			.copied()
			.find(|section| section.len(suggestions) > 0)
		{
			self.section = section;
			self.index = Some(0);
		}
	}

	fn move_up(&mut self, suggestions: &Suggestions<'_>) {
		let (Some(position), Some(index)) = (self.section.position(), self.index) else {
			return;
		};

		if index > 0 {
			self.index = Some(index - 1);
			return;
		}

		match SECTION_ORDER[..position]
			.iter()
			.rev()
			.copied()
			.find(|section| section.len(suggestions) > 0)
		{
			Some(section) => {
				self.section = section;
				self.index = Some(section.len(suggestions) - 1);
			}
			None => self.reset(),
		}
	}

	fn confirm<H>(&mut self, suggestions: &Suggestions<'_>, handler: &mut H)
	where
		H: SelectionHandler + ?Sized,
	{
		let Some(index) = self.index else {
			handler.on_enter_without_selection();
			return;
		};

		let selected = match self.section {
			Section::Search => false,
			Section::Category => dispatch(suggestions.categories.get(index), |category| {
				handler.on_category(category);
			}),
			Section::Discipline => dispatch(suggestions.disciplines.get(index), |discipline| {
				handler.on_discipline(discipline);
			}),
			Section::Activity => dispatch(suggestions.activities.get(index), |activity| {
				handler.on_activity(activity);
			}),
			Section::Software => dispatch(suggestions.software.get(index), |record| {
				handler.on_software(&record.id);
			}),
		};

		if selected {
			self.reset();
		}
	}
}

/// Run `select` on the item when present; report whether it was.
fn dispatch<T>(item: Option<T>, select: impl FnOnce(T)) -> bool {
	match item {
		Some(item) => {
			select(item);
			true
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::SoftwareRecord;

	#[derive(Default)]
	struct Recorder {
		events: Vec<String>,
	}

	impl SelectionHandler for Recorder {
		fn on_category(&mut self, category: &str) {
			self.events.push(format!("category:{category}"));
		}

		fn on_discipline(&mut self, discipline: &str) {
			self.events.push(format!("discipline:{discipline}"));
		}

		fn on_activity(&mut self, activity: &str) {
			self.events.push(format!("activity:{activity}"));
		}

		fn on_software(&mut self, id: &str) {
			self.events.push(format!("software:{id}"));
		}

		fn on_enter_without_selection(&mut self) {
			self.events.push("submit".to_string());
		}
	}

	fn payload<'a>(
		categories: &[&str],
		disciplines: &[&str],
		activities: &[&str],
		software: &'a [SoftwareRecord],
	) -> Suggestions<'a> {
		let owned = |items: &[&str]| -> Vec<String> {
			items.iter().map(|s| s.to_string()).collect()
		};
		Suggestions {
			query: "qu".into(),
			total_results: software.len(),
			categories: owned(categories),
			disciplines: owned(disciplines),
			activities: owned(activities),
			software: software.iter().collect(),
		}
	}

	fn press(
		nav: &mut Navigator,
		keys: &[NavigationKey],
		s: &Suggestions<'_>,
		r: &mut Recorder,
	) {
		for key in keys {
			nav.handle(*key, s, r);
		}
	}

	#[test]
	fn down_walks_sections_in_order() {
		let software = [SoftwareRecord::new("kahoot", "Kahoot!")];
		let s = payload(&["Quiz"], &["Langues"], &["Révision"], &software);
		let mut nav = Navigator::new();
		let mut recorder = Recorder::default();

		let expected = [
			Section::Category,
			Section::Discipline,
			Section::Activity,
			Section::Software,
			Section::Software,
		];
		for section in expected {
			nav.handle(NavigationKey::Down, &s, &mut recorder);
			assert_eq!(nav.section(), section);
			assert_eq!(nav.index(), Some(0));
		}
	}

	#[test]
	fn empty_sections_are_skipped_both_ways() {
		let software = [
			SoftwareRecord::new("a", "A"),
			SoftwareRecord::new("b", "B"),
		];
		let s = payload(&["Quiz", "Design"], &[], &[], &software);
		let mut nav = Navigator::new();
		let mut recorder = Recorder::default();

		press(&mut nav, &[NavigationKey::Down; 3], &s, &mut recorder);
		assert_eq!((nav.section(), nav.index()), (Section::Software, Some(0)));

		nav.handle(NavigationKey::Up, &s, &mut recorder);
		assert_eq!((nav.section(), nav.index()), (Section::Category, Some(1)));

		press(&mut nav, &[NavigationKey::Up; 2], &s, &mut recorder);
		assert_eq!((nav.section(), nav.index()), (Section::Search, None));
	}

	#[test]
	fn up_from_first_section_returns_to_search() {
		let s = payload(&[], &["Langues"], &[], &[]);
		let mut nav = Navigator::new();
		let mut recorder = Recorder::default();

		nav.handle(NavigationKey::Down, &s, &mut recorder);
		assert_eq!(nav.section(), Section::Discipline);
		nav.handle(NavigationKey::Up, &s, &mut recorder);
		assert_eq!(nav, Navigator::new());
		nav.handle(NavigationKey::Up, &s, &mut recorder);
		assert_eq!(nav, Navigator::new());
	}

	#[test]
	fn enter_dispatches_and_resets() {
		let software = [SoftwareRecord::new("kahoot", "Kahoot!")];
		let s = payload(&[], &[], &["Révision"], &software);
		let mut nav = Navigator::new();
		let mut recorder = Recorder::default();

		nav.handle(NavigationKey::Enter, &s, &mut recorder);
		press(
			&mut nav,
			&[NavigationKey::Down, NavigationKey::Enter],
			&s,
			&mut recorder,
		);
		assert_eq!(nav, Navigator::new());
		press(
			&mut nav,
			&[NavigationKey::Down, NavigationKey::Down, NavigationKey::Enter],
			&s,
			&mut recorder,
		);

		assert_eq!(
			recorder.events,
			vec!["submit", "activity:Révision", "software:kahoot"]
		);
	}

	#[test]
	fn escape_resets_selection() {
		let s = payload(&["Quiz"], &[], &[], &[]);
		let mut nav = Navigator::new();
		let mut recorder = Recorder::default();

		nav.handle(NavigationKey::Down, &s, &mut recorder);
		nav.handle(NavigationKey::Escape, &s, &mut recorder);
		assert_eq!(nav, Navigator::new());
	}

	#[test]
	fn keys_are_ignored_without_suggestions() {
		let s = payload(&[], &[], &[], &[]);
		let mut nav = Navigator::new();
		let mut recorder = Recorder::default();

		assert!(!nav.handle(NavigationKey::Enter, &s, &mut recorder));
		assert!(!nav.handle(NavigationKey::Down, &s, &mut recorder));
		assert!(recorder.events.is_empty());
		assert_eq!(nav, Navigator::new());
	}
}
