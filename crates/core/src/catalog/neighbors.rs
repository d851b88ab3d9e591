use serde::Serialize;

use crate::model::SoftwareRecord;

/// Previous / next records around one entry of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbors<'a> {
	pub previous: &'a SoftwareRecord,
	pub next: &'a SoftwareRecord,
	/// 1-based position of the entry.
	pub position: usize,
	pub total: usize,
}

/// Locate `id` in `list` and return its neighbours, wrapping at both ends.
///
/// A single-entry list is its own neighbour.
pub fn neighbors<'a>(list: &[&'a SoftwareRecord], id: &str) -> Option<Neighbors<'a>> {
	let index = list.iter().position(|record| record.id == id)?;
	let total = list.len();
	let previous = if index == 0 { total - 1 } else { index - 1 };
	let next = if index + 1 == total { 0 } else { index + 1 };
	Some(Neighbors {
		previous: list[previous],
		next: list[next],
		position: index + 1,
		total,
	})
}
