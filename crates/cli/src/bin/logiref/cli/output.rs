use std::fmt::Write;

use anyhow::Result;
use logiref_core::{SoftwareRecord, Suggestions};
use serde_json::{Value, json};

use crate::workflow::{Replay, Report};

const UNRATED: &str = "non évalué";

/// Print a plain-text representation of the report.
pub(crate) fn print_plain(report: &Report<'_>) {
	print!("{}", format_plain(report));
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &Report<'_>) -> Result<()> {
	println!("{}", format_json(report)?);
	Ok(())
}

pub(crate) fn format_plain(report: &Report<'_>) -> String {
	let mut out = String::new();
	match report {
		Report::Listing { state, records } => {
			for record in records {
				let _ = writeln!(out, "{}", record_line(record));
			}
			let _ = writeln!(
				out,
				"{} result(s), {} active filter(s), sorted by {}",
				records.len(),
				state.active_filters_count(),
				state.sort()
			);
		}
		Report::Suggestions {
			suggestions,
			replay,
		} => {
			write_suggestions(&mut out, suggestions);
			if let Some(replay) = replay {
				write_replay(&mut out, replay);
			}
		}
		Report::Similar { record, similar } => {
			let _ = writeln!(out, "Similar to {}:", record.name);
			write_records(&mut out, similar, "  (none)");
		}
		Report::Detail {
			record,
			alternatives,
			similar,
			neighbors,
		} => {
			write_detail(&mut out, record);
			if !alternatives.is_empty() {
				let _ = writeln!(out, "Greener alternatives:");
				write_records(&mut out, alternatives, "");
			}
			let _ = writeln!(out, "Similar tools:");
			write_records(&mut out, similar, "  (none)");
			match neighbors {
				Some(around) => {
					let _ = writeln!(
						out,
						"Position {}/{} (previous: {}, next: {})",
						around.position, around.total, around.previous.name, around.next.name
					);
				}
				None => {
					let _ = writeln!(out, "Not part of the filtered listing");
				}
			}
		}
		Report::Tags {
			categories,
			disciplines,
			activities,
		} => {
			for (title, tags) in [
				("Categories", categories),
				("Disciplines", disciplines),
				("Activities", activities),
			] {
				if let Some(tags) = tags {
					let _ = writeln!(out, "{title}:");
					for tag in tags {
						let _ = writeln!(out, "  {tag}");
					}
				}
			}
		}
	}
	out
}

/// Format the report as a pretty-printed JSON document.
pub(crate) fn format_json(report: &Report<'_>) -> Result<String> {
	let payload = match report {
		Report::Listing { state, records } => json!({
			"type": "listing",
			"filters": state,
			"activeFilters": state.active_filters_count(),
			"total": records.len(),
			"records": summaries(records),
		}),
		Report::Suggestions {
			suggestions,
			replay,
		} => json!({
			"type": "suggestions",
			"query": suggestions.query,
			"totalResults": suggestions.total_results,
			"categories": suggestions.categories,
			"disciplines": suggestions.disciplines,
			"activities": suggestions.activities,
			"software": summaries(&suggestions.software),
			"replay": replay.as_ref().map(replay_json),
		}),
		Report::Similar { record, similar } => json!({
			"type": "similar",
			"id": record.id,
			"similar": summaries(similar),
		}),
		Report::Detail {
			record,
			alternatives,
			similar,
			neighbors,
		} => json!({
			"type": "detail",
			"record": record,
			"certificationLevel": record.certification_level(),
			"approved": record.is_approved(),
			"greenAlternatives": summaries(alternatives),
			"similar": summaries(similar),
			"neighbors": neighbors.map(|around| json!({
				"previous": around.previous.id,
				"next": around.next.id,
				"position": around.position,
				"total": around.total,
			})),
		}),
		Report::Tags {
			categories,
			disciplines,
			activities,
		} => json!({
			"type": "tags",
			"categories": categories,
			"disciplines": disciplines,
			"activities": activities,
		}),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

fn summary(record: &SoftwareRecord) -> Value {
	json!({
		"id": record.id,
		"name": record.name,
		"certificationLevel": record.certification_level(),
		"cost": record.cost.as_str(),
		"approved": record.is_approved(),
	})
}

fn summaries(records: &[&SoftwareRecord]) -> Vec<Value> {
	records.iter().map(|record| summary(record)).collect()
}

fn replay_json(replay: &Replay<'_>) -> Value {
	json!({
		"events": replay.events,
		"section": replay.section,
		"index": replay.index,
		"opened": replay.opened.map(|record| record.id.as_str()),
		"listing": replay.listing.as_deref().map(summaries),
	})
}

fn record_line(record: &SoftwareRecord) -> String {
	let level = record
		.certification_level()
		.map_or_else(|| UNRATED.to_string(), |level| format!("{level} {}", level.label()));
	let badge = if record.is_approved() { " *" } else { "" };
	format!(
		"{:<28} [{}] {} ({}){badge}",
		record.name,
		level,
		record.cost.as_str(),
		record.id
	)
}

fn write_records(out: &mut String, records: &[&SoftwareRecord], empty: &str) {
	if records.is_empty() && !empty.is_empty() {
		let _ = writeln!(out, "{empty}");
	}
	for record in records {
		let _ = writeln!(out, "  {}", record_line(record));
	}
}

fn write_suggestions(out: &mut String, suggestions: &Suggestions<'_>) {
	if !suggestions.has_suggestions() {
		let _ = writeln!(out, "No suggestions for '{}'", suggestions.query);
		return;
	}
	for (title, tags) in [
		("Categories", &suggestions.categories),
		("Disciplines", &suggestions.disciplines),
		("Activities", &suggestions.activities),
	] {
		if !tags.is_empty() {
			let _ = writeln!(out, "{title}: {}", tags.join(", "));
		}
	}
	let _ = writeln!(out, "Software:");
	write_records(out, &suggestions.software, "");
	let _ = writeln!(out, "{} matching tool(s)", suggestions.total_results);
}

fn write_replay(out: &mut String, replay: &Replay<'_>) {
	for event in &replay.events {
		let _ = writeln!(out, "> {event}");
	}
	match replay.index {
		Some(index) => {
			let _ = writeln!(out, "Focus: {} #{}", replay.section, index + 1);
		}
		None => {
			let _ = writeln!(out, "Focus: {}", replay.section);
		}
	}
	if let Some(record) = replay.opened {
		let _ = writeln!(out, "Opened: {}", record_line(record));
	}
	if let Some(listing) = &replay.listing {
		let _ = writeln!(out, "Listing ({}):", listing.len());
		write_records(out, listing, "  (empty)");
	}
}

fn write_detail(out: &mut String, record: &SoftwareRecord) {
	let _ = writeln!(out, "{}", record.name);
	if !record.short_description.is_empty() {
		let _ = writeln!(out, "{}", record.short_description);
	}
	if let Some(description) = &record.description {
		let _ = writeln!(out, "\n{description}\n");
	}
	let level = record
		.certification_level()
		.map_or_else(|| UNRATED.to_string(), |level| format!("{level} ({})", level.label()));
	let _ = writeln!(out, "Certification: {level}");
	if let Some(lgpd) = &record.lgpd {
		let _ = writeln!(
			out,
			"LGPD: hosting {}, rgpd {}, data collection {}",
			lgpd.hosting, lgpd.rgpd, lgpd.data_collection
		);
	}
	let _ = writeln!(out, "Cost: {}", record.cost.as_str());
	let flags = [
		("personal data", record.personal_data),
		("supported", record.supported),
		("campus training", record.campus_training),
		("approved", record.is_approved()),
	];
	let enabled: Vec<&str> = flags
		.iter()
		.filter(|(_, on)| *on)
		.map(|(name, _)| *name)
		.collect();
	if !enabled.is_empty() {
		let _ = writeln!(out, "Flags: {}", enabled.join(", "));
	}
	for (title, tags) in [
		("Categories", &record.categories),
		("Disciplines", &record.disciplines),
		("Activities", &record.activities),
	] {
		if !tags.is_empty() {
			let _ = writeln!(out, "{title}: {}", tags.join(", "));
		}
	}
	for (title, value) in [
		("Data location", &record.data_location),
		("Audience", &record.target_audience),
		("Website", &record.tool_url),
		("Documentation", &record.documentation),
		("Notes", &record.usage_notes),
	] {
		if let Some(value) = value {
			let _ = writeln!(out, "{title}: {value}");
		}
	}
}
