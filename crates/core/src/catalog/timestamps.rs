use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::SoftwareRecord;

/// 2023-01-01T00:00:00+01:00 in milliseconds.
pub const SYNTHETIC_EPOCH_MS: i64 = 1_672_527_600_000;
const DAY_MS: i64 = 86_400_000;
const HASH_WINDOW_MS: u64 = 2 * 365 * 86_400_000;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// How records without authored dates receive one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampPolicy {
	/// Keep whatever the fixture says; missing dates stay missing.
	#[default]
	Authored,
	/// Epoch plus one day per position in the catalog.
	ListPosition,
	/// Epoch plus a stable hash of the id, within a two-year window.
	IdHash,
}

impl TimestampPolicy {
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			TimestampPolicy::Authored => "authored",
			TimestampPolicy::ListPosition => "list-position",
			TimestampPolicy::IdHash => "id-hash",
		}
	}

	/// Synthetic timestamp for the record at `position`, if the policy makes one.
	#[must_use]
	pub fn synthesize(self, position: usize, id: &str) -> Option<i64> {
		match self {
			TimestampPolicy::Authored => None,
			TimestampPolicy::ListPosition => {
				let days = i64::try_from(position).unwrap_or(i64::MAX / DAY_MS);
				Some(SYNTHETIC_EPOCH_MS.saturating_add(days.saturating_mul(DAY_MS)))
			}
			TimestampPolicy::IdHash => {
				let offset = fnv1a(id.as_bytes()) % HASH_WINDOW_MS;
				Some(SYNTHETIC_EPOCH_MS + offset as i64)
			}
		}
	}

	/// Fill missing `created_at` / `updated_at` fields in place.
	///
	/// A record with only one date gets the other one copied from it.
	pub fn apply(self, records: &mut [SoftwareRecord]) -> usize {
		let mut filled = 0;
		for (position, record) in records.iter_mut().enumerate() {
			if record.created_at.is_some() && record.updated_at.is_some() {
				continue;
			}
			let Some(stamp) = record
				.created_at
				.or(record.updated_at)
				.or_else(|| self.synthesize(position, &record.id))
			else {
				continue;
			};
			record.created_at.get_or_insert(stamp);
			record.updated_at.get_or_insert(stamp);
			filled += 1;
		}
		filled
	}
}

impl fmt::Display for TimestampPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Raised when parsing an unknown timestamp policy id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown timestamp policy '{0}' (expected authored, list-position or id-hash)")]
pub struct UnknownTimestampPolicy(pub String);

impl FromStr for TimestampPolicy {
	type Err = UnknownTimestampPolicy;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim() {
			"authored" => Ok(TimestampPolicy::Authored),
			"list-position" => Ok(TimestampPolicy::ListPosition),
			"id-hash" => Ok(TimestampPolicy::IdHash),
			other => Err(UnknownTimestampPolicy(other.to_string())),
		}
	}
}

fn fnv1a(bytes: &[u8]) -> u64 {
	bytes.iter().fold(FNV_OFFSET, |hash, byte| {
		(hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
	})
}
