use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for fallible catalog operations.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog file could not be read.
	#[error("failed to read catalog {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The catalog payload is not valid JSON or does not match the schema.
	#[error("failed to parse catalog: {0}")]
	Parse(#[from] serde_json::Error),

	/// Two records share the same identifier.
	#[error("software id '{id}' appears more than once in the catalog")]
	DuplicateId { id: String },

	/// A record was requested by an identifier that is not in the catalog.
	#[error("no software with id '{id}'")]
	UnknownRecord { id: String },
}
