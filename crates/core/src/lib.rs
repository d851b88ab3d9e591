//! Core library for browsing the `logiref` educational software catalog.
//!
//! The root module re-exports the types most callers need so that the CLI
//! and other embedders can load a catalog, filter it and query it without
//! digging through the module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod error;
pub mod filters;
pub mod model;
pub mod search;
pub mod similarity;

pub use crate::catalog::{
	Catalog, CatalogOptions, Neighbors, TimestampPolicy, UnknownTimestampPolicy, neighbors,
};
pub use crate::error::{CatalogError, Result};
pub use crate::filters::{FilterState, PopularFilter, SortOrder, TagKind, filtered_sorted};
pub use crate::model::{
	Activity, Category, CertificationLevel, CostTier, Discipline, InvalidLevel, LgpdRatings,
	SoftwareRecord, Taxonomy,
};
pub use crate::search::{
	FuzzyOptions, MatchStrategy, NavigationKey, Navigator, SearchOptions, Section,
	SelectionHandler, Suggestions, SynonymTable, normalize, suggest,
};
pub use crate::similarity::{DEFAULT_SIMILAR_LIMIT, similar_to};
