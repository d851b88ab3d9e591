//! Catalog entities: software records, certification levels and tag taxonomies.

mod certification;
mod record;
mod taxonomy;

pub use certification::{CertificationLevel, InvalidLevel, LgpdRatings, Rating};
pub use record::{CostTier, SoftwareRecord};
pub use taxonomy::{Activity, Category, Discipline, Taxonomy};
