//! Configuration loading and resolution.
//!
//! [`load`] merges config files, environment variables and CLI flags into a
//! [`ResolvedConfig`] the workflow runs against.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
#[cfg(test)]
pub(crate) use resolved::sample_config;
