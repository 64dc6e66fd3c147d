//! Core module: the requirement evaluation engine and its ambient helpers

pub mod aggregate;
pub mod config;
pub mod evaluator;
pub mod models;
pub mod partition;
pub mod registry;
pub mod report;
pub mod stream;
pub mod transcript;

/// Returns the current version of the `DegreeProgress` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
