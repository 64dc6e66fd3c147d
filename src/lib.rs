//! Shared library for `DegreeProgress`
//! Contains the requirement evaluation engine used by the CLI

pub mod core;
pub mod shared;

pub use crate::core::{config, get_version};
pub use logger::{debug, error, info, verbose, warn};
