//! CLI command handlers for `DegreeProgress`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod classify;
pub mod config;
pub mod evaluate;
pub mod programs;
