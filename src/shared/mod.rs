//! Shared module for functionality re-exported across targets

pub mod logger;
