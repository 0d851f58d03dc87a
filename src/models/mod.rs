// src/models/mod.rs

//! Domain models for school lookups.
//!
//! Records returned to the caller and the configuration that drives the
//! services.

mod config;
mod identity;
mod school;

// Re-export all public types
pub use config::{
    Config, DirectoryConfig, DirectoryEndpoint, HttpConfig, IdentityConfig, SearchConfig,
};
pub use identity::{DEFAULT_PRIMARY, DEFAULT_SECONDARY, IdentityRecord};
pub use school::{SchoolRecord, UNKNOWN_CITY};
