//! Shared types, error model, and configuration for the reference-rates
//! coverage generator.
//!
//! This crate is the foundation depended on by the core and CLI crates.
//! It provides:
//! - [`CoverageError`] — the unified error type
//! - Domain types ([`IndexRecord`], [`MergedRecord`], [`Location`])
//! - Configuration ([`AppConfig`], [`OutputConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ExtraIndex, LOCAL_CONFIG_FILE, OutputConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{CoverageError, Result};
pub use types::{COVERAGE_HEADERS, IndexRecord, Location, MergedRecord, NO_DATA_PLACEHOLDER};
