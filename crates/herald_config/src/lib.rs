//! Parsing and validation of `herald.toml` reporter configuration files.
//!
//! This crate reads the reporter configuration file and produces a
//! strongly-typed [`ReporterConfig`] controlling colored output and
//! base-path stripping for displayed file paths.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{ColorMode, ReportSection, ReporterConfig};
