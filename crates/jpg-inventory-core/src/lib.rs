//! Core types for jpg-inventory.
//!
//! This crate holds the data model shared by the scanner and the command
//! line: discovered file records, the extension filter, scan configuration
//! and statistics, plus the tab-separated inventory writer.

mod config;
mod error;
mod extensions;
mod output;
mod record;
mod stats;

pub use config::{ScanConfig, ScanConfigBuilder, ScanConfigBuilderError};
pub use error::InventoryError;
pub use extensions::ExtensionSet;
pub use output::{DEFAULT_OUTPUT, HEADER, InventoryWriter};
pub use record::FileRecord;
pub use stats::ScanStats;
