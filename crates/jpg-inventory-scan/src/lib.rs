//! Directory scanning for jpg-inventory.
//!
//! This crate finds the roots to scan and walks them, yielding one
//! [`FileRecord`] per file whose extension is in the configured set.
//!
//! # Overview
//!
//! - **Root discovery** via [`RootResolver`]: drive letters on Windows, `/`
//!   elsewhere
//! - **Lazy traversal** via jwalk, one record at a time
//! - **Link pruning**: symbolic links and junctions are never descended into
//! - **Skip, don't fail**: unreadable directories and vanished files are
//!   counted in [`ScanStats`] and passed over
//!
//! # Example
//!
//! ```rust,no_run
//! use jpg_inventory_scan::{ExtensionSet, ScanConfig, TreeWalker, host_resolver};
//!
//! let config = ScanConfig::new(host_resolver().roots(), ExtensionSet::jpg_and_jpeg());
//! let walker = TreeWalker::new(config);
//!
//! let mut walk = walker.walk();
//! for record in walk.by_ref() {
//!     println!("{}\t{}\t{}", record.directory.display(), record.filename, record.size_bytes);
//! }
//! println!("Skipped {} entries", walk.stats().total_skipped());
//! ```

mod roots;
mod walker;

pub use roots::{DriveLetters, FilesystemRoot, RootResolver, drives_from_mask, host_resolver};
pub use walker::{TreeWalker, Walk};

// Re-export core types for convenience
pub use jpg_inventory_core::{
    ExtensionSet, FileRecord, InventoryError, ScanConfig, ScanConfigBuilder, ScanStats,
};
