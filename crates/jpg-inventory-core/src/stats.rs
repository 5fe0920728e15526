//! Scan statistics.

/// Counters accumulated while a scan runs.
///
/// Skips are counted only for reporting; they never change which records
/// are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Records emitted.
    pub records: u64,
    /// Sum of emitted record sizes.
    pub total_bytes: u64,
    /// Directories reached by the traversal.
    pub dirs_visited: u64,
    /// Roots or directories that could not be listed.
    pub dirs_skipped: u64,
    /// Matching files whose size could not be read.
    pub files_skipped: u64,
    /// Directory links and junctions not descended into.
    pub links_skipped: u64,
}

impl ScanStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats with an emitted record.
    pub fn record_file(&mut self, size: u64) {
        self.records += 1;
        self.total_bytes += size;
    }

    /// Record a directory that was listed.
    pub fn record_dir(&mut self) {
        self.dirs_visited += 1;
    }

    /// Record a directory or root that could not be listed.
    pub fn record_skipped_dir(&mut self) {
        self.dirs_skipped += 1;
    }

    /// Record a matching file whose size lookup failed.
    pub fn record_skipped_file(&mut self) {
        self.files_skipped += 1;
    }

    /// Record a pruned directory link.
    pub fn record_skipped_link(&mut self) {
        self.links_skipped += 1;
    }

    /// Total entries skipped for any reason.
    pub fn total_skipped(&self) -> u64 {
        self.dirs_skipped + self.files_skipped + self.links_skipped
    }
}
