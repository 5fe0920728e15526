//! Discovered file records.

use std::path::{Path, PathBuf};

use compact_str::CompactString;

/// One matching file found during a scan.
///
/// Records are plain values handed to the consumer in emission order; nothing
/// about them is retained by the walker once yielded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRecord {
    /// Directory containing the file, as reached from its scan root.
    pub directory: PathBuf,
    /// Base name including extension.
    pub filename: CompactString,
    /// Byte length observed at scan time.
    pub size_bytes: u64,
}

impl FileRecord {
    /// Create a new record.
    pub fn new(
        directory: impl Into<PathBuf>,
        filename: impl Into<CompactString>,
        size_bytes: u64,
    ) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
            size_bytes,
        }
    }

    /// Full path of the file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.filename.as_str())
    }

    /// Directory as a borrowed path.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
