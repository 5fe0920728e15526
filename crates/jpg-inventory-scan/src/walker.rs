//! JWalk-based tree walker.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use jwalk::{DirEntry, DirEntryIter, Parallelism, WalkDir};
use tracing::{debug, info, trace};

use jpg_inventory_core::{ExtensionSet, FileRecord, ScanConfig, ScanStats};

type Entry = DirEntry<((), ())>;

/// Walks scan roots and yields records for files matching the extension set.
///
/// Symbolic links and junctions are never descended into, and every listing
/// or size-lookup failure skips only the entry it concerns.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    config: ScanConfig,
}

impl TreeWalker {
    /// Create a walker for the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The configuration this walker scans with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Start a new scan.
    ///
    /// The returned iterator is lazy and single-pass; call `walk` again to
    /// rescan.
    pub fn walk(&self) -> Walk {
        Walk {
            roots: self.config.roots.clone().into_iter(),
            entries: None,
            extensions: self.config.extensions.clone(),
            stats: ScanStats::new(),
        }
    }
}

/// A scan in progress. Yields one [`FileRecord`] per matching file.
///
/// Roots are processed strictly one after another.
pub struct Walk {
    roots: std::vec::IntoIter<PathBuf>,
    entries: Option<DirEntryIter<((), ())>>,
    extensions: ExtensionSet,
    stats: ScanStats,
}

impl Walk {
    /// Counters accumulated so far.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    fn open_root(&mut self, root: PathBuf) -> Option<DirEntryIter<((), ())>> {
        if let Err(err) = check_root(&root) {
            debug!(root = %root.display(), error = %err, "skipping inaccessible root");
            self.stats.record_skipped_dir();
            return None;
        }

        info!(root = %root.display(), "scanning root");
        Some(walk_dir(root).into_iter())
    }

    fn visit(&mut self, entry: Result<Entry, jwalk::Error>) -> Option<FileRecord> {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(path = ?err.path(), error = %err, "skipping unreadable entry");
                self.stats.record_skipped_dir();
                return None;
            }
        };

        // A root reached through a link is still walked; jwalk reports it
        // with the link's file type.
        let file_type = entry.file_type();
        if file_type.is_dir() || entry.depth() == 0 {
            match &entry.read_children_error {
                Some(err) => {
                    debug!(path = %entry.path().display(), error = %err, "skipping unreadable directory");
                    self.stats.record_skipped_dir();
                }
                None => self.stats.record_dir(),
            }
            return None;
        }

        if file_type.is_symlink() && points_to_dir(&entry.path()) {
            debug!(path = %entry.path().display(), "not descending into directory link");
            self.stats.record_skipped_link();
            return None;
        }

        if !self.extensions.matches(entry.file_name()) {
            return None;
        }

        let path = entry.path();
        let size = match file_size(&path) {
            Ok(size) => size,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable file");
                self.stats.record_skipped_file();
                return None;
            }
        };
        let directory = path.parent()?.to_path_buf();
        let filename = CompactString::new(entry.file_name().to_string_lossy());

        trace!(path = %path.display(), size, "matched");
        self.stats.record_file(size);
        Some(FileRecord::new(directory, filename, size))
    }
}

impl Iterator for Walk {
    type Item = FileRecord;

    fn next(&mut self) -> Option<FileRecord> {
        loop {
            if let Some(entries) = self.entries.as_mut() {
                let Some(entry) = entries.next() else {
                    self.entries = None;
                    continue;
                };
                if let Some(record) = self.visit(entry) {
                    return Some(record);
                }
                continue;
            }

            let root = self.roots.next()?;
            self.entries = self.open_root(root);
        }
    }
}

/// Configure jwalk for a serial, unsorted walk that never leaves the tree
/// through a link below the root.
fn walk_dir(root: PathBuf) -> WalkDir {
    WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .sort(false)
        .skip_hidden(false)
        .follow_links(false)
        .process_read_dir(|depth, _path, _state, children| {
            // `None` is the root entry itself.
            if depth.is_none() {
                return;
            }
            for child in children.iter_mut().flatten() {
                if child.file_type().is_symlink() {
                    child.read_children_path = None;
                }
            }
        })
}

/// Check that a root is a directory, following a link at the root itself.
fn check_root(root: &Path) -> io::Result<()> {
    if !fs::metadata(root)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            "root is not a directory",
        ));
    }
    Ok(())
}

/// Size of a matching file, following a file link to its target.
fn file_size(path: &Path) -> io::Result<u64> {
    let metadata = fs::metadata(path)?;
    if metadata.is_dir() {
        return Err(io::Error::new(io::ErrorKind::IsADirectory, "not a file"));
    }
    Ok(metadata.len())
}

fn points_to_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}
