//! Tab-separated inventory output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::InventoryError;
use crate::record::FileRecord;

/// Header line written at the top of every inventory.
pub const HEADER: &str = "directory\tfilename\tsize_bytes\n";

/// Default inventory file name.
pub const DEFAULT_OUTPUT: &str = "jpg_inventory.txt";

/// Writes records as `directory\tfilename\tsize_bytes` lines.
///
/// Lines always end in `\n`, regardless of platform. Paths that are not valid
/// UTF-8 are written lossily.
pub struct InventoryWriter<W: Write> {
    inner: W,
    written: u64,
}

impl InventoryWriter<BufWriter<File>> {
    /// Create (or truncate) the inventory file at `path` and write the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| InventoryError::io(path, e))?;
        Self::new(BufWriter::new(file)).map_err(|e| InventoryError::io(path, e))
    }
}

impl<W: Write> InventoryWriter<W> {
    /// Wrap a writer and emit the header line.
    pub fn new(mut inner: W) -> std::io::Result<Self> {
        inner.write_all(HEADER.as_bytes())?;
        Ok(Self { inner, written: 0 })
    }

    /// Append one record.
    pub fn write_record(&mut self, record: &FileRecord) -> std::io::Result<()> {
        writeln!(
            self.inner,
            "{}\t{}\t{}",
            record.directory.to_string_lossy(),
            record.filename,
            record.size_bytes
        )?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush and return the record count along with the inner writer.
    pub fn finish(mut self) -> std::io::Result<(u64, W)> {
        self.inner.flush()?;
        Ok((self.written, self.inner))
    }
}
