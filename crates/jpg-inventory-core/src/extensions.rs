//! Case-insensitive extension filter.

use std::ffi::OsStr;
use std::path::Path;

use compact_str::{CompactString, format_compact};
use indexmap::IndexSet;

use crate::error::InventoryError;

/// Set of file extensions a scan matches against.
///
/// Entries are stored lowercase with a leading dot (`.jpg`). The set is never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: IndexSet<CompactString>,
}

impl ExtensionSet {
    /// Build a set from user-provided extensions.
    ///
    /// `JPG`, `.jpg` and `.JPG` all normalise to `.jpg`. Duplicates collapse.
    pub fn new<I, S>(extensions: I) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = IndexSet::new();
        for raw in extensions {
            set.insert(normalize(raw.as_ref())?);
        }

        if set.is_empty() {
            return Err(InventoryError::invalid_config(
                "Extension set cannot be empty",
            ));
        }

        Ok(Self { extensions: set })
    }

    /// `.jpg` and `.jpeg`.
    pub fn jpg_and_jpeg() -> Self {
        Self::from_static(&[".jpg", ".jpeg"])
    }

    /// `.jpg` only.
    pub fn jpg_only() -> Self {
        Self::from_static(&[".jpg"])
    }

    fn from_static(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|e| CompactString::new(e))
                .collect(),
        }
    }

    /// Check whether a file name carries one of the extensions.
    ///
    /// Only the final extension counts, and a dotfile's leading dot does not
    /// start one (`.jpg` on its own never matches).
    pub fn matches(&self, file_name: impl AsRef<OsStr>) -> bool {
        let Some(ext) = Path::new(file_name.as_ref()).extension() else {
            return false;
        };
        let dotted = format_compact!(".{}", ext.to_string_lossy().to_lowercase());
        self.extensions.contains(dotted.as_str())
    }

    /// Check membership of an already-normalised extension such as `.jpeg`.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// Extensions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(CompactString::as_str)
    }

    /// Number of extensions in the set.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether the set has no extensions.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::jpg_and_jpeg()
    }
}

fn normalize(raw: &str) -> Result<CompactString, InventoryError> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(InventoryError::invalid_config(format!(
            "Invalid extension: {raw:?}"
        )));
    }
    if trimmed.contains(['/', '\\']) {
        return Err(InventoryError::invalid_config(format!(
            "Extension cannot contain a path separator: {raw:?}"
        )));
    }
    Ok(format_compact!(".{}", trimmed.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_dot() {
        let set = ExtensionSet::new(["JPG", ".Jpeg", ".png"]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![".jpg", ".jpeg", ".png"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = ExtensionSet::new([".jpg", "jpg", ".JPG"]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(ExtensionSet::new(Vec::<String>::new()).is_err());
        assert!(ExtensionSet::new(["."]).is_err());
        assert!(ExtensionSet::new(["  "]).is_err());
        assert!(ExtensionSet::new(["a/b"]).is_err());
    }

    #[test]
    fn test_matches_case_insensitive() {
        let set = ExtensionSet::jpg_only();
        assert!(set.matches("PHOTO.JPG"));
        assert!(set.matches("photo.jpg"));
        assert!(set.matches("archive.tar.Jpg"));
        assert!(!set.matches("photo.jpeg"));
    }

    #[test]
    fn test_ignores_extensionless_and_dotfiles() {
        let set = ExtensionSet::jpg_and_jpeg();
        assert!(!set.matches("jpg"));
        assert!(!set.matches(".jpg"));
        assert!(!set.matches("photo."));
        assert!(!set.matches("photo.jpg.bak"));
        assert!(set.matches(".hidden.jpeg"));
    }

    #[test]
    fn test_default_includes_jpeg() {
        let set = ExtensionSet::default();
        assert!(set.contains(".jpg"));
        assert!(set.contains(".jpeg"));
        assert!(!set.is_empty());
    }
}
