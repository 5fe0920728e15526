//! Default scan roots.
//!
//! When the caller names no roots, the scan covers every mounted volume the
//! host exposes. Windows enumerates drive letters; other platforms have a
//! single filesystem root.

use std::path::PathBuf;

/// Source of default scan roots.
pub trait RootResolver {
    /// Roots in the order they should be scanned. An empty list is valid.
    fn roots(&self) -> Vec<PathBuf>;
}

/// One root per mounted drive letter, `A:\` through `Z:\`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveLetters;

impl RootResolver for DriveLetters {
    fn roots(&self) -> Vec<PathBuf> {
        drives_from_mask(logical_drive_mask())
    }
}

/// The single `/` root of a unified filesystem namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemRoot;

impl RootResolver for FilesystemRoot {
    fn roots(&self) -> Vec<PathBuf> {
        vec![PathBuf::from("/")]
    }
}

/// Resolver for the platform this binary runs on.
pub fn host_resolver() -> Box<dyn RootResolver> {
    if cfg!(windows) {
        Box::new(DriveLetters)
    } else {
        Box::new(FilesystemRoot)
    }
}

/// Decode a logical-drives bitmask (bit 0 = `A:`) into drive roots.
pub fn drives_from_mask(mask: u32) -> Vec<PathBuf> {
    (0..26u8)
        .filter(|&bit| mask & (1 << bit) != 0)
        .map(|bit| PathBuf::from(format!("{}:\\", char::from(b'A' + bit))))
        .collect()
}

#[cfg(windows)]
fn logical_drive_mask() -> u32 {
    // SAFETY: GetLogicalDrives takes no arguments and only reads process-wide state.
    unsafe { windows::Win32::Storage::FileSystem::GetLogicalDrives() }
}

#[cfg(not(windows))]
fn logical_drive_mask() -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drives_from_mask_ascending() {
        // A:, C:, D:, Z:
        let mask = 0b1 | 0b100 | 0b1000 | (1 << 25);
        let roots = drives_from_mask(mask);
        assert_eq!(
            roots,
            vec![
                PathBuf::from("A:\\"),
                PathBuf::from("C:\\"),
                PathBuf::from("D:\\"),
                PathBuf::from("Z:\\"),
            ]
        );
    }

    #[test]
    fn test_drives_from_empty_mask() {
        assert!(drives_from_mask(0).is_empty());
    }

    #[test]
    fn test_high_bits_ignored() {
        assert_eq!(drives_from_mask(1 << 30 | 1 << 2), vec![PathBuf::from("C:\\")]);
    }

    #[test]
    fn test_filesystem_root() {
        assert_eq!(FilesystemRoot.roots(), vec![PathBuf::from("/")]);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_host_resolver_is_filesystem_root() {
        assert_eq!(host_resolver().roots(), vec![PathBuf::from("/")]);
    }

    #[cfg(windows)]
    #[test]
    fn test_host_resolver_lists_drive_letters() {
        let roots = host_resolver().roots();
        assert!(roots.iter().all(|r| r.to_string_lossy().ends_with(":\\")));
    }
}
