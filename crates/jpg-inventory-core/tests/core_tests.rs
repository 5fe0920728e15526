use std::fs;
use std::path::PathBuf;

use jpg_inventory_core::{
    ExtensionSet, FileRecord, HEADER, InventoryError, InventoryWriter, ScanConfig, ScanStats,
};
use tempfile::TempDir;

#[test]
fn test_file_record_path() {
    let record = FileRecord::new("/photos/2024", "IMG_0001.JPG", 4096);

    assert_eq!(record.path(), PathBuf::from("/photos/2024/IMG_0001.JPG"));
    assert_eq!(record.directory(), PathBuf::from("/photos/2024").as_path());
    assert_eq!(record.filename.as_str(), "IMG_0001.JPG");
    assert_eq!(record.size_bytes, 4096);
}

#[test]
fn test_jpg_only_excludes_jpeg() {
    let jpg_only = ExtensionSet::jpg_only();
    assert!(jpg_only.matches("a.jpg"));
    assert!(!jpg_only.matches("b.jpeg"));

    let both = ExtensionSet::jpg_and_jpeg();
    assert!(both.matches("a.jpg"));
    assert!(both.matches("b.JPEG"));
    assert!(!both.matches("c.png"));
    assert!(!both.matches("README"));
}

#[test]
fn test_custom_extension_set() {
    let set = ExtensionSet::new(["png", ".GIF"]).unwrap();
    assert!(set.matches("logo.PNG"));
    assert!(set.matches("anim.gif"));
    assert!(!set.matches("photo.jpg"));
}

#[test]
fn test_empty_extension_set_is_invalid_config() {
    let err = ExtensionSet::new(Vec::<&str>::new()).unwrap_err();
    assert!(matches!(err, InventoryError::InvalidConfig { .. }));
}

#[test]
fn test_scan_stats_accumulate() {
    let mut stats = ScanStats::new();
    stats.record_dir();
    stats.record_file(10);
    stats.record_file(20);
    stats.record_skipped_dir();
    stats.record_skipped_file();
    stats.record_skipped_link();

    assert_eq!(stats.records, 2);
    assert_eq!(stats.total_bytes, 30);
    assert_eq!(stats.dirs_visited, 1);
    assert_eq!(stats.total_skipped(), 3);
}

#[test]
fn test_scan_config_keeps_root_order() {
    let config = ScanConfig::new(["/b", "/a", "/c"], ExtensionSet::default());
    let roots: Vec<_> = config.roots.iter().map(|p| p.to_string_lossy().into_owned()).collect();
    assert_eq!(roots, vec!["/b", "/a", "/c"]);
}

#[test]
fn test_writer_creates_and_truncates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("inventory.txt");
    fs::write(&path, "stale contents that must disappear\n").unwrap();

    let mut writer = InventoryWriter::create(&path).unwrap();
    writer.write_record(&FileRecord::new("/root", "a.jpg", 10)).unwrap();
    let (count, _) = writer.finish().unwrap();

    assert_eq!(count, 1);
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, format!("{HEADER}/root\ta.jpg\t10\n"));
}

#[test]
fn test_writer_create_fails_for_missing_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no-such-dir").join("inventory.txt");

    let err = InventoryWriter::create(&path).err().unwrap();
    assert!(matches!(err, InventoryError::NotFound { .. }));
}
