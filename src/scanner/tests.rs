use super::*;
use std::fs;

fn fixture_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("temp dir should be creatable")
}

#[test]
fn test_empty_directory_yields_no_entries() {
    let dir = fixture_dir();
    let entries = DirectoryScanner::new(dir.path()).entries().unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_entries_carry_name_and_size() {
    let dir = fixture_dir();
    fs::write(dir.path().join("defender.snd"), b"\x0f\x8e\x7f").unwrap();

    let entries = DirectoryScanner::new(dir.path()).entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "defender.snd");
    assert_eq!(entries[0].size, 3);
}

#[test]
fn test_default_exclusions_skip_ds_store() {
    let dir = fixture_dir();
    fs::write(dir.path().join(".DS_Store"), b"junk").unwrap();
    fs::write(dir.path().join("a.bin"), b"data").unwrap();

    let entries = DirectoryScanner::new(dir.path()).entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "a.bin");
}

#[test]
fn test_exclude_own_name() {
    let dir = fixture_dir();
    fs::write(dir.path().join("romscan"), b"the tool itself").unwrap();
    fs::write(dir.path().join("a.bin"), b"data").unwrap();

    let entries = DirectoryScanner::new(dir.path())
        .exclude("romscan")
        .entries()
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "a.bin");
}

#[test]
fn test_no_recursion_into_subdirectories() {
    let dir = fixture_dir();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("deep.bin"), b"data").unwrap();

    let entries = DirectoryScanner::new(dir.path()).entries().unwrap();

    // The subdirectory itself is listed (reads of it fail later); its
    // contents are not.
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "nested");
}

#[test]
fn test_read_bytes_round_trips_content() {
    let dir = fixture_dir();
    let content: Vec<u8> = (0..=255).collect();
    fs::write(dir.path().join("binary.dat"), &content).unwrap();

    let entries = DirectoryScanner::new(dir.path()).entries().unwrap();
    let bytes = entries[0].read_bytes().unwrap();
    assert_eq!(bytes, content);
}

#[test]
fn test_read_bytes_fails_on_directory() {
    let dir = fixture_dir();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let entries = DirectoryScanner::new(dir.path()).entries().unwrap();
    let result = entries[0].read_bytes();
    assert!(matches!(result, Err(ScanError::Read { .. })));
}

#[test]
fn test_entries_fails_on_missing_root() {
    let dir = fixture_dir();
    let missing = dir.path().join("does-not-exist");

    let result = DirectoryScanner::new(&missing).entries();
    assert!(matches!(result, Err(ScanError::List { .. })));
}
