//! Filesystem tests for source reading and discovery.

use jsc_core::source::{discover_javascript_files, is_javascript_file, resolve_inputs};
use jsc_core::{InputSelection, JscError, SourceUnit};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(dir: &Path, rel: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "var a = 1;\n").unwrap();
    path
}

#[test]
fn test_extension_case_insensitive() {
    assert!(is_javascript_file(Path::new("a.js")));
    assert!(is_javascript_file(Path::new("B.JS")));
    assert!(is_javascript_file(Path::new("dir/c.Js")));
    assert!(!is_javascript_file(Path::new("a.json")));
    assert!(!is_javascript_file(Path::new("js")));
}

#[test]
fn test_discover_flat() {
    let dir = TempDir::new().unwrap();
    let b = touch(dir.path(), "b.js");
    let a = touch(dir.path(), "a.JS");
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "sub/c.js");

    let files = discover_javascript_files(dir.path(), false).unwrap();
    assert_eq!(files, vec![a, b]);
}

#[test]
fn test_discover_recursive() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a.js");
    touch(dir.path(), "sub/c.js");
    touch(dir.path(), "sub/deeper/d.js");

    let files = discover_javascript_files(dir.path(), true).unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| is_javascript_file(f)));
}

#[test]
fn test_discover_missing_root() {
    let dir = TempDir::new().unwrap();
    let err = discover_javascript_files(&dir.path().join("nope"), true).unwrap_err();
    assert!(matches!(err, JscError::DirectoryNotFound { .. }));
}

#[test]
fn test_discover_file_root_rejected() {
    let dir = TempDir::new().unwrap();
    let file = touch(dir.path(), "a.js");
    let err = discover_javascript_files(&file, false).unwrap_err();
    assert!(matches!(err, JscError::NotADirectory { .. }));
}

#[test]
fn test_resolve_explicit_files_keeps_order() {
    let files = vec![PathBuf::from("z.js"), PathBuf::from("a.js")];
    let resolved = resolve_inputs(&InputSelection::Files(files.clone())).unwrap();
    assert_eq!(resolved, files);
}

#[test]
fn test_read_unit() {
    let dir = TempDir::new().unwrap();
    let path = touch(dir.path(), "a.js");
    let unit = SourceUnit::read(&path).unwrap();
    assert_eq!(unit.content(), "var a = 1;\n");
    assert_eq!(unit.len(), 11);
    assert!(unit.identifier().ends_with("a.js"));
}

#[test]
fn test_read_missing_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = SourceUnit::read(&dir.path().join("missing.js")).unwrap_err();
    assert!(matches!(err, JscError::Io { .. }));
}

#[test]
fn test_read_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bin.js");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    let err = SourceUnit::read(&path).unwrap_err();
    assert!(matches!(err, JscError::InvalidEncoding { .. }));
}
