//! Tests for source directory validation

use super::{validate_source_directory, validate_sql_file, ValidationResult};
use crate::source::SourceOptions;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn create_sql_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(contents).unwrap();
    path
}

#[test]
fn test_validate_sql_file_valid() {
    let temp_dir = tempdir().unwrap();
    let path = create_sql_file(temp_dir.path(), "orders.sql", b"SELECT * FROM orders");

    let result = validate_sql_file(&path, temp_dir.path());

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_validate_sql_file_only_comments() {
    let temp_dir = tempdir().unwrap();
    let path = create_sql_file(
        temp_dir.path(),
        "empty.sql",
        b"-- nothing here\n/* still\nnothing */\n",
    );

    let result = validate_sql_file(&path, temp_dir.path());

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("no SQL after removing comments"));
}

#[test]
fn test_validate_sql_file_not_utf8() {
    let temp_dir = tempdir().unwrap();
    let path = create_sql_file(temp_dir.path(), "latin1.sql", &[0xC9, 0x20, 0x46]);

    let result = validate_sql_file(&path, temp_dir.path());

    assert!(!result.is_valid);
    assert!(result.errors[0].contains("not valid UTF-8"));
}

#[test]
fn test_validate_sql_file_missing() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("gone.sql");

    let result = validate_sql_file(&path, temp_dir.path());

    assert!(!result.is_valid);
    assert!(result.errors[0].contains("Failed to read"));
}

#[test]
fn test_validate_sql_file_reports_io_cause() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("dir.sql");
    fs::create_dir(&path).unwrap();

    let result = validate_sql_file(&path, temp_dir.path());
    let expected_cause = fs::read(&path).unwrap_err().to_string();

    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![format!("Failed to read {}: {}", path.display(), expected_cause)]
    );
}

#[test]
fn test_validate_source_directory_mixed() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_sql_file(root, "a.sql", b"SELECT a FROM t");
    create_sql_file(root, "b.sql", b"-- todo");
    create_sql_file(root, "notes.txt", b"not sql");

    let results = validate_source_directory(root, &SourceOptions::default());

    assert_eq!(results.len(), 2);
    assert!(results[0].is_valid);
    assert!(!results[1].is_valid);
    assert_eq!(results[1].path, root.join("b.sql"));
}

#[test]
fn test_validate_source_directory_missing() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("nope");

    let results = validate_source_directory(&missing, &SourceOptions::default());

    assert_eq!(
        results,
        vec![ValidationResult::invalid(
            missing.clone(),
            vec![format!("Path is not a directory: {}", missing.display())],
        )]
    );
}

#[test]
fn test_validate_source_directory_without_sql_files() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("nested")).unwrap();

    let results = validate_source_directory(temp_dir.path(), &SourceOptions::default());

    assert_eq!(results.len(), 1);
    assert!(!results[0].is_valid);
    assert!(results[0].errors[0].contains("No files with extension(s) sql"));
}

#[test]
fn test_add_error_marks_invalid() {
    let mut result = ValidationResult::valid(PathBuf::from("x.sql"));
    result.add_error("boom".to_string());

    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["boom".to_string()]);
}
