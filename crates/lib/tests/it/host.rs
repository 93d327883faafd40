//! Boundary tests: failures become status messages.

use crdt_scene::host::{Status, load_document, save_document};
use tempfile::tempdir;

use crate::helpers::*;

#[test]
fn test_save_then_load_succeeds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.ydoc");

    let status = save_document(&scenario_doc(), &path);
    assert_eq!(status, Status::success());

    let (doc, status) = load_document(&path);
    assert!(status.ok, "{}", status.message);
    assert!(doc.is_some());
}

#[test]
fn test_corrupt_file_reports_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.ydoc");
    std::fs::write(&path, b"definitely not a yrs update").unwrap();

    let (doc, status) = load_document(&path);
    assert!(doc.is_none());
    assert!(!status.ok);
    assert!(!status.message.is_empty());
}

#[test]
fn test_unwritable_path_reports_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("scene.ydoc");
    let status = save_document(&scenario_doc(), &path);
    assert!(!status.ok);
    assert!(status.message.contains("save failed"), "{}", status.message);
}

#[test]
fn test_empty_document_round_trips_through_boundary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.ydoc");

    assert!(save_document(&crdt_scene::Document::new(), &path).ok);
    let (doc, status) = load_document(&path);
    assert!(status.ok, "{}", status.message);
    let doc = doc.unwrap();
    assert_eq!(doc.map_len(&doc.root()), 0);
}
