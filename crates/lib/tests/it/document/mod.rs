//! Document adapter integration tests
//!
//! Building from JSON, binary save/load through files, and stable ids.

use crdt_scene::{
    Document,
    ast::{Definition, Node},
    document::{DocumentError, Item, ObjectKind, ValueTag},
};
use serde_json::json;
use tempfile::tempdir;

use crate::helpers::*;

#[test]
fn test_file_round_trip_preserves_content_and_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.ydoc");

    let doc = scenario_doc();
    doc.save_file(&path).unwrap();
    let loaded = Document::load_file(&path).unwrap();

    let before: Definition = decode_at(&doc, "/statements/0/statements/0");
    let after: Definition = decode_at(&loaded, "/statements/0/statements/0");
    assert_eq!(before.object_id(), after.object_id());
    assert_eq!(after.name().unwrap(), "geom");
    assert!(!loaded.same_document(&doc));
}

#[test]
fn test_item_tags_follow_json_types() {
    let doc = doc(json!({
        "b": true, "f": 1.5, "i": 3, "n": null, "s": "x", "l": [], "m": {},
    }));
    let root = doc.root();
    assert_eq!(doc.get(&root, "b").value_tag(), ValueTag::Bool);
    assert_eq!(doc.get(&root, "f").value_tag(), ValueTag::Float);
    assert_eq!(doc.get(&root, "i").value_tag(), ValueTag::Int);
    assert_eq!(doc.get(&root, "n").value_tag(), ValueTag::Null);
    assert_eq!(doc.get(&root, "s").value_tag(), ValueTag::String);
    assert_eq!(doc.get(&root, "missing").value_tag(), ValueTag::Void);
    assert_eq!(doc.get(&root, "l").object_kind(), Some(ObjectKind::List));
    assert_eq!(doc.get(&root, "m").object_kind(), Some(ObjectKind::Map));
    assert_eq!(doc.map_len(&root), 7);
}

#[test]
fn test_nested_objects_have_distinct_stable_ids() {
    let doc = doc(json!({ "a": {}, "b": {} }));
    let root = doc.root();
    let id = |key: &str| match doc.get(&root, key) {
        Item::Object(object) => object.id(),
        other => panic!("expected object, got {}", other.value_tag()),
    };
    assert_ne!(id("a"), id("b"));
    assert!(!id("a").is_root());
    assert!(doc.root_item().as_object().unwrap().id().is_root());
}

#[test]
fn test_non_object_json_is_rejected() {
    let err = Document::from_json(&json!([1, 2])).unwrap_err();
    assert!(matches!(err, DocumentError::InvalidJson { .. }));
    let err = Document::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, DocumentError::InvalidJson { .. }));
}

#[test]
fn test_garbage_bytes_fail_to_load() {
    let err = Document::load(&[0xff, 0x00, 0x13, 0x37]).unwrap_err();
    assert!(err.is_io_error() || err.is_not_a_document(), "{err}");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Document::load_file(dir.path().join("absent.ydoc")).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}
