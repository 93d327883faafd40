use crdt_scene::ast::{Definition, File, PathAddress, SchemaError, Step};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_scene_paths_resolve_to_nodes() {
    let doc = scenario_doc();
    let file: File = decode_at(&doc, "/");
    assert_eq!(file.version().unwrap().as_i64(), Some(1));

    let geom: Definition = decode_at(&doc, "/statements/0/statements/0");
    assert_eq!(geom.name().unwrap(), "geom");

    let address = PathAddress::parse(&doc, r#"/"statements"/0/name"#).unwrap();
    assert_eq!(
        address.steps(),
        &[
            Step::Key("statements".to_string()),
            Step::Index(0),
            Step::Key("name".to_string()),
        ]
    );
    assert_eq!(address.terminal().as_str(), Some("Box"));
    assert_eq!(address.to_string(), r#"/"statements"/0/"name""#);
}

#[test]
fn test_out_of_range_index_resolves_to_absent() {
    let doc = scenario_doc();
    let address = PathAddress::parse(&doc, "/statements/9").unwrap();
    assert!(address.terminal().is_void());
    assert!(address.decode::<Definition>().is_err());
}

#[test]
fn test_steps_through_scalars_fail() {
    let doc = scenario_doc();
    let err = PathAddress::parse(&doc, "/version/0").unwrap_err();
    assert!(matches!(err, SchemaError::InvalidPath { .. }));
    let err = PathAddress::parse(&doc, "/statements/0/name/x").unwrap_err();
    assert!(matches!(err, SchemaError::InvalidPath { .. }));
}

#[test]
fn test_equal_paths_identify_the_same_object() {
    let doc = doc(json!({ "a": { "b": [ { "c": 1 } ] } }));
    let parsed = PathAddress::parse(&doc, "/a/b/0").unwrap();
    let built = PathAddress::root(&doc)
        .push_key("a")
        .unwrap()
        .push_key("b")
        .unwrap()
        .push_index(0)
        .unwrap();
    assert_eq!(parsed, built);
    assert_ne!(parsed, PathAddress::parse(&doc, "/a/b").unwrap());

    // Scalars are identified by their slot
    assert_eq!(
        PathAddress::parse(&doc, "/a/b/0/c").unwrap(),
        PathAddress::parse(&doc, r#"/"a"/"b"/0/"c""#).unwrap()
    );
}
