use crdt_scene::{
    ast::{Definition, Node},
    scene::{LiveBody, Property, SceneError, SceneObject},
};
use serde_json::json;

use crate::helpers::*;

fn object_from(value: serde_json::Value) -> crdt_scene::Result<SceneObject> {
    let doc = doc(json!({ "def": value }));
    let definition: Definition = decode_at(&doc, "/def");
    SceneObject::from_definition(definition)
}

#[test]
fn test_declarations_override_descriptor_entries() {
    let object = object_from(definition(
        Some("Sphere"),
        "ball",
        Some(descriptor(vec![
            assignment(None, "radius", json!(1.0)),
            assignment(None, "visible", json!(true)),
        ])),
        vec![
            declaration("double", "radius", json!(3)),
            declaration("token", "purpose", json!("render")),
            declaration("double", "unset", json!(null)),
        ],
    ))
    .unwrap();

    assert_eq!(object.property("radius"), Some(&Property::Int(3)));
    assert_eq!(object.property("visible"), Some(&Property::Bool(true)));
    assert_eq!(
        object.property("purpose"),
        Some(&Property::String("render".to_string()))
    );
    assert!(object.property("unset").is_none());
    assert_eq!(object.properties.len(), 3);
}

#[test]
fn test_untyped_definition_cannot_become_object() {
    let err = object_from(definition(None, "loose", None, vec![])).unwrap_err();
    match err {
        crdt_scene::Error::Scene(SceneError::UntypedDefinition { name }) => assert_eq!(name, "loose"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_nulls_inside_lists_are_unsupported() {
    let err = object_from(definition(
        Some("Points"),
        "p",
        None,
        vec![declaration("float[]", "widths", json!([1.0, null]))],
    ))
    .unwrap_err();
    assert!(err.is_unsupported_value());
}

#[test]
fn test_live_body_records_stable_id() {
    let doc = scenario_doc();
    let geom: Definition = decode_at(&doc, "/statements/0/statements/0");
    let id = geom.object_id().clone();
    let live = LiveBody::from(SceneObject::from_definition(geom).unwrap());
    assert_eq!(live.stable_id, Some(id));
}

#[test]
fn test_object_serializes_for_hosts() {
    let object = object_from(definition(
        Some("Cube"),
        "geom",
        Some(descriptor(vec![assignment(None, "size", json!(2.0))])),
        vec![],
    ))
    .unwrap();
    let value = serde_json::to_value(&object).unwrap();
    assert_eq!(value["name"], "geom");
    assert_eq!(value["kind"], "Cube");
    assert_eq!(value["properties"]["size"], 2.0);
    assert!(value["stable_id"].is_string());
}
