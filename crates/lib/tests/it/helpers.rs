//! Shared fixtures: JSON builders for every node kind and the reference scene.

use crdt_scene::{
    Document,
    ast::{Decode, PathAddress},
};
use serde_json::{Value, json};

pub fn assignment(keyword: Option<&str>, identifier: &str, value: Value) -> Value {
    json!({ "type": "Assignment", "keyword": keyword, "identifier": identifier, "value": value })
}

pub fn declaration(value_type: &str, identifier: &str, value: Value) -> Value {
    json!({
        "type": "Declaration", "keyword": null, "valueType": value_type,
        "identifier": identifier, "value": value, "descriptor": null,
    })
}

pub fn descriptor(assignments: Vec<Value>) -> Value {
    json!({ "type": "Descriptor", "description": null, "assignments": assignments })
}

pub fn definition(
    def_type: Option<&str>,
    name: &str,
    descriptor: Option<Value>,
    statements: Vec<Value>,
) -> Value {
    json!({
        "type": "Definition", "subType": "def", "defType": def_type, "name": name,
        "descriptor": descriptor, "statements": statements,
    })
}

pub fn file(version: Value, descriptor: Option<Value>, statements: Vec<Value>) -> Value {
    json!({ "type": "File", "version": version, "descriptor": descriptor, "statements": statements })
}

pub fn external_reference(path: Option<&str>, target: Option<&str>) -> Value {
    let file = path.map(|p| json!({ "type": "ReferenceFile", "path": p }));
    json!({ "type": "ExternalReference", "file": file, "target": target })
}

/// A file whose descriptor names `root` and whose statements hold `root` as an Xform
pub fn scene_file(children: Vec<Value>) -> Value {
    file(
        json!(1),
        Some(descriptor(vec![assignment(None, "defaultPrim", json!("Box"))])),
        vec![definition(Some("Xform"), "Box", None, children)],
    )
}

/// The reference scene: one Cube child of the Box root
pub fn scenario_json() -> Value {
    scene_file(vec![definition(
        Some("Cube"),
        "geom",
        Some(descriptor(vec![assignment(None, "size", json!(2.0))])),
        vec![],
    )])
}

pub fn doc(value: Value) -> Document {
    Document::from_json(&value).expect("fixture must be a JSON object")
}

pub fn scenario_doc() -> Document {
    doc(scenario_json())
}

/// One fixture per node kind, each with exactly its declared fields
pub fn minimal_nodes() -> Vec<(&'static str, Value)> {
    vec![
        ("File", file(json!(1), None, vec![])),
        ("Descriptor", descriptor(vec![])),
        ("Assignment", assignment(None, "x", json!(1))),
        ("Declaration", declaration("float", "x", json!(1.5))),
        ("Definition", definition(None, "A", None, vec![])),
        (
            "ClassDefinition",
            json!({ "type": "ClassDefinition", "name": "C", "descriptor": null, "statements": [] }),
        ),
        (
            "VariantSet",
            json!({ "type": "VariantSet", "name": "color", "variants": [] }),
        ),
        (
            "VariantDefinition",
            json!({ "type": "VariantDefinition", "name": "red", "descriptor": null, "statements": [] }),
        ),
        (
            "ObjectDeclaration",
            json!({
                "type": "ObjectDeclaration", "keyword": null, "identifier": "d",
                "value": { "type": "ObjectDeclarationEntries", "entries": [] },
            }),
        ),
        (
            "ObjectDeclarationEntries",
            json!({ "type": "ObjectDeclarationEntries", "entries": [] }),
        ),
        (
            "ObjectDeclarationList",
            json!({ "type": "ObjectDeclarationList", "items": [] }),
        ),
        (
            "ReferenceFile",
            json!({ "type": "ReferenceFile", "path": "a.usda" }),
        ),
        ("ExternalReference", external_reference(None, Some("/A"))),
        (
            "ExternalReferenceImport",
            json!({
                "type": "ExternalReferenceImport", "kind": "references",
                "reference": external_reference(Some("a.usda"), None),
            }),
        ),
    ]
}

/// Decodes the item at `path` as `T`
pub fn decode_at<'a, T: Decode<'a>>(doc: &'a Document, path: &str) -> T {
    PathAddress::parse(doc, path)
        .and_then(|address| address.decode())
        .unwrap_or_else(|e| panic!("decoding {path}: {e}"))
}
