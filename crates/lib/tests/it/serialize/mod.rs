//! Serializer integration tests
//!
//! Output is parsed back with serde_json and compared with the JSON the
//! document was built from, so formatting details do not matter here.

use crdt_scene::{
    ast::{File, Statement},
    serialize::{self, DEFAULT_PRECISION, Serializer},
    visit::Accept,
};
use serde_json::json;

use crate::helpers::*;

fn round_trip(value: serde_json::Value) {
    let doc = doc(value.clone());
    let file: File = decode_at(&doc, "/");
    let text = serialize::to_string(&file, DEFAULT_PRECISION).unwrap();
    let reparsed: serde_json::Value =
        serde_json::from_str(&text).unwrap_or_else(|e| panic!("invalid output {e}:\n{text}"));
    assert_eq!(reparsed, value);
}

#[test]
fn test_scenario_round_trips() {
    round_trip(scenario_json());
}

#[test]
fn test_every_statement_kind_round_trips() {
    let object_entries = json!({
        "type": "ObjectDeclarationEntries",
        "entries": [assignment(Some("custom"), "k", json!("v"))],
    });
    let statements = vec![
        definition(Some("Mesh"), "m", Some(descriptor(vec![])), vec![
            declaration("point3f[]", "points", json!([[0.5, 1.0, -2.25]])),
        ]),
        json!({
            "type": "ClassDefinition", "name": "C",
            "descriptor": {
                "type": "Descriptor", "description": "a class",
                "assignments": [assignment(None, "doc", json!("text"))],
            },
            "statements": [],
        }),
        json!({
            "type": "VariantSet", "name": "color",
            "variants": [
                { "type": "VariantDefinition", "name": "red", "descriptor": null, "statements": [] },
            ],
        }),
        json!({
            "type": "ObjectDeclaration", "keyword": null, "identifier": "customData",
            "value": object_entries.clone(),
        }),
        json!({
            "type": "ObjectDeclaration", "keyword": "uniform", "identifier": "blocks",
            "value": { "type": "ObjectDeclarationList", "items": [object_entries] },
        }),
        assignment(Some("prepend"), "references", json!({
            "type": "ExternalReferenceImport", "kind": "references",
            "reference": external_reference(Some("a.usda"), Some("/A")),
        })),
        assignment(None, "inherit", external_reference(None, Some("/B"))),
        assignment(None, "flags", json!([true, false, null, "s", 7])),
    ];
    round_trip(file(json!(1), Some(descriptor(vec![])), statements));
}

#[test]
fn test_precision_applies_to_floats_only() {
    let doc = doc(json!({ "a": assignment(None, "v", json!([1.23456789, 42])) }));
    let statement: Statement = decode_at(&doc, "/a");
    let text = serialize::to_string(&statement, 3).unwrap();
    assert!(text.contains("1.235"), "{text}");
    assert!(text.contains("42\n"), "{text}");
}

#[test]
fn test_absent_value_renders_undefined() {
    // An Assignment whose value key is absent keeps its arity by carrying another key
    let doc = doc(json!({
        "a": { "type": "Assignment", "keyword": null, "identifier": "v", "other": 1 },
    }));
    let statement: Statement = decode_at(&doc, "/a");
    let mut serializer = Serializer::new(DEFAULT_PRECISION);
    statement.accept(&mut serializer).unwrap();
    assert!(serializer.finish().contains("\"value\": undefined"));
}

#[test]
fn test_output_is_stable_across_runs() {
    let doc = scenario_doc();
    let file: File = decode_at(&doc, "/");
    let first = serialize::to_string(&file, 2).unwrap();
    let second = serialize::to_string(&file, 2).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("{\n  \"type\": \"File\",\n  \"version\": 1,"));
}
