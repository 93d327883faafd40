use crdt_scene::{
    Document,
    ast::{
        Assignment, ClassDefinition, Declaration, Decode, Definition, Descriptor,
        ExternalReference, ExternalReferenceImport, File, Node, ObjectDeclaration,
        ObjectDeclarationEntries, ObjectDeclarationList, ReferenceFile, SchemaError, SubType,
        VariantDefinition, VariantSet,
    },
    document::Item,
};
use serde_json::json;

use crate::helpers::*;

fn decode_kind(kind: &str, doc: &Document, item: Item) -> Result<(), SchemaError> {
    match kind {
        "File" => File::decode(doc, item).map(drop),
        "Descriptor" => Descriptor::decode(doc, item).map(drop),
        "Assignment" => Assignment::decode(doc, item).map(drop),
        "Declaration" => Declaration::decode(doc, item).map(drop),
        "Definition" => Definition::decode(doc, item).map(drop),
        "ClassDefinition" => ClassDefinition::decode(doc, item).map(drop),
        "VariantSet" => VariantSet::decode(doc, item).map(drop),
        "VariantDefinition" => VariantDefinition::decode(doc, item).map(drop),
        "ObjectDeclaration" => ObjectDeclaration::decode(doc, item).map(drop),
        "ObjectDeclarationEntries" => ObjectDeclarationEntries::decode(doc, item).map(drop),
        "ObjectDeclarationList" => ObjectDeclarationList::decode(doc, item).map(drop),
        "ReferenceFile" => ReferenceFile::decode(doc, item).map(drop),
        "ExternalReference" => ExternalReference::decode(doc, item).map(drop),
        "ExternalReferenceImport" => ExternalReferenceImport::decode(doc, item).map(drop),
        other => panic!("no decoder for {other}"),
    }
}

fn node_item(doc: &Document) -> Item {
    doc.get(&doc.root(), "node")
}

#[test]
fn test_every_kind_accepts_exact_arity() {
    for (kind, node) in minimal_nodes() {
        let doc = doc(json!({ "node": node }));
        decode_kind(kind, &doc, node_item(&doc))
            .unwrap_or_else(|e| panic!("{kind} rejected its own fixture: {e}"));
    }
}

#[test]
fn test_every_kind_rejects_missing_field() {
    for (kind, mut node) in minimal_nodes() {
        let fields: Vec<String> = node.as_object().unwrap().keys().cloned().collect();
        // Drop the last non-discriminator field
        let victim = fields.iter().rfind(|f| *f != "type").unwrap().clone();
        node.as_object_mut().unwrap().remove(&victim);

        let doc = doc(json!({ "node": node }));
        let err = decode_kind(kind, &doc, node_item(&doc)).unwrap_err();
        assert!(err.is_arity_mismatch(), "{kind} without {victim}: {err}");
    }
}

#[test]
fn test_every_kind_rejects_extra_field() {
    for (kind, mut node) in minimal_nodes() {
        node.as_object_mut()
            .unwrap()
            .insert("extra".to_string(), json!(null));
        let doc = doc(json!({ "node": node }));
        let err = decode_kind(kind, &doc, node_item(&doc)).unwrap_err();
        assert!(err.is_arity_mismatch(), "{kind} with extra field: {err}");
    }
}

#[test]
fn test_wrong_discriminator_fails_with_same_arity() {
    // A ClassDefinition and a VariantDefinition share one field table
    let doc = doc(json!({
        "node": { "type": "VariantDefinition", "name": "red", "descriptor": null, "statements": [] },
    }));
    let err = ClassDefinition::decode(&doc, node_item(&doc)).unwrap_err();
    assert!(err.is_discriminator_mismatch());
    assert!(VariantDefinition::decode(&doc, node_item(&doc)).is_ok());
}

#[test]
fn test_assignment_with_three_of_four_fields_fails() {
    let doc = doc(json!({
        "node": { "type": "Assignment", "identifier": "size", "value": 2.0 },
    }));
    let err = Assignment::decode(&doc, node_item(&doc)).unwrap_err();
    assert_eq!(
        err,
        SchemaError::ArityMismatch {
            kind: "Assignment",
            expected: 4,
            actual: 3,
        }
    );
}

#[test]
fn test_non_map_items_are_rejected() {
    let doc = doc(json!({ "list": [], "scalar": 3, "absent": null }));
    let root = doc.root();
    assert!(File::decode(&doc, doc.get(&root, "list")).is_err());
    assert!(File::decode(&doc, doc.get(&root, "scalar")).is_err());
    assert!(File::decode(&doc, doc.get(&root, "missing")).is_err());
}

#[test]
fn test_field_accessors_are_memoized() {
    let doc = scenario_doc();
    let root: Definition = decode_at(&doc, "/statements/0");
    assert_eq!(root.name().unwrap(), "Box");
    assert_eq!(root.name().unwrap(), "Box");
    assert_eq!(root.sub_type().unwrap(), SubType::Def);
    assert!(root.descriptor().unwrap().is_none());

    // The discriminator check at construction does not populate the cache
    assert_eq!(root.base().cached_fields(), 3);
}

#[test]
fn test_field_errors_name_kind_and_field() {
    let doc = doc(json!({
        "node": definition(Some("NotAType"), "A", None, vec![]),
    }));
    let definition = Definition::decode(&doc, node_item(&doc)).unwrap();
    let err = definition.def_type().unwrap_err();
    assert!(err.to_string().starts_with("Definition.defType: "), "{err}");
    assert!(matches!(err.root_cause(), SchemaError::UnknownToken { .. }));
}
