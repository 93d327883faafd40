use crdt_scene::ast::{Definition, Node, Range, Statement, Value};
use serde_json::json;

use crate::helpers::*;

fn children_doc() -> crdt_scene::Document {
    doc(scene_file(vec![
        definition(Some("Cube"), "a", None, vec![]),
        assignment(None, "x", json!(1)),
        definition(Some("Sphere"), "b", None, vec![]),
    ]))
}

#[test]
fn test_independent_passes_yield_identical_sequences() {
    let doc = children_doc();
    let root: Definition = decode_at(&doc, "/statements/0");
    let statements = root.statements().unwrap();

    let summarize = |range: &Range<'_, Statement<'_>>| -> Vec<(String, String)> {
        range
            .iter()
            .map(|statement| {
                let statement = statement.unwrap();
                let id = match &statement {
                    Statement::Definition(d) => d.object_id().to_string(),
                    Statement::Assignment(a) => a.object_id().to_string(),
                    other => panic!("unexpected {}", other.type_name()),
                };
                (statement.type_name().to_string(), id)
            })
            .collect()
    };

    let first = summarize(&statements);
    let second = summarize(&statements);
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert_eq!(statements.size(), 3);
}

#[test]
fn test_interleaved_cursors_do_not_interfere() {
    let doc = children_doc();
    let root: Definition = decode_at(&doc, "/statements/0");
    let statements = root.statements().unwrap();

    let mut a = statements.begin();
    let mut b = statements.begin();
    assert!(a == b);

    a.advance();
    assert!(a != b);
    assert_eq!(a.position(), 1);
    assert_eq!(b.position(), 0);
    assert_eq!(a.current().unwrap().unwrap().type_name(), "Assignment");
    assert_eq!(b.current().unwrap().unwrap().type_name(), "Definition");

    b.advance();
    assert!(a == b);
}

#[test]
fn test_advancing_past_end_is_a_no_op() {
    let doc = children_doc();
    let root: Definition = decode_at(&doc, "/statements/0");
    let statements = root.statements().unwrap();

    let mut cursor = statements.begin();
    for _ in 0..10 {
        cursor.advance();
    }
    assert!(cursor.is_end());
    assert_eq!(cursor.position(), 3);
    assert!(cursor == statements.end());
    assert!(cursor.current().unwrap().is_none());
    assert!(cursor.next().is_none());
}

#[test]
fn test_end_cursors_compare_equal() {
    let doc = doc(json!({ "a": [], "b": [1] }));
    let a: Range<Value> = decode_at(&doc, "/a");
    let b: Range<Value> = decode_at(&doc, "/b");
    assert!(a.begin() == a.end());
    assert!(a.end() == b.end());
    assert!(b.begin() != b.end());
    assert!(a.is_empty());
}

#[test]
fn test_range_requires_a_list() {
    let doc = doc(json!({ "m": {}, "s": "x" }));
    let root = doc.root();
    use crdt_scene::ast::Decode;
    assert!(Range::<Value>::decode(&doc, doc.get(&root, "m")).is_err());
    assert!(Range::<Value>::decode(&doc, doc.get(&root, "s")).is_err());
}

#[test]
fn test_element_decode_errors_surface_per_element() {
    let doc = doc(json!({ "defs": [definition(None, "ok", None, vec![]), { "type": "Definition" }] }));
    let range: Range<Definition> = decode_at(&doc, "/defs");
    let results: Vec<_> = range.iter().collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].as_ref().unwrap_err().is_arity_mismatch());
}
