//! Building documents from JSON.
//!
//! Objects become shared maps and arrays become shared arrays, so every
//! container in the input gets its own stable [`ObjectId`](super::ObjectId).

use yrs::{
    Any, Array as _, ArrayPrelim, ArrayRef, Map as _, MapPrelim, MapRef, Transact as _,
    TransactionMut,
};

use super::{Document, DocumentError};

impl Document {
    /// Builds a document whose root map holds the entries of `value`.
    ///
    /// `value` must be a JSON object. Integers that fit in `i64` are stored as
    /// signed integers; every other number is stored as a float.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, DocumentError> {
        let serde_json::Value::Object(entries) = value else {
            return Err(DocumentError::InvalidJson {
                reason: format!("document root must be an object, found {}", json_kind(value)),
            });
        };

        let doc = Document::new();
        let root = doc.root();
        {
            let mut txn = doc.doc.transact_mut();
            for (key, value) in entries {
                insert_into_map(&mut txn, &root, key, value);
            }
        }
        Ok(doc)
    }

    /// Parses JSON text and builds a document from it
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| DocumentError::InvalidJson {
                reason: e.to_string(),
            })?;
        Self::from_json(&value)
    }
}

fn insert_into_map(txn: &mut TransactionMut, map: &MapRef, key: &str, value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(entries) => {
            let child = map.insert(txn, key, MapPrelim::default());
            for (key, value) in entries {
                insert_into_map(txn, &child, key, value);
            }
        }
        serde_json::Value::Array(elements) => {
            let child = map.insert(txn, key, ArrayPrelim::default());
            for value in elements {
                push_into_list(txn, &child, value);
            }
        }
        scalar => {
            map.insert(txn, key, scalar_any(scalar));
        }
    }
}

fn push_into_list(txn: &mut TransactionMut, list: &ArrayRef, value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(entries) => {
            let child = list.push_back(txn, MapPrelim::default());
            for (key, value) in entries {
                insert_into_map(txn, &child, key, value);
            }
        }
        serde_json::Value::Array(elements) => {
            let child = list.push_back(txn, ArrayPrelim::default());
            for value in elements {
                push_into_list(txn, &child, value);
            }
        }
        scalar => {
            list.push_back(txn, scalar_any(scalar));
        }
    }
}

fn scalar_any(value: &serde_json::Value) -> Any {
    match value {
        serde_json::Value::Null => Any::Null,
        serde_json::Value::Bool(b) => Any::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Any::BigInt(i),
            None => Any::Number(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Any::String(s.as_str().into()),
        // Containers are handled by the callers
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Any::Undefined,
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
