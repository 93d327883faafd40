//! Polymorphic property values.
//!
//! Scalars, lists and text map directly onto [`Value`] alternatives by their
//! native tag. Map-shaped items carry no universal discriminator, so they are
//! decoded by ordered trial: each candidate kind validates the map in turn and
//! the first to accept it wins. If none does, the error lists every
//! candidate's failure in attempt order.
//!
//! The candidate order is part of the contract:
//!
//! 1. [`ExternalReferenceImport`]
//! 2. [`ExternalReference`]
//! 3. [`ObjectValue`] (itself [`ObjectDeclarationEntries`] then [`ObjectDeclarationList`])

use std::fmt;

use super::{
    Decode, ExternalReference, ExternalReferenceImport, ObjectDeclarationEntries,
    ObjectDeclarationList, Range, SchemaError,
};
use crate::document::{Document, Item, Object, ValueTag};

/// One decoder in an ordered trial, named for error reporting.
pub type Candidate<'a, T> = (&'static str, fn(&'a Document, Item) -> Result<T, SchemaError>);

/// Tries each candidate in order and returns the first success.
///
/// Failures are collected as `"<name>: <message>"` and reported together in a
/// [`SchemaError::NoAlternative`] if every candidate rejects `item`.
pub fn decode_first<'a, T>(
    doc: &'a Document,
    item: &Item,
    target: &'static str,
    candidates: &[Candidate<'a, T>],
) -> Result<T, SchemaError> {
    let mut failures = Vec::with_capacity(candidates.len());
    for (name, attempt) in candidates {
        match attempt(doc, item.clone()) {
            Ok(decoded) => return Ok(decoded),
            Err(e) => {
                tracing::trace!(target_kind = target, candidate = name, error = %e, "Candidate rejected");
                failures.push(format!("{name}: {e}"));
            }
        }
    }
    Err(SchemaError::NoAlternative { target, failures })
}

/// A number in its original stored representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Float(f64),
    Signed(i64),
    Unsigned(u64),
}

impl Number {
    /// Returns the value as a float, possibly losing precision
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Float(f) => f,
            Number::Signed(i) => i as f64,
            Number::Unsigned(u) => u as f64,
        }
    }

    /// Returns the value as a signed integer if it is integral and in range
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                Some(f as i64)
            }
            Number::Float(_) => None,
            Number::Signed(i) => Some(i),
            Number::Unsigned(u) => i64::try_from(u).ok(),
        }
    }

    /// Returns true if the stored representation is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Float(v) => write!(f, "{v}"),
            Number::Signed(v) => write!(f, "{v}"),
            Number::Unsigned(v) => write!(f, "{v}"),
        }
    }
}

impl<'a> Decode<'a> for Number {
    fn decode(_doc: &'a Document, item: Item) -> Result<Self, SchemaError> {
        match item {
            Item::Float(f) => Ok(Number::Float(f)),
            Item::Int(i) => Ok(Number::Signed(i)),
            Item::Uint(u) => Ok(Number::Unsigned(u)),
            other => Err(SchemaError::UnexpectedValue {
                expected: "number",
                actual: other.value_tag(),
            }),
        }
    }
}

/// Object-shaped value that is neither a reference nor an import.
#[derive(Debug, Clone)]
pub enum ObjectValue<'a> {
    Entries(ObjectDeclarationEntries<'a>),
    List(ObjectDeclarationList<'a>),
}

impl<'a> ObjectValue<'a> {
    /// Candidate decoders in trial order
    pub fn candidates() -> [Candidate<'a, ObjectValue<'a>>; 2] {
        [
            ("ObjectDeclarationEntries", |doc, item| {
                ObjectDeclarationEntries::decode(doc, item).map(ObjectValue::Entries)
            }),
            ("ObjectDeclarationList", |doc, item| {
                ObjectDeclarationList::decode(doc, item).map(ObjectValue::List)
            }),
        ]
    }
}

impl<'a> Decode<'a> for ObjectValue<'a> {
    fn decode(doc: &'a Document, item: Item) -> Result<Self, SchemaError> {
        decode_first(doc, &item, "ObjectValue", &Self::candidates())
    }
}

/// A polymorphic property value.
///
/// Recursive object alternatives are boxed so the enum stays small.
#[derive(Debug, Clone, Default)]
pub enum Value<'a> {
    /// Absent value
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Range<'a, Value<'a>>),
    Import(Box<ExternalReferenceImport<'a>>),
    Reference(Box<ExternalReference<'a>>),
    Object(Box<ObjectValue<'a>>),
}

impl<'a> Value<'a> {
    /// Candidate decoders for map-shaped items, in trial order
    pub fn object_candidates() -> [Candidate<'a, Value<'a>>; 3] {
        [
            ("ExternalReferenceImport", |doc, item| {
                ExternalReferenceImport::decode(doc, item).map(|n| Value::Import(Box::new(n)))
            }),
            ("ExternalReference", |doc, item| {
                ExternalReference::decode(doc, item).map(|n| Value::Reference(Box::new(n)))
            }),
            ("ObjectValue", |doc, item| {
                ObjectValue::decode(doc, item).map(|n| Value::Object(Box::new(n)))
            }),
        ]
    }

    /// Returns the alternative name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Import(_) => "ExternalReferenceImport",
            Value::Reference(_) => "ExternalReference",
            Value::Object(_) => "ObjectValue",
        }
    }

    /// Returns true for the scalar alternatives
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Range<'a, Value<'a>>> {
        match self {
            Value::Array(range) => Some(range),
            _ => None,
        }
    }
}

impl<'a> Decode<'a> for Value<'a> {
    fn decode(doc: &'a Document, item: Item) -> Result<Self, SchemaError> {
        match item {
            Item::Void => Ok(Value::Undefined),
            Item::Null => Ok(Value::Null),
            Item::Bool(b) => Ok(Value::Bool(b)),
            Item::Float(f) => Ok(Value::Number(Number::Float(f))),
            Item::Int(i) => Ok(Value::Number(Number::Signed(i))),
            Item::Uint(u) => Ok(Value::Number(Number::Unsigned(u))),
            Item::String(s) => Ok(Value::String(s.to_string())),
            Item::Object(Object::Text(text)) => Ok(Value::String(doc.text_content(&text))),
            item @ Item::Object(Object::List(_)) => Range::decode(doc, item).map(Value::Array),
            item @ Item::Object(Object::Map(_)) => {
                decode_first(doc, &item, "Value", &Self::object_candidates())
            }
            Item::Bytes(_) => Err(SchemaError::UnexpectedValue {
                expected: "scene value",
                actual: ValueTag::Bytes,
            }),
            Item::Embedded(_) => Err(SchemaError::UnexpectedValue {
                expected: "shared object",
                actual: ValueTag::Embedded,
            }),
        }
    }
}
