//! Resolved addresses of items inside a document.
//!
//! A [`PathAddress`] starts at the root map and is extended one step at a time.
//! Each step is resolved as it is appended: a key step requires the current
//! terminal to be a map, an index step requires a list.
//!
//! # Syntax
//!
//! Steps are separated by `/`. Keys may be bare or double-quoted; a bare
//! segment made only of digits is a list index.
//!
//! ```
//! use crdt_scene::{Document, ast::PathAddress};
//!
//! let doc = Document::from_json(&serde_json::json!({ "scene": { "items": [1, 2] } })).unwrap();
//! let path = PathAddress::parse(&doc, "/scene/items/1").unwrap();
//! assert_eq!(path.to_string(), r#"/"scene"/"items"/1"#);
//! ```

use std::fmt;

use super::{Decode, SchemaError};
use crate::document::{Document, Item, Object, ObjectId};

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Key(String),
    Index(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => write!(f, "{key:?}"),
            Step::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Identity of a resolved terminal.
///
/// Objects are identified by their stable id; scalars by the slot that holds them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Terminal {
    Object(ObjectId),
    Slot(ObjectId, Step),
}

/// A validated chain of steps from the document root.
#[derive(Debug, Clone)]
pub struct PathAddress<'a> {
    doc: &'a Document,
    steps: Vec<Step>,
    item: Item,
    identity: Terminal,
}

impl<'a> PathAddress<'a> {
    /// The address of the root map
    pub fn root(doc: &'a Document) -> Self {
        let root = Object::Map(doc.root());
        Self {
            doc,
            steps: Vec::new(),
            identity: Terminal::Object(root.id()),
            item: Item::Object(root),
        }
    }

    /// Parses a `/`-separated path and resolves it step by step
    pub fn parse(doc: &'a Document, path: &str) -> Result<Self, SchemaError> {
        let mut address = Self::root(doc);
        for step in parse_steps(path)? {
            address = match step {
                Step::Key(key) => address.push_key(key)?,
                Step::Index(index) => address.push_index(index)?,
            };
        }
        Ok(address)
    }

    /// Appends a map-key step; the current terminal must be a map
    pub fn push_key(mut self, key: impl Into<String>) -> Result<Self, SchemaError> {
        let key = key.into();
        let Item::Object(Object::Map(map)) = &self.item else {
            return Err(SchemaError::InvalidPath {
                path: self.to_string(),
                reason: format!("cannot look up key {key:?} in a non-map terminal"),
            });
        };
        let parent = Object::Map(map.clone()).id();
        let item = self.doc.get(map, &key);
        let step = Step::Key(key);
        self.identity = identity_of(&item, parent, &step);
        self.item = item;
        self.steps.push(step);
        Ok(self)
    }

    /// Appends a list-index step; the current terminal must be a list
    pub fn push_index(mut self, index: usize) -> Result<Self, SchemaError> {
        let Item::Object(Object::List(list)) = &self.item else {
            return Err(SchemaError::InvalidPath {
                path: self.to_string(),
                reason: format!("cannot index {index} into a non-list terminal"),
            });
        };
        let parent = Object::List(list.clone()).id();
        let item = self.doc.list_get(list, index);
        let step = Step::Index(index);
        self.identity = identity_of(&item, parent, &step);
        self.item = item;
        self.steps.push(step);
        Ok(self)
    }

    /// The resolved steps
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The item at the end of the path
    pub fn terminal(&self) -> &Item {
        &self.item
    }

    /// The document this path was resolved against
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Decodes the terminal item as `T`
    pub fn decode<T: Decode<'a>>(&self) -> Result<T, SchemaError> {
        T::decode(self.doc, self.item.clone())
    }
}

fn identity_of(item: &Item, parent: ObjectId, step: &Step) -> Terminal {
    match item {
        Item::Object(object) => Terminal::Object(object.id()),
        _ => Terminal::Slot(parent, step.clone()),
    }
}

/// Equal when resolved against the same document to the same terminal.
impl PartialEq for PathAddress<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.doc.same_document(other.doc) && self.identity == other.identity
    }
}

impl fmt::Display for PathAddress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("/");
        }
        for step in &self.steps {
            write!(f, "/{step}")?;
        }
        if matches!(self.item, Item::Object(_)) {
            f.write_str("/")?;
        }
        Ok(())
    }
}

/// Splits path text into steps without resolving them.
pub fn parse_steps(path: &str) -> Result<Vec<Step>, SchemaError> {
    let invalid = |reason: &str| SchemaError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let mut steps = Vec::new();
    let mut chars = path.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c == '/' {
            chars.next();
            continue;
        }
        if c == '"' {
            chars.next();
            let mut key = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some('\\') => match chars.next() {
                        Some(escaped) => key.push(escaped),
                        None => return Err(invalid("unterminated escape")),
                    },
                    Some(other) => key.push(other),
                    None => return Err(invalid("unterminated quoted key")),
                }
            }
            if chars.peek().is_some_and(|&next| next != '/') {
                return Err(invalid("quoted key must be followed by '/'"));
            }
            steps.push(Step::Key(key));
        } else {
            let mut segment = String::new();
            while let Some(&next) = chars.peek() {
                if next == '/' {
                    break;
                }
                segment.push(next);
                chars.next();
            }
            match segment.parse::<usize>() {
                Ok(index) if segment.bytes().all(|b| b.is_ascii_digit()) => {
                    steps.push(Step::Index(index))
                }
                _ => steps.push(Step::Key(segment)),
            }
        }
    }
    Ok(steps)
}
