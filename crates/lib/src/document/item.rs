//! Value handles returned by document queries.
//!
//! An [`Item`] is what a map lookup or list index yields: either a scalar copied
//! out of the document, or a handle to a shared object that stays backed by it.

use std::{fmt, str::FromStr, sync::Arc};

use yrs::{Any, ArrayRef, MapRef, Out, TextRef, branch::Branch, branch::BranchID};

use super::ROOT;

/// Native value tag of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTag {
    Bool,
    Float,
    Int,
    Uint,
    Null,
    /// Absent key or index
    Void,
    String,
    Bytes,
    /// Non-shared JSON container stored inline
    Embedded,
    Object,
}

impl ValueTag {
    /// Returns the tag name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ValueTag::Bool => "bool",
            ValueTag::Float => "float",
            ValueTag::Int => "int",
            ValueTag::Uint => "uint",
            ValueTag::Null => "null",
            ValueTag::Void => "void",
            ValueTag::String => "string",
            ValueTag::Bytes => "bytes",
            ValueTag::Embedded => "embedded",
            ValueTag::Object => "object",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural kind of a shared object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Map,
    List,
    Text,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ObjectKind::Map => "map",
            ObjectKind::List => "list",
            ObjectKind::Text => "text",
        })
    }
}

/// Handle to a shared object inside a document.
#[derive(Debug, Clone)]
pub enum Object {
    Map(MapRef),
    List(ArrayRef),
    Text(TextRef),
}

impl Object {
    /// Returns the structural kind of this object
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Map(_) => ObjectKind::Map,
            Object::List(_) => ObjectKind::List,
            Object::Text(_) => ObjectKind::Text,
        }
    }

    /// Returns the stable id the document assigned to this object
    pub fn id(&self) -> ObjectId {
        let branch: &Branch = match self {
            Object::Map(map) => map.as_ref(),
            Object::List(list) => list.as_ref(),
            Object::Text(text) => text.as_ref(),
        };
        ObjectId::from_branch(branch)
    }
}

/// Result of a document lookup.
///
/// Scalars are copied out; objects are shared handles into the document.
#[derive(Debug, Clone, Default)]
pub enum Item {
    Bool(bool),
    Float(f64),
    Int(i64),
    Uint(u64),
    Null,
    #[default]
    Void,
    String(Arc<str>),
    Bytes(Arc<[u8]>),
    Embedded(Any),
    Object(Object),
}

impl Item {
    /// Returns the native value tag
    pub fn value_tag(&self) -> ValueTag {
        match self {
            Item::Bool(_) => ValueTag::Bool,
            Item::Float(_) => ValueTag::Float,
            Item::Int(_) => ValueTag::Int,
            Item::Uint(_) => ValueTag::Uint,
            Item::Null => ValueTag::Null,
            Item::Void => ValueTag::Void,
            Item::String(_) => ValueTag::String,
            Item::Bytes(_) => ValueTag::Bytes,
            Item::Embedded(_) => ValueTag::Embedded,
            Item::Object(_) => ValueTag::Object,
        }
    }

    /// Returns the object kind, or `None` for scalars
    pub fn object_kind(&self) -> Option<ObjectKind> {
        match self {
            Item::Object(object) => Some(object.kind()),
            _ => None,
        }
    }

    /// Returns the object handle, or `None` for scalars
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Item::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Item::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Item::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Item::Uint(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Item::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Item::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Item::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns true if this is an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, Item::Null)
    }

    /// Returns true if this denotes an absent key or index
    pub fn is_void(&self) -> bool {
        matches!(self, Item::Void)
    }
}

impl From<Option<Out>> for Item {
    fn from(out: Option<Out>) -> Self {
        match out {
            None => Item::Void,
            Some(Out::YMap(map)) => Item::Object(Object::Map(map)),
            Some(Out::YArray(list)) => Item::Object(Object::List(list)),
            Some(Out::YText(text)) => Item::Object(Object::Text(text)),
            Some(Out::Any(any)) => Item::from(any),
            // XML fragments, sub-documents and weak links have no place in the scene graph
            Some(_) => Item::Embedded(Any::Undefined),
        }
    }
}

impl From<Any> for Item {
    fn from(any: Any) -> Self {
        match any {
            Any::Null => Item::Null,
            Any::Undefined => Item::Void,
            Any::Bool(b) => Item::Bool(b),
            Any::Number(f) => Item::Float(f),
            Any::BigInt(i) => Item::Int(i),
            Any::String(s) => Item::String(s),
            Any::Buffer(b) => Item::Bytes(b),
            embedded @ (Any::Array(_) | Any::Map(_)) => Item::Embedded(embedded),
        }
    }
}

/// Stable identity of a shared object.
///
/// The root map is `root`; nested objects are identified by the id of the
/// insertion that created them, rendered as `<client>@<clock>`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    fn from_branch(branch: &Branch) -> Self {
        match branch.id() {
            BranchID::Nested(id) => ObjectId(format!("{}@{}", id.client, id.clock)),
            BranchID::Root(name) if &*name == ROOT => ObjectId(ROOT.to_string()),
            BranchID::Root(name) => ObjectId(format!("/{name}")),
        }
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the document root
    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        ObjectId(s.to_string())
    }
}

impl FromStr for ObjectId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ObjectId(s.to_string()))
    }
}
