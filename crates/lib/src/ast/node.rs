//! Validated, cached projection of a single map object.
//!
//! A [`NodeBase`] is created only after the candidate item has been checked to
//! be a map object of exactly the declared size. Concrete node kinds wrap one
//! and expose typed accessors built on the `*_property` methods here.
//!
//! Property lookups are memoized per field name for the lifetime of the node.
//! Discriminator checks bypass the cache so that scanning many nodes for one
//! field does not grow it.

use std::{cell::RefCell, collections::HashMap, fmt};

use yrs::MapRef;

use super::{EnumCodec, EnumToken, NodeKind, Range, SchemaError};
use crate::document::{Document, Item, Object, ObjectId, ObjectKind};

/// Name of the discriminator field carried by every node map.
pub const TYPE_FIELD: &str = "type";

/// Construction of a typed view from a document item.
///
/// This is the only way the projection turns raw items into typed values.
/// Implementations must fail closed: either the whole view is valid or an
/// error is returned.
pub trait Decode<'a>: Sized {
    fn decode(doc: &'a Document, item: Item) -> Result<Self, SchemaError>;
}

/// A concrete node kind: a map with a fixed field table and `"type"` discriminator.
pub trait Node<'a>: Decode<'a> {
    /// Discriminator token of this kind
    const KIND: NodeKind;
    /// Declared fields in serialization order, including `"type"`
    const FIELDS: &'static [&'static str];

    /// Wraps an already validated base
    fn from_base(base: NodeBase<'a>) -> Self;

    /// Returns the validated base
    fn base(&self) -> &NodeBase<'a>;

    /// Validates `item` against this kind's arity and discriminator
    fn construct(doc: &'a Document, item: Item) -> Result<Self, SchemaError> {
        let base = NodeBase::new(doc, item, Self::KIND.token(), Self::FIELDS.len())?;
        base.check_enum_property(TYPE_FIELD, Self::KIND)?;
        Ok(Self::from_base(base))
    }

    /// Stable id of the backing map
    fn object_id<'s>(&'s self) -> &'s ObjectId
    where
        'a: 's,
    {
        self.base().id()
    }
}

/// Validated handle to a map object plus its per-field lookup cache.
#[derive(Clone)]
pub struct NodeBase<'a> {
    doc: &'a Document,
    map: MapRef,
    id: ObjectId,
    kind: &'static str,
    cache: RefCell<HashMap<&'static str, Item>>,
}

impl<'a> NodeBase<'a> {
    /// Checks, in order, that `item` is an object, that it is a map, and that it has `arity` entries.
    pub fn new(
        doc: &'a Document,
        item: Item,
        kind: &'static str,
        arity: usize,
    ) -> Result<Self, SchemaError> {
        let object = match item {
            Item::Object(object) => object,
            other => {
                return Err(SchemaError::NotAnObject {
                    expected: kind,
                    actual: other.value_tag(),
                });
            }
        };

        let map = match object {
            Object::Map(map) => map,
            other => {
                return Err(SchemaError::WrongObjectKind {
                    target: kind,
                    expected: ObjectKind::Map,
                    actual: other.kind(),
                });
            }
        };

        let actual = doc.map_len(&map);
        if actual != arity {
            return Err(SchemaError::ArityMismatch {
                kind,
                expected: arity,
                actual,
            });
        }

        let id = Object::Map(map.clone()).id();
        Ok(Self {
            doc,
            map,
            id,
            kind,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// The document this node borrows from
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Stable id of the backing map
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// Kind name used in error context
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Number of field lookups currently memoized
    pub fn cached_fields(&self) -> usize {
        self.cache.borrow().len()
    }

    fn lookup(&self, key: &'static str) -> Item {
        if let Some(item) = self.cache.borrow().get(key) {
            return item.clone();
        }
        let item = self.doc.get(&self.map, key);
        self.cache.borrow_mut().insert(key, item.clone());
        item
    }

    /// Decodes field `key` as `T`
    pub fn object_property<T: Decode<'a>>(&self, key: &'static str) -> Result<T, SchemaError> {
        T::decode(self.doc, self.lookup(key)).map_err(|e| e.in_field(self.kind, key))
    }

    /// Decodes field `key` as `T`, treating an explicit null as absent
    pub fn nullable_object_property<T: Decode<'a>>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, SchemaError> {
        match self.lookup(key) {
            Item::Null => Ok(None),
            item => T::decode(self.doc, item)
                .map(Some)
                .map_err(|e| e.in_field(self.kind, key)),
        }
    }

    /// Reads string field `key` and resolves it through [`EnumCodec`]
    pub fn enum_property<T: EnumToken>(&self, key: &'static str) -> Result<T, SchemaError> {
        let token: String = self.object_property(key)?;
        EnumCodec::<T>::try_decode(&token).map_err(|e| e.in_field(self.kind, key))
    }

    /// Like [`enum_property`](Self::enum_property), but an explicit null is absent
    pub fn nullable_enum_property<T: EnumToken>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, SchemaError> {
        let Some(token) = self.nullable_object_property::<String>(key)? else {
            return Ok(None);
        };
        EnumCodec::<T>::try_decode(&token)
            .map(Some)
            .map_err(|e| e.in_field(self.kind, key))
    }

    /// Wraps list field `key` as a lazy range
    pub fn array_property<T: Decode<'a>>(
        &self,
        key: &'static str,
    ) -> Result<Range<'a, T>, SchemaError> {
        self.object_property(key)
    }

    /// Returns whether string field `key` equals `expected`, without caching the lookup
    pub fn matches_string_property(
        &self,
        key: &'static str,
        expected: &str,
    ) -> Result<bool, SchemaError> {
        let item = self.doc.get(&self.map, key);
        let actual = String::decode(self.doc, item).map_err(|e| e.in_field(self.kind, key))?;
        Ok(actual == expected)
    }

    /// Asserts that string field `key` equals `expected`, without caching the lookup
    pub fn check_string_property(
        &self,
        key: &'static str,
        expected: &str,
    ) -> Result<(), SchemaError> {
        let item = self.doc.get(&self.map, key);
        let actual = String::decode(self.doc, item).map_err(|e| e.in_field(self.kind, key))?;
        if actual != expected {
            return Err(SchemaError::DiscriminatorMismatch {
                field: key,
                expected: expected.to_string(),
                actual: format!("{actual:?}"),
            });
        }
        Ok(())
    }

    /// Asserts that enum field `key` holds `expected`, without caching the lookup
    pub fn check_enum_property<T: EnumToken>(
        &self,
        key: &'static str,
        expected: T,
    ) -> Result<(), SchemaError> {
        let item = self.doc.get(&self.map, key);
        let expected_token = EnumCodec::<T>::encode(expected);
        let tag = item.value_tag();
        let actual =
            String::decode(self.doc, item).map_err(|_| SchemaError::DiscriminatorMismatch {
                field: key,
                expected: expected_token.to_string(),
                actual: tag.to_string(),
            })?;
        match EnumCodec::<T>::decode(&actual) {
            Some(tag) if tag == expected => Ok(()),
            _ => Err(SchemaError::DiscriminatorMismatch {
                field: key,
                expected: expected_token.to_string(),
                actual: format!("{actual:?}"),
            }),
        }
    }
}

impl fmt::Debug for NodeBase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeBase")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

// ===== SCALAR DECODERS =====

impl<'a> Decode<'a> for String {
    fn decode(doc: &'a Document, item: Item) -> Result<Self, SchemaError> {
        match item {
            Item::String(s) => Ok(s.to_string()),
            Item::Object(Object::Text(text)) => Ok(doc.text_content(&text)),
            other => Err(SchemaError::UnexpectedValue {
                expected: "string",
                actual: other.value_tag(),
            }),
        }
    }
}

impl<'a> Decode<'a> for bool {
    fn decode(_doc: &'a Document, item: Item) -> Result<Self, SchemaError> {
        match item {
            Item::Bool(b) => Ok(b),
            other => Err(SchemaError::UnexpectedValue {
                expected: "bool",
                actual: other.value_tag(),
            }),
        }
    }
}

/// Declares a concrete node kind over [`NodeBase`].
macro_rules! node_kind {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:ident [ $( $field:literal ),+ $(,)? ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<'a> {
            base: $crate::ast::NodeBase<'a>,
        }

        impl<'a> $crate::ast::Node<'a> for $name<'a> {
            const KIND: $crate::ast::NodeKind = $crate::ast::NodeKind::$kind;
            const FIELDS: &'static [&'static str] = &[ $( $field ),+ ];

            fn from_base(base: $crate::ast::NodeBase<'a>) -> Self {
                Self { base }
            }

            fn base(&self) -> &$crate::ast::NodeBase<'a> {
                &self.base
            }
        }

        impl<'a> $crate::ast::Decode<'a> for $name<'a> {
            fn decode(
                doc: &'a $crate::document::Document,
                item: $crate::document::Item,
            ) -> Result<Self, $crate::ast::SchemaError> {
                <Self as $crate::ast::Node<'a>>::construct(doc, item)
            }
        }
    };
}

pub(crate) use node_kind;
