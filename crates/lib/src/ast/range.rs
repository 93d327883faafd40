//! Lazy, restartable sequences over list objects.
//!
//! A [`Range`] holds only the list handle. Each call to [`Range::begin`] records
//! the live element count at that moment, so independent traversals never share
//! state. Elements are decoded on demand as the cursor reaches them.

use std::{fmt, marker::PhantomData};

use yrs::ArrayRef;

use super::{Decode, SchemaError};
use crate::document::{Document, Item, Object, ObjectId, ObjectKind};

/// A typed view over a list object.
pub struct Range<'a, T> {
    doc: &'a Document,
    list: ArrayRef,
    id: ObjectId,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Range<'a, T> {
    /// Live number of elements; re-queried on every call
    pub fn size(&self) -> usize {
        self.doc.list_len(&self.list)
    }

    /// Returns true if the list currently has no elements
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Stable id of the backing list
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// Starts a fresh traversal at position 0
    pub fn begin(&self) -> Cursor<'a, T> {
        Cursor {
            doc: self.doc,
            list: Some((self.list.clone(), self.id.clone())),
            index: 0,
            len: self.size(),
            _marker: PhantomData,
        }
    }

    /// The canonical end sentinel
    pub fn end(&self) -> Cursor<'a, T> {
        Cursor::end(self.doc)
    }

    /// Same as [`begin`](Self::begin), for use with `for` loops
    pub fn iter(&self) -> Cursor<'a, T> {
        self.begin()
    }
}

impl<'a, T: Decode<'a>> Range<'a, T> {
    /// Decodes the element at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Result<Option<T>, SchemaError> {
        match self.doc.list_get(&self.list, index) {
            Item::Void => Ok(None),
            item => T::decode(self.doc, item).map(Some),
        }
    }

    /// Decodes every element into a vector
    pub fn to_vec(&self) -> Result<Vec<T>, SchemaError> {
        self.iter().collect()
    }
}

impl<'a, T> Decode<'a> for Range<'a, T> {
    fn decode(doc: &'a Document, item: Item) -> Result<Self, SchemaError> {
        match item {
            Item::Object(Object::List(list)) => {
                let id = Object::List(list.clone()).id();
                Ok(Self {
                    doc,
                    list,
                    id,
                    _marker: PhantomData,
                })
            }
            Item::Object(other) => Err(SchemaError::WrongObjectKind {
                target: "Range",
                expected: ObjectKind::List,
                actual: other.kind(),
            }),
            other => Err(SchemaError::NotAnObject {
                expected: "list",
                actual: other.value_tag(),
            }),
        }
    }
}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Self {
            doc: self.doc,
            list: self.list.clone(),
            id: self.id.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Range<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range").field("id", &self.id).finish_non_exhaustive()
    }
}

impl<'a, T: Decode<'a>> IntoIterator for &Range<'a, T> {
    type Item = Result<T, SchemaError>;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/// A live position within a [`Range`].
///
/// The element count is fixed when the cursor is created by [`Range::begin`].
/// Advancing past the last element is a no-op.
pub struct Cursor<'a, T> {
    doc: &'a Document,
    list: Option<(ArrayRef, ObjectId)>,
    index: usize,
    len: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Cursor<'a, T> {
    fn end(doc: &'a Document) -> Self {
        Self {
            doc,
            list: None,
            index: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns true once every element has been passed
    pub fn is_end(&self) -> bool {
        self.list.is_none() || self.index >= self.len
    }

    /// Current position
    pub fn position(&self) -> usize {
        self.index.min(self.len)
    }

    /// Moves to the next element; does nothing at the end
    pub fn advance(&mut self) {
        if !self.is_end() {
            self.index += 1;
        }
    }
}

impl<'a, T: Decode<'a>> Cursor<'a, T> {
    /// Decodes the current element, or `None` at the end
    pub fn current(&self) -> Result<Option<T>, SchemaError> {
        if self.is_end() {
            return Ok(None);
        }
        let Some((list, _)) = &self.list else {
            return Ok(None);
        };
        match self.doc.list_get(list, self.index) {
            Item::Void => Ok(None),
            item => T::decode(self.doc, item).map(Some),
        }
    }
}

impl<'a, T: Decode<'a>> Iterator for Cursor<'a, T> {
    type Item = Result<T, SchemaError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current().transpose()?;
        self.advance();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position();
        (remaining, Some(remaining))
    }
}

/// Cursors are equal when both are at the end, or when they point at the same
/// element of the same list.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => {
                let same_list = match (&self.list, &other.list) {
                    (Some((_, a)), Some((_, b))) => a == b,
                    _ => false,
                };
                same_list && self.doc.same_document(other.doc) && self.index == other.index
            }
            _ => false,
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("list", &self.list.as_ref().map(|(_, id)| id))
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}
