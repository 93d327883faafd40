//! CRDT document storage.
//!
//! A [`Document`] owns a [`yrs::Doc`] whose root is a shared map named
//! [`ROOT`]. The rest of the crate only ever reads from it: every typed view
//! borrows the document and queries it through the methods here, one short
//! read transaction per query.
//!
//! # Usage
//!
//! ```
//! use crdt_scene::Document;
//!
//! let doc = Document::from_json(&serde_json::json!({ "version": 1 })).unwrap();
//! let bytes = doc.save();
//! let loaded = Document::load(&bytes).unwrap();
//! assert_eq!(loaded.get(&loaded.root(), "version").as_i64(), Some(1));
//! ```

use std::{fs, path::Path, sync::Arc};

use yrs::{
    Array as _, ArrayRef, GetString as _, Map as _, MapRef, ReadTxn as _, StateVector, TextRef,
    Transact as _, Update, updates::decoder::Decode as _,
};

mod errors;
mod item;
mod json;

pub use errors::DocumentError;
pub use item::{Item, Object, ObjectId, ObjectKind, ValueTag};

/// Name of the shared root map.
pub const ROOT: &str = "root";

/// An owned snapshot of a scene document.
///
/// Views created from a `Document` borrow it and cannot outlive it. The document
/// is treated as immutable while any view exists.
pub struct Document {
    doc: Arc<yrs::Doc>,
}

impl Document {
    /// Creates a new document holding an empty root map
    pub fn new() -> Self {
        let doc = yrs::Doc::new();
        doc.get_or_insert_map(ROOT);
        Self { doc: Arc::new(doc) }
    }

    /// Decodes a document from bytes produced by [`Document::save`].
    ///
    /// The decoded state must register the root map; a state that only carries
    /// some other shared type is rejected with [`DocumentError::NotADocument`].
    /// A state with no shared types at all is an empty document, since yrs does
    /// not encode a root map that was never written to.
    pub fn load(bytes: &[u8]) -> Result<Self, DocumentError> {
        let update = Update::decode_v1(bytes).map_err(|e| DocumentError::LoadFailed {
            reason: e.to_string(),
        })?;

        let doc = yrs::Doc::new();
        {
            let mut txn = doc.transact_mut();
            txn.apply_update(update)
                .map_err(|e| DocumentError::LoadFailed {
                    reason: e.to_string(),
                })?;
        }

        let (has_root, has_others) = {
            let txn = doc.transact();
            let mut has_root = false;
            let mut has_others = false;
            for (name, _) in txn.root_refs() {
                if name == ROOT {
                    has_root = true;
                } else {
                    has_others = true;
                }
            }
            (has_root, has_others)
        };
        if !has_root && has_others {
            return Err(DocumentError::NotADocument {
                root: ROOT.to_string(),
            });
        }
        doc.get_or_insert_map(ROOT);

        tracing::debug!(bytes = bytes.len(), "Loaded document");
        Ok(Self { doc: Arc::new(doc) })
    }

    /// Encodes the full document state as a compact binary blob
    pub fn save(&self) -> Vec<u8> {
        self.doc
            .transact()
            .encode_state_as_update_v1(&StateVector::default())
    }

    /// Reads and decodes a document from a file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let doc = Self::load(&bytes)?;
        tracing::info!(path = %path.display(), "Loaded document from file");
        Ok(doc)
    }

    /// Saves the document to a file, replacing any existing content
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let bytes = self.save();
        fs::write(path, &bytes).map_err(|e| DocumentError::SaveFailed {
            reason: format!("{}: {e}", path.display()),
        })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Saved document to file");
        Ok(())
    }

    /// Returns the root map handle
    pub fn root(&self) -> MapRef {
        self.doc.get_or_insert_map(ROOT)
    }

    /// Returns the root map as an [`Item`]
    pub fn root_item(&self) -> Item {
        Item::Object(Object::Map(self.root()))
    }

    /// Looks up `key` in `map`; an absent key yields [`Item::Void`]
    pub fn get(&self, map: &MapRef, key: &str) -> Item {
        let txn = self.doc.transact();
        Item::from(map.get(&txn, key))
    }

    /// Returns the live number of entries in `map`
    pub fn map_len(&self, map: &MapRef) -> usize {
        let txn = self.doc.transact();
        map.len(&txn) as usize
    }

    /// Returns the live number of elements in `list`
    pub fn list_len(&self, list: &ArrayRef) -> usize {
        let txn = self.doc.transact();
        list.len(&txn) as usize
    }

    /// Returns the element of `list` at `index`; out of bounds yields [`Item::Void`]
    pub fn list_get(&self, list: &ArrayRef, index: usize) -> Item {
        let Ok(index) = u32::try_from(index) else {
            return Item::Void;
        };
        let txn = self.doc.transact();
        Item::from(list.get(&txn, index))
    }

    /// Returns the current content of a text object
    pub fn text_content(&self, text: &TextRef) -> String {
        let txn = self.doc.transact();
        text.get_string(&txn)
    }

    /// Underlying yrs document, for tests that mutate state behind live views
    #[cfg(test)]
    pub(crate) fn raw(&self) -> &yrs::Doc {
        &self.doc
    }

    /// Returns true if both handles refer to the same underlying document
    pub fn same_document(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.doc, &other.doc)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("client_id", &self.doc.client_id())
            .finish_non_exhaustive()
    }
}

/// Documents are equal if they are the same document or encode the same state.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.same_document(other) || self.save() == other.save()
    }
}
