//! Error types for document storage operations.
//!
//! These cover loading and saving the binary CRDT state and building a document
//! from JSON. They are the IO-level failures of the crate; shape problems inside
//! a loaded document are reported by [`crate::ast::SchemaError`] instead.

use thiserror::Error;

/// Structured error types for document load/save.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The stored bytes could not be decoded or applied
    #[error("Document load failed: {reason}")]
    LoadFailed { reason: String },

    /// The document state could not be written
    #[error("Document save failed: {reason}")]
    SaveFailed { reason: String },

    /// The decoded state does not contain a root map
    #[error("Decoded state is not a whole document: missing root map '{root}'")]
    NotADocument { root: String },

    /// JSON input was not usable as a document
    #[error("Invalid document JSON: {reason}")]
    InvalidJson { reason: String },

    /// Underlying file system failure
    #[error("Document I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocumentError {
    /// Check if this error came from reading or writing storage
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            DocumentError::LoadFailed { .. }
                | DocumentError::SaveFailed { .. }
                | DocumentError::Io(_)
        )
    }

    /// Check if this error rejects a decoded value that is not a document
    pub fn is_not_a_document(&self) -> bool {
        matches!(self, DocumentError::NotADocument { .. })
    }
}

// Conversion from DocumentError to the main Error type
impl From<DocumentError> for crate::Error {
    fn from(err: DocumentError) -> Self {
        crate::Error::Document(err)
    }
}
