//! Entry points for host code that does not handle [`crate::Error`].
//!
//! Failures are turned into a [`Status`] message and logged; the typed error
//! never crosses this boundary.

use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::Document;

/// Outcome of a boundary call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub ok: bool,
    pub message: String,
}

impl Status {
    pub fn success() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Loads a document file.
pub fn load_document(path: impl AsRef<Path>) -> (Option<Document>, Status) {
    let path = path.as_ref();
    match Document::load_file(path) {
        Ok(doc) => (Some(doc), Status::success()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load document");
            (None, Status::failure(e.to_string()))
        }
    }
}

/// Saves a document file.
pub fn save_document(doc: &Document, path: impl AsRef<Path>) -> Status {
    let path = path.as_ref();
    match doc.save_file(path) {
        Ok(()) => Status::success(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to save document");
            Status::failure(e.to_string())
        }
    }
}
