//!
//! crdt-scene: a typed, read-only scene AST over a schemaless CRDT document.
//!
//! The scene description is stored in a [`yrs`] document as plain nested maps,
//! lists and scalars. This library projects a validated, strongly-typed view over
//! that graph and keeps a pool of live engine objects in sync with it.
//!
//! ## Core Concepts
//!
//! * **Documents (`document::Document`)**: An owned snapshot of the CRDT graph. All other views borrow from it.
//! * **Nodes (`ast::Node`)**: Non-owning typed views over one map object, validated by arity and a `"type"` discriminator.
//! * **Values (`ast::Value`)**: Polymorphic property slots, decoded by ordered trial for object-shaped items.
//! * **Ranges (`ast::Range`)**: Restartable lazy sequences over list objects.
//! * **Paths (`ast::PathAddress`)**: Validated, comparable chains of map-key / list-index steps.
//! * **Visitors (`visit::Visitor`)**: Double-dispatch traversal with borrowing and ownership-transfer forms.
//! * **Serializer (`serialize::Serializer`)**: A visitor emitting canonical text.
//! * **Reconciler (`scene::SceneReconciler`)**: Diffs a scene against live bodies by stable identity.

pub mod ast;
pub mod document;
pub mod host;
pub mod scene;
pub mod serialize;
pub mod visit;

pub use document::Document;

/// Result type used throughout the crdt-scene library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the crdt-scene library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured document errors from the document module
    #[error(transparent)]
    Document(document::DocumentError),

    /// Structured schema errors from the ast module
    #[error(transparent)]
    Schema(ast::SchemaError),

    /// Structured visitor errors from the visit module
    #[error(transparent)]
    Visit(visit::VisitError),

    /// Structured reconciliation errors from the scene module
    #[error(transparent)]
    Scene(scene::SceneError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Document(_) => "document",
            Error::Schema(_) => "ast",
            Error::Visit(_) => "visit",
            Error::Scene(_) => "scene",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a schema mismatch in the projection layer.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Error::Schema(_))
    }

    /// Check if this error comes from a visitor that does not handle a node kind.
    pub fn is_unimplemented_visit(&self) -> bool {
        match self {
            Error::Visit(visit_err) => visit_err.is_unimplemented(),
            _ => false,
        }
    }

    /// Check if this error is a value the host cannot represent.
    pub fn is_unsupported_value(&self) -> bool {
        match self {
            Error::Scene(scene_err) => scene_err.is_unsupported_value(),
            _ => false,
        }
    }

    /// Check if this error is I/O related, including document load/save failures.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Document(doc_err) => doc_err.is_io_error(),
            _ => false,
        }
    }
}
