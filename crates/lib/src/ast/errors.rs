//! Error types for the typed projection.
//!
//! Every shape problem found while projecting a document into the AST is a
//! [`SchemaError`]. Projection fails closed: a node is never partially built.

use thiserror::Error;

use crate::document::{ObjectKind, ValueTag};

/// Separator between the per-candidate messages of [`SchemaError::NoAlternative`].
pub const ALTERNATIVE_SEPARATOR: &str = " | ";

/// Structured error types for AST projection.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    /// A node (or range) was requested over a scalar
    #[error("Expected {expected} object, found {actual} value")]
    NotAnObject {
        expected: &'static str,
        actual: ValueTag,
    },

    /// The object has the wrong structural kind
    #[error("Wrong object kind for {target}: expected {expected}, found {actual}")]
    WrongObjectKind {
        target: &'static str,
        expected: ObjectKind,
        actual: ObjectKind,
    },

    /// The backing map does not have the declared number of fields
    #[error("Arity mismatch: {kind} expects {expected} fields, found {actual}")]
    ArityMismatch {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A discriminator field holds an unexpected value
    #[error("Discriminator mismatch in field '{field}': expected {expected:?}, found {actual}")]
    DiscriminatorMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// A string could not be resolved through an enum token table
    #[error("Unknown {enum_name} token {token:?}")]
    UnknownToken {
        enum_name: &'static str,
        token: String,
    },

    /// A scalar of the wrong tag was found
    #[error("Expected {expected}, found {actual}")]
    UnexpectedValue {
        expected: &'static str,
        actual: ValueTag,
    },

    /// No candidate of an ordered trial accepted the object
    #[error("No {target} alternative matched: {}", failures.join(ALTERNATIVE_SEPARATOR))]
    NoAlternative {
        target: &'static str,
        failures: Vec<String>,
    },

    /// A field of a node failed to decode
    #[error("{kind}.{field}: {source}")]
    Field {
        kind: &'static str,
        field: &'static str,
        source: Box<SchemaError>,
    },

    /// A path step could not be resolved
    #[error("Invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },
}

impl SchemaError {
    /// Wraps this error with the node kind and field it was decoded for
    pub fn in_field(self, kind: &'static str, field: &'static str) -> Self {
        SchemaError::Field {
            kind,
            field,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping field context
    pub fn root_cause(&self) -> &SchemaError {
        match self {
            SchemaError::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check if this error is an arity mismatch
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self.root_cause(), SchemaError::ArityMismatch { .. })
    }

    /// Check if this error is a discriminator mismatch
    pub fn is_discriminator_mismatch(&self) -> bool {
        matches!(self.root_cause(), SchemaError::DiscriminatorMismatch { .. })
    }

    /// Check if this error is an exhausted ordered trial
    pub fn is_no_alternative(&self) -> bool {
        matches!(self.root_cause(), SchemaError::NoAlternative { .. })
    }

    /// Get the per-candidate failure messages if this is an exhausted trial
    pub fn alternative_failures(&self) -> Option<&[String]> {
        match self.root_cause() {
            SchemaError::NoAlternative { failures, .. } => Some(failures),
            _ => None,
        }
    }
}

// Conversion from SchemaError to the main Error type
impl From<SchemaError> for crate::Error {
    fn from(err: SchemaError) -> Self {
        crate::Error::Schema(err)
    }
}
