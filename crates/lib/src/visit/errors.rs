//! Error types for AST traversal.

use thiserror::Error;

/// Structured error types for visitors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum VisitError {
    /// The visitor has no handler for this node kind
    #[error("{visitor} does not implement visiting {kind}")]
    Unimplemented {
        visitor: &'static str,
        kind: &'static str,
    },
}

impl VisitError {
    /// Check if this error is a missing visitor handler
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, VisitError::Unimplemented { .. })
    }

    /// Get the node kind that could not be visited
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            VisitError::Unimplemented { kind, .. } => Some(kind),
        }
    }
}

// Conversion from VisitError to the main Error type
impl From<VisitError> for crate::Error {
    fn from(err: VisitError) -> Self {
        crate::Error::Visit(err)
    }
}
