//! Error types for scene reconciliation and host extraction.

use thiserror::Error;

/// Structured error types for the scene module.
///
/// Everything except [`SceneError::UnsupportedValue`] aborts a reconciliation
/// pass before any action is reported.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// A recognized value type the host representation cannot hold
    #[error("Property '{property}' has unsupported value type {kind}")]
    UnsupportedValue {
        property: String,
        kind: &'static str,
    },

    /// The file declares a version other than the supported one
    #[error("Unsupported scene version {version}, expected {expected}")]
    UnsupportedVersion { version: String, expected: i64 },

    /// The file has no descriptor block
    #[error("Scene file has no descriptor")]
    MissingDescriptor,

    /// The descriptor names no default prim
    #[error("Scene descriptor has no defaultPrim assignment")]
    MissingDefaultPrim,

    /// No top-level definition matches the default prim
    #[error("No root definition named '{name}' with type {def_type}")]
    MissingRootDefinition {
        name: String,
        def_type: &'static str,
    },

    /// A definition without a type cannot become a host object
    #[error("Definition '{name}' has no defType")]
    UntypedDefinition { name: String },
}

impl SceneError {
    /// Check if this error is an unsupported host value
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, SceneError::UnsupportedValue { .. })
    }

    /// Check if this error aborts a reconciliation pass at the scene root
    pub fn is_fatal_scene(&self) -> bool {
        matches!(
            self,
            SceneError::UnsupportedVersion { .. }
                | SceneError::MissingDescriptor
                | SceneError::MissingDefaultPrim
                | SceneError::MissingRootDefinition { .. }
        )
    }
}

// Conversion from SceneError to the main Error type
impl From<SceneError> for crate::Error {
    fn from(err: SceneError) -> Self {
        crate::Error::Scene(err)
    }
}
