//! # Construction Errors
//!
//! Error types for detector construction. All of them are fatal to the
//! simulation session: there is no retry and no fallback to a different
//! detector variant.

use microdos_model::ModelError;
use thiserror::Error;

/// Errors that can occur during detector construction.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The detector-type token matches no supported variant.
    #[error(
        "Unknown detector type '{0}'; expected one of: Diamond, MicroDiamond, Silicon, SiliconBridge"
    )]
    UnknownDetectorType(String),

    /// A variant builder produced a structurally invalid tree.
    #[error("Assembly failed: {0}")]
    Assembly(#[from] ModelError),

    /// A builder designated a sensitive volume that is not in its tree.
    #[error("Sensitive volume '{0}' is missing from the constructed tree")]
    MissingSensitiveVolume(String),

    /// `attach_sensitivity` was called before `construct` completed.
    #[error("attach_sensitivity() called before construct()")]
    NotBuilt,

    /// `construct` was called a second time on the same object.
    #[error("construct() called more than once for this construction")]
    AlreadyBuilt,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_lists_variants() {
        let err = ConstructionError::UnknownDetectorType("germanium".to_string());
        let text = err.to_string();
        assert!(text.contains("germanium"));
        assert!(text.contains("SiliconBridge"));
    }

    #[test]
    fn test_model_error_converts() {
        let err: ConstructionError = ModelError::DuplicateVolume("world".to_string()).into();
        assert!(matches!(err, ConstructionError::Assembly(_)));
    }
}
