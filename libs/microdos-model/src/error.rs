//! # Model Errors
//!
//! Error types for the geometry data model and its structural validation.

use thiserror::Error;

/// Errors that can occur while building or validating a geometry tree.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// A solid has non-positive or inverted dimensions.
    #[error("Degenerate solid: {message}")]
    DegenerateSolid { message: String },

    /// A volume references a material that is not in the registry.
    #[error("Unknown material '{material}' referenced by volume '{volume}'")]
    UnknownMaterial { material: String, volume: String },

    /// A material was redefined with different properties.
    #[error("Material '{0}' is already defined with different properties")]
    ConflictingMaterial(String),

    /// Two volumes in the same tree share a name.
    #[error("Duplicate volume name '{0}'")]
    DuplicateVolume(String),

    /// A daughter volume extends outside its mother.
    #[error("Volume '{child}' extends outside its mother '{parent}'")]
    OutsideMother { child: String, parent: String },

    /// Two sibling volumes occupy the same space.
    #[error("Volumes '{first}' and '{second}' overlap inside '{parent}'")]
    Overlap {
        first: String,
        second: String,
        parent: String,
    },
}

impl ModelError {
    /// Creates a degenerate solid error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateSolid {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::UnknownMaterial {
            material: "Kryptonite".to_string(),
            volume: "world".to_string(),
        };
        assert!(err.to_string().contains("Kryptonite"));
        assert!(err.to_string().contains("world"));
    }

    #[test]
    fn test_degenerate_helper() {
        let err = ModelError::degenerate("zero height");
        assert!(err.to_string().contains("zero height"));
    }
}
