//! # Sensitivity and Field Annotations
//!
//! The annotations attached to volumes after the geometry tree is built.
//! They carry no geometry: attaching them never changes a tree's topology,
//! only what the simulation runtime does with hits inside the annotated
//! volumes.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A sensitive-detector association.
///
/// Volumes carrying one record simulated interactions into the named hits
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDetector {
    /// Detector name, shared by all volumes of one detector variant.
    pub name: String,
    /// Hits collection the detector fills.
    pub hits_collection: String,
}

impl SensitiveDetector {
    /// Creates a sensitive-detector association.
    pub fn new(name: impl Into<String>, hits_collection: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hits_collection: hits_collection.into(),
        }
    }
}

/// A uniform bias field over a volume.
///
/// Models the charge-collection field applied across a microdosimeter's
/// sensitive region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Applied bias in volts.
    pub bias_volts: f64,
    /// Field direction (unit vector, local coordinates).
    pub direction: DVec3,
}

impl FieldConfig {
    /// Creates a bias field along the local +z axis.
    pub fn along_z(bias_volts: f64) -> Self {
        Self {
            bias_volts,
            direction: DVec3::Z,
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
    fn test_sensitive_detector_fields() {
        let sd = SensitiveDetector::new("diamondSD", "diamondHits");
        assert_eq!(sd.name, "diamondSD");
        assert_eq!(sd.hits_collection, "diamondHits");
    }

    #[test]
    fn test_field_along_z() {
        let field = FieldConfig::along_z(20.0);
        assert_eq!(field.bias_volts, 20.0);
        assert_eq!(field.direction, DVec3::Z);
    }
}
