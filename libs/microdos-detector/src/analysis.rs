//! # Analysis Collaborator
//!
//! The injected bookkeeping object the construction reports to. The
//! construction never owns it: it holds a mutable borrow for its own
//! lifetime, so the collaborator necessarily outlives the construction.
//! One [`GeometryRecord`] is reported per successful construction.

use serde::{Deserialize, Serialize};

use crate::detector_type::DetectorType;

/// Geometry bookkeeping reported once per constructed detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    /// Which variant was built.
    pub detector_type: DetectorType,
    /// Sensitive-detector name shared by the variant's sensitive volumes.
    pub sensitive_detector: String,
    /// Names of the volumes designated sensitive.
    pub sensitive_volumes: Vec<String>,
    /// Thickness of one sensitive volume along z, in mm.
    pub sensitive_thickness_mm: f64,
    /// Material of the sensitive volumes.
    pub sensitive_material: String,
}

/// Receives geometry bookkeeping from the construction.
///
/// Implementations typically forward the record to the simulation's output
/// layer (histogram configuration, lineal-energy conversion factors).
pub trait AnalysisCollaborator {
    /// Called once, after a variant's tree has been built and validated.
    fn record_geometry(&mut self, record: GeometryRecord);
}

/// Collaborator that keeps every record in memory.
///
/// Useful for tests and for embedding when no real analysis backend is
/// wired up.
#[derive(Debug, Default)]
pub struct InMemoryAnalysis {
    records: Vec<GeometryRecord>,
}

impl InMemoryAnalysis {
    /// Creates an empty collaborator.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records received so far.
    pub fn records(&self) -> &[GeometryRecord] {
        &self.records
    }
}

impl AnalysisCollaborator for InMemoryAnalysis {
    fn record_geometry(&mut self, record: GeometryRecord) {
        self.records.push(record);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_analysis_collects() {
        let mut analysis = InMemoryAnalysis::new();
        analysis.record_geometry(GeometryRecord {
            detector_type: DetectorType::Diamond,
            sensitive_detector: "diamondSD".to_string(),
            sensitive_volumes: vec!["diamondSV".to_string()],
            sensitive_thickness_mm: 0.002,
            sensitive_material: "Diamond".to_string(),
        });
        assert_eq!(analysis.records().len(), 1);
        assert_eq!(analysis.records()[0].detector_type, DetectorType::Diamond);
    }
}
