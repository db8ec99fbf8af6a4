//! # Detector Construction
//!
//! The two-phase construction lifecycle: `construct()` dispatches the
//! stored detector-type token to exactly one variant builder and returns
//! the validated tree; `attach_sensitivity()` then annotates the volumes
//! the builder designated. The ordering is enforced by a checked state
//! transition (Unbuilt → Built), not by convention.

use std::str::FromStr;

use microdos_model::{GeometryTree, MaterialRegistry};

use crate::analysis::{AnalysisCollaborator, GeometryRecord};
use crate::builders::{self, SensitivityPlan};
use crate::detector_type::DetectorType;
use crate::error::ConstructionError;

/// Construction lifecycle state.
enum BuildState {
    /// No tree has been built yet.
    Unbuilt,
    /// A tree was built; the attachment plan is retained.
    Built {
        detector_type: DetectorType,
        sensitivity: SensitivityPlan,
    },
}

/// Builds one detector geometry per session and attaches its sensitivity.
///
/// The analysis collaborator is borrowed, not owned: it must outlive the
/// construction, and it receives one [`GeometryRecord`] per successful
/// `construct()` call.
///
/// ## Example
///
/// ```rust
/// use microdos_detector::{DetectorConstruction, InMemoryAnalysis};
/// use microdos_model::MaterialRegistry;
///
/// let mut analysis = InMemoryAnalysis::new();
/// let mut materials = MaterialRegistry::new();
/// let mut construction = DetectorConstruction::new(&mut analysis, "silicon");
///
/// let mut tree = construction.construct(&mut materials).unwrap();
/// construction.attach_sensitivity(&mut tree).unwrap();
/// assert!(!tree.sensitive_volume_names().is_empty());
/// ```
pub struct DetectorConstruction<'a> {
    analysis: &'a mut dyn AnalysisCollaborator,
    detector_type: String,
    state: BuildState,
}

impl<'a> DetectorConstruction<'a> {
    /// Creates a construction for the given detector-type token.
    ///
    /// The token is stored as supplied and parsed when `construct()` runs;
    /// an unsupported token is reported there, not here.
    pub fn new(analysis: &'a mut dyn AnalysisCollaborator, detector_type: impl Into<String>) -> Self {
        Self {
            analysis,
            detector_type: detector_type.into(),
            state: BuildState::Unbuilt,
        }
    }

    /// The detector-type token this construction was created with.
    pub fn detector_type(&self) -> &str {
        &self.detector_type
    }

    /// Returns true once `construct()` has completed successfully.
    pub fn is_built(&self) -> bool {
        matches!(self.state, BuildState::Built { .. })
    }

    /// Builds the selected detector variant and returns its geometry tree.
    ///
    /// Exactly one variant builder runs per call. The builder registers its
    /// materials into `materials` (the toolkit-owned table), the finished
    /// tree is structurally validated, and the analysis collaborator
    /// receives the geometry record. Ownership of the tree passes to the
    /// caller; only the attachment plan is retained.
    ///
    /// ## Errors
    ///
    /// - [`ConstructionError::UnknownDetectorType`] for a token outside the
    ///   supported set.
    /// - [`ConstructionError::Assembly`] /
    ///   [`ConstructionError::MissingSensitiveVolume`] when the variant
    ///   cannot produce a valid tree. No fallback variant is built.
    /// - [`ConstructionError::AlreadyBuilt`] on a second call; one
    ///   construction builds one tree per session.
    pub fn construct(
        &mut self,
        materials: &mut MaterialRegistry,
    ) -> Result<GeometryTree, ConstructionError> {
        if self.is_built() {
            return Err(ConstructionError::AlreadyBuilt);
        }

        let detector_type = DetectorType::from_str(&self.detector_type)?;
        let (tree, sensitivity) = match detector_type {
            DetectorType::Diamond => builders::diamond::build(materials)?,
            DetectorType::MicroDiamond => builders::micro_diamond::build(materials)?,
            DetectorType::Silicon => builders::silicon::build(materials)?,
            DetectorType::SiliconBridge => builders::silicon_bridge::build(materials)?,
        };

        tree.validate(materials)?;

        // The attachment plan must name volumes that actually exist.
        for name in &sensitivity.volumes {
            if tree.find(name).is_none() {
                return Err(ConstructionError::MissingSensitiveVolume(name.clone()));
            }
        }

        self.analysis.record_geometry(geometry_record(
            detector_type,
            &sensitivity,
            &tree,
        ));
        self.state = BuildState::Built {
            detector_type,
            sensitivity,
        };
        Ok(tree)
    }

    /// Annotates the built tree's designated volumes with the sensitive
    /// detector and bias field.
    ///
    /// Precondition: `construct()` has completed on this object; calling
    /// this first fails with [`ConstructionError::NotBuilt`]. The tree's
    /// topology is untouched — only annotations change. Repeat calls
    /// re-annotate; avoiding them is the caller's responsibility.
    pub fn attach_sensitivity(&self, tree: &mut GeometryTree) -> Result<(), ConstructionError> {
        let sensitivity = match &self.state {
            BuildState::Built { sensitivity, .. } => sensitivity,
            BuildState::Unbuilt => return Err(ConstructionError::NotBuilt),
        };

        for name in &sensitivity.volumes {
            let volume = tree
                .find_mut(name)
                .ok_or_else(|| ConstructionError::MissingSensitiveVolume(name.clone()))?;
            volume.sensitive = Some(sensitivity.detector.clone());
            volume.field = sensitivity.field.clone();
        }
        Ok(())
    }

    /// The variant that was built, once `construct()` has completed.
    pub fn built_type(&self) -> Option<DetectorType> {
        match &self.state {
            BuildState::Built { detector_type, .. } => Some(*detector_type),
            BuildState::Unbuilt => None,
        }
    }
}

/// Assembles the bookkeeping record for a freshly built tree.
fn geometry_record(
    detector_type: DetectorType,
    sensitivity: &SensitivityPlan,
    tree: &GeometryTree,
) -> GeometryRecord {
    let representative = sensitivity
        .volumes
        .first()
        .and_then(|name| tree.find(name));
    GeometryRecord {
        detector_type,
        sensitive_detector: sensitivity.detector.name.clone(),
        sensitive_volumes: sensitivity.volumes.clone(),
        sensitive_thickness_mm: representative
            .map(|v| v.solid.aabb().size().z)
            .unwrap_or(0.0),
        sensitive_material: representative
            .map(|v| v.material.clone())
            .unwrap_or_default(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
