//! # Microdos Detector
//!
//! Token-dispatched detector construction for microdosimeter geometries.
//!
//! ## Architecture
//!
//! ```text
//! Token → microdos-detector (DetectorConstruction) → microdos-model (GeometryTree)
//! ```
//!
//! A [`DetectorConstruction`] is created once per simulation session with a
//! detector-type token and a borrowed analysis collaborator. Its
//! `construct()` builds exactly one of the four supported geometry variants
//! (diamond, micro-diamond, silicon, silicon-bridge) as a validated volume
//! tree; `attach_sensitivity()` then annotates the designated volumes with
//! their sensitive detector and bias field. The two phases are ordered by a
//! checked state transition: attaching before constructing, or constructing
//! twice, is an error — never silent misbehaviour.
//!
//! ## Example
//!
//! ```rust
//! use microdos_detector::{DetectorConstruction, InMemoryAnalysis};
//! use microdos_model::MaterialRegistry;
//!
//! let mut analysis = InMemoryAnalysis::new();
//! let mut materials = MaterialRegistry::new();
//! let mut construction = DetectorConstruction::new(&mut analysis, "micro-diamond");
//!
//! let mut tree = construction.construct(&mut materials).unwrap();
//! construction.attach_sensitivity(&mut tree).unwrap();
//!
//! assert_eq!(tree.sensitive_volume_names(), vec!["microDiamondSV".to_string()]);
//! ```

pub mod analysis;
pub mod construction;
pub mod detector_type;
pub mod error;

mod builders;

// Re-export public API
pub use analysis::{AnalysisCollaborator, GeometryRecord, InMemoryAnalysis};
pub use construction::DetectorConstruction;
pub use detector_type::DetectorType;
pub use error::ConstructionError;
