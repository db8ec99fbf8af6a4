//! # Microdos Model
//!
//! Geometry data model for the microdosimeter construction pipeline.
//!
//! ## Architecture
//!
//! ```text
//! Token → microdos-detector (DetectorConstruction) → microdos-model (GeometryTree)
//! ```
//!
//! This crate models the host-toolkit abstractions a detector construction
//! operates on: solids, materials and their registry, the placed-volume
//! tree, and the sensitivity/bias-field annotations attached after the tree
//! exists. Structural validation (containment, sibling overlap, material
//! resolution) lives here too, so a constructed tree can be checked before
//! it is handed to the simulation runtime.
//!
//! ## Example
//!
//! ```rust
//! use microdos_model::{Solid, Volume, GeometryTree, MaterialRegistry, Material};
//!
//! let mut materials = MaterialRegistry::new();
//! materials.ensure(Material::vacuum()).unwrap();
//!
//! let world = Volume::new("world", Solid::cube(100.0), "Vacuum");
//! let tree = GeometryTree::new(world);
//! assert_eq!(tree.volume_count(), 1);
//! tree.validate(&materials).unwrap();
//! ```

pub mod error;
pub mod material;
pub mod sensitivity;
pub mod solid;
pub mod volume;

mod validate;

// Re-export public API
pub use error::ModelError;
pub use material::{Material, MaterialRegistry, MaterialState};
pub use sensitivity::{FieldConfig, SensitiveDetector};
pub use solid::{Aabb, Solid};
pub use volume::{GeometryTree, Volume};
