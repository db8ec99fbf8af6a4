//! # Solids
//!
//! The closed set of solid shapes the detector variants are assembled from,
//! plus the axis-aligned bounding boxes used for structural validation.
//!
//! Every solid is centered at the local origin of its placement; the
//! position of a volume comes entirely from its translation relative to the
//! mother volume.

use config::constants::EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::ModelError;

// =============================================================================
// SOLID
// =============================================================================

/// A solid shape, centered at its placement origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solid {
    /// Rectangular box.
    Box {
        /// Full size as [x, y, z].
        size: DVec3,
    },

    /// Cylinder or cylindrical shell, axis along z.
    Tube {
        /// Inner radius (0 for a full cylinder).
        inner_radius: f64,
        /// Outer radius.
        outer_radius: f64,
        /// Full height along z.
        height: f64,
    },
}

impl Solid {
    /// Creates a cubic box with the given edge length.
    pub fn cube(edge: f64) -> Self {
        Solid::Box {
            size: DVec3::splat(edge),
        }
    }

    /// Creates a box with the given full size.
    pub fn slab(x: f64, y: f64, z: f64) -> Self {
        Solid::Box {
            size: DVec3::new(x, y, z),
        }
    }

    /// Creates a full cylinder with the given outer radius and height.
    pub fn cylinder(outer_radius: f64, height: f64) -> Self {
        Solid::Tube {
            inner_radius: 0.0,
            outer_radius,
            height,
        }
    }

    /// Returns the axis-aligned bounding box in local coordinates.
    pub fn aabb(&self) -> Aabb {
        match self {
            Solid::Box { size } => Aabb::from_center_size(DVec3::ZERO, *size),
            Solid::Tube {
                outer_radius,
                height,
                ..
            } => Aabb::from_center_size(
                DVec3::ZERO,
                DVec3::new(2.0 * outer_radius, 2.0 * outer_radius, *height),
            ),
        }
    }

    /// Returns the enclosed volume in mm^3.
    pub fn volume(&self) -> f64 {
        match self {
            Solid::Box { size } => size.x * size.y * size.z,
            Solid::Tube {
                inner_radius,
                outer_radius,
                height,
            } => PI * (outer_radius * outer_radius - inner_radius * inner_radius) * height,
        }
    }

    /// Validates the solid's dimensions.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Solid::Box { size } => {
                if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
                    return Err(ModelError::degenerate(format!(
                        "box size must be positive: {:?}",
                        size
                    )));
                }
            }
            Solid::Tube {
                inner_radius,
                outer_radius,
                height,
            } => {
                if *outer_radius <= 0.0 || *height <= 0.0 {
                    return Err(ModelError::degenerate(format!(
                        "tube must have positive outer radius and height: r={}, h={}",
                        outer_radius, height
                    )));
                }
                if *inner_radius < 0.0 || inner_radius >= outer_radius {
                    return Err(ModelError::degenerate(format!(
                        "tube inner radius must satisfy 0 <= ri < ro: ri={}, ro={}",
                        inner_radius, outer_radius
                    )));
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// AABB
// =============================================================================

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from its center and full size.
    pub fn from_center_size(center: DVec3, size: DVec3) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns this box translated by the given offset.
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns the full size of the box.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns true if `other` lies entirely inside this box.
    ///
    /// Boundary contact counts as inside; stacked detector layers share
    /// faces with their mother envelope.
    pub fn contains(&self, other: &Aabb) -> bool {
        other.min.x >= self.min.x - EPSILON
            && other.min.y >= self.min.y - EPSILON
            && other.min.z >= self.min.z - EPSILON
            && other.max.x <= self.max.x + EPSILON
            && other.max.y <= self.max.y + EPSILON
            && other.max.z <= self.max.z + EPSILON
    }

    /// Returns true if the interiors of the two boxes intersect.
    ///
    /// Face-to-face contact is not an overlap; adjacent layers in a stack
    /// touch exactly.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x - EPSILON
            && other.min.x < self.max.x - EPSILON
            && self.min.y < other.max.y - EPSILON
            && other.min.y < self.max.y - EPSILON
            && self.min.z < other.max.z - EPSILON
            && other.min.z < self.max.z - EPSILON
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_aabb() {
        let solid = Solid::slab(2.0, 4.0, 6.0);
        let aabb = solid.aabb();
        assert_eq!(aabb.min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_tube_aabb() {
        let solid = Solid::cylinder(1.5, 4.0);
        let aabb = solid.aabb();
        assert_eq!(aabb.size(), DVec3::new(3.0, 3.0, 4.0));
    }

    #[test]
    fn test_box_volume() {
        let solid = Solid::slab(2.0, 3.0, 4.0);
        assert!((solid.volume() - 24.0).abs() < EPSILON);
    }

    #[test]
    fn test_tube_volume() {
        let solid = Solid::cylinder(1.0, 2.0);
        assert!((solid.volume() - 2.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_box_rejected() {
        let solid = Solid::slab(1.0, 0.0, 1.0);
        assert!(matches!(
            solid.validate(),
            Err(ModelError::DegenerateSolid { .. })
        ));
    }

    #[test]
    fn test_inverted_tube_rejected() {
        let solid = Solid::Tube {
            inner_radius: 2.0,
            outer_radius: 1.0,
            height: 1.0,
        };
        assert!(solid.validate().is_err());
    }

    #[test]
    fn test_contains_allows_boundary_contact() {
        let outer = Aabb::from_center_size(DVec3::ZERO, DVec3::splat(2.0));
        let inner = Aabb::from_center_size(DVec3::new(0.0, 0.0, 0.5), DVec3::new(2.0, 2.0, 1.0));
        assert!(outer.contains(&inner));
    }

    #[test]
    fn test_contains_rejects_protrusion() {
        let outer = Aabb::from_center_size(DVec3::ZERO, DVec3::splat(2.0));
        let inner = Aabb::from_center_size(DVec3::new(1.5, 0.0, 0.0), DVec3::splat(1.0));
        assert!(!outer.contains(&inner));
    }

    #[test]
    fn test_touching_faces_do_not_overlap() {
        let a = Aabb::from_center_size(DVec3::new(-0.5, 0.0, 0.0), DVec3::splat(1.0));
        let b = Aabb::from_center_size(DVec3::new(0.5, 0.0, 0.0), DVec3::splat(1.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_intersecting_interiors_overlap() {
        let a = Aabb::from_center_size(DVec3::ZERO, DVec3::splat(1.0));
        let b = Aabb::from_center_size(DVec3::new(0.4, 0.0, 0.0), DVec3::splat(1.0));
        assert!(a.overlaps(&b));
    }
}
