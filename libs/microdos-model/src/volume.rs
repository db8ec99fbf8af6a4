//! # Volume Tree
//!
//! The placed-volume tree a detector construction produces. Each node pairs
//! a solid with a material key and a translation relative to its mother;
//! the tree is rooted in a single world volume. Sensitivity and field
//! annotations start out empty and are filled in by the construction
//! layer's attachment phase.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::material::MaterialRegistry;
use crate::sensitivity::{FieldConfig, SensitiveDetector};
use crate::solid::Solid;
use crate::validate;

// =============================================================================
// VOLUME
// =============================================================================

/// A placed volume: a solid, its material, and its daughters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Unique name within the tree.
    pub name: String,
    /// Shape, centered at this volume's placement origin.
    pub solid: Solid,
    /// Material registry key.
    pub material: String,
    /// Translation relative to the mother volume's origin.
    pub translation: DVec3,
    /// Daughter volumes.
    pub children: Vec<Volume>,
    /// Sensitive-detector annotation, `None` until attachment.
    pub sensitive: Option<SensitiveDetector>,
    /// Bias-field annotation, `None` until attachment.
    pub field: Option<FieldConfig>,
}

impl Volume {
    /// Creates an unplaced volume at its mother's origin.
    pub fn new(name: impl Into<String>, solid: Solid, material: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            solid,
            material: material.into(),
            translation: DVec3::ZERO,
            children: Vec::new(),
            sensitive: None,
            field: None,
        }
    }

    /// Sets the translation relative to the mother.
    pub fn at(mut self, translation: DVec3) -> Self {
        self.translation = translation;
        self
    }

    /// Adds a daughter volume.
    pub fn with_child(mut self, child: Volume) -> Self {
        self.children.push(child);
        self
    }

    /// Number of volumes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Volume::count).sum::<usize>()
    }

    /// Finds a volume by name in this subtree.
    pub fn find(&self, name: &str) -> Option<&Volume> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Finds a volume by name in this subtree, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Volume> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(name))
    }

    /// Visits every volume in this subtree, depth first.
    pub fn walk(&self, visit: &mut impl FnMut(&Volume)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

// =============================================================================
// GEOMETRY TREE
// =============================================================================

/// A complete geometry: a single world volume and everything inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryTree {
    /// The world volume, root of the tree.
    pub world: Volume,
}

impl GeometryTree {
    /// Creates a tree rooted in the given world volume.
    pub fn new(world: Volume) -> Self {
        Self { world }
    }

    /// Total number of volumes in the tree.
    pub fn volume_count(&self) -> usize {
        self.world.count()
    }

    /// Finds a volume by name.
    pub fn find(&self, name: &str) -> Option<&Volume> {
        self.world.find(name)
    }

    /// Finds a volume by name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Volume> {
        self.world.find_mut(name)
    }

    /// Names of all volumes carrying a sensitive-detector annotation.
    pub fn sensitive_volume_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.world.walk(&mut |volume| {
            if volume.sensitive.is_some() {
                names.push(volume.name.clone());
            }
        });
        names
    }

    /// Validates the tree's structure against a material registry.
    ///
    /// Checks unique names, non-degenerate solids, material resolution,
    /// daughter containment, and sibling overlaps.
    pub fn validate(&self, materials: &MaterialRegistry) -> Result<(), ModelError> {
        validate::validate_tree(self, materials)
    }
}

// =============================================================================
// TESTS
// =============================================================================
