//! # Structural Validation
//!
//! Whole-tree checks run after construction, before the tree is handed to
//! the simulation runtime: unique names, non-degenerate solids, resolvable
//! materials, daughters contained in their mothers, and no overlapping
//! siblings. Containment and overlap are checked on axis-aligned bounding
//! boxes, which is exact for boxes and conservative for tubes.

use std::collections::HashSet;

use crate::error::ModelError;
use crate::material::MaterialRegistry;
use crate::volume::{GeometryTree, Volume};

/// Validates a whole tree against a material registry.
pub(crate) fn validate_tree(
    tree: &GeometryTree,
    materials: &MaterialRegistry,
) -> Result<(), ModelError> {
    let mut names = HashSet::new();
    validate_volume(&tree.world, materials, &mut names)
}

fn validate_volume(
    volume: &Volume,
    materials: &MaterialRegistry,
    names: &mut HashSet<String>,
) -> Result<(), ModelError> {
    if !names.insert(volume.name.clone()) {
        return Err(ModelError::DuplicateVolume(volume.name.clone()));
    }

    volume.solid.validate()?;

    if !materials.contains(&volume.material) {
        return Err(ModelError::UnknownMaterial {
            material: volume.material.clone(),
            volume: volume.name.clone(),
        });
    }

    let mother_box = volume.solid.aabb();
    for child in &volume.children {
        let child_box = child.solid.aabb().translated(child.translation);
        if !mother_box.contains(&child_box) {
            return Err(ModelError::OutsideMother {
                child: child.name.clone(),
                parent: volume.name.clone(),
            });
        }
    }

    for (i, first) in volume.children.iter().enumerate() {
        let first_box = first.solid.aabb().translated(first.translation);
        for second in &volume.children[i + 1..] {
            let second_box = second.solid.aabb().translated(second.translation);
            if first_box.overlaps(&second_box) {
                return Err(ModelError::Overlap {
                    first: first.name.clone(),
                    second: second.name.clone(),
                    parent: volume.name.clone(),
                });
            }
        }
    }

    for child in &volume.children {
        validate_volume(child, materials, names)?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::solid::Solid;
    use glam::DVec3;

    fn registry() -> MaterialRegistry {
        let mut materials = MaterialRegistry::new();
        materials.ensure(Material::vacuum()).unwrap();
        materials.ensure(Material::silicon()).unwrap();
        materials
    }

    #[test]
    fn test_valid_tree_passes() {
        let world = Volume::new("world", Solid::cube(10.0), "Vacuum")
            .with_child(Volume::new("chip", Solid::cube(1.0), "Silicon"));
        let tree = GeometryTree::new(world);
        tree.validate(&registry()).unwrap();
    }

    #[test]
    fn test_unknown_material_detected() {
        let world = Volume::new("world", Solid::cube(10.0), "Vacuum")
            .with_child(Volume::new("chip", Solid::cube(1.0), "Kryptonite"));
        let tree = GeometryTree::new(world);
        assert!(matches!(
            tree.validate(&registry()),
            Err(ModelError::UnknownMaterial { .. })
        ));
    }

    #[test]
    fn test_duplicate_name_detected() {
        let world = Volume::new("world", Solid::cube(10.0), "Vacuum")
            .with_child(Volume::new("world", Solid::cube(1.0), "Silicon"));
        let tree = GeometryTree::new(world);
        assert_eq!(
            tree.validate(&registry()),
            Err(ModelError::DuplicateVolume("world".to_string()))
        );
    }

    #[test]
    fn test_protruding_daughter_detected() {
        let world = Volume::new("world", Solid::cube(10.0), "Vacuum").with_child(
            Volume::new("chip", Solid::cube(4.0), "Silicon").at(DVec3::new(4.0, 0.0, 0.0)),
        );
        let tree = GeometryTree::new(world);
        assert!(matches!(
            tree.validate(&registry()),
            Err(ModelError::OutsideMother { .. })
        ));
    }

    #[test]
    fn test_overlapping_siblings_detected() {
        let world = Volume::new("world", Solid::cube(10.0), "Vacuum")
            .with_child(Volume::new("a", Solid::cube(2.0), "Silicon"))
            .with_child(
                Volume::new("b", Solid::cube(2.0), "Silicon").at(DVec3::new(1.0, 0.0, 0.0)),
            );
        let tree = GeometryTree::new(world);
        assert!(matches!(
            tree.validate(&registry()),
            Err(ModelError::Overlap { .. })
        ));
    }

    #[test]
    fn test_touching_siblings_pass() {
        let world = Volume::new("world", Solid::cube(10.0), "Vacuum")
            .with_child(
                Volume::new("a", Solid::cube(2.0), "Silicon").at(DVec3::new(-1.0, 0.0, 0.0)),
            )
            .with_child(
                Volume::new("b", Solid::cube(2.0), "Silicon").at(DVec3::new(1.0, 0.0, 0.0)),
            );
        let tree = GeometryTree::new(world);
        tree.validate(&registry()).unwrap();
    }

    #[test]
    fn test_degenerate_solid_detected() {
        let world = Volume::new("world", Solid::slab(10.0, 10.0, 0.0), "Vacuum");
        let tree = GeometryTree::new(world);
        assert!(matches!(
            tree.validate(&registry()),
            Err(ModelError::DegenerateSolid { .. })
        ));
    }
}
