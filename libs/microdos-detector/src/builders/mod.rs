//! # Variant Builders
//!
//! One builder per supported detector variant. Each builds the world box,
//! the variant's envelope and fixed layer stack, registers the materials it
//! uses, and returns the tree together with a sensitivity plan naming the
//! volumes to annotate in the attachment phase.
//!
//! Builders are internal: they are selected exclusively by
//! [`DetectorConstruction::construct`](crate::DetectorConstruction::construct)
//! and never invoked directly by callers. Every volume a builder creates
//! (apart from the shared `"world"` root) carries its variant's name
//! prefix, so no two variants' volumes can appear in one tree.

pub(crate) mod diamond;
pub(crate) mod micro_diamond;
pub(crate) mod silicon;
pub(crate) mod silicon_bridge;

use config::constants::WORLD_SIZE_MM;
use microdos_model::{
    FieldConfig, Material, MaterialRegistry, ModelError, SensitiveDetector, Solid, Volume,
};

/// The attachment plan a builder hands back alongside its tree.
#[derive(Debug, Clone)]
pub(crate) struct SensitivityPlan {
    /// Sensitive-detector association to apply.
    pub detector: SensitiveDetector,
    /// Names of the volumes to annotate.
    pub volumes: Vec<String>,
    /// Bias field to apply to the same volumes.
    pub field: Option<FieldConfig>,
}

/// Builds the shared world volume and registers its material.
pub(crate) fn world_volume(materials: &mut MaterialRegistry) -> Result<Volume, ModelError> {
    materials.ensure(Material::vacuum())?;
    Ok(Volume::new("world", Solid::cube(WORLD_SIZE_MM), "Vacuum"))
}

/// Centre z coordinates for a stack of layers, centered as a whole.
///
/// Layers are listed front to back; the first layer ends up at the most
/// negative z.
pub(crate) fn stack_centers(thicknesses: &[f64]) -> Vec<f64> {
    let total: f64 = thicknesses.iter().sum();
    let mut cursor = -total / 2.0;
    thicknesses
        .iter()
        .map(|t| {
            let center = cursor + t / 2.0;
            cursor += t;
            center
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_centers_are_centered() {
        let centers = stack_centers(&[1.0, 2.0, 1.0]);
        assert_eq!(centers, vec![-1.5, 0.0, 1.5]);
    }

    #[test]
    fn test_stack_centers_adjacent_layers_touch() {
        let thicknesses = [0.2, 0.5, 0.1];
        let centers = stack_centers(&thicknesses);
        for i in 0..thicknesses.len() - 1 {
            let top = centers[i] + thicknesses[i] / 2.0;
            let bottom = centers[i + 1] - thicknesses[i + 1] / 2.0;
            assert!((top - bottom).abs() < 1e-12);
        }
    }

    #[test]
    fn test_world_volume_registers_vacuum() {
        let mut materials = MaterialRegistry::new();
        let world = world_volume(&mut materials).unwrap();
        assert_eq!(world.name, "world");
        assert!(materials.contains("Vacuum"));
    }
}
