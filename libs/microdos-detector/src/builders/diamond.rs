//! # Diamond Detector Builder
//!
//! Single-crystal CVD diamond microdosimeter: a 2 um sensitive diamond
//! layer grown on an HPHT diamond substrate, metallised with thin aluminium
//! electrodes on both faces. The stack sits centered in a cubic vacuum
//! envelope, front electrode towards negative z (the beam side).

use config::constants::{
    DIAMOND_BIAS_VOLTS, DIAMOND_ELECTRODE_THICKNESS_MM, DIAMOND_ENVELOPE_MM, DIAMOND_LATERAL_MM,
    DIAMOND_SENSITIVE_THICKNESS_MM, DIAMOND_SUBSTRATE_THICKNESS_MM,
};
use glam::DVec3;
use microdos_model::{
    FieldConfig, GeometryTree, Material, MaterialRegistry, ModelError, SensitiveDetector, Solid,
    Volume,
};

use super::{stack_centers, world_volume, SensitivityPlan};

pub(crate) fn build(
    materials: &mut MaterialRegistry,
) -> Result<(GeometryTree, SensitivityPlan), ModelError> {
    materials.ensure(Material::diamond())?;
    materials.ensure(Material::aluminium())?;

    let layer = |name: &str, thickness: f64, material: &str, z: f64| {
        Volume::new(
            name,
            Solid::slab(DIAMOND_LATERAL_MM, DIAMOND_LATERAL_MM, thickness),
            material,
        )
        .at(DVec3::new(0.0, 0.0, z))
    };

    let thicknesses = [
        DIAMOND_ELECTRODE_THICKNESS_MM,
        DIAMOND_SENSITIVE_THICKNESS_MM,
        DIAMOND_SUBSTRATE_THICKNESS_MM,
        DIAMOND_ELECTRODE_THICKNESS_MM,
    ];
    let z = stack_centers(&thicknesses);

    let envelope = Volume::new("diamondEnvelope", Solid::cube(DIAMOND_ENVELOPE_MM), "Vacuum")
        .with_child(layer(
            "diamondFrontElectrode",
            thicknesses[0],
            "Aluminium",
            z[0],
        ))
        .with_child(layer("diamondSV", thicknesses[1], "Diamond", z[1]))
        .with_child(layer("diamondSubstrate", thicknesses[2], "Diamond", z[2]))
        .with_child(layer(
            "diamondBackElectrode",
            thicknesses[3],
            "Aluminium",
            z[3],
        ));

    let tree = GeometryTree::new(world_volume(materials)?.with_child(envelope));

    let sensitivity = SensitivityPlan {
        detector: SensitiveDetector::new("diamondSD", "diamondHits"),
        volumes: vec!["diamondSV".to_string()],
        field: Some(FieldConfig::along_z(DIAMOND_BIAS_VOLTS)),
    };
    Ok((tree, sensitivity))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diamond_stack_layout() {
        let mut materials = MaterialRegistry::new();
        let (tree, sensitivity) = build(&mut materials).unwrap();
        tree.validate(&materials).unwrap();

        // world + envelope + 4 layers
        assert_eq!(tree.volume_count(), 6);
        assert_eq!(sensitivity.volumes, vec!["diamondSV"]);

        let sv = tree.find("diamondSV").unwrap();
        assert_eq!(sv.material, "Diamond");
        assert_eq!(
            sv.solid.aabb().size().z,
            DIAMOND_SENSITIVE_THICKNESS_MM
        );
    }

    #[test]
    fn test_front_electrode_faces_beam() {
        let mut materials = MaterialRegistry::new();
        let (tree, _) = build(&mut materials).unwrap();
        let front = tree.find("diamondFrontElectrode").unwrap();
        let back = tree.find("diamondBackElectrode").unwrap();
        assert!(front.translation.z < back.translation.z);
    }
}
