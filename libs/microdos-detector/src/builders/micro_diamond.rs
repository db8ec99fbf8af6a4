//! # Micro-Diamond Detector Builder
//!
//! The "microDiamond" variant: a thicker free-standing sensitive diamond
//! membrane on a thick seed substrate, contacted through a 50 nm chromium
//! layer on the beam side.

use config::constants::{
    MICRO_DIAMOND_BIAS_VOLTS, MICRO_DIAMOND_CONTACT_THICKNESS_MM, MICRO_DIAMOND_ENVELOPE_MM,
    MICRO_DIAMOND_LATERAL_MM, MICRO_DIAMOND_SENSITIVE_THICKNESS_MM,
    MICRO_DIAMOND_SUBSTRATE_THICKNESS_MM,
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
    materials.ensure(Material::chromium())?;

    let layer = |name: &str, thickness: f64, material: &str, z: f64| {
        Volume::new(
            name,
            Solid::slab(
                MICRO_DIAMOND_LATERAL_MM,
                MICRO_DIAMOND_LATERAL_MM,
                thickness,
            ),
            material,
        )
        .at(DVec3::new(0.0, 0.0, z))
    };

    let thicknesses = [
        MICRO_DIAMOND_CONTACT_THICKNESS_MM,
        MICRO_DIAMOND_SENSITIVE_THICKNESS_MM,
        MICRO_DIAMOND_SUBSTRATE_THICKNESS_MM,
    ];
    let z = stack_centers(&thicknesses);

    let envelope = Volume::new(
        "microDiamondEnvelope",
        Solid::cube(MICRO_DIAMOND_ENVELOPE_MM),
        "Vacuum",
    )
    .with_child(layer("microDiamondContact", thicknesses[0], "Chromium", z[0]))
    .with_child(layer("microDiamondSV", thicknesses[1], "Diamond", z[1]))
    .with_child(layer(
        "microDiamondSubstrate",
        thicknesses[2],
        "Diamond",
        z[2],
    ));

    let tree = GeometryTree::new(world_volume(materials)?.with_child(envelope));

    let sensitivity = SensitivityPlan {
        detector: SensitiveDetector::new("microDiamondSD", "microDiamondHits"),
        volumes: vec!["microDiamondSV".to_string()],
        field: Some(FieldConfig::along_z(MICRO_DIAMOND_BIAS_VOLTS)),
    };
    Ok((tree, sensitivity))
}

// =============================================================================
// TESTS
// =============================================================================
