//! # Silicon-Bridge Detector Builder
//!
//! Bridge microdosimeter: a row of cylindrical silicon sensitive elements
//! joined by thin non-sensitive silicon spans, fabricated in a thin
//! epitaxial layer on a support wafer. The spans carry the bias between
//! elements but are excluded from the sensitive volume set.

use config::constants::{
    BRIDGE_BIAS_VOLTS, BRIDGE_ELEMENT_COUNT, BRIDGE_ELEMENT_PITCH_MM, BRIDGE_ELEMENT_RADIUS_MM,
    BRIDGE_ENVELOPE_MM, BRIDGE_LAYER_THICKNESS_MM, BRIDGE_LAYER_X_MM, BRIDGE_LAYER_Y_MM,
    BRIDGE_SPAN_X_MM, BRIDGE_SPAN_Y_MM, BRIDGE_WAFER_LATERAL_MM, BRIDGE_WAFER_THICKNESS_MM,
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
    materials.ensure(Material::silicon())?;

    let thicknesses = [BRIDGE_LAYER_THICKNESS_MM, BRIDGE_WAFER_THICKNESS_MM];
    let z = stack_centers(&thicknesses);

    // Epitaxial layer carrying the element row, layer towards the beam.
    let mut layer = Volume::new(
        "bridgeLayer",
        Solid::slab(BRIDGE_LAYER_X_MM, BRIDGE_LAYER_Y_MM, BRIDGE_LAYER_THICKNESS_MM),
        "Silicon",
    )
    .at(DVec3::new(0.0, 0.0, z[0]));

    let half_span = (BRIDGE_ELEMENT_COUNT - 1) as f64 / 2.0;
    let mut element_names = Vec::new();
    for i in 0..BRIDGE_ELEMENT_COUNT {
        let name = format!("bridgeSV_{}", i);
        let x = (i as f64 - half_span) * BRIDGE_ELEMENT_PITCH_MM;
        layer = layer.with_child(
            Volume::new(
                &name,
                Solid::cylinder(BRIDGE_ELEMENT_RADIUS_MM, BRIDGE_LAYER_THICKNESS_MM),
                "Silicon",
            )
            .at(DVec3::new(x, 0.0, 0.0)),
        );
        element_names.push(name);
    }

    // Spans sit midway between neighbouring elements.
    for i in 0..BRIDGE_ELEMENT_COUNT - 1 {
        let x = (i as f64 - half_span + 0.5) * BRIDGE_ELEMENT_PITCH_MM;
        layer = layer.with_child(
            Volume::new(
                format!("bridgeSpan_{}", i),
                Solid::slab(BRIDGE_SPAN_X_MM, BRIDGE_SPAN_Y_MM, BRIDGE_LAYER_THICKNESS_MM),
                "Silicon",
            )
            .at(DVec3::new(x, 0.0, 0.0)),
        );
    }

    let wafer = Volume::new(
        "bridgeWafer",
        Solid::slab(
            BRIDGE_WAFER_LATERAL_MM,
            BRIDGE_WAFER_LATERAL_MM,
            BRIDGE_WAFER_THICKNESS_MM,
        ),
        "Silicon",
    )
    .at(DVec3::new(0.0, 0.0, z[1]));

    let envelope = Volume::new("bridgeEnvelope", Solid::cube(BRIDGE_ENVELOPE_MM), "Vacuum")
        .with_child(layer)
        .with_child(wafer);

    let tree = GeometryTree::new(world_volume(materials)?.with_child(envelope));

    let sensitivity = SensitivityPlan {
        detector: SensitiveDetector::new("bridgeSD", "bridgeHits"),
        volumes: element_names,
        field: Some(FieldConfig::along_z(BRIDGE_BIAS_VOLTS)),
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
    fn test_bridge_layout() {
        let mut materials = MaterialRegistry::new();
        let (tree, sensitivity) = build(&mut materials).unwrap();
        tree.validate(&materials).unwrap();

        // world + envelope + layer + wafer + 3 elements + 2 spans
        assert_eq!(
            tree.volume_count(),
            4 + BRIDGE_ELEMENT_COUNT + (BRIDGE_ELEMENT_COUNT - 1)
        );
        assert_eq!(sensitivity.volumes.len(), BRIDGE_ELEMENT_COUNT);
    }

    #[test]
    fn test_spans_are_not_sensitive() {
        let mut materials = MaterialRegistry::new();
        let (_, sensitivity) = build(&mut materials).unwrap();
        for name in &sensitivity.volumes {
            assert!(name.starts_with("bridgeSV_"));
        }
    }

    #[test]
    fn test_elements_are_cylinders() {
        let mut materials = MaterialRegistry::new();
        let (tree, _) = build(&mut materials).unwrap();
        let element = tree.find("bridgeSV_0").unwrap();
        assert!(matches!(element.solid, Solid::Tube { .. }));
    }
}
