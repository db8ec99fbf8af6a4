//! # Silicon Detector Builder
//!
//! SOI microdosimeter: a 3x3 array of micron-scale silicon sensitive cells
//! embedded in an oxide layer that sits on a silicon support wafer. Every
//! cell is an independent sensitive volume; the array gives the detector
//! its tissue-equivalent site statistics.

use config::constants::{
    SILICON_ARRAY_DIM, SILICON_BIAS_VOLTS, SILICON_CELL_LATERAL_MM, SILICON_CELL_PITCH_MM,
    SILICON_CELL_THICKNESS_MM, SILICON_ENVELOPE_MM, SILICON_OXIDE_THICKNESS_MM,
    SILICON_WAFER_LATERAL_MM, SILICON_WAFER_THICKNESS_MM,
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
    materials.ensure(Material::silicon_dioxide())?;

    let thicknesses = [SILICON_OXIDE_THICKNESS_MM, SILICON_WAFER_THICKNESS_MM];
    let z = stack_centers(&thicknesses);

    // Oxide layer carrying the sensitive cells, oxide towards the beam.
    let mut oxide = Volume::new(
        "siliconOxide",
        Solid::slab(
            SILICON_WAFER_LATERAL_MM,
            SILICON_WAFER_LATERAL_MM,
            SILICON_OXIDE_THICKNESS_MM,
        ),
        "SiliconDioxide",
    )
    .at(DVec3::new(0.0, 0.0, z[0]));

    let mut cell_names = Vec::new();
    let half_span = (SILICON_ARRAY_DIM - 1) as f64 / 2.0;
    for row in 0..SILICON_ARRAY_DIM {
        for col in 0..SILICON_ARRAY_DIM {
            let name = format!("siliconSV_r{}c{}", row, col);
            let x = (col as f64 - half_span) * SILICON_CELL_PITCH_MM;
            let y = (row as f64 - half_span) * SILICON_CELL_PITCH_MM;
            oxide = oxide.with_child(
                Volume::new(
                    &name,
                    Solid::slab(
                        SILICON_CELL_LATERAL_MM,
                        SILICON_CELL_LATERAL_MM,
                        SILICON_CELL_THICKNESS_MM,
                    ),
                    "Silicon",
                )
                .at(DVec3::new(x, y, 0.0)),
            );
            cell_names.push(name);
        }
    }

    let wafer = Volume::new(
        "siliconWafer",
        Solid::slab(
            SILICON_WAFER_LATERAL_MM,
            SILICON_WAFER_LATERAL_MM,
            SILICON_WAFER_THICKNESS_MM,
        ),
        "Silicon",
    )
    .at(DVec3::new(0.0, 0.0, z[1]));

    let envelope = Volume::new("siliconEnvelope", Solid::cube(SILICON_ENVELOPE_MM), "Vacuum")
        .with_child(oxide)
        .with_child(wafer);

    let tree = GeometryTree::new(world_volume(materials)?.with_child(envelope));

    let sensitivity = SensitivityPlan {
        detector: SensitiveDetector::new("siliconSD", "siliconHits"),
        volumes: cell_names,
        field: Some(FieldConfig::along_z(SILICON_BIAS_VOLTS)),
    };
    Ok((tree, sensitivity))
}

// =============================================================================
// TESTS
// =============================================================================
