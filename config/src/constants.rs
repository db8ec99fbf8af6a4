//! # Configuration Constants
//!
//! Centralized constants for the microdosimeter construction pipeline. All
//! detector dimensions, bias voltages, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **World**: Dimensions of the enclosing world volume
//! - **Diamond / MicroDiamond / Silicon / SiliconBridge**: Fixed geometry
//!   parameters of the four detector variants
//!
//! All lengths are millimetres, all voltages are volts.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and as the slack allowed when a daughter volume
/// touches the boundary of its mother exactly (stacked layers share faces).
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// WORLD VOLUME
// =============================================================================

/// Edge length of the cubic world volume.
///
/// Large enough to enclose any of the detector envelopes with generous
/// margin for upstream beam-line placements.
pub const WORLD_SIZE_MM: f64 = 200.0;

// =============================================================================
// DIAMOND DETECTOR
// =============================================================================
//
// Single-crystal CVD diamond microdosimeter: a thin sensitive diamond layer
// grown on an HPHT substrate, metallised with aluminium on both faces.

/// Lateral (x and y) size of every layer in the diamond stack.
pub const DIAMOND_LATERAL_MM: f64 = 1.0;

/// Thickness of each aluminium electrode.
pub const DIAMOND_ELECTRODE_THICKNESS_MM: f64 = 0.0002; // 0.2 um

/// Thickness of the sensitive single-crystal diamond layer.
pub const DIAMOND_SENSITIVE_THICKNESS_MM: f64 = 0.002; // 2 um

/// Thickness of the HPHT diamond substrate.
pub const DIAMOND_SUBSTRATE_THICKNESS_MM: f64 = 0.3;

/// Edge length of the cubic envelope holding the diamond stack.
pub const DIAMOND_ENVELOPE_MM: f64 = 2.0;

/// Bias applied across the sensitive diamond layer.
pub const DIAMOND_BIAS_VOLTS: f64 = 20.0;

// =============================================================================
// MICRO-DIAMOND DETECTOR
// =============================================================================
//
// The "microDiamond" variant: a thicker free-standing sensitive membrane on
// a thick seed substrate, contacted with a sub-micron chromium layer.

/// Lateral (x and y) size of every layer in the micro-diamond stack.
pub const MICRO_DIAMOND_LATERAL_MM: f64 = 2.0;

/// Thickness of the chromium front contact.
pub const MICRO_DIAMOND_CONTACT_THICKNESS_MM: f64 = 0.00005; // 50 nm

/// Thickness of the sensitive diamond membrane.
pub const MICRO_DIAMOND_SENSITIVE_THICKNESS_MM: f64 = 0.008; // 8 um

/// Thickness of the seed diamond substrate.
pub const MICRO_DIAMOND_SUBSTRATE_THICKNESS_MM: f64 = 0.5;

/// Edge length of the cubic envelope holding the micro-diamond stack.
pub const MICRO_DIAMOND_ENVELOPE_MM: f64 = 4.0;

/// Bias applied across the sensitive diamond membrane.
pub const MICRO_DIAMOND_BIAS_VOLTS: f64 = 50.0;

// =============================================================================
// SILICON DETECTOR (SOI ARRAY)
// =============================================================================
//
// Silicon-on-insulator microdosimeter: a square array of micron-scale
// silicon sensitive cells embedded in an oxide layer on a support wafer.

/// Lateral (x and y) size of the support wafer and oxide layer.
pub const SILICON_WAFER_LATERAL_MM: f64 = 0.9;

/// Thickness of the silicon support wafer.
pub const SILICON_WAFER_THICKNESS_MM: f64 = 0.3;

/// Thickness of the oxide layer carrying the sensitive cells.
pub const SILICON_OXIDE_THICKNESS_MM: f64 = 0.01; // 10 um

/// Lateral (x and y) size of one sensitive silicon cell.
pub const SILICON_CELL_LATERAL_MM: f64 = 0.03; // 30 um

/// Thickness of one sensitive silicon cell (fills the oxide layer).
pub const SILICON_CELL_THICKNESS_MM: f64 = 0.01; // 10 um

/// Centre-to-centre pitch between neighbouring sensitive cells.
pub const SILICON_CELL_PITCH_MM: f64 = 0.06; // 60 um

/// Number of sensitive cells per row and per column of the array.
pub const SILICON_ARRAY_DIM: usize = 3;

/// Edge length of the cubic envelope holding the silicon detector.
pub const SILICON_ENVELOPE_MM: f64 = 1.0;

/// Bias applied across each sensitive silicon cell.
pub const SILICON_BIAS_VOLTS: f64 = 10.0;

// =============================================================================
// SILICON-BRIDGE DETECTOR
// =============================================================================
//
// Bridge microdosimeter: cylindrical silicon sensitive elements joined by
// thin non-sensitive silicon spans on a support wafer.

/// Lateral (x and y) size of the support wafer.
pub const BRIDGE_WAFER_LATERAL_MM: f64 = 0.9;

/// Thickness of the silicon support wafer.
pub const BRIDGE_WAFER_THICKNESS_MM: f64 = 0.3;

/// Lateral x size of the epitaxial layer carrying the bridge row.
pub const BRIDGE_LAYER_X_MM: f64 = 0.2;

/// Lateral y size of the epitaxial layer carrying the bridge row.
pub const BRIDGE_LAYER_Y_MM: f64 = 0.06;

/// Thickness of the epitaxial layer (and of everything placed in it).
pub const BRIDGE_LAYER_THICKNESS_MM: f64 = 0.01; // 10 um

/// Outer radius of one cylindrical sensitive element.
pub const BRIDGE_ELEMENT_RADIUS_MM: f64 = 0.015; // 15 um

/// Number of cylindrical sensitive elements in the row.
pub const BRIDGE_ELEMENT_COUNT: usize = 3;

/// Centre-to-centre pitch between neighbouring sensitive elements.
pub const BRIDGE_ELEMENT_PITCH_MM: f64 = 0.05; // 50 um

/// Lateral x size of one bridge span between two elements.
pub const BRIDGE_SPAN_X_MM: f64 = 0.02; // 20 um

/// Lateral y size of one bridge span.
pub const BRIDGE_SPAN_Y_MM: f64 = 0.01; // 10 um

/// Edge length of the cubic envelope holding the bridge detector.
pub const BRIDGE_ENVELOPE_MM: f64 = 1.0;

/// Bias applied across each cylindrical sensitive element.
pub const BRIDGE_BIAS_VOLTS: f64 = 10.0;
