//! # Config Crate
//!
//! Centralized configuration constants for the microdosimeter construction
//! pipeline. All detector dimensions, bias voltages, and numerical tolerances
//! are defined here to ensure consistency across crates and easy review of
//! the geometry parameters in one place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DIAMOND_SENSITIVE_THICKNESS_MM};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Detector dimensions are plain f64 millimetres
//! assert!(DIAMOND_SENSITIVE_THICKNESS_MM > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetre Units**: Every length constant is in mm; voltages in volts
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
