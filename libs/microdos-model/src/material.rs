//! # Materials
//!
//! Material definitions and the registry the construction phase registers
//! them into. The registry stands in for the simulation toolkit's
//! process-wide materials table: it is owned by the caller, mutated only
//! while a detector is being constructed, and consulted by tree validation
//! to resolve every volume's material key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ModelError;

// =============================================================================
// MATERIAL
// =============================================================================

/// Physical state of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialState {
    Solid,
    Liquid,
    Gas,
}

/// A material, identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Registry key.
    pub name: String,
    /// Density in g/cm^3.
    pub density: f64,
    /// Physical state.
    pub state: MaterialState,
}

impl Material {
    /// Creates a material with the given properties.
    pub fn new(name: impl Into<String>, density: f64, state: MaterialState) -> Self {
        Self {
            name: name.into(),
            density,
            state,
        }
    }

    /// Interstellar-grade vacuum used for the world volume.
    pub fn vacuum() -> Self {
        Self::new("Vacuum", 1e-25, MaterialState::Gas)
    }

    /// Dry air at sea level.
    pub fn air() -> Self {
        Self::new("Air", 1.205e-3, MaterialState::Gas)
    }

    /// Liquid water.
    pub fn water() -> Self {
        Self::new("Water", 1.0, MaterialState::Liquid)
    }

    /// Crystalline diamond (sensitive layers and substrates).
    pub fn diamond() -> Self {
        Self::new("Diamond", 3.52, MaterialState::Solid)
    }

    /// Crystalline silicon.
    pub fn silicon() -> Self {
        Self::new("Silicon", 2.33, MaterialState::Solid)
    }

    /// Aluminium (electrodes).
    pub fn aluminium() -> Self {
        Self::new("Aluminium", 2.70, MaterialState::Solid)
    }

    /// Chromium (thin contacts).
    pub fn chromium() -> Self {
        Self::new("Chromium", 7.19, MaterialState::Solid)
    }

    /// Amorphous silicon dioxide (oxide layers).
    pub fn silicon_dioxide() -> Self {
        Self::new("SiliconDioxide", 2.32, MaterialState::Solid)
    }
}

// =============================================================================
// MATERIAL REGISTRY
// =============================================================================

/// Name-keyed table of material definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
}

impl MaterialRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a material, idempotently.
    ///
    /// Registering the exact same definition twice is a no-op; registering
    /// a different definition under an existing name is an error.
    pub fn ensure(&mut self, material: Material) -> Result<(), ModelError> {
        match self.materials.get(&material.name) {
            Some(existing) if *existing == material => Ok(()),
            Some(_) => Err(ModelError::ConflictingMaterial(material.name)),
            None => {
                self.materials.insert(material.name.clone(), material);
                Ok(())
            }
        }
    }

    /// Looks up a material by name.
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Returns true if a material with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_registers() {
        let mut registry = MaterialRegistry::new();
        registry.ensure(Material::diamond()).unwrap();
        assert!(registry.contains("Diamond"));
        assert_eq!(registry.get("Diamond").unwrap().density, 3.52);
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let mut registry = MaterialRegistry::new();
        registry.ensure(Material::silicon()).unwrap();
        registry.ensure(Material::silicon()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_conflicting_redefinition_rejected() {
        let mut registry = MaterialRegistry::new();
        registry.ensure(Material::silicon()).unwrap();
        let heavier = Material::new("Silicon", 5.0, MaterialState::Solid);
        assert_eq!(
            registry.ensure(heavier),
            Err(ModelError::ConflictingMaterial("Silicon".to_string()))
        );
    }

    #[test]
    fn test_unknown_material_lookup() {
        let registry = MaterialRegistry::new();
        assert!(registry.get("Unobtainium").is_none());
        assert!(registry.is_empty());
    }
}
