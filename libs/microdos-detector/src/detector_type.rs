//! # Detector Type
//!
//! The closed set of supported detector variants and the token parsing that
//! guards it. Tokens are matched case-insensitively with `-` and `_`
//! separators ignored, so `"MicroDiamond"`, `"micro-diamond"` and
//! `"micro_diamond"` all select the same variant. Anything outside the set
//! is rejected at the boundary; there is no default variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConstructionError;

/// A supported detector variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectorType {
    /// Thin single-crystal diamond layer on an HPHT substrate.
    Diamond,
    /// Free-standing diamond membrane with a chromium contact.
    MicroDiamond,
    /// SOI array of silicon sensitive cells.
    Silicon,
    /// Row of cylindrical silicon elements joined by bridge spans.
    SiliconBridge,
}

impl DetectorType {
    /// All supported variants, in dispatch order.
    pub const ALL: [DetectorType; 4] = [
        DetectorType::Diamond,
        DetectorType::MicroDiamond,
        DetectorType::Silicon,
        DetectorType::SiliconBridge,
    ];

    /// Canonical token for this variant.
    pub fn token(&self) -> &'static str {
        match self {
            DetectorType::Diamond => "Diamond",
            DetectorType::MicroDiamond => "MicroDiamond",
            DetectorType::Silicon => "Silicon",
            DetectorType::SiliconBridge => "SiliconBridge",
        }
    }

    /// Name prefix used by every volume this variant builds.
    pub fn volume_prefix(&self) -> &'static str {
        match self {
            DetectorType::Diamond => "diamond",
            DetectorType::MicroDiamond => "microDiamond",
            DetectorType::Silicon => "silicon",
            DetectorType::SiliconBridge => "bridge",
        }
    }
}

impl fmt::Display for DetectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DetectorType {
    type Err = ConstructionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let normalized: String = token
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "diamond" => Ok(DetectorType::Diamond),
            "microdiamond" => Ok(DetectorType::MicroDiamond),
            "silicon" => Ok(DetectorType::Silicon),
            "siliconbridge" => Ok(DetectorType::SiliconBridge),
            _ => Err(ConstructionError::UnknownDetectorType(token.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tokens_parse() {
        for variant in DetectorType::ALL {
            assert_eq!(variant.token().parse::<DetectorType>().unwrap(), variant);
        }
    }

    #[test]
    fn test_separators_and_case_ignored() {
        assert_eq!(
            "micro-diamond".parse::<DetectorType>().unwrap(),
            DetectorType::MicroDiamond
        );
        assert_eq!(
            "SILICON_BRIDGE".parse::<DetectorType>().unwrap(),
            DetectorType::SiliconBridge
        );
        assert_eq!(
            "diamond".parse::<DetectorType>().unwrap(),
            DetectorType::Diamond
        );
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = "germanium".parse::<DetectorType>().unwrap_err();
        assert!(matches!(err, ConstructionError::UnknownDetectorType(_)));
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!("".parse::<DetectorType>().is_err());
    }

    #[test]
    fn test_volume_prefixes_are_distinct() {
        let prefixes: Vec<_> = DetectorType::ALL.iter().map(|t| t.volume_prefix()).collect();
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert!(!a.starts_with(b) && !b.starts_with(a), "{} vs {}", a, b);
            }
        }
    }
}
