#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::Field;
use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_below, validate_positive_finite, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bounds and thresholds used by the normalizer and classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortingPolicy {
    /// Exclusive lower bound shared by every field.
    pub min_value: f64,
    pub max_dimension: f64,
    pub max_mass: f64,
    pub bulky_volume: f64,
    pub bulky_dimension: f64,
    pub heavy_mass: f64,
}

impl SortingPolicy {
    /// Machine epsilon of `f64` (2^-52).
    pub const MIN_VALUE: f64 = f64::EPSILON;
    pub const MAX_DIMENSION: f64 = 1000.0;
    pub const MAX_MASS: f64 = 1000.0;
    pub const BULKY_VOLUME: f64 = 1_000_000.0;
    pub const BULKY_DIMENSION: f64 = 150.0;
    pub const HEAVY_MASS: f64 = 20.0;

    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a TOML document with an optional `[policy]` table. Missing keys
    /// fall back to the defaults, and the result is validated.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: PolicyFile = toml::from_str(content)?;
        let policy = file.policy.unwrap_or_default();
        policy.validate()?;
        tracing::debug!(?policy, "loaded sorting policy");
        Ok(policy)
    }

    pub fn max_for(&self, field: Field) -> f64 {
        if field.is_dimension() {
            self.max_dimension
        } else {
            self.max_mass
        }
    }
}

impl Default for SortingPolicy {
    fn default() -> Self {
        Self {
            min_value: Self::MIN_VALUE,
            max_dimension: Self::MAX_DIMENSION,
            max_mass: Self::MAX_MASS,
            bulky_volume: Self::BULKY_VOLUME,
            bulky_dimension: Self::BULKY_DIMENSION,
            heavy_mass: Self::HEAVY_MASS,
        }
    }
}

impl Validate for SortingPolicy {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_positive_finite("policy.min_value", self.min_value)?;
        validate_positive_finite("policy.max_dimension", self.max_dimension)?;
        validate_positive_finite("policy.max_mass", self.max_mass)?;
        validate_positive_finite("policy.bulky_volume", self.bulky_volume)?;
        validate_positive_finite("policy.bulky_dimension", self.bulky_dimension)?;
        validate_positive_finite("policy.heavy_mass", self.heavy_mass)?;

        validate_below(
            "policy.min_value",
            self.min_value,
            "policy.max_dimension",
            self.max_dimension,
        )?;
        validate_below("policy.min_value", self.min_value, "policy.max_mass", self.max_mass)?;
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    policy: Option<SortingPolicy>,
}
