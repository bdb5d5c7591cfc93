//! Tunable inputs for pattern generators

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::io::configuration::{DEFAULT_PATTERN_FREQUENCY, DEFAULT_PATTERN_SCALE, DEFAULT_SEED};
use crate::io::error::{Result, invalid_argument};
use crate::math::geometry::Vec3;

/// Value of a named extra parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Boolean switch
    Flag(bool),
    /// Numeric value
    Number(f64),
    /// Free-form text
    Text(String),
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Immutable parameter set passed into a generator call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternParameters {
    /// Pattern origin in cell coordinates
    pub origin: Vec3,
    /// Size of one pattern unit in cells
    pub scale: f64,
    /// Repetitions per pattern unit
    pub frequency: f64,
    /// Rotation about the vertical axis in degrees
    pub rotation: f64,
    /// Seed for stochastic generators
    pub seed: u64,
    /// Strategy-specific named parameters
    pub extra: BTreeMap<String, ParameterValue>,
}

impl Default for PatternParameters {
    fn default() -> Self {
        Self {
            origin: [0.0; 3],
            scale: DEFAULT_PATTERN_SCALE,
            frequency: DEFAULT_PATTERN_FREQUENCY,
            rotation: 0.0,
            seed: DEFAULT_SEED,
            extra: BTreeMap::new(),
        }
    }
}

impl PatternParameters {
    /// Replace the seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace scale and frequency
    #[must_use]
    pub fn with_scale(mut self, scale: f64, frequency: f64) -> Self {
        self.scale = scale;
        self.frequency = frequency;
        self
    }

    /// Replace the origin
    #[must_use]
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Replace the rotation
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Add or replace a named extra parameter
    #[must_use]
    pub fn with_extra(mut self, name: &str, value: impl Into<ParameterValue>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }

    /// Numeric extra parameter
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.extra.get(name) {
            Some(ParameterValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Text extra parameter
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.extra.get(name) {
            Some(ParameterValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Boolean extra parameter, false when absent
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.extra.get(name), Some(ParameterValue::Flag(true)))
    }

    /// Check that the numeric fields are usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if scale or frequency is not a positive
    /// finite number, or if origin or rotation is not finite
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(invalid_argument(
                "scale",
                &format!("must be positive and finite, got {}", self.scale),
            ));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(invalid_argument(
                "frequency",
                &format!("must be positive and finite, got {}", self.frequency),
            ));
        }
        if !self.rotation.is_finite() {
            return Err(invalid_argument("rotation", &"must be finite"));
        }
        if self.origin.iter().any(|c| !c.is_finite()) {
            return Err(invalid_argument("origin", &"must be finite"));
        }
        Ok(())
    }
}
