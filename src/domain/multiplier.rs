use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Scalar applied to total expenses to obtain the expected income figure.
///
/// Any finite, non-negative value is accepted by [`Multiplier::new`]. The
/// preset menu is a presentation restriction enforced by [`Multiplier::preset`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(f64);

impl Multiplier {
    /// Values offered by the projection menu.
    pub const PRESETS: [f64; 5] = [1.0, 1.25, 1.5, 1.75, 2.0];

    pub const DEFAULT: f64 = 1.5;

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidMultiplier(value));
        }
        Ok(Self(value))
    }

    /// Accepts only a value from [`Multiplier::PRESETS`].
    pub fn preset(value: f64) -> Result<Self, ValidationError> {
        let multiplier = Self::new(value)?;
        if Self::PRESETS
            .iter()
            .any(|preset| (preset - value).abs() < f64::EPSILON)
        {
            Ok(multiplier)
        } else {
            Err(ValidationError::UnsupportedMultiplier(value))
        }
    }

    pub fn presets() -> impl Iterator<Item = Multiplier> {
        Self::PRESETS.into_iter().map(Multiplier)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Multiplier> for f64 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}
