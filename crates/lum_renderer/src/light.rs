//! Point lights.

use crate::ConstructionError;
use lum_math::Vec3;

/// An isotropic point light with inverse-square falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a light. Position must be finite and intensity positive and finite.
    pub fn new(position: Vec3, intensity: f32) -> Result<Self, ConstructionError> {
        check_position(position)?;
        check_intensity(intensity)?;
        Ok(Self {
            position,
            intensity,
        })
    }

    /// Same light with its intensity replaced.
    pub fn with_intensity(self, intensity: f32) -> Self {
        Self { intensity, ..self }
    }
}

pub(crate) fn check_position(position: Vec3) -> Result<(), ConstructionError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(ConstructionError::NonFinitePosition(position))
    }
}

pub(crate) fn check_intensity(intensity: f32) -> Result<(), ConstructionError> {
    if intensity.is_finite() && intensity > 0.0 {
        Ok(())
    } else {
        Err(ConstructionError::InvalidLightIntensity(intensity))
    }
}
