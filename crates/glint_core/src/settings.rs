//! Render configuration shared by the renderer and the scene loader.

use std::f32::consts::{FRAC_PI_3, PI};

use glint_math::{Interval, Vec3};
use serde::Deserialize;

use crate::scene::{SceneError, SceneResult};

/// Largest `max_depth` that `validate` accepts. Secondary rays recurse on
/// the call stack.
pub const MAX_DEPTH_LIMIT: u32 = 32;

/// How much of the illumination model to evaluate at a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    /// Return the material's diffuse color, unlit.
    Flat,
    /// Phong diffuse and specular with hard shadows, no secondary rays.
    Local,
    /// Local shading plus recursive reflection and refraction.
    #[default]
    Whitted,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output width in pixels
    pub image_width: u32,
    /// Output height in pixels
    pub image_height: u32,
    /// Vertical field of view in radians
    pub camera_fov: f32,
    /// Deepest recursion level that still intersects the scene
    pub max_depth: u32,
    /// Color returned by misses and exhausted rays
    pub background: Vec3,
    /// Offset applied to secondary ray origins to avoid self-intersection
    pub epsilon: f32,
    /// Hits at or beyond this distance count as misses
    pub max_distance: f32,
    /// Which illumination model to evaluate
    pub technique: Technique,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 1024,
            image_height: 768,
            camera_fov: FRAC_PI_3,
            max_depth: 4,
            background: Vec3::new(0.2, 0.7, 0.8),
            epsilon: 1e-3,
            max_distance: 1000.0,
            technique: Technique::Whitted,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.camera_fov = fov;
        self
    }

    pub fn with_technique(mut self, technique: Technique) -> Self {
        self.technique = technique;
        self
    }

    /// Total pixel count of the output image.
    pub fn pixel_count(&self) -> usize {
        self.image_width as usize * self.image_height as usize
    }

    /// Reject settings the renderer cannot honor.
    pub fn validate(&self) -> SceneResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(SceneError::InvalidSettings(format!(
                "resolution must be non-zero, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if !Interval::new(0.0, PI).surrounds(self.camera_fov) {
            return Err(SceneError::InvalidSettings(format!(
                "field of view must lie strictly between 0 and pi radians, got {}",
                self.camera_fov
            )));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(SceneError::InvalidSettings(format!(
                "max depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            )));
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(SceneError::InvalidSettings(format!(
                "max distance must be positive and finite, got {}",
                self.max_distance
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(SceneError::InvalidSettings(format!(
                "epsilon must be non-negative and finite, got {}",
                self.epsilon
            )));
        }
        if !self.background.is_finite() {
            return Err(SceneError::InvalidSettings(format!(
                "background has non-finite components {:?}",
                self.background
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();

        assert_eq!(settings.image_width, 1024);
        assert_eq!(settings.image_height, 768);
        assert_eq!(settings.max_depth, 4);
        assert_eq!(settings.epsilon, 1e-3);
        assert_eq!(settings.max_distance, 1000.0);
        assert_eq!(settings.technique, Technique::Whitted);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let settings = RenderSettings::default()
            .with_resolution(64, 32)
            .with_fov(PI / 2.0)
            .with_technique(Technique::Flat);

        assert_eq!(settings.pixel_count(), 64 * 32);
        assert_eq!(settings.camera_fov, PI / 2.0);
        assert_eq!(settings.technique, Technique::Flat);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_width = RenderSettings::default().with_resolution(0, 10);
        assert!(zero_width.validate().is_err());

        let flat_fov = RenderSettings::default().with_fov(PI);
        assert!(flat_fov.validate().is_err());

        let negative_fov = RenderSettings::default().with_fov(-0.5);
        assert!(negative_fov.validate().is_err());

        let no_range = RenderSettings {
            max_distance: 0.0,
            ..Default::default()
        };
        assert!(no_range.validate().is_err());

        let bad_epsilon = RenderSettings {
            epsilon: f32::NAN,
            ..Default::default()
        };
        assert!(bad_epsilon.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_max_depth() {
        let deep = RenderSettings {
            max_depth: 1_000_000,
            ..Default::default()
        };
        assert!(matches!(
            deep.validate(),
            Err(SceneError::InvalidSettings(_))
        ));

        let at_limit = RenderSettings {
            max_depth: MAX_DEPTH_LIMIT,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let no_recursion = RenderSettings {
            max_depth: 0,
            ..Default::default()
        };
        assert!(no_recursion.validate().is_ok());
        assert!(RenderSettings::default().validate().is_ok());
    }
}
