//! Scene store types for Glint.
//!
//! A [`Scene`] is an immutable list of spheres and point lights. It is
//! validated once on construction and only read during a render.

use std::sync::Arc;

use glint_math::{Vec3, Vec4};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while assembling a scene or its render settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index}: center has non-finite components {center:?}")]
    InvalidCenter { index: usize, center: Vec3 },

    #[error("Sphere {index}: {message}")]
    InvalidMaterial { index: usize, message: String },

    #[error("Light {index}: intensity must be positive and finite, got {intensity}")]
    InvalidIntensity { index: usize, intensity: f32 },

    #[error("Light {index}: position has non-finite components {position:?}")]
    InvalidLightPosition { index: usize, position: Vec3 },

    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

/// Surface description for the Whitted shading model.
///
/// `albedo` weights the diffuse, specular, reflected, and refracted
/// contributions in that order. The weights need not sum to one.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Index of refraction (1.0 = air, opaque default)
    pub refractive_index: f32,

    /// Diffuse, specular, reflection, refraction weights
    pub albedo: Vec4,

    /// Base surface color (RGB, 0-1)
    pub diffuse_color: Vec3,

    /// Phong shininess
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Vec3::new(0.5, 0.5, 0.5), // Grey default
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    pub fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Vec3,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Off-white, mostly diffuse with a faint mirror term.
    pub fn ivory() -> Self {
        Self::new(1.0, Vec4::new(0.6, 0.3, 0.1, 0.0), Vec3::new(0.4, 0.4, 0.3), 50.0)
    }

    /// Clear glass, mostly refractive.
    pub fn glass() -> Self {
        Self::new(1.5, Vec4::new(0.0, 0.5, 0.1, 0.8), Vec3::new(0.6, 0.7, 0.8), 125.0)
    }

    /// Dull red with a soft highlight.
    pub fn red_rubber() -> Self {
        Self::new(1.0, Vec4::new(0.9, 0.1, 0.0, 0.0), Vec3::new(0.3, 0.1, 0.1), 10.0)
    }

    /// Near-perfect mirror with a very tight highlight.
    pub fn mirror() -> Self {
        Self::new(1.0, Vec4::new(0.0, 10.0, 0.8, 0.0), Vec3::new(1.0, 1.0, 1.0), 1425.0)
    }

    /// Look up one of the built-in materials by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "ivory" => Some(Self::ivory()),
            "glass" => Some(Self::glass()),
            "red_rubber" => Some(Self::red_rubber()),
            "mirror" => Some(Self::mirror()),
            _ => None,
        }
    }

    /// Names accepted by [`Material::preset`].
    pub const PRESET_NAMES: [&'static str; 4] = ["ivory", "glass", "red_rubber", "mirror"];

    /// Check the material's numeric ranges, describing the first violation.
    pub fn check(&self) -> Result<(), String> {
        if !(self.refractive_index.is_finite() && self.refractive_index > 0.0) {
            return Err(format!(
                "refractive index must be positive and finite, got {}",
                self.refractive_index
            ));
        }
        if !self.albedo.is_finite() {
            return Err(format!("albedo has non-finite weights {:?}", self.albedo));
        }
        if !self.diffuse_color.is_finite() {
            return Err(format!(
                "diffuse color has non-finite components {:?}",
                self.diffuse_color
            ));
        }
        if !(self.specular_exponent.is_finite() && self.specular_exponent >= 0.0) {
            return Err(format!(
                "specular exponent must be non-negative and finite, got {}",
                self.specular_exponent
            ));
        }
        Ok(())
    }
}

/// A sphere primitive. Materials are shared between spheres.
#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. Validation happens when it joins a [`Scene`].
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        if !self.center.is_finite() {
            return Err(SceneError::InvalidCenter {
                index,
                center: self.center,
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                index,
                radius: self.radius,
            });
        }
        self.material
            .check()
            .map_err(|message| SceneError::InvalidMaterial { index, message })
    }
}

/// An infinitesimal light source.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        if !self.position.is_finite() {
            return Err(SceneError::InvalidLightPosition {
                index,
                position: self.position,
            });
        }
        if !(self.intensity.is_finite() && self.intensity > 0.0) {
            return Err(SceneError::InvalidIntensity {
                index,
                intensity: self.intensity,
            });
        }
        Ok(())
    }
}

/// An immutable collection of spheres and point lights.
///
/// Iteration order is insertion order; the intersector relies on it to
/// break ties between equally distant hits.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Build a scene, rejecting malformed spheres or lights up front.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<PointLight>) -> SceneResult<Self> {
        for (index, sphere) in spheres.iter().enumerate() {
            sphere.validate(index)?;
        }
        for (index, light) in lights.iter().enumerate() {
            light.validate(index)?;
        }

        Ok(Self { spheres, lights })
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
