//! Pinhole camera for primary ray generation.

use glint_core::RenderSettings;
use glint_math::{Ray, Vec3};

/// Pinhole camera at the origin, looking down -Z with +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
}

impl Camera {
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            image_width,
            image_height,
            fov,
        }
    }

    /// Camera matching the resolution and field of view in `settings`.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(settings.image_width, settings.image_height, settings.camera_fov)
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Unit direction through the center of pixel (i, j), j counting down from the top row.
    pub fn primary_direction(&self, i: u32, j: u32) -> Vec3 {
        let half_height = (self.fov / 2.0).tan();
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let x = (2.0 * (i as f32 + 0.5) / width - 1.0) * half_height * self.aspect_ratio();
        let y = -(2.0 * (j as f32 + 0.5) / height - 1.0) * half_height;
        Vec3::new(x, y, -1.0).normalize()
    }

    /// Primary ray for pixel (i, j).
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(Vec3::ZERO, self.primary_direction(i, j))
    }
}
