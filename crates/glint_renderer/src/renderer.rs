//! Core Whitted ray tracing renderer.
//!
//! Implements classic recursive ray tracing with:
//! - Local Phong shading with hard shadows
//! - Mirror reflection and Snell refraction, both traced recursively
//! - A fixed recursion depth bound

use std::time::Instant;

use glint_core::{PointLight, RenderSettings, Scene, Technique};
use glint_math::{Interval, Ray, Vec3};

use crate::camera::Camera;
use crate::hittable::Hittable;
use crate::optics::{offset_origin, reflect, refract};
use crate::shading::shade;

/// Color type alias (RGB values, unbounded until output)
pub type Color = Vec3;

/// Compute the color seen by a ray.
///
/// Misses and rays deeper than `settings.max_depth` return the background
/// color; the latter without touching the world at all.
pub fn cast_ray(
    world: &dyn Hittable,
    lights: &[PointLight],
    ray: &Ray,
    depth: u32,
    settings: &RenderSettings,
) -> Color {
    if depth > settings.max_depth {
        return settings.background;
    }

    let Some(hit) = world.hit(ray, Interval::new(0.0, settings.max_distance)) else {
        return settings.background;
    };
    let material = hit.material;

    if settings.technique == Technique::Flat {
        return material.diffuse_color;
    }

    let (reflect_color, refract_color) = if settings.technique == Technique::Whitted {
        let reflect_dir = reflect(ray.direction, hit.normal).normalize_or_zero();
        let reflect_orig = offset_origin(hit.p, hit.normal, reflect_dir, settings.epsilon);
        let reflected = Ray::new(reflect_orig, reflect_dir);

        // Total internal reflection yields a zero direction, which misses
        let refract_dir =
            refract(ray.direction, hit.normal, material.refractive_index).normalize_or_zero();
        let refract_orig = offset_origin(hit.p, hit.normal, refract_dir, settings.epsilon);
        let refracted = Ray::new(refract_orig, refract_dir);

        (
            cast_ray(world, lights, &reflected, depth + 1, settings),
            cast_ray(world, lights, &refracted, depth + 1, settings),
        )
    } else {
        (Color::ZERO, Color::ZERO)
    };

    let local = shade(world, lights, &hit, ray.direction, settings);
    let albedo = material.albedo;

    material.diffuse_color * local.diffuse * albedo[0]
        + Color::ONE * local.specular * albedo[1]
        + reflect_color * albedo[2]
        + refract_color * albedo[3]
}

/// Convert a channel to a byte: round(255 * clamp(c, 0, 1)).
#[inline]
pub fn channel_to_u8(c: f32) -> u8 {
    (255.0 * Interval::UNIT.clamp(c)).round() as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    lights: &[PointLight],
    i: u32,
    j: u32,
    settings: &RenderSettings,
) -> Color {
    let ray = camera.primary_ray(i, j);
    cast_ray(world, lights, &ray, 0, settings)
}

/// Row-major framebuffer of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Create a black framebuffer sized for `settings`.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self {
            width: settings.image_width,
            height: settings.image_height,
            pixels: vec![Color::ZERO; settings.pixel_count()],
        }
    }

    #[inline]
    fn index(&self, i: u32, j: u32) -> usize {
        i as usize + j as usize * self.width as usize
    }

    /// Get the pixel at column i, row j.
    pub fn get(&self, i: u32, j: u32) -> Color {
        self.pixels[self.index(i, j)]
    }

    /// Set the pixel at column i, row j.
    pub fn set(&mut self, i: u32, j: u32, color: Color) {
        let index = self.index(i, j);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes, clamped to [0, 1] first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the scene one pixel at a time, in row-major order.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Framebuffer {
    let camera = Camera::from_settings(settings);
    let mut framebuffer = Framebuffer::from_settings(settings);

    if settings.technique != Technique::Flat && scene.lights().is_empty() {
        log::warn!("Scene has no lights; surfaces receive no diffuse or specular light");
    }
    log::info!(
        "Rendering {}x{} ({:?}, max depth {}), {} spheres, {} lights",
        camera.image_width,
        camera.image_height,
        settings.technique,
        settings.max_depth,
        scene.sphere_count(),
        scene.light_count()
    );

    let start = Instant::now();
    for j in 0..camera.image_height {
        for i in 0..camera.image_width {
            let color = render_pixel(&camera, scene, scene.lights(), i, j, settings);
            framebuffer.set(i, j, color);
        }
    }
    log::info!("Rendered in {:?}", start.elapsed());

    framebuffer
}
