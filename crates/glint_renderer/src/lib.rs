//! Glint Renderer - Whitted-style CPU ray tracing.
//!
//! Casts one ray per pixel through a pinhole camera and evaluates local
//! Phong shading with hard shadows, plus recursively traced mirror
//! reflection and refraction up to a fixed depth.

mod camera;
mod hittable;
mod optics;
mod output;
mod renderer;
mod shading;

pub use camera::Camera;
pub use hittable::{sphere_distance, HitRecord, Hittable};
pub use optics::{offset_origin, reflect, refract};
pub use output::{save_image, save_png, save_ppm, write_ppm, OutputError, OutputResult};
pub use renderer::{cast_ray, color_to_rgb, render, render_pixel, Color, Framebuffer};
pub use shading::{is_occluded, shade, LocalIllumination};

/// Re-export the scene store and math types used in the public API
pub use glint_core::{Material, PointLight, RenderSettings, Scene, Sphere, Technique};
pub use glint_math::{Interval, Ray, Vec3};
