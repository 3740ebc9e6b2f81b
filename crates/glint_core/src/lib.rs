//! Glint Core - scene store, render settings, and scene descriptions.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `PointLight`, `Material`
//! - **Configuration**: `RenderSettings` and the shading `Technique`
//! - **Scene files**: JSON description loading and built-in presets
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene_file;
//!
//! let loaded = load_scene_file("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     loaded.scene.sphere_count(),
//!     loaded.scene.light_count());
//! ```

pub mod description;
pub mod presets;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use description::{load_scene_file, load_scene_str, LoadError, LoadResult, LoadedScene};
pub use scene::{Material, PointLight, Scene, SceneError, SceneResult, Sphere};
pub use settings::{RenderSettings, Technique, MAX_DEPTH_LIMIT};
