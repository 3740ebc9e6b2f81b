//! JSON scene descriptions.
//!
//! A description file bundles render settings, a material table, spheres
//! that reference materials by name, and point lights:
//!
//! ```json
//! {
//!   "settings": { "image_width": 640, "image_height": 480, "max_depth": 4 },
//!   "materials": {
//!     "chalk": { "albedo": [0.9, 0.1, 0.0, 0.0], "diffuse_color": [0.9, 0.9, 0.9] }
//!   },
//!   "spheres": [
//!     { "center": [0.0, 0.0, -12.0], "radius": 2.0, "material": "chalk" },
//!     { "center": [3.0, 0.0, -14.0], "radius": 1.5, "material": "glass" }
//!   ],
//!   "lights": [{ "position": [-20.0, 20.0, 20.0], "intensity": 1.5 }]
//! }
//! ```
//!
//! The built-in materials (`ivory`, `glass`, `red_rubber`, `mirror`) are
//! always available unless the file defines a material with the same name.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glint_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::{Material, PointLight, Scene, SceneError, Sphere};
use crate::settings::RenderSettings;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// A sphere entry as written in a description file.
#[derive(Debug, Clone, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    pub material: String,
}

/// The on-disk shape of a scene file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub settings: RenderSettings,
    pub materials: HashMap<String, Material>,
    pub spheres: Vec<SphereDescription>,
    pub lights: Vec<PointLight>,
}

/// A validated scene together with the settings it should be rendered with.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub scene: Scene,
    pub settings: RenderSettings,
}

impl SceneDescription {
    /// Resolve material names and validate everything.
    pub fn build(self) -> LoadResult<LoadedScene> {
        self.settings.validate()?;

        // One Arc per material name, shared by every sphere that uses it
        let mut resolved: HashMap<String, Arc<Material>> = self
            .materials
            .into_iter()
            .map(|(name, material)| (name, Arc::new(material)))
            .collect();

        let mut spheres = Vec::with_capacity(self.spheres.len());
        for (index, desc) in self.spheres.into_iter().enumerate() {
            if !resolved.contains_key(&desc.material) {
                let preset = Material::preset(&desc.material).ok_or_else(|| {
                    LoadError::UnknownMaterial {
                        index,
                        name: desc.material.clone(),
                    }
                })?;
                resolved.insert(desc.material.clone(), Arc::new(preset));
            }
            let material = resolved[&desc.material].clone();
            spheres.push(Sphere::new(desc.center, desc.radius, material));
        }

        let scene = Scene::new(spheres, self.lights)?;
        log::debug!(
            "Built scene: {} spheres, {} lights, {} materials",
            scene.sphere_count(),
            scene.light_count(),
            resolved.len()
        );

        Ok(LoadedScene {
            scene,
            settings: self.settings,
        })
    }
}

/// Parse and build a scene from JSON text.
pub fn load_scene_str(text: &str) -> LoadResult<LoadedScene> {
    let description: SceneDescription = serde_json::from_str(text)?;
    description.build()
}

/// Read, parse and build a scene description file.
pub fn load_scene_file(path: impl AsRef<Path>) -> LoadResult<LoadedScene> {
    let path = path.as_ref();
    log::debug!("Loading scene description from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    load_scene_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Technique;

    const SCENE: &str = r#"{
        "settings": { "image_width": 320, "image_height": 240, "technique": "local" },
        "materials": {
            "chalk": { "albedo": [0.9, 0.1, 0.0, 0.0], "diffuse_color": [0.9, 0.9, 0.9] }
        },
        "spheres": [
            { "center": [0.0, 0.0, -12.0], "radius": 2.0, "material": "chalk" },
            { "center": [3.0, 0.0, -14.0], "radius": 1.5, "material": "glass" },
            { "center": [-3.0, 0.0, -14.0], "radius": 1.0, "material": "chalk" }
        ],
        "lights": [{ "position": [-20.0, 20.0, 20.0], "intensity": 1.5 }]
    }"#;

    #[test]
    fn test_load_scene_str() {
        let loaded = load_scene_str(SCENE).unwrap();

        assert_eq!(loaded.scene.sphere_count(), 3);
        assert_eq!(loaded.scene.light_count(), 1);
        assert_eq!(loaded.settings.image_width, 320);
        assert_eq!(loaded.settings.technique, Technique::Local);
        // Unspecified settings keep their defaults
        assert_eq!(loaded.settings.max_depth, 4);

        let spheres = loaded.scene.spheres();
        assert_eq!(spheres[0].center, Vec3::new(0.0, 0.0, -12.0));
        assert_eq!(spheres[0].material.diffuse_color, Vec3::splat(0.9));
        // Unspecified material fields fall back to the defaults
        assert_eq!(spheres[0].material.refractive_index, 1.0);
        assert_eq!(*spheres[1].material, Material::glass());
        assert!(Arc::ptr_eq(&spheres[0].material, &spheres[2].material));
    }

    #[test]
    fn test_file_material_overrides_preset() {
        let text = r#"{
            "materials": { "ivory": { "diffuse_color": [1.0, 0.0, 0.0] } },
            "spheres": [{ "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": "ivory" }]
        }"#;
        let loaded = load_scene_str(text).unwrap();

        let material = &loaded.scene.spheres()[0].material;
        assert_eq!(material.diffuse_color, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_unknown_material() {
        let text = r#"{
            "spheres": [{ "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": "velvet" }]
        }"#;

        match load_scene_str(text) {
            Err(LoadError::UnknownMaterial { index, name }) => {
                assert_eq!(index, 0);
                assert_eq!(name, "velvet");
            }
            other => panic!("expected UnknownMaterial, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_radius_fails_at_load() {
        let text = r#"{
            "spheres": [{ "center": [0.0, 0.0, -5.0], "radius": -2.0, "material": "ivory" }]
        }"#;

        assert!(matches!(
            load_scene_str(text),
            Err(LoadError::Scene(SceneError::InvalidRadius { index: 0, .. }))
        ));
    }

    #[test]
    fn test_invalid_settings_fail_at_load() {
        let text = r#"{ "settings": { "image_width": 0 } }"#;
        assert!(matches!(
            load_scene_str(text),
            Err(LoadError::Scene(SceneError::InvalidSettings(_)))
        ));
    }

    #[test]
    fn test_excessive_depth_fails_at_load() {
        let text = r#"{
            "settings": { "max_depth": 1000000 },
            "spheres": [{ "center": [0.0, 0.0, -5.0], "radius": 1.0, "material": "glass" }]
        }"#;
        assert!(matches!(
            load_scene_str(text),
            Err(LoadError::Scene(SceneError::InvalidSettings(_)))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(load_scene_str("{ not json"), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_scene_file("/nonexistent/glint/scene.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_bundled_scene_matches_preset() {
        let loaded = load_scene_str(include_str!("../../../scenes/showcase.json")).unwrap();
        let preset = crate::presets::showcase().unwrap();

        assert_eq!(loaded.scene.sphere_count(), preset.sphere_count());
        assert_eq!(loaded.scene.lights(), preset.lights());
        for (a, b) in loaded.scene.spheres().iter().zip(preset.spheres()) {
            assert_eq!(a.center, b.center);
            assert_eq!(a.radius, b.radius);
            assert_eq!(*a.material, *b.material);
        }
        assert_eq!(loaded.settings, RenderSettings::default());
    }

    #[test]
    fn test_empty_description() {
        let loaded = load_scene_str("{}").unwrap();
        assert_eq!(loaded.scene.sphere_count(), 0);
        assert_eq!(loaded.settings, RenderSettings::default());
    }
}
