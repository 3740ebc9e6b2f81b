mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use glint_core::{load_scene_file, presets, LoadedScene, RenderSettings};
use glint_renderer::{render, save_image};
use std::time::Instant;

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let start = Instant::now();
    let LoadedScene {
        scene,
        mut settings,
    } = load(&args)?;
    log::info!("Scene ready in {:?}", start.elapsed());

    args.apply_overrides(&mut settings);
    settings.validate().context("Invalid render settings")?;

    let framebuffer = render(&scene, &settings);
    save_image(&args.output, &framebuffer)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

/// Load the scene file if one was given, otherwise the selected preset.
fn load(args: &Args) -> Result<LoadedScene> {
    if let Some(path) = &args.scene {
        return load_scene_file(path)
            .with_context(|| format!("Failed to load scene {}", path.display()));
    }

    let name = args.preset.name();
    log::debug!("Using built-in scene '{name}'");
    let scene = presets::by_name(name)
        .ok_or_else(|| anyhow!("Unknown preset '{name}'"))?
        .with_context(|| format!("Built-in scene '{name}' is invalid"))?;

    Ok(LoadedScene {
        scene,
        settings: RenderSettings::default(),
    })
}
