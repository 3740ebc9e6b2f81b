use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::{RenderSettings, Technique};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Showcase,
    SingleSphere,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Showcase => "showcase",
            Preset::SingleSphere => "single-sphere",
        }
    }
}

/// Shading model, mirrored from `Technique` for clap
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TechniqueArg {
    Flat,
    Local,
    Whitted,
}

impl From<TechniqueArg> for Technique {
    fn from(arg: TechniqueArg) -> Self {
        match arg {
            TechniqueArg::Flat => Technique::Flat,
            TechniqueArg::Local => Technique::Local,
            TechniqueArg::Whitted => Technique::Whitted,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Render spheres and point lights with Whitted ray tracing")]
pub struct Args {
    /// JSON scene description (overrides --preset)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Built-in scene used when no --scene is given
    #[arg(long, value_enum, default_value = "showcase")]
    pub preset: Preset,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Maximum recursion depth for reflection and refraction (at most 32)
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Shading model
    #[arg(long, value_enum)]
    pub technique: Option<TechniqueArg>,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command-line overrides on top of file or default settings.
    pub fn apply_overrides(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.image_width = width;
        }
        if let Some(height) = self.height {
            settings.image_height = height;
        }
        if let Some(fov) = self.fov {
            settings.camera_fov = fov.to_radians();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(technique) = self.technique {
            settings.technique = technique.into();
        }
    }
}
