//! Framebuffer export.
//!
//! Colors are clamped to [0, 1] and rounded to 8 bits per channel, then
//! written either as binary PPM (`P6`) or, through the `image` crate, PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::info;
use thiserror::Error;

use crate::renderer::Framebuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Write a binary PPM: `P6\n<w> <h>\n255\n` followed by packed RGB bytes.
pub fn write_ppm<W: Write>(writer: &mut W, framebuffer: &Framebuffer) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", framebuffer.width, framebuffer.height)?;
    writer.write_all(&framebuffer.to_rgb8())?;
    writer.flush()?;
    Ok(())
}

/// Save to `path` as binary PPM.
pub fn save_ppm(path: impl AsRef<Path>, framebuffer: &Framebuffer) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, framebuffer)
}

/// Save to `path` as 8-bit PNG.
pub fn save_png(path: impl AsRef<Path>, framebuffer: &Framebuffer) -> OutputResult<()> {
    let image = RgbImage::from_raw(framebuffer.width, framebuffer.height, framebuffer.to_rgb8())
        .ok_or_else(|| {
            OutputError::UnsupportedFormat(format!(
                "framebuffer of {} pixels does not match {}x{}",
                framebuffer.pixels.len(),
                framebuffer.width,
                framebuffer.height
            ))
        })?;
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save the framebuffer, picking the format from the file extension.
pub fn save_image(path: impl AsRef<Path>, framebuffer: &Framebuffer) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_ppm(path, framebuffer)?,
        "png" => save_png(path, framebuffer)?,
        other => {
            return Err(OutputError::UnsupportedFormat(format!(
                "'{}' (expected .ppm or .png)",
                other
            )))
        }
    }

    info!(
        "Saved {}x{} image to {}",
        framebuffer.width,
        framebuffer.height,
        path.display()
    );
    Ok(())
}
