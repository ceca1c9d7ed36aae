//! Load and save at the image codec boundary.
//!
//! Decoding normalizes every source format to packed RGBA8 so the rest of
//! the crate, the flood fill in particular, only ever sees one pixel layout.
//! A failure to decode or convert surfaces as an error here and never
//! reaches the paint routines.

use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::{PaintError, PaintResult};

/// Reads an image file into a pixel buffer, converting to RGBA8.
pub fn load(path: &Path) -> PaintResult<PixelBuffer> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!(
        "Loaded image {}: {}x{} ({:?})",
        path.display(),
        width,
        height,
        img.color()
    );
    PixelBuffer::from_rgba8(width, height, rgba.into_raw())
}

/// Writes a pixel buffer to an image file; the format is picked from the
/// file extension by the codec.
///
/// JPEG has no alpha channel, so the buffer is flattened to RGB first for
/// `.jpg`/`.jpeg` paths; every other supported format takes RGBA directly.
pub fn save(buffer: &PixelBuffer, path: &Path) -> PaintResult<()> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let result = match extension.as_str() {
        "jpg" | "jpeg" => {
            let rgb: Vec<u8> = buffer
                .as_raw()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            image::save_buffer(
                path,
                &rgb,
                buffer.width(),
                buffer.height(),
                image::ExtendedColorType::Rgb8,
            )
        }
        _ => image::save_buffer(
            path,
            buffer.as_raw(),
            buffer.width(),
            buffer.height(),
            image::ExtendedColorType::Rgba8,
        ),
    };

    match result {
        Ok(()) => {
            log::info!("Saved image {}", path.display());
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to save image {}: {}", path.display(), err);
            Err(PaintError::Image(err))
        }
    }
}
