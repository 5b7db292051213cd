//! Decode image files into pixel buffers.

use std::path::Path;

use image::DynamicImage;
use regionlens_analysis_core::buffer::{BufferError, PixelBuffer};
use regionlens_common::{RegionlensError, RegionlensResult};

/// Open and decode an image file.
pub fn load_pixel_buffer(path: &Path) -> RegionlensResult<PixelBuffer> {
    if !path.exists() {
        return Err(RegionlensError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path)
        .map_err(|e| RegionlensError::image_decode(format!("{}: {e}", path.display())))?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Decoded image"
    );

    Ok(to_pixel_buffer(image)?)
}

/// Grey, RGB and RGBA 8-bit images keep their layout; anything else becomes RGBA8.
pub fn to_pixel_buffer(image: DynamicImage) -> Result<PixelBuffer, BufferError> {
    let (width, height) = (image.width(), image.height());
    let (channels, data) = match image {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other => (4, other.into_rgba8().into_raw()),
    };
    PixelBuffer::new(width, height, channels, data)
}
