//! Show image information.

use std::path::PathBuf;

use regionlens_region_model::Bounds;

use crate::image_source::load_pixel_buffer;

pub fn run(image: PathBuf) -> anyhow::Result<()> {
    let buffer = load_pixel_buffer(&image)
        .map_err(|e| anyhow::anyhow!("Failed to load image: {e}"))?;

    println!("Image: {}", image.display());
    println!("  Resolution: {}x{}", buffer.width(), buffer.height());
    println!("  Channels: {}", buffer.channels());
    if let Some(average) = buffer.mean_intensity(Bounds::covering(buffer.dims())) {
        println!("  Average intensity: {average:.2}");
    }

    Ok(())
}
