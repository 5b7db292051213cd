//! Immutable pixel buffer supplied by the image loader.

use regionlens_common::RegionlensError;
use regionlens_region_model::geometry::{Bounds, ImageDims};

/// Channel counts the engine accepts: grey, RGB, RGBA.
pub const SUPPORTED_CHANNELS: [u8; 3] = [1, 3, 4];

/// Reasons a buffer is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("Unsupported channel count {channels} (expected 1, 3 or 4)")]
    UnsupportedChannels { channels: u8 },

    #[error("Image has empty dimensions {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("Buffer holds {actual} bytes but {width}x{height}x{channels} needs {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },
}

impl From<BufferError> for RegionlensError {
    fn from(err: BufferError) -> Self {
        RegionlensError::buffer(err.to_string())
    }
}

/// Row-major 8-bit samples, `channels` interleaved values per pixel.
///
/// The declared dimensions always agree with the sample count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, BufferError> {
        if !SUPPORTED_CHANNELS.contains(&channels) {
            return Err(BufferError::UnsupportedChannels { channels });
        }
        if width == 0 || height == 0 {
            return Err(BufferError::EmptyDimensions { width, height });
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize));
        if expected != Some(data.len()) {
            return Err(BufferError::SizeMismatch {
                width,
                height,
                channels,
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A buffer with every sample set to `value`.
    pub fn uniform(width: u32, height: u32, channels: u8, value: u8) -> Result<Self, BufferError> {
        let len = width as usize * height as usize * channels as usize;
        Self::new(width, height, channels, vec![value; len])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn dims(&self) -> ImageDims {
        ImageDims::new(self.width, self.height)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Samples of row `y` between columns `x1..x2`.
    fn row_span(&self, y: u32, x1: u32, x2: u32) -> &[u8] {
        let stride = self.width as usize * self.channels as usize;
        let start = y as usize * stride + x1 as usize * self.channels as usize;
        let end = y as usize * stride + x2 as usize * self.channels as usize;
        &self.data[start..end]
    }

    /// Sum of every channel value inside `bounds`, clamped to this buffer.
    pub fn sample_sum(&self, bounds: Bounds) -> u64 {
        let b = bounds.clamp_to(self.dims());
        (b.y1()..b.y2())
            .map(|y| {
                self.row_span(y, b.x1(), b.x2())
                    .iter()
                    .map(|&v| v as u64)
                    .sum::<u64>()
            })
            .sum()
    }

    /// Mean over every channel of every pixel inside `bounds`.
    ///
    /// Bounds are clamped to this buffer first; `None` if nothing remains.
    pub fn mean_intensity(&self, bounds: Bounds) -> Option<f64> {
        let b = bounds.clamp_to(self.dims());
        if b.is_empty() {
            return None;
        }
        let samples = b.area() * self.channels as u64;
        Some(self.sample_sum(b) as f64 / samples as f64)
    }
}
