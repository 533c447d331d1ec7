//! Shared types for the rinkaku processing pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference
/// single-channel pixel grids without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbaImage` so downstream crates can reference the
/// original decoded image without depending on `image` directly.
pub use image::RgbaImage;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Configuration for the processing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// JPEG quality for the encoded output, in 1..=100. Higher values
    /// preserve more detail at the cost of larger files.
    pub quality: u8,
}

impl PipelineConfig {
    /// Default JPEG quality for the encoded output.
    pub const DEFAULT_QUALITY: u8 = 75;
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quality: Self::DEFAULT_QUALITY,
        }
    }
}

/// Result of running the full pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// JPEG-encoded output image.
    pub jpeg: Vec<u8>,

    /// Dimensions of the source image in pixels. Every intermediate
    /// grid and the encoded output share these bounds.
    pub dimensions: Dimensions,
}

/// Errors that can occur during pipeline processing.
///
/// Grayscale conversion and convolution are total functions over any
/// well-formed pixel grid; only the decode and encode boundaries fail.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// Failed to encode the output image.
    #[error("failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),
}
