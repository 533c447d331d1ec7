//! JPEG encoding of the processed grid.
//!
//! The convolution result is a single-channel grid; the output format
//! wants full-coverage color pixels, so [`broadcast_to_rgb`] replicates
//! the gray value into each channel before [`encode_jpeg`] compresses
//! it. The broadcast is a straight channel copy, not a blend.

use image::codecs::jpeg::JpegEncoder;
use image::{GrayImage, RgbImage};

use crate::types::PipelineError;

/// Expand a single-channel grid into an RGB grid of identical bounds
/// by replicating the gray value into every channel.
#[must_use = "returns the broadcast RGB image"]
pub fn broadcast_to_rgb(gray: &GrayImage) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        image::Rgb([v, v, v])
    })
}

/// Encode an RGB grid as JPEG at the given quality (1-100).
///
/// # Errors
///
/// Returns [`PipelineError::ImageEncode`] if the encoder rejects the
/// pixel grid (for example, zero-sized dimensions).
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, PipelineError> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    image::ImageEncoder::write_image(
        encoder,
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgb8,
    )
    .map_err(PipelineError::ImageEncode)?;
    Ok(buf)
}
