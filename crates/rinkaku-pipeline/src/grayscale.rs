//! Image decoding and row-parallel grayscale conversion.
//!
//! [`decode`] accepts raw image bytes (PNG, JPEG, BMP, WebP) and
//! produces the RGBA source grid. [`to_grayscale`] collapses it to a
//! single channel using the standard luminance formula, fanning out
//! one task per image row and joining before the grid is returned.

use image::{GrayImage, RgbaImage};
use rayon::prelude::*;

use crate::types::PipelineError;

/// Luminance weights for the standard perceptual RGB-to-gray
/// transform. They sum to 1, so the result never leaves [0, 255].
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Decode raw image bytes into an RGBA pixel grid.
///
/// Supports whatever formats the `image` crate is compiled with
/// (PNG, JPEG, BMP, WebP here).
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes).map_err(PipelineError::ImageDecode)?;
    Ok(img.to_rgba8())
}

/// Convert an RGBA grid to grayscale, one parallel task per row.
///
/// Each row task reads only the matching source row and writes only
/// its own output row, so no synchronization beyond the final join is
/// needed. Output dimensions always match the input.
#[must_use = "returns the grayscale image"]
#[allow(clippy::cast_possible_truncation)]
pub fn to_grayscale(image: &RgbaImage) -> GrayImage {
    let (w, h) = image.dimensions();
    let mut gray = GrayImage::new(w, h);
    if w == 0 || h == 0 {
        return gray;
    }

    let width = w as usize;
    let src = image.as_raw();
    let rows: &mut [u8] = &mut gray;
    rows.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let src_row = &src[y * width * 4..(y + 1) * width * 4];
        for (x, out) in row.iter_mut().enumerate() {
            let px = &src_row[x * 4..x * 4 + 4];
            *out = luminance(px[0], px[1], px[2]);
        }
    });

    gray
}

/// Weighted luminance of one pixel, rounded to the nearest integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let lum = f32::from(r).mul_add(LUMA_R, f32::from(g).mul_add(LUMA_G, f32::from(b) * LUMA_B));
    lum.round() as u8
}
