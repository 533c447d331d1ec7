//! rinkaku-pipeline: row-parallel edge detection (sans-IO).
//!
//! Converts raster images into a JPEG edge map through:
//! decode -> grayscale -> 3x3 edge convolution -> channel broadcast ->
//! JPEG encode.
//!
//! The grayscale and convolution stages each fan out one task per
//! image row and join before returning. This crate has **no I/O
//! dependencies** -- it operates on in-memory byte slices and returns
//! structured data. All filesystem interaction lives in the `rinkaku`
//! CLI crate.

pub mod convolve;
pub mod encode;
pub mod grayscale;
pub mod kernel;
pub mod types;

pub use kernel::{EDGE_DETECT, Kernel};
pub use types::{Dimensions, PipelineConfig, PipelineError, ProcessResult};

/// Run the full edge-detection pipeline.
///
/// Takes raw image bytes (PNG, JPEG, BMP, WebP) and a configuration,
/// then produces a [`ProcessResult`] holding the JPEG-encoded edge map
/// and the source image dimensions. Every intermediate grid shares the
/// source bounds; the 1-pixel convolution border stays black in the
/// output.
///
/// All stages are pure transformations over immutable inputs: a decode
/// failure aborts before any processing, and an encode failure leaves
/// nothing to roll back.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
/// Returns [`PipelineError::ImageEncode`] if JPEG encoding fails.
pub fn process(
    image_bytes: &[u8],
    config: &PipelineConfig,
) -> Result<ProcessResult, PipelineError> {
    // 1. Decode into the RGBA source grid.
    let original = grayscale::decode(image_bytes)?;
    let dimensions = Dimensions {
        width: original.width(),
        height: original.height(),
    };

    // 2. Grayscale conversion, one task per row.
    let gray = grayscale::to_grayscale(&original);

    // 3. Edge-detection convolution, one task per row.
    let edges = convolve::convolve(&gray, &EDGE_DETECT);

    // 4. Broadcast the single channel back to RGB and encode.
    let rgb = encode::broadcast_to_rgb(&edges);
    let jpeg = encode::encode_jpeg(&rgb, config.quality)?;

    Ok(ProcessResult { jpeg, dimensions })
}
