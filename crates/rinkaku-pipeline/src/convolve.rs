//! Row-parallel 3x3 convolution with a zero-initialized border.
//!
//! The engine fans out one task per output row, identical to the
//! grayscale stage: the input grid is shared read-only, each task owns
//! exactly one output row, and the stage joins before returning.

use image::GrayImage;
use rayon::prelude::*;

use crate::kernel::Kernel;

/// Apply a 3x3 kernel to a grayscale grid.
///
/// Output dimensions match the input. Interior pixels (at least
/// [`Kernel::MARGIN`] away from every edge) receive the absolute
/// weighted sum of their 3x3 neighborhood, saturated to `u8`: sums
/// whose magnitude exceeds 255 clamp to 255 rather than wrapping.
/// Border pixels are never computed and keep the output grid's zero
/// default — a deliberate boundary policy, not an omission.
///
/// Images narrower or shorter than the kernel have no interior and
/// come back all zero.
#[must_use = "returns the convolved image"]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn convolve(image: &GrayImage, kernel: &Kernel) -> GrayImage {
    let (w, h) = image.dimensions();
    let mut out = GrayImage::new(w, h);

    let width = w as usize;
    let height = h as usize;
    if width < Kernel::SIZE || height < Kernel::SIZE {
        return out;
    }

    let margin = Kernel::MARGIN;
    let src = image.as_raw();
    let rows: &mut [u8] = &mut out;
    rows.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        if y < margin || y >= height - margin {
            return;
        }
        for x in margin..width - margin {
            let mut sum = 0.0f32;
            for ky in 0..Kernel::SIZE {
                let src_row = &src[(y + ky - margin) * width..(y + ky - margin + 1) * width];
                for kx in 0..Kernel::SIZE {
                    sum += kernel.weight(kx, ky) * f32::from(src_row[x + kx - margin]);
                }
            }
            // Float-to-int casts saturate, so this clamps at 255.
            row[x] = sum.abs() as u8;
        }
    });

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_possible_truncation)]
mod tests {
    use super::*;
    use crate::kernel::EDGE_DETECT;

    /// Plain nested-loop convolution used as the single-threaded
    /// reference for the parallel engine.
    fn convolve_reference(image: &GrayImage, kernel: &Kernel) -> GrayImage {
        let (w, h) = image.dimensions();
        let mut out = GrayImage::new(w, h);
        if w < 3 || h < 3 {
            return out;
        }
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let mut sum = 0.0f32;
                for ky in 0..3u32 {
                    for kx in 0..3u32 {
                        let px = image.get_pixel(x + kx - 1, y + ky - 1).0[0];
                        sum += kernel.weight(kx as usize, ky as usize) * f32::from(px);
                    }
                }
                out.put_pixel(x, y, image::Luma([sum.abs() as u8]));
            }
        }
        out
    }

    fn textured_image(w: u32, h: u32) -> GrayImage {
        GrayImage::from_fn(w, h, |x, y| {
            image::Luma([((x * 31 + y * 17 + x * y) % 256) as u8])
        })
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = textured_image(17, 31);
        let out = convolve(&img, &EDGE_DETECT);
        assert_eq!(out.width(), 17);
        assert_eq!(out.height(), 31);
    }

    #[test]
    fn parallel_matches_sequential_reference() {
        let img = textured_image(29, 23);
        let parallel = convolve(&img, &EDGE_DETECT);
        let sequential = convolve_reference(&img, &EDGE_DETECT);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn border_pixels_stay_zero() {
        // Bright everywhere, so any computed border pixel would be
        // visibly nonzero.
        let img = GrayImage::from_pixel(9, 7, image::Luma([200]));
        let out = convolve(
            &img,
            &Kernel::new([[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]),
        );
        for y in 0..7 {
            for x in 0..9 {
                let on_border = x == 0 || y == 0 || x == 8 || y == 6;
                if on_border {
                    assert_eq!(out.get_pixel(x, y).0[0], 0, "border pixel ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn uniform_region_convolves_to_zero() {
        // The edge-detection kernel sums to zero, so a constant image
        // produces an all-zero output (interior and border alike).
        let img = GrayImage::from_pixel(10, 10, image::Luma([128]));
        let out = convolve(&img, &EDGE_DETECT);
        for pixel in out.pixels() {
            assert_eq!(pixel.0[0], 0);
        }
    }

    #[test]
    fn single_bright_pixel_lights_its_neighbors() {
        // 7x7 zero grid with one bright pixel at the center. All eight
        // neighbors see the bright pixel with weight -1 (|-255| = 255);
        // the center's own sum is 8 * 255 = 2040, which saturates to
        // 255; cells two or more steps away never see it.
        let mut img = GrayImage::new(7, 7);
        img.put_pixel(3, 3, image::Luma([255]));
        let out = convolve(&img, &EDGE_DETECT);

        for y in 2..=4u32 {
            for x in 2..=4u32 {
                assert_eq!(out.get_pixel(x, y).0[0], 255, "at ({x},{y})");
            }
        }
        for y in 1..6u32 {
            for x in 1..6u32 {
                let near = x.abs_diff(3) <= 1 && y.abs_diff(3) <= 1;
                if !near {
                    assert_eq!(out.get_pixel(x, y).0[0], 0, "at ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn oversized_sums_saturate_instead_of_wrapping() {
        // Identity-times-two kernel on a bright pixel: sum = 510.
        // Saturation keeps it at 255; a wrapping cast would give 254.
        let kernel = Kernel::new([[0.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 0.0]]);
        let img = GrayImage::from_pixel(3, 3, image::Luma([255]));
        let out = convolve(&img, &kernel);
        assert_eq!(out.get_pixel(1, 1).0[0], 255);
    }

    #[test]
    fn image_smaller_than_kernel_is_all_zero() {
        let img = GrayImage::from_pixel(2, 5, image::Luma([200]));
        let out = convolve(&img, &EDGE_DETECT);
        assert_eq!(out.dimensions(), (2, 5));
        for pixel in out.pixels() {
            assert_eq!(pixel.0[0], 0);
        }
    }
}
