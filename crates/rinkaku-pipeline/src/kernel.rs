//! Fixed-size convolution kernels.

/// A 3x3 convolution kernel.
///
/// Weights are addressed as `weight(kx, ky)` with `(0, 0)` at the
/// top-left of the window. The dimension is fixed: arbitrary kernel
/// sizes are out of scope for this pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f32; 3]; 3],
}

impl Kernel {
    /// Kernel dimension along each axis.
    pub const SIZE: usize = 3;

    /// Half the kernel dimension, rounded down. Pixels closer than
    /// this to any image edge cannot be convolved and are left at the
    /// output grid's zero default.
    pub const MARGIN: usize = Self::SIZE / 2;

    /// Create a kernel from row-major weights.
    #[must_use]
    pub const fn new(weights: [[f32; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Weight at column `kx`, row `ky` of the window.
    #[must_use]
    pub const fn weight(&self, kx: usize, ky: usize) -> f32 {
        self.weights[ky][kx]
    }
}

/// Laplacian-style edge-detection kernel.
///
/// The weights sum to zero, so uniform regions convolve to zero and
/// only intensity discontinuities produce output.
pub const EDGE_DETECT: Kernel = Kernel::new([
    [-1.0, -1.0, -1.0],
    [-1.0, 8.0, -1.0],
    [-1.0, -1.0, -1.0],
]);
