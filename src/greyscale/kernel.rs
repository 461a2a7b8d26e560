//! Square correlation kernels.

use crate::error::FilterError;

/// An odd-sized square weight matrix stored row-major.
///
/// The center weight sits at `half * size + half` where `half = size / 2`,
/// and is aligned with the output pixel during correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

const SOBEL_X: [f64; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
const SOBEL_Y: [f64; 9] = [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];

impl Kernel {
    /// Builds a kernel from `n * n` row-major weights.
    ///
    /// # Errors
    ///
    /// * `FilterError::InvalidKernel` - the weight list is empty, its length
    ///   is not a perfect square, or the side length is even
    pub fn new(weights: Vec<f64>) -> Result<Self, FilterError> {
        let len = weights.len();
        if len == 0 {
            return Err(FilterError::InvalidKernel {
                len,
                reason: "kernel has no weights",
            });
        }

        let size = (len as f64).sqrt().round() as usize;
        if size * size != len {
            return Err(FilterError::InvalidKernel {
                len,
                reason: "weight count is not a perfect square",
            });
        }
        if size % 2 == 0 {
            return Err(FilterError::InvalidKernel {
                len,
                reason: "kernel size must be odd",
            });
        }

        Ok(Self { size, weights })
    }

    /// Uniform `n x n` averaging kernel, every weight `1 / n²`.
    ///
    /// `n == 1` yields the identity.
    pub fn box_blur(n: usize) -> Result<Self, FilterError> {
        let count = checked_weight_count(n)?;
        let weights = filled_weights(n, count, 1.0 / count as f64)?;
        Self::new(weights)
    }

    /// `n x n` kernel with a single unit weight at the center.
    pub fn identity(n: usize) -> Result<Self, FilterError> {
        let count = checked_weight_count(n)?;
        let mut weights = filled_weights(n, count, 0.0)?;
        weights[(n / 2) * n + n / 2] = 1.0;
        Self::new(weights)
    }

    /// Horizontal-gradient Sobel kernel.
    pub fn sobel_x() -> Self {
        Self {
            size: 3,
            weights: SOBEL_X.to_vec(),
        }
    }

    /// Vertical-gradient Sobel kernel.
    pub fn sobel_y() -> Self {
        Self {
            size: 3,
            weights: SOBEL_Y.to_vec(),
        }
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `n / 2`, the reach of the kernel on each side of the center.
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Row-major weights, `size * size` of them.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Index of the weight aligned with the output pixel.
    pub fn center_index(&self) -> usize {
        self.half() * self.size + self.half()
    }

    /// Sum of all weights; `1.0` for averaging kernels, `0.0` for gradients.
    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Validates a side length before any allocation and returns `n * n`.
fn checked_weight_count(n: usize) -> Result<usize, FilterError> {
    let len = n.saturating_mul(n);
    if n == 0 {
        return Err(FilterError::InvalidKernel {
            len,
            reason: "kernel has no weights",
        });
    }
    if n % 2 == 0 {
        return Err(FilterError::InvalidKernel {
            len,
            reason: "kernel size must be odd",
        });
    }
    n.checked_mul(n).ok_or(FilterError::InvalidKernel {
        len,
        reason: "kernel size too large",
    })
}

fn filled_weights(n: usize, count: usize, value: f64) -> Result<Vec<f64>, FilterError> {
    let mut weights = Vec::new();
    weights
        .try_reserve_exact(count)
        .map_err(|_| FilterError::InvalidKernel {
            len: n.saturating_mul(n),
            reason: "kernel size too large",
        })?;
    weights.resize(count, value);
    Ok(weights)
}

/// Free-function form of [`Kernel::box_blur`].
pub fn box_blur_kernel(n: usize) -> Result<Kernel, FilterError> {
    Kernel::box_blur(n)
}
