use crate::greyscale::boundary::BoundarySampler;
use crate::greyscale::kernel::Kernel;
use crate::greyscale::pixel_buffer::{PixelBuffer, RealBuffer};
use itertools::iproduct;
use log::trace;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// 2D correlation (no kernel flip) with clamp-to-edge borders.
pub trait Correlate {
    /// Correlates every pixel with `kernel`.
    ///
    /// The result has the same dimensions as the input and is neither
    /// rounded nor clipped: values may be negative or exceed 255, so that
    /// callers can combine several correlations before quantizing once.
    /// The input is never written to.
    fn correlate(&self, kernel: &Kernel) -> RealBuffer;
}

impl<T> Correlate for PixelBuffer<T>
where
    T: Copy + Into<f64> + Sync,
{
    fn correlate(&self, kernel: &Kernel) -> RealBuffer {
        let (width, height) = self.dimensions();
        trace!(
            "correlating {}x{} buffer with {}x{} kernel",
            width,
            height,
            kernel.size(),
            kernel.size()
        );

        // Output is a separate allocation so neighbourhood reads never see
        // already-written results.
        let mut output = vec![0.0; self.len()];

        #[cfg(not(feature = "rayon"))]
        let rows = output.chunks_mut(width as usize);
        #[cfg(feature = "rayon")]
        let rows = output.par_chunks_mut(width as usize);

        rows.enumerate().for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                *out = correlate_at(self, kernel, x as i64, y as i64);
            }
        });

        self.with_pixels(output)
    }
}

/// Dot product of the clamped `n x n` neighbourhood around `(x, y)` with the
/// kernel weights, both walked row offset outer, column offset inner.
#[inline]
fn correlate_at<T>(buffer: &PixelBuffer<T>, kernel: &Kernel, x: i64, y: i64) -> f64
where
    T: Copy + Into<f64>,
{
    let half = kernel.half() as i64;
    iproduct!(-half..=half, -half..=half)
        .zip(kernel.weights())
        .map(|((i, j), &weight)| {
            let value: f64 = buffer.sample(x + j, y + i).into();
            value * weight
        })
        .sum()
}
