use crate::error::FilterError;
use crate::greyscale::correlate::Correlate;
use crate::greyscale::kernel::Kernel;
use crate::greyscale::pixel_buffer::GreyBuffer;
use crate::greyscale::quantize::Quantize;
use itertools::izip;
use log::debug;

/// Greyscale filters built on [`Correlate`] and [`Quantize`].
///
/// Every filter returns a freshly allocated buffer; the receiver is never
/// modified.
pub trait GreyscaleFilter {
    /// Filtered image type
    type Output;

    /// Error returned for an invalid kernel size
    type Error;

    /// Point-wise negative, `255 - p`.
    fn inverted(&self) -> Self::Output;

    /// Box blur with an `n x n` uniform kernel.
    ///
    /// # Errors
    ///
    /// * `n` is zero, even, or too large for `n * n` weights
    fn blurred(&self, n: usize) -> Result<Self::Output, Self::Error>;

    /// Unsharp mask: `2 * original - blur(n)`, quantized once at the end.
    ///
    /// The blur is kept unrounded so the subtraction sees the exact low-pass
    /// values. `n == 1` returns the input unchanged.
    ///
    /// # Errors
    ///
    /// * `n` is zero, even, or too large for `n * n` weights
    fn sharpened(&self, n: usize) -> Result<Self::Output, Self::Error>;

    /// Sobel gradient magnitude `sqrt(gx² + gy²)`, capped at 255.
    fn edges(&self) -> Self::Output;
}

impl GreyscaleFilter for GreyBuffer {
    type Output = Self;
    type Error = FilterError;

    fn inverted(&self) -> Self::Output {
        debug!("inverting {}x{} buffer", self.width(), self.height());
        self.map_pixels(|&p| 255 - p)
    }

    fn blurred(&self, n: usize) -> Result<Self::Output, Self::Error> {
        let kernel = Kernel::box_blur(n)?;
        debug!(
            "blurring {}x{} buffer with {n}x{n} box kernel",
            self.width(),
            self.height()
        );
        Ok(self.correlate(&kernel).quantize())
    }

    fn sharpened(&self, n: usize) -> Result<Self::Output, Self::Error> {
        let kernel = Kernel::box_blur(n)?;
        debug!(
            "sharpening {}x{} buffer with {n}x{n} box kernel",
            self.width(),
            self.height()
        );

        let blurred = self.correlate(&kernel);
        let sharpened = self.with_pixels(
            self.as_slice()
                .iter()
                .zip(blurred.as_slice())
                .map(|(&original, &blur)| 2.0 * f64::from(original) - blur)
                .collect(),
        );

        Ok(sharpened.quantize())
    }

    fn edges(&self) -> Self::Output {
        debug!("detecting edges in {}x{} buffer", self.width(), self.height());

        let gx = self.correlate(&Kernel::sobel_x());
        let gy = self.correlate(&Kernel::sobel_y());
        let magnitude = self.with_pixels(
            izip!(gx.as_slice(), gy.as_slice())
                .map(|(&x, &y)| (x * x + y * y).sqrt().round_ties_even())
                .collect(),
        );

        magnitude.quantize()
    }
}
