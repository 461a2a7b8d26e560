use crate::greyscale::pixel_buffer::{GreyBuffer, RealBuffer};

/// Conversion of a real-valued buffer back to displayable integer pixels.
pub trait Quantize {
    /// Clips every pixel to `[0, 255]`, then rounds half to even.
    fn quantize(&self) -> GreyBuffer;
}

impl Quantize for RealBuffer {
    fn quantize(&self) -> GreyBuffer {
        self.map_pixels(|&p| quantize_value(p))
    }
}

/// Clip-then-round for a single value.
///
/// Clipping happens first, so `255.6` becomes `255` rather than rounding up
/// past the range. Ties go to the even neighbour (`2.5 -> 2`, `3.5 -> 4`).
/// `NaN` maps to `0`.
#[inline]
pub fn quantize_value(p: f64) -> u8 {
    let clipped = if p > 255.0 {
        255.0
    } else if p < 0.0 {
        0.0
    } else {
        p
    };
    // `as` saturates and sends NaN to 0
    clipped.round_ties_even() as u8
}
