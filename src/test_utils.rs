//! Test utilities for imageops-correlate
//!
//! Shared fixtures for the unit tests. Only compiled under `cfg(test)`.

use crate::greyscale::pixel_buffer::{GreyBuffer, PixelBuffer};

/// Creates a 2x2 greyscale buffer with known values:
/// - (0,0): 200
/// - (1,0): 150
/// - (0,1): 100
/// - (1,1): 50
pub fn create_test_grey_buffer() -> GreyBuffer {
    PixelBuffer::new(2, 2, vec![200, 150, 100, 50]).unwrap()
}

/// Creates a buffer with a diagonal gradient that touches both 0 and 255
/// on larger sizes.
pub fn create_gradient_buffer(width: u32, height: u32) -> GreyBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        ((x * 255 / width.saturating_sub(1).max(1) + y * 37) % 256) as u8
    })
    .unwrap()
}

/// Compares two buffers pixel by pixel with an absolute tolerance.
///
/// Dimensions must match exactly.
pub fn buffers_approx_equal<T>(
    expected: &PixelBuffer<T>,
    actual: &PixelBuffer<T>,
    tolerance: f64,
) -> bool
where
    T: Copy + Into<f64>,
{
    if expected.dimensions() != actual.dimensions() {
        return false;
    }

    expected
        .as_slice()
        .iter()
        .zip(actual.as_slice())
        .all(|(&e, &a)| {
            let (e, a): (f64, f64) = (e.into(), a.into());
            (e - a).abs() <= tolerance
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_grey_buffer_with_valid_input_creates_buffer() {
        let buffer = create_test_grey_buffer();
        assert_eq!(buffer.dimensions(), (2, 2));
        assert_eq!(buffer.get_pixel(0, 0), 200);
        assert_eq!(buffer.get_pixel(1, 1), 50);
    }

    #[test]
    fn create_gradient_buffer_spans_full_range() {
        let buffer = create_gradient_buffer(16, 1);
        assert_eq!(buffer.get_pixel(0, 0), 0);
        assert_eq!(buffer.get_pixel(15, 0), 255);
        assert_eq!(create_gradient_buffer(1, 1).len(), 1);
    }

    #[test]
    fn buffers_approx_equal_with_tolerant_comparison_returns_true() {
        let first = create_test_grey_buffer();
        let second = PixelBuffer::new(2, 2, vec![201u8, 150, 100, 50]).unwrap();

        assert!(buffers_approx_equal(&first, &second, 1.5));
        assert!(!buffers_approx_equal(&first, &second, 0.5));
        assert!(!buffers_approx_equal(&first, &create_gradient_buffer(3, 2), 255.0));
    }
}
