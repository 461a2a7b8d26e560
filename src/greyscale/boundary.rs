use crate::greyscale::pixel_buffer::PixelBuffer;

/// Clamp-to-edge pixel access.
///
/// Out-of-range coordinates are clamped independently on each axis to the
/// nearest edge pixel, so the border is replicated outward indefinitely.
/// Sampling never fails and never wraps around or pads with zeros.
pub trait BoundarySampler<T> {
    fn sample(&self, x: i64, y: i64) -> T;
}

impl<T: Copy> BoundarySampler<T> for PixelBuffer<T> {
    #[inline]
    fn sample(&self, x: i64, y: i64) -> T {
        let x = x.clamp(0, i64::from(self.width()) - 1);
        let y = y.clamp(0, i64::from(self.height()) - 1);
        self.as_slice()[self.index(x as u32, y as u32)]
    }
}
