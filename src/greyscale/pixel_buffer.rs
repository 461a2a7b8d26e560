use crate::error::FilterError;
use image::{ImageBuffer, Luma};
use imageproc::definitions::Image;

/// Single-channel raster stored row-major as a flat pixel vector.
///
/// The pixel at `(x, y)` lives at index `y * width + x`. Fields are private
/// so that `pixels.len() == width * height` holds for every live buffer;
/// the only raw constructor, [`PixelBuffer::new`], checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<T> {
    width: u32,
    height: u32,
    pixels: Vec<T>,
}

/// Integer buffer with values in `[0, 255]`, used for input and output.
pub type GreyBuffer = PixelBuffer<u8>;

/// Unbounded real-valued buffer produced by correlation before quantization.
pub type RealBuffer = PixelBuffer<f64>;

impl<T> PixelBuffer<T> {
    /// Wraps a row-major pixel vector.
    ///
    /// # Errors
    ///
    /// * `FilterError::InvalidDimensions` - a dimension is zero or
    ///   `pixels.len() != width * height`
    pub fn new(width: u32, height: u32, pixels: Vec<T>) -> Result<Self, FilterError> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(FilterError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a buffer by evaluating `f(x, y)` at every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, FilterError>
    where
        F: FnMut(u32, u32) -> T,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels, always `width * height`.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// A valid buffer holds at least one pixel, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major view of the pixels.
    pub fn as_slice(&self) -> &[T] {
        &self.pixels
    }

    /// Consumes the buffer, returning the row-major pixel vector.
    pub fn into_raw(self) -> Vec<T> {
        self.pixels
    }

    /// Applies `f` to every pixel, producing a new buffer of the same shape.
    pub fn map_pixels<U, F>(&self, f: F) -> PixelBuffer<U>
    where
        F: FnMut(&T) -> U,
    {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(f).collect(),
        }
    }

    /// Builds a buffer sharing `self`'s shape from an already sized vector.
    pub(crate) fn with_pixels<U>(&self, pixels: Vec<U>) -> PixelBuffer<U> {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl<T: Copy> PixelBuffer<T> {
    /// Buffer filled with a single value.
    pub fn from_pixel(width: u32, height: u32, value: T) -> Result<Self, FilterError> {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    /// Reads an in-range pixel.
    ///
    /// # Panics
    ///
    /// If `x >= width` or `y >= height`. Use
    /// [`BoundarySampler::sample`](crate::BoundarySampler::sample) for
    /// clamped access.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> T {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside a {}x{} buffer",
            self.width,
            self.height
        );
        self.pixels[self.index(x, y)]
    }
}

impl GreyBuffer {
    /// Widens every pixel to `f64` without changing its value.
    pub fn to_real(&self) -> RealBuffer {
        self.map_pixels(|&p| f64::from(p))
    }
}

impl From<&GreyBuffer> for Image<Luma<u8>> {
    fn from(buffer: &GreyBuffer) -> Self {
        ImageBuffer::from_fn(buffer.width, buffer.height, |x, y| {
            Luma([buffer.get_pixel(x, y)])
        })
    }
}

impl TryFrom<Image<Luma<u8>>> for GreyBuffer {
    type Error = FilterError;

    fn try_from(image: Image<Luma<u8>>) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }
}
