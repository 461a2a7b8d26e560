use thiserror::Error;

/// Error type for buffer and kernel construction
///
/// Every variant is a precondition violation: the call that produced it
/// did no work and returned no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The kernel weights cannot form an odd-sized square
    ///
    /// Raised for an empty weight list, a weight count that is not a
    /// perfect square, or a square whose side length is even.
    #[error("Invalid kernel with {len} weights: {reason}")]
    InvalidKernel {
        /// Number of weights supplied
        len: usize,
        /// Which requirement was violated
        reason: &'static str,
    },

    /// The pixel count does not match the buffer dimensions
    ///
    /// Also raised for zero width or height, since an empty buffer has no
    /// edge pixel to replicate.
    #[error("Invalid dimensions: {width}x{height} buffer cannot hold {len} pixels")]
    InvalidDimensions { width: u32, height: u32, len: usize },
}

/// Error type for the load/save layer
#[derive(Debug, Error)]
pub enum CodecError {
    /// The decoded image uses a color type with no greyscale mapping
    #[error("Unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    /// Decoding, encoding, or file I/O failed inside the `image` crate
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// The decoded pixels could not form a valid buffer
    #[error(transparent)]
    Filter(#[from] FilterError),
}
