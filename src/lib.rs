mod error;
mod greyscale;
#[cfg(test)]
mod test_utils;

pub use error::{CodecError, FilterError};
pub use greyscale::boundary::BoundarySampler;
pub use greyscale::codec;
pub use greyscale::correlate::Correlate;
pub use greyscale::filters::GreyscaleFilter;
pub use greyscale::kernel::{box_blur_kernel, Kernel};
pub use greyscale::pixel_buffer::{GreyBuffer, PixelBuffer, RealBuffer};
pub use greyscale::quantize::{quantize_value, Quantize};
