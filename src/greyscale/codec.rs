//! Loading and saving greyscale buffers through the `image` crate.
//!
//! Decoding reduces every supported 8-bit color type to one luma channel:
//! greyscale passes through, greyscale+alpha drops the alpha, and RGB/RGBA
//! use the `0.299 R + 0.587 G + 0.114 B` weights rounded half to even.
//! Wider sample types are rejected rather than silently narrowed.

use crate::error::CodecError;
use crate::greyscale::pixel_buffer::GreyBuffer;
use crate::greyscale::quantize::quantize_value;
use image::{DynamicImage, ImageFormat, Luma, LumaA, Rgb, Rgba};
use imageproc::definitions::Image;
use imageproc::map::map_colors;
use log::debug;
use std::io::Cursor;
use std::path::Path;

const LUMA_RED: f64 = 0.299;
const LUMA_GREEN: f64 = 0.587;
const LUMA_BLUE: f64 = 0.114;

/// Decodes an encoded image (format sniffed from the bytes).
pub fn decode(bytes: &[u8]) -> Result<GreyBuffer, CodecError> {
    let image = image::load_from_memory(bytes)?;
    from_dynamic(image)
}

/// Reads and decodes an image file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<GreyBuffer, CodecError> {
    let image = image::open(path)?;
    from_dynamic(image)
}

/// Converts an already decoded image to a greyscale buffer.
///
/// # Errors
///
/// * `CodecError::UnsupportedPixelFormat` - the color type is not one of
///   L8, LA8, RGB8 or RGBA8
pub fn from_dynamic(image: DynamicImage) -> Result<GreyBuffer, CodecError> {
    debug!(
        "converting {:?} image of {}x{} to greyscale",
        image.color(),
        image.width(),
        image.height()
    );

    let grey: Image<Luma<u8>> = match image {
        DynamicImage::ImageLuma8(luma) => luma,
        DynamicImage::ImageLumaA8(luma_alpha) => {
            map_colors(&luma_alpha, |LumaA([l, _])| Luma([l]))
        }
        DynamicImage::ImageRgb8(rgb) => map_colors(&rgb, |Rgb([r, g, b])| Luma([luma(r, g, b)])),
        DynamicImage::ImageRgba8(rgba) => {
            map_colors(&rgba, |Rgba([r, g, b, _])| Luma([luma(r, g, b)]))
        }
        other => {
            return Err(CodecError::UnsupportedPixelFormat(format!(
                "{:?}",
                other.color()
            )))
        }
    };

    Ok(GreyBuffer::try_from(grey)?)
}

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    quantize_value(
        LUMA_RED * f64::from(r) + LUMA_GREEN * f64::from(g) + LUMA_BLUE * f64::from(b),
    )
}

/// Encodes a buffer as a single-channel 8-bit image in `format`.
pub fn encode(buffer: &GreyBuffer, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    debug!(
        "encoding {}x{} buffer as {:?}",
        buffer.width(),
        buffer.height(),
        format
    );
    let image: Image<Luma<u8>> = buffer.into();
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, format)?;
    Ok(bytes.into_inner())
}

/// Lossless PNG encoding.
pub fn encode_png(buffer: &GreyBuffer) -> Result<Vec<u8>, CodecError> {
    encode(buffer, ImageFormat::Png)
}

/// Writes a buffer to disk, picking the format from the file extension.
pub fn save<P: AsRef<Path>>(buffer: &GreyBuffer, path: P) -> Result<(), CodecError> {
    let path = path.as_ref();
    debug!("saving {}x{} buffer to {}", buffer.width(), buffer.height(), path.display());
    let image: Image<Luma<u8>> = buffer.into();
    image.save(path)?;
    Ok(())
}
