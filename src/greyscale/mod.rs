pub mod boundary;
pub mod codec;
pub mod correlate;
pub mod filters;
pub mod kernel;
pub mod pixel_buffer;
pub mod quantize;
