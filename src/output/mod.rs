//! Output encoders (PNG for single frames, GIF for animations).

mod gif_encoder;
mod png_encoder;

pub use gif_encoder::{GifEncoder, DEFAULT_FRAME_DELAY_MS, DEFAULT_GIF_SPEED, GIF_SPEED_RANGE};
pub use png_encoder::PngEncoder;
