//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Frames are written as 8-bit
//! RGBA so the transparent chart background survives.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::encode(fb, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn encode<W: Write>(fb: &Framebuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(fb.pixels())?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn encode_to_vec(fb: &Framebuffer) -> Vec<u8> {
        let mut buffer = Vec::new();
        PngEncoder::encode(fb, &mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_png_magic() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.fill_rect(0, 0, 10, 10, Rgba::RED_500);

        let bytes = encode_to_vec(&fb);
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_roundtrip_keeps_transparency() {
        let mut fb = Framebuffer::new(6, 3).unwrap();
        fb.fill_rect(0, 1, 2, 2, Rgba::GREEN_400);

        let bytes = encode_to_vec(&fb);
        let decoder = png::Decoder::new(bytes.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (6, 3));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(&buf[..info.buffer_size()], fb.pixels());
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fb = Framebuffer::new(2, 2).unwrap();
        let result = PngEncoder::write_to_file(&fb, dir.path().join("nope/chart.png"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
