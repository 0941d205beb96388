//! Animated GIF output encoder.
//!
//! Every frame is a full-canvas RGBA framebuffer. Fully transparent pixels map
//! to the GIF transparent index, and frames use "restore to background"
//! disposal so a transparent pixel never shows the bar drawn underneath it in
//! the previous frame.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use gif::{DisposalMethod, Encoder, Frame, Repeat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default per-frame display time in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u32 = 1000;

/// Default palette quantization speed.
pub const DEFAULT_GIF_SPEED: i32 = 10;

/// Accepted quantization speeds, best quality first.
pub const GIF_SPEED_RANGE: std::ops::RangeInclusive<i32> = 1..=30;

/// GIF encoder for a sequence of framebuffers.
#[derive(Debug, Clone, Copy)]
pub struct GifEncoder {
    delay_ms: u32,
    speed: i32,
}

impl Default for GifEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GifEncoder {
    /// Encoder with a one-second frame delay, looping forever.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay_ms: DEFAULT_FRAME_DELAY_MS,
            speed: DEFAULT_GIF_SPEED,
        }
    }

    /// Set how long each frame is shown. GIF stores centiseconds, so the
    /// value is truncated to a multiple of 10 ms.
    #[must_use]
    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Palette quantization speed, 1 (best) to 30 (fastest).
    #[must_use]
    pub fn speed(mut self, speed: i32) -> Self {
        self.speed = speed.clamp(*GIF_SPEED_RANGE.start(), *GIF_SPEED_RANGE.end());
        self
    }

    /// Frame delay in centiseconds as stored in the file.
    #[must_use]
    pub fn delay_centis(&self) -> u16 {
        (self.delay_ms / 10).min(u32::from(u16::MAX)) as u16
    }

    /// Write frames to a GIF file.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no frames, frame sizes differ or exceed
    /// GIF's 16-bit limit, or file creation or encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, frames: &[Framebuffer], path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = self.encode(frames, BufWriter::new(file))?;
        writer.flush()?;
        Ok(())
    }

    fn encode<W: Write>(&self, frames: &[Framebuffer], writer: W) -> Result<W> {
        let first = frames.first().ok_or(Error::EmptyAnimation)?;
        let (width, height) = (first.width(), first.height());
        let invalid = || Error::InvalidDimensions { width, height };
        let w = u16::try_from(width).map_err(|_| invalid())?;
        let h = u16::try_from(height).map_err(|_| invalid())?;

        let mut encoder = Encoder::new(writer, w, h, &[])?;
        encoder.set_repeat(Repeat::Infinite)?;

        for fb in frames {
            if fb.width() != width || fb.height() != height {
                return Err(Error::InvalidDimensions {
                    width: fb.width(),
                    height: fb.height(),
                });
            }

            let mut pixels = fb.pixels().to_vec();
            let mut frame = Frame::from_rgba_speed(w, h, &mut pixels, self.speed);
            frame.delay = self.delay_centis();
            frame.dispose = DisposalMethod::Background;
            encoder.write_frame(&frame)?;
        }

        tracing::debug!(frames = frames.len(), width, height, "encoded gif");
        Ok(encoder.into_inner()?)
    }
}
