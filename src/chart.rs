//! Utilization bar chart.
//!
//! Each sample becomes one bottom-anchored bar in an equal-width column slice.
//! Heights and colors are relative to the series' own maximum, so every frame
//! uses the full canvas height and the tallest bar is always in the top color
//! bucket.

use std::path::Path;

use crate::color::UsagePalette;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::output::PngEncoder;
use crate::series::Series;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 830;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 10;

/// Builder for rendering a [`Series`] as a bar chart.
#[derive(Debug, Clone)]
pub struct BarChart {
    width: u32,
    height: u32,
    palette: UsagePalette,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChart {
    /// Create a chart with the default README canvas (830x10).
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: UsagePalette::default(),
        }
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Canvas width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Render one frame.
    ///
    /// An empty series gives a fully transparent frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas has a zero dimension.
    pub fn render(&self, series: &Series) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;

        let n = series.len();
        let max = series.scale_max();

        for (i, &value) in series.iter().enumerate() {
            let (x0, x1) = bar_span(i, n, self.width);
            let h = bar_height(value, max, self.height);
            if x1 <= x0 || h == 0 {
                continue;
            }

            let color = self.palette.color_for(value / max * 100.0);
            fb.fill_rect(x0, self.height - h, x1 - x0, h, color);
        }

        Ok(fb)
    }

    /// Render one frame and write it as a PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, file creation, or encoding fails.
    pub fn render_to_file<P: AsRef<Path>>(&self, series: &Series, path: P) -> Result<()> {
        let fb = self.render(series)?;
        PngEncoder::write_to_file(&fb, &path)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            bars = series.len(),
            "wrote chart"
        );
        Ok(())
    }
}

/// Horizontal pixel span `[x0, x1)` of bar `index` out of `count` on a canvas
/// `width` pixels wide.
///
/// Spans tile the canvas without gaps. A bar whose exact slice is narrower
/// than a pixel still gets one column as long as it starts inside the canvas.
#[must_use]
pub fn bar_span(index: usize, count: usize, width: u32) -> (u32, u32) {
    if count == 0 || index >= count {
        return (0, 0);
    }
    let w = u64::from(width);
    let x0 = (index as u64 * w / count as u64) as u32;
    let mut x1 = ((index as u64 + 1) * w / count as u64) as u32;
    if x1 == x0 && x0 < width {
        x1 = x0 + 1;
    }
    (x0, x1)
}

/// Bar height in pixels for `value` scaled against `max` on a canvas `height`
/// pixels tall. Rounded to the nearest pixel and clamped to `[0, height]`.
#[must_use]
pub fn bar_height(value: f64, max: f64, height: u32) -> u32 {
    let scaled = (value / max * f64::from(height)).round();
    // `as` saturates and maps NaN to 0.
    (scaled as u32).min(height)
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
