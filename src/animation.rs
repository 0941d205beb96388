//! Scrolling chart animation.
//!
//! Each frame renders the current series, then the series slides one step:
//! the oldest sample drops off the left and a freshly synthesized sample
//! enters on the right. The new sample is the last value of a small generated
//! chunk rather than an isolated draw, so it follows the same baseline/spike
//! pattern as the rest of the series.

use std::path::Path;

use rand::Rng;

use crate::chart::BarChart;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::output::GifEncoder;
use crate::series::Series;
use crate::synth::Synthesizer;

/// Default number of samples synthesized per slide step.
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Renders a sliding series into animation frames.
#[derive(Debug, Clone)]
pub struct Sequencer {
    chart: BarChart,
    chunk_size: usize,
}

impl Sequencer {
    /// Create a sequencer drawing frames with `chart`.
    #[must_use]
    pub fn new(chart: BarChart) -> Self {
        Self {
            chart,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set how many samples are synthesized to obtain each new one (minimum 1).
    #[must_use]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Synthesize the next incoming sample.
    pub fn next_sample<R: Rng>(&self, synth: &mut Synthesizer<R>) -> f64 {
        let chunk = synth.generate(self.chunk_size);
        chunk
            .latest()
            .unwrap_or_else(|| synth.params().floor())
    }

    /// Slide `series` by one synthesized sample.
    pub fn step<R: Rng>(&self, series: &mut Series, synth: &mut Synthesizer<R>) {
        let sample = self.next_sample(synth);
        series.slide(sample);
    }

    /// Render `frames` frames starting from `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if a frame cannot be rendered.
    pub fn render<R: Rng>(
        &self,
        initial: Series,
        frames: usize,
        synth: &mut Synthesizer<R>,
    ) -> Result<Vec<Framebuffer>> {
        self.render_with(initial, frames, synth, |_, _| {})
    }

    /// Like [`Sequencer::render`], calling `on_frame(index, series)` after each
    /// frame is drawn and before the series slides.
    ///
    /// # Errors
    ///
    /// Returns an error if a frame cannot be rendered.
    pub fn render_with<R, F>(
        &self,
        initial: Series,
        frames: usize,
        synth: &mut Synthesizer<R>,
        mut on_frame: F,
    ) -> Result<Vec<Framebuffer>>
    where
        R: Rng,
        F: FnMut(usize, &Series),
    {
        let mut series = initial;
        let mut out = Vec::with_capacity(frames);

        for index in 0..frames {
            out.push(self.chart.render(&series)?);
            on_frame(index, &series);
            self.step(&mut series, synth);
        }

        Ok(out)
    }

    /// Render and write the animation as a GIF.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails, or `frames` is zero.
    pub fn write_gif<R, F, P>(
        &self,
        initial: Series,
        frames: usize,
        synth: &mut Synthesizer<R>,
        encoder: &GifEncoder,
        path: P,
        on_frame: F,
    ) -> Result<()>
    where
        R: Rng,
        F: FnMut(usize, &Series),
        P: AsRef<Path>,
    {
        let rendered = self.render_with(initial, frames, synth, on_frame)?;
        encoder.write_to_file(&rendered, &path)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            frames = rendered.len(),
            "wrote animation"
        );
        Ok(())
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
