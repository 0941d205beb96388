//! End-to-end chart generation.
//!
//! Produces the README artwork in one pass: two static charts from independent
//! random draws and one scrolling animation. Human-readable progress goes to
//! the supplied writer (stdout in the binary); it is not a stable format.

use std::io::Write;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::Sequencer;
use crate::chart::BarChart;
use crate::config::Config;
use crate::error::Result;
use crate::output::GifEncoder;
use crate::synth::Synthesizer;

/// Samples shown in the "Sample values" progress line.
const PREVIEW_LEN: usize = 10;

/// Progress line cadence during animation rendering.
const PROGRESS_EVERY: usize = 10;

/// Paths of the files a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// First static chart.
    pub primary: PathBuf,
    /// Second static chart.
    pub alternate: PathBuf,
    /// Animated chart, if animation was enabled.
    pub animated: Option<PathBuf>,
}

/// Validate `config`, then generate every artifact it describes.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the output directory
/// cannot be created, or any image fails to encode or write.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Artifacts> {
    config.validate()?;
    std::fs::create_dir_all(&config.output_dir)?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?config.seed, bars = config.bars, "generating charts");

    let mut synth = Synthesizer::new(rng, config.synth);
    let artifacts = run_with(config, &mut synth, out)?;

    tracing::info!(?artifacts, "done");
    Ok(artifacts)
}

/// Generate every artifact using an already-constructed synthesizer.
///
/// Does not validate `config` or create the output directory.
///
/// # Errors
///
/// Returns an error if any image fails to encode or write.
pub fn run_with<R: Rng, W: Write>(
    config: &Config,
    synth: &mut Synthesizer<R>,
    out: &mut W,
) -> Result<Artifacts> {
    let chart = BarChart::new().dimensions(config.width, config.height);

    writeln!(out, "Generating simulated network data...")?;
    let primary = config.output_path(&config.files.primary);
    static_chart(&chart, synth, config.bars, &primary, out)?;

    writeln!(out, "\nGenerating second chart for comparison...")?;
    let alternate = config.output_path(&config.files.alternate);
    static_chart(&chart, synth, config.bars, &alternate, out)?;

    let animated = if config.animate {
        let path = config.output_path(&config.files.animated);
        animation(config, chart, synth, &path, out)?;
        Some(path)
    } else {
        None
    };

    writeln!(out, "\nAll charts generated!")?;
    writeln!(out, "- {} (static)", primary.display())?;
    writeln!(out, "- {} (static)", alternate.display())?;
    if let Some(path) = &animated {
        writeln!(
            out,
            "- {} ({}-frame animation)",
            path.display(),
            config.frame_count()
        )?;
    }

    Ok(Artifacts {
        primary,
        alternate,
        animated,
    })
}

fn static_chart<R: Rng, W: Write>(
    chart: &BarChart,
    synth: &mut Synthesizer<R>,
    bars: usize,
    path: &Path,
    out: &mut W,
) -> Result<()> {
    let series = synth.generate(bars);
    if let Some(stats) = series.stats() {
        writeln!(out, "Data stats: {stats}")?;
    }
    writeln!(out, "Sample values: {:?}", series.preview(PREVIEW_LEN))?;

    chart.render_to_file(&series, path)?;
    writeln!(
        out,
        "Generated {} ({}x{}px, {} bars)",
        path.display(),
        chart.width(),
        chart.height(),
        series.len()
    )?;
    Ok(())
}

fn animation<R: Rng, W: Write>(
    config: &Config,
    chart: BarChart,
    synth: &mut Synthesizer<R>,
    path: &Path,
    out: &mut W,
) -> Result<()> {
    let frames = config.frame_count();
    writeln!(out, "\nGenerating animated chart with {frames} frames...")?;

    let initial = synth.generate(config.bars);
    let sequencer = Sequencer::new(chart).chunk_size(config.chunk_size);
    let encoder = GifEncoder::new()
        .delay_ms(config.frame_delay_ms)
        .speed(config.gif_speed);

    // The frame callback cannot return errors; keep the first one.
    let mut progress_err = None;
    sequencer.write_gif(initial, frames, synth, &encoder, path, |index, _| {
        let done = index + 1;
        if done % PROGRESS_EVERY == 0 {
            if let Err(e) = writeln!(out, "Generated {done}/{frames} frames...") {
                progress_err.get_or_insert(e);
            }
        }
    })?;
    if let Some(e) = progress_err {
        return Err(e.into());
    }

    writeln!(
        out,
        "Generated {} ({}x{}px, {} frames, {} ms/frame)",
        path.display(),
        config.width,
        config.height,
        frames,
        config.frame_delay_ms
    )?;
    Ok(())
}
