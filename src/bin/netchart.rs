//! netchart - generate synthetic network-activity charts for a README.
//!
//! Writes two static PNG bar charts and one animated GIF into the output
//! directory. Progress is printed to stdout; diagnostics go to stderr and are
//! controlled with `RUST_LOG`.
//!
//! Run: `netchart` (no arguments needed), or `netchart --seed 42 -o assets`.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use netchart::config::Config;
use netchart::pipeline;

/// Generate synthetic network-activity bar charts (PNG + animated GIF)
#[derive(Parser, Debug)]
#[command(name = "netchart")]
#[command(version)]
#[command(about = "Synthetic network-activity bar charts for README art", long_about = None)]
struct Cli {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write the charts into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Seed the random source for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Bars (samples) per chart
    #[arg(long)]
    bars: Option<usize>,

    /// Animation frames (defaults to the bar count)
    #[arg(long)]
    frames: Option<usize>,

    /// Display time per animation frame in milliseconds
    #[arg(long)]
    frame_delay_ms: Option<u32>,

    /// Skip the animated GIF
    #[arg(long)]
    no_animation: bool,
}

impl Cli {
    /// File settings first, then any flag given on the command line.
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(bars) = self.bars {
            config.bars = bars;
        }
        if let Some(frames) = self.frames {
            config.frames = Some(frames);
        }
        if let Some(delay) = self.frame_delay_ms {
            config.frame_delay_ms = delay;
        }
        if self.no_animation {
            config.animate = false;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    // Diagnostics on stderr; stdout carries the progress report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Cli::parse().into_config()?;
    tracing::debug!(?config, "resolved configuration");

    let mut out = stdout().lock();
    pipeline::run(&config, &mut out).context("generating charts")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["netchart"]).unwrap();
        assert_eq!(cli.into_config().unwrap(), Config::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "netchart",
            "--seed",
            "42",
            "-o",
            "assets",
            "--bars",
            "60",
            "--frame-delay-ms",
            "500",
            "--no-animation",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output_dir, PathBuf::from("assets"));
        assert_eq!(config.bars, 60);
        assert_eq!(config.frame_count(), 60);
        assert_eq!(config.frame_delay_ms, 500);
        assert!(!config.animate);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netchart.yaml");
        std::fs::write(&path, "bars: 30\nheight: 20\n").unwrap();

        let cli = Cli::try_parse_from([
            "netchart",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "12",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.bars, 30);
        assert_eq!(config.height, 12);
    }

    #[test]
    fn test_missing_config_file_errors() {
        let cli = Cli::try_parse_from(["netchart", "-c", "/nonexistent/netchart.yaml"]).unwrap();
        assert!(cli.into_config().is_err());
    }
}
