//! Configuration for chart generation.
//!
//! Every field has a default matching the README artwork, so an empty file
//! (or no file at all) is valid. Precedence is CLI > file > defaults; the CLI
//! layer lives in the binary and writes straight into a loaded [`Config`].

use crate::animation::DEFAULT_CHUNK_SIZE;
use crate::chart::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::output::{DEFAULT_FRAME_DELAY_MS, DEFAULT_GIF_SPEED, GIF_SPEED_RANGE};
use crate::synth::SynthParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of bars per chart.
pub const DEFAULT_BARS: usize = 215;

/// Artifact file names, relative to [`Config::output_dir`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFiles {
    /// First static chart.
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Second static chart (a different random draw).
    #[serde(default = "default_alternate")]
    pub alternate: String,

    /// Animated chart.
    #[serde(default = "default_animated")]
    pub animated: String,
}

fn default_primary() -> String {
    "network_chart.png".to_string()
}
fn default_alternate() -> String {
    "network_chart_alt.png".to_string()
}
fn default_animated() -> String {
    "network_chart_animated.gif".to_string()
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            alternate: default_alternate(),
            animated: default_animated(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Samples (bars) per series.
    #[serde(default = "default_bars")]
    pub bars: usize,

    /// Animation frames; `None` means one frame per bar.
    #[serde(default)]
    pub frames: Option<usize>,

    /// Per-frame display time in milliseconds.
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u32,

    /// GIF palette quantization speed, 1 (best) to 30 (fastest).
    #[serde(default = "default_gif_speed")]
    pub gif_speed: i32,

    /// Samples synthesized for each animation step.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Random seed; `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Directory the artifacts are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Whether to produce the animated GIF.
    #[serde(default = "default_animate")]
    pub animate: bool,

    /// Artifact file names.
    #[serde(default)]
    pub files: OutputFiles,

    /// Generator constants.
    #[serde(default)]
    pub synth: SynthParams,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}
fn default_height() -> u32 {
    DEFAULT_HEIGHT
}
fn default_bars() -> usize {
    DEFAULT_BARS
}
fn default_frame_delay_ms() -> u32 {
    DEFAULT_FRAME_DELAY_MS
}
fn default_gif_speed() -> i32 {
    DEFAULT_GIF_SPEED
}
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_animate() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            bars: default_bars(),
            frames: None,
            frame_delay_ms: default_frame_delay_ms(),
            gif_speed: default_gif_speed(),
            chunk_size: default_chunk_size(),
            seed: None,
            output_dir: default_output_dir(),
            animate: default_animate(),
            files: OutputFiles::default(),
            synth: SynthParams::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Checks values the renderer and encoders cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid("width", "must be greater than 0"));
        }
        if self.height == 0 {
            return Err(invalid("height", "must be greater than 0"));
        }
        if self.bars == 0 {
            return Err(invalid("bars", "must be greater than 0"));
        }
        if self.chunk_size == 0 {
            return Err(invalid("chunk_size", "must be greater than 0"));
        }
        if self.animate {
            if self.frame_count() == 0 {
                return Err(invalid("frames", "must be greater than 0 when animating"));
            }
            if u16::try_from(self.width).is_err() {
                return Err(invalid("width", "GIF canvases are limited to 65535 pixels"));
            }
            if u16::try_from(self.height).is_err() {
                return Err(invalid("height", "GIF canvases are limited to 65535 pixels"));
            }
            if !GIF_SPEED_RANGE.contains(&self.gif_speed) {
                return Err(invalid("gif_speed", "must be between 1 and 30"));
            }
        }
        self.synth.validate()
    }

    /// Number of animation frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.unwrap_or(self.bars)
    }

    /// Full path of an artifact inside the output directory.
    #[must_use]
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}
