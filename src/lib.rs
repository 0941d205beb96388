//! # netchart
//!
//! Synthetic network-activity bar charts for README artwork.
//!
//! netchart fakes a bursty utilization time series (low noisy baseline with
//! occasional ramped spikes) and renders it as a strip of heat-colored bars on
//! a transparent canvas, either as a static PNG or as a scrolling animated GIF.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use netchart::prelude::*;
//!
//! let mut synth = Synthesizer::seeded(42);
//! let series = synth.generate(215);
//!
//! BarChart::new()
//!     .dimensions(830, 10)
//!     .render_to_file(&series, "network_chart.png")?;
//! # Ok::<(), netchart::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - [`synth`] generates a [`series::Series`] from an injectable random source.
//! - [`chart`] maps each sample to a bar whose height and color are relative
//!   to the series maximum.
//! - [`animation`] slides the series one sample per frame.
//! - [`output`] encodes frames as PNG or GIF.
//! - [`pipeline`] ties it together the way the `netchart` binary runs it.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the usage color table.
pub mod color;

/// RGBA framebuffer for pixel rendering.
pub mod framebuffer;

/// Fixed-length sample series.
pub mod series;

/// Synthetic utilization generator.
pub mod synth;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Utilization bar chart renderer.
pub mod chart;

/// Scrolling chart animation.
pub mod animation;

/// Output encoders (PNG, GIF).
pub mod output;

// ============================================================================
// Application Modules
// ============================================================================

/// Configuration (YAML + defaults).
pub mod config;

/// End-to-end artifact generation.
pub mod pipeline;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for netchart operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use netchart::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::Sequencer;
    pub use crate::chart::BarChart;
    pub use crate::color::{Rgba, Threshold, UsagePalette};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::output::{GifEncoder, PngEncoder};
    pub use crate::series::{Series, SeriesStats};
    pub use crate::synth::{SynthParams, Synthesizer};
}
