//! Artifact Verification Tests
//!
//! Runs the full pipeline with the README defaults into a temporary directory
//! and decodes what it wrote: canvas sizes, color type, transparency, frame
//! count, frame timing and looping.
//!
//! Run: cargo test --test artifact_verification_test

#![allow(clippy::unwrap_used)]

use std::fs::File;
use std::path::Path;

use netchart::chart::{bar_span, BarChart};
use netchart::color::UsagePalette;
use netchart::config::Config;
use netchart::pipeline;
use netchart::series::Series;
use netchart::synth::Synthesizer;

fn readme_config(dir: &Path) -> Config {
    Config {
        seed: Some(20_240_611),
        output_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

fn decode_png(path: &Path) -> (png::OutputInfo, Vec<u8>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info, buf)
}

// ============================================================================
// STATIC CHARTS
// ============================================================================

#[test]
fn static_charts_are_830x10_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = pipeline::run(&readme_config(dir.path()), &mut std::io::sink()).unwrap();

    for path in [&artifacts.primary, &artifacts.alternate] {
        let (info, pixels) = decode_png(path);
        assert_eq!((info.width, info.height), (830, 10), "{}", path.display());
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(pixels.len(), 830 * 10 * 4);

        // Transparent background: something above the short bars is empty.
        assert!(pixels.chunks_exact(4).any(|px| px[3] == 0));
        // Nearly every column has a bar touching the bottom row; only samples
        // under 5% of the maximum round down to zero height.
        let bottom = &pixels[9 * 830 * 4..];
        let filled = bottom.chunks_exact(4).filter(|px| px[3] == 255).count();
        assert!(filled > 700, "only {filled} columns have a bar");
    }
}

#[test]
fn static_charts_differ_from_each_other() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = pipeline::run(&readme_config(dir.path()), &mut std::io::sink()).unwrap();

    let (_, a) = decode_png(&artifacts.primary);
    let (_, b) = decode_png(&artifacts.alternate);
    assert_ne!(a, b, "two independent draws should not render identically");
}

#[test]
fn tallest_bar_reaches_top_in_red() {
    let series = Synthesizer::seeded(5).generate(215);
    let fb = BarChart::new().render(&series).unwrap();

    let (idx, _) = series
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &v)| if v > best.1 { (i, v) } else { best });
    let (x0, x1) = bar_span(idx, series.len(), fb.width());

    for x in x0..x1 {
        assert_eq!(fb.filled_height(x), fb.height());
        assert_eq!(fb.get_pixel(x, 0), Some(UsagePalette::default().top_color()));
    }
}

#[test]
fn empty_series_renders_blank() {
    let fb = BarChart::new().render(&Series::new()).unwrap();
    assert_eq!((fb.width(), fb.height()), (830, 10));
    assert!(fb.is_blank());
}

// ============================================================================
// ANIMATION
// ============================================================================

#[test]
fn animation_has_one_frame_per_bar_looping_forever() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = pipeline::run(&readme_config(dir.path()), &mut std::io::sink()).unwrap();
    let path = artifacts.animated.unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let pos = bytes
        .windows(11)
        .position(|w| w == b"NETSCAPE2.0")
        .expect("loop extension present");
    assert_eq!(&bytes[pos + 11..pos + 15], &[3, 1, 0, 0], "loop count must be 0 (forever)");

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(bytes.as_slice()).unwrap();
    assert_eq!((decoder.width(), decoder.height()), (830, 10));

    let mut frames = 0;
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        assert_eq!(frame.delay, 100, "one second per frame");
        assert_eq!(frame.dispose, gif::DisposalMethod::Background);
        frames += 1;
    }
    assert_eq!(frames, 215);
}

#[test]
fn animation_frames_scroll_left() {
    // Pixels re-scale per frame, so compare the series behind each frame.
    let mut synth = Synthesizer::seeded(77);
    let initial = synth.generate(50);
    let sequencer = netchart::animation::Sequencer::new(BarChart::new().dimensions(100, 10));

    let mut windows = Vec::new();
    sequencer
        .render_with(initial, 20, &mut synth, |_, series| windows.push(series.to_vec()))
        .unwrap();

    assert_eq!(windows.len(), 20);
    for pair in windows.windows(2) {
        assert_eq!(pair[1].len(), 50);
        assert_eq!(pair[0][1..], pair[1][..49]);
        assert!(pair[1][49] >= 5.0);
    }
}

// ============================================================================
// REPRODUCIBILITY
// ============================================================================

#[test]
#[allow(clippy::unreadable_literal)]
fn seeded_series_of_five_is_pinned() {
    let expected: Vec<u64> = [
        28.40778321145217_f64,
        14.753047618643981,
        29.634284596316846,
        17.61076539221063,
        16.137429554700145,
    ]
    .iter()
    .map(|v| v.to_bits())
    .collect();

    for _ in 0..10 {
        let again: Vec<u64> = Synthesizer::seeded(12345)
            .generate(5)
            .iter()
            .map(|v| v.to_bits())
            .collect();
        assert_eq!(again, expected);
    }
}

#[test]
fn seeded_static_charts_are_byte_identical() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let config_a = Config {
        animate: false,
        ..readme_config(a.path())
    };
    let config_b = Config {
        animate: false,
        ..readme_config(b.path())
    };

    let first = pipeline::run(&config_a, &mut std::io::sink()).unwrap();
    let second = pipeline::run(&config_b, &mut std::io::sink()).unwrap();

    assert_eq!(
        std::fs::read(first.primary).unwrap(),
        std::fs::read(second.primary).unwrap()
    );
    assert_eq!(
        std::fs::read(first.alternate).unwrap(),
        std::fs::read(second.alternate).unwrap()
    );
}
