//! Integration tests for the recording loop
//!
//! These drive the real encoder over a synthetic frame source, so no display
//! is needed. The source trips the cancellation flag itself after a fixed
//! number of captures, making frame counts deterministic.

mod mocks;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use mocks::SyntheticSource;
use reel_core::types::Resolution;
use reel_core::{Recorder, RecorderConfig, ReelError};

#[tokio::test]
async fn test_records_frames_from_synthetic_display() {
    let cancel = Arc::new(AtomicBool::new(false));
    let source =
        SyntheticSource::new(Resolution::new(1920, 1080)).cancelling_after(5, cancel.clone());

    let config = RecorderConfig::new().with_fps(60);
    let mut recorder = Recorder::with_source(config, Box::new(source)).expect("create recorder");

    // 1080p divides evenly into 720p, so the downscale short-circuit applies
    assert_eq!(recorder.output_size(), Resolution::new(1280, 720));
    assert_eq!(recorder.source_size(), Resolution::new(1920, 1080));

    let stats = recorder.run(cancel).await.expect("recording run");

    assert_eq!(stats.frames_captured, 5);
    assert_eq!(stats.frames_skipped, 0);
    assert!(stats.bytes_written > 0, "empty stream: {stats}");
}

#[tokio::test]
async fn test_capture_failures_skip_the_iteration() {
    let cancel = Arc::new(AtomicBool::new(false));
    // Captures 3 and 6 fail; the loop must keep going until capture 7
    let source = SyntheticSource::new(Resolution::new(1280, 1024))
        .failing_every(3)
        .cancelling_after(7, cancel.clone());

    let config = RecorderConfig::new().with_fps(60);
    let mut recorder = Recorder::with_source(config, Box::new(source)).expect("create recorder");

    // 5:4 source shares its aspect ratio with PAL, not with 720p
    assert_eq!(recorder.output_size(), Resolution::new(720, 576));

    let stats = recorder.run(cancel).await.expect("recording run");

    assert_eq!(stats.frames_captured, 5);
    assert_eq!(stats.frames_skipped, 2);
    assert!(stats.bytes_written > 0);
}

#[tokio::test]
async fn test_stream_lands_in_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("capture.h264");

    let cancel = Arc::new(AtomicBool::new(false));
    let source =
        SyntheticSource::new(Resolution::new(1920, 1080)).cancelling_after(3, cancel.clone());

    let config = RecorderConfig::new().with_fps(60).with_output(&path);
    let mut recorder = Recorder::with_source(config, Box::new(source)).expect("create recorder");

    let stats = recorder.run(cancel).await.expect("recording run");

    let written = std::fs::metadata(&path).expect("output file").len();
    assert!(written > 0, "output file is empty");
    assert_eq!(written, stats.bytes_written);
}

#[test]
fn test_unsupported_profile_is_fatal_at_startup() {
    let config = RecorderConfig::new().with_profile("4.2");
    let source = SyntheticSource::new(Resolution::new(1920, 1080));
    let err = Recorder::with_source(config, Box::new(source)).unwrap_err();
    assert!(matches!(err, ReelError::UnsupportedProfile(_)));
}

#[test]
fn test_invalid_framerate_is_fatal_at_startup() {
    let config = RecorderConfig::new().with_fps(0);
    let source = SyntheticSource::new(Resolution::new(1920, 1080));
    let err = Recorder::with_source(config, Box::new(source)).unwrap_err();
    assert!(matches!(err, ReelError::Config(_)));
}
