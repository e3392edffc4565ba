//! Record command - capture the primary display

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use reel_core::config::ConfigFile;
use reel_core::{Recorder, RecorderConfig};
use tokio::signal;
use tracing::info;

/// Arguments for the record command
#[derive(Args)]
pub struct RecordArgs {
    /// Output file for the elementary stream (e.g. capture.h264).
    /// Without this the stream is kept in memory and discarded on exit.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// H.264 profile level constraining the output frame size
    #[arg(short, long, default_value = reel_core::H264_SUPPORTED_PROFILE)]
    profile: String,

    /// Target framerate
    #[arg(short, long)]
    fps: Option<u32>,

    /// Bitrate in kbps (0 = auto)
    #[arg(short, long)]
    bitrate: Option<u32>,

    /// Stop after this many seconds
    #[arg(short, long)]
    duration: Option<u64>,
}

/// Resolve an output file against the configured recordings directory.
///
/// Absolute paths and paths with directory components are kept as given.
fn resolve_output(file: &ConfigFile, output: PathBuf) -> PathBuf {
    match &file.output.directory {
        Some(dir) if output.parent() == Some(std::path::Path::new("")) => dir.join(output),
        _ => output,
    }
}

/// Start recording
pub async fn record(args: RecordArgs) -> Result<()> {
    let file = ConfigFile::load_or_default();

    let mut config = RecorderConfig::new()
        .with_profile(&args.profile)
        .with_fps(args.fps.unwrap_or(file.defaults.fps))
        .with_bitrate(args.bitrate.unwrap_or(file.defaults.bitrate));
    if let Some(output) = args.output {
        config = config.with_output(resolve_output(&file, output));
    }

    // Encoder and display setup happen here; a construction failure ends the
    // process with exit code 1 and the error on stderr.
    let mut recorder = match Recorder::new(config.clone()) {
        Ok(recorder) => recorder,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("reel - Recording\n");
    println!("Configuration:");
    println!("  Display:     {}", recorder.source_size());
    println!("  Encoding at: {}", recorder.output_size());
    println!("  Framerate:   {} fps", config.fps);
    println!(
        "  Bitrate:     {} kbps",
        config.effective_bitrate(recorder.output_size())
    );
    match &config.output {
        Some(path) => println!("  Output:      {}", path.display()),
        None => println!("  Output:      (in-memory, discarded on exit)"),
    }
    println!();
    println!("Press Ctrl+C to stop...\n");

    // Cancellation: the recorder checks this flag every iteration
    let cancel = Arc::new(AtomicBool::new(false));

    let ctrl_c_flag = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            println!("\nReceived interrupt signal, stopping...");
            ctrl_c_flag.store(true, Ordering::Relaxed);
        }
    });

    if let Some(secs) = args.duration {
        let timer_flag = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            info!("Duration limit reached ({}s), stopping", secs);
            timer_flag.store(true, Ordering::Relaxed);
        });
    }

    let stats = recorder.run(cancel).await.context("Recording failed")?;

    println!("Recording stopped.");
    println!("  {}", stats);

    Ok(())
}
