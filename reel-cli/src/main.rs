//! reel CLI
//!
//! Minimal screen recorder: captures the primary display into a raw H.264
//! elementary stream.
//!
//! # Usage
//!
//! ```bash
//! # Show displays and the resolution they would be recorded at
//! reel info
//!
//! # Record the primary display until Ctrl+C
//! reel record --output capture.h264
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// reel - minimal screen recorder producing a raw H.264 elementary stream
#[derive(Parser)]
#[command(name = "reel")]
#[command(version)]
#[command(about = "Minimal screen recorder producing a raw H.264 elementary stream", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record the primary display
    Record(commands::RecordArgs),

    /// Show displays and the profile-fitted recording resolution
    Info(commands::InfoArgs),

    /// Manage the configuration file
    Config(commands::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("reel={}", level).parse().unwrap())
                .add_directive(format!("reel_core={}", level).parse().unwrap()),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Record(args) => commands::record(args).await?,
        Commands::Info(args) => commands::info(args)?,
        Commands::Config(args) => commands::config(args)?,
    }

    Ok(())
}
