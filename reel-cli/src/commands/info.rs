//! Info command - show displays and their recording resolutions

use anyhow::{Context, Result};
use clap::Args;
use reel_core::capture::list_displays;
use reel_core::types::Resolution;
use reel_core::{H264_SUPPORTED_PROFILE, best_size_for_profile};

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs {
    /// Preview the selection for an arbitrary source resolution
    /// (e.g. 1920x1080) instead of querying the attached displays
    #[arg(short, long)]
    size: Option<String>,

    /// H.264 profile level to match against
    #[arg(short, long, default_value = H264_SUPPORTED_PROFILE)]
    profile: String,
}

/// Show display information
pub fn info(args: InfoArgs) -> Result<()> {
    if let Some(size) = args.size {
        let source: Resolution = size.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        print_selection(&args.profile, source);
        return Ok(());
    }

    let displays = list_displays().context("Failed to enumerate displays")?;
    if displays.is_empty() {
        println!("No displays found.");
        return Ok(());
    }

    println!("Displays:\n");
    for display in displays {
        println!("  {}", display);
        print_selection(&args.profile, display.resolution);
        println!();
    }

    Ok(())
}

fn print_selection(profile: &str, source: Resolution) {
    match best_size_for_profile(profile, source) {
        Ok(best) => println!(
            "    {} records at {} (profile level {})",
            source, best, profile
        ),
        Err(e) => println!("    {}", e),
    }
}
