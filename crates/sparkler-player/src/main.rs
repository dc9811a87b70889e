//! Sparkler - a handheld sparkler that follows the pointer
//!
//! Usage:
//!   sparkler [--width <px>] [--height <px>] [--fullscreen] [--seed <n>]
//!   sparkler --capture <dir> [--frames <n>] [--width <px>] [--height <px>] [--seed <n>]

use anyhow::{Context, Result};
use clap::Parser;
use sparkler_fx::SparklerSystem;
use sparkler_player::{capture_frames, CaptureOptions, PlayerApp};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "sparkler")]
#[command(about = "Sparkler effect - a burning stick that sprays sparks at the pointer")]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Seed for spark randomness (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Render headless and write PNG frames into this directory
    #[arg(long, value_name = "DIR")]
    capture: Option<PathBuf>,

    /// Number of frames to write in capture mode
    #[arg(long, default_value_t = 90)]
    frames: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Some(out_dir) = args.capture {
        let options = CaptureOptions {
            width: args.width,
            height: args.height,
            frames: args.frames,
            seed: args.seed,
            out_dir,
        };
        let written = capture_frames(&options).context("Capture failed")?;
        info!("Wrote {} frames to {}", written.len(), options.out_dir.display());
        return Ok(());
    }

    let system = match args.seed {
        Some(seed) => SparklerSystem::with_seed(seed),
        None => SparklerSystem::new(),
    };

    println!("Controls:");
    println!("  Mouse    - Hold the sparkler");
    println!("  F11      - Toggle fullscreen");
    println!("  Escape   - Exit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PlayerApp::new(system, args.width, args.height, args.fullscreen);
    event_loop.run_app(&mut app)?;

    Ok(())
}
