//! Reel CLI
//!
//! Samples overlay animations frame by frame and prints the resulting
//! styles as JSON lines, one object per element (and list item) per frame.

mod commands;
mod config;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{Frames, ProbeOptions};
use config::SceneConfig;

#[derive(Parser)]
#[command(name = "reel")]
#[command(author, version, about = "Frame-accurate overlay animations for highlight reels")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample every element of a scene file
    Sample {
        /// Scene file (TOML)
        scene: PathBuf,
        /// Sample a single frame
        #[arg(long, conflicts_with_all = ["from", "to"])]
        frame: Option<u32>,
        /// First frame of the range
        #[arg(long)]
        from: Option<u32>,
        /// End of the range, exclusive (defaults to the scene's frame count)
        #[arg(long)]
        to: Option<u32>,
        /// Frames between samples
        #[arg(long, default_value_t = 1)]
        step: u32,
    },
    /// Validate a scene file and print it back with defaults filled in
    Check {
        /// Scene file (TOML)
        scene: PathBuf,
    },
    /// List the registered animations by family
    List,
    /// Sample a single animation from frame 0
    Probe {
        /// Animation type, e.g. `slideInLeft`
        animation: String,
        #[arg(long, default_value_t = 30)]
        duration: u32,
        #[arg(long, default_value_t = 0)]
        delay: u32,
        /// Easing name or `cubic-bezier(x1, y1, x2, y2)`
        #[arg(long)]
        easing: Option<String>,
        #[arg(long, default_value_t = 30.0)]
        fps: f64,
        /// Last frame to sample (defaults to the end of the animation)
        #[arg(long)]
        frames: Option<u32>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Sample {
            scene,
            frame,
            from,
            to,
            step,
        } => {
            let scene = SceneConfig::load(&scene)?;
            let frames = Frames::resolve(frame, from, to, step, &scene)?;
            commands::sample(&scene, frames, &mut out)?;
        }
        Commands::Check { scene } => {
            let scene = SceneConfig::load(&scene)?;
            write!(out, "{}", scene.to_toml()?)?;
        }
        Commands::List => commands::list(&mut out)?,
        Commands::Probe {
            animation,
            duration,
            delay,
            easing,
            fps,
            frames,
        } => {
            let options = ProbeOptions {
                animation,
                duration,
                delay,
                easing,
                fps,
                frames,
            };
            commands::probe(&options, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
