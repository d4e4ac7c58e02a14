//! swipectl CLI: replay and inspect swipe-control sessions.
//!
//! Usage:
//!   swipectl replay <FILE>     Replay a gesture recording against simulated devices
//!   swipectl config            Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod devices;

#[derive(Parser)]
#[command(
    name = "swipectl",
    about = "Turn swipe distances into volume, brightness, speed, and seek steps",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the standard location)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSONL gesture recording
    Replay {
        /// Path to the recording
        path: PathBuf,

        /// Initial volume level
        #[arg(long, default_value = "7")]
        volume: i32,

        /// Maximum volume level
        #[arg(long, default_value = "15")]
        max_volume: i32,

        /// Initial brightness (0-100, -1 for auto)
        #[arg(long, default_value = "50", allow_negative_numbers = true)]
        brightness: f64,

        /// Initial playback speed
        #[arg(long, default_value = "1.0")]
        speed: f32,

        /// Detach the volume device
        #[arg(long)]
        no_volume: bool,

        /// Detach the brightness device
        #[arg(long)]
        no_brightness: bool,

        /// Detach the playback device (speed and seek)
        #[arg(long)]
        no_playback: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the standard location
        #[arg(long)]
        save: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = commands::load_config(cli.config.as_deref())?;

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    swipectl_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Replay {
            path,
            volume,
            max_volume,
            brightness,
            speed,
            no_volume,
            no_brightness,
            no_playback,
        } => commands::replay::run(
            path,
            config,
            commands::replay::DeviceState {
                volume,
                max_volume,
                brightness,
                speed,
            },
            commands::replay::Detached {
                volume: no_volume,
                brightness: no_brightness,
                playback: no_playback,
            },
        ),
        Commands::Config { save } => commands::config::run(config, save),
    }
}
