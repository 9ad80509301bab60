//! Command-line configuration.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use crate::types::TICK_MS;

/// Terminal falling-block puzzle game.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for the piece sequence (defaults to the current time).
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Frame budget in milliseconds.
    #[arg(long, default_value_t = TICK_MS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub frame_ms: u32,

    /// Terminal columns per board cell.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    pub cell_width: u16,

    /// Start with background music switched on.
    #[arg(short, long)]
    pub music: bool,

    /// Disable mouse capture (on-screen controls stop responding).
    #[arg(long)]
    pub no_mouse: bool,

    /// Append log output to this file (`RUST_LOG` filters, default `info`).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub frame: Duration,
    pub cell_width: u16,
    pub music: bool,
    pub mouse: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self {
            seed: args.seed.unwrap_or_else(clock_seed),
            frame: Duration::from_millis(args.frame_ms as u64),
            cell_width: args.cell_width,
            music: args.music,
            mouse: !args.no_mouse,
            log_file: args.log_file,
        }
    }

    pub fn parse() -> Self {
        Self::from_args(Args::parse())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// Route `log` output to `path` when given; otherwise logging stays off so the
/// game screen is never overwritten.
pub fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("initialising logger")?;
    Ok(())
}
