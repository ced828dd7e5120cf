//! Command-line configuration.
//!
//! Every option can also come from the environment so a wrapper script can
//! pin the seed or the score file without extra flags.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::Level;

pub const DEFAULT_LEADERBOARD_PATH: &str = "blockblast_scores.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "block-blast", version, about = "Terminal block placement puzzle")]
pub struct Cli {
    #[arg(long, env = "BLOCK_BLAST_SEED", help = "Seed for piece generation (default: from the clock)")]
    pub seed: Option<u32>,

    #[arg(
        long,
        env = "BLOCK_BLAST_LEADERBOARD",
        default_value = DEFAULT_LEADERBOARD_PATH,
        help = "Path of the leaderboard JSON file"
    )]
    pub leaderboard: PathBuf,

    #[arg(long, env = "BLOCK_BLAST_LOG", help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)")]
    pub verbose: u8,

    #[arg(long, help = "Print the leaderboard and exit")]
    pub scores: bool,

    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..=4),
        help = "Terminal columns per board cell"
    )]
    pub cell_width: u16,
}

impl Cli {
    /// The configured seed, or one derived from the wall clock.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
