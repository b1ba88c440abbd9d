use std::path::PathBuf;

use clap::Parser;

use crate::{error::Result, model::config::RatingConfig};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Disc Golf Elo",
    version,
    about = "Multi-player Elo ratings for disc golf rounds",
    long_about = "Rates every player of a round series with a pairwise Elo model, weighted by \
    margin of victory and round type, and exports ratings, history and leaderboard snapshots"
)]
pub struct Args {
    /// Wide score table: a Name column followed by one column per round,
    /// in the order the rounds were played. Lower scores are better.
    #[arg(short, long, env = "SCORES_PATH", help = "CSV file with one row per player")]
    pub input: PathBuf,

    /// JSON settings file. Any field left out keeps its default, and the
    /// flags below override whatever the file says.
    #[arg(short, long, env = "RATING_CONFIG", help = "JSON rating settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base K-factor")]
    pub base_k: Option<f64>,

    #[arg(long, help = "Rating given to a player on their first round")]
    pub start_rating: Option<f64>,

    #[arg(long, help = "Round count from which delta caps are enforced")]
    pub cap_start_round: Option<u32>,

    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable margin of victory weighting")]
    pub no_mov: bool,

    #[arg(short, long, env = "OUTPUT_DIR", help = "Directory to write the CSV sheets to")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Also write the full result bundle as JSON to this file")]
    pub json: Option<PathBuf>,

    /// Print the leaderboard as it stood after this round instead of the final one
    #[arg(short, long, help = "Round label, e.g. \"TN-Worlds\"")]
    pub round: Option<String>,

    #[arg(short, long, default_value_t = 10, help = "Number of leaderboard rows to print")]
    pub top: usize,

    #[arg(long, action = clap::ArgAction::SetTrue, help = "Hide the progress bar")]
    pub no_progress: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    /// Settings from `--config` (or defaults) with command line overrides applied.
    pub fn rating_config(&self) -> Result<RatingConfig> {
        let mut config = match &self.config {
            Some(path) => RatingConfig::from_path(path)?,
            None => RatingConfig::default()
        };

        if let Some(base_k) = self.base_k {
            config.base_k = base_k;
        }
        if let Some(start_rating) = self.start_rating {
            config.start_rating = start_rating;
        }
        if let Some(round) = self.cap_start_round {
            config.delta_cap_start_round = round;
        }
        if self.no_mov {
            config.use_mov = false;
        }

        Ok(config)
    }
}
