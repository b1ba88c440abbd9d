use std::process::ExitCode;

use clap::Parser;
use disc_golf_elo::{
    args::Args,
    model::{elo_model::EloModel, structures::player_rating::PlayerRating},
    sheets::{read_wide_csv, write_csv_sheets, write_json},
    Result
};
use tracing::{error, info, warn};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.rating_config()?;
    info!(
        "Base K {}, start rating {}, MOV {}, caps from round {}",
        config.base_k, config.start_rating, config.use_mov, config.delta_cap_start_round
    );

    let records = read_wide_csv(&args.input)?;
    let result = EloModel::new(config.clone())
        .with_progress(!args.no_progress)
        .process(&records)?;

    let leaderboard = result.leaderboard_at(args.round.as_deref());
    if leaderboard.is_empty() {
        warn!(
            "No round labelled {:?}. Known rounds: {}",
            args.round.as_deref().unwrap_or_default(),
            result.rounds().join(", ")
        );
    }
    print_leaderboard(&leaderboard, args.top);

    if let Some(dir) = &args.output_dir {
        write_csv_sheets(&result, dir)?;
    }

    if let Some(path) = &args.json {
        write_json(&result, &config, path)?;
    }

    Ok(())
}

fn print_leaderboard(leaderboard: &[PlayerRating], top: usize) {
    for (i, row) in leaderboard.iter().take(top).enumerate() {
        println!("{:>4}  {:<28} {:>8.1}", i + 1, row.player, row.rating);
    }
}
