use std::path::PathBuf;

use arbiter::{play_game, GameResult, Recorder};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Display names of the two automated players
    #[clap(num_args(0..=2), value_delimiter = ' ')]
    player_names: Vec<String>,

    /// How many games to play
    #[arg(short, long, default_value_t = 10)]
    num_games: usize,

    /// RNG seed (drives the per-game seat assignment)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every turn
    #[arg(long, default_value_t = false)]
    show_board: bool,

    /// Record each game's moves and final state as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    unfinished: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut player_names = args.player_names;
    while player_names.len() < 2 {
        player_names.push(format!("bot_{}", player_names.len() + 1));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut score = MatchScore::default();
    for game_idx in 0..args.num_games {
        match play_game(
            &mut rng,
            [&player_names[0], &player_names[1]],
            args.show_board,
            &mut recorder,
        )? {
            GameResult::WonByPlayer { player_idx, turns } => {
                debug!(winner = player_names[player_idx], game_idx, turns);
                score.wins[player_idx] += 1;
            }
            GameResult::Unfinished => {
                debug!(game_idx, "Game hit the turn cap");
                score.unfinished += 1;
            }
        }
    }

    eprintln!(
        "End result:\n- {} wins by {}\n- {} wins by {}\n- {} unfinished",
        score.wins[0], player_names[0], score.wins[1], player_names[1], score.unfinished
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
