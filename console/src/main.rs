mod command;
mod config;
mod render;
mod runner;

use std::time::Duration;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{GameMode, GameSession};
use common::{log, logger};

use command::parse_mode;

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// Path to the YAML config; defaults to a file next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long, value_parser = parse_mode)]
    mode: Option<GameMode>,

    #[arg(long)]
    seed: Option<u64>,

    /// Print engine log lines to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("TicTacToe".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config = config::get_config_manager(args.config).get_config()?;

    let mut settings = config.tictactoe;
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting {:?} session with seed {}", settings.mode, rng.seed());

    let session = GameSession::new(settings, rng);
    runner::run_game(session, Duration::from_millis(config.computer_delay_ms)).await
}
