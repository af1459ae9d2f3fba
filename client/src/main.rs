mod app;
mod config;
mod input;
mod render;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{DifficultyLevel, GameSession, TicTacToeGame};
use tictactoe_engine::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use app::{App, Flow};
use config::{Config, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Overrides the difficulty stored in the settings file
    #[arg(long)]
    difficulty: Option<DifficultyLevel>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file; defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "> ")?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Using default settings: {}", e);
        Config::default()
    });

    let difficulty = args.difficulty.unwrap_or(config.difficulty);
    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let game = TicTacToeGame::new(difficulty, rng)
        .with_harder_expert_chance(config.harder_expert_chance);
    log!("Starting with {} difficulty, seed {}", difficulty, game.seed());
    let mut app = App::new(GameSession::new(game));

    println!("{}", app.intro());
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let reply = app.handle_line(&line);
        if !reply.output.is_empty() {
            println!("{}", reply.output);
        }

        if let Some(difficulty) = reply.difficulty_changed
            && let Err(e) = config_manager.update_config(|config| config.difficulty = difficulty)
        {
            log!("Failed to save difficulty: {}", e);
        }

        if reply.flow == Flow::Quit {
            break;
        }
        prompt()?;
    }

    log!("Client shut down, last game status: {:?}", app.session().status());
    Ok(())
}
