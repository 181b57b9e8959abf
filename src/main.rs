//! Pokemon Hangman - CLI
//!
//! Hangman over Pokémon names with TUI and CLI modes, plus an automated
//! player for solving and benchmarking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use pokemon_hangman::{
    commands::{GameConfig, SolveConfig, run_benchmark, run_simple, solve_name},
    output::{print_benchmark_result, print_solve_result},
    solver::{GuessStrategy, Player, StrategyType},
    wordlists::{NAMES, Pokedex, loader::load_from_file, loader::pokedex_from_slice},
};

#[derive(Parser)]
#[command(
    name = "pokemon_hangman",
    about = "Pokemon Hangman: guess the Pokémon one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy for the automated player: frequency (default), random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Path to a custom name list of `<number> <name>` lines (default: embedded 151)
    #[arg(short = 'w', long, global = true)]
    names: Option<String>,

    /// Attempts available in each game
    #[arg(short, long, global = true, default_value_t = pokemon_hangman::core::MAX_ATTEMPTS)]
    attempts: u32,

    /// Player name for interactive games
    #[arg(short, long, global = true, default_value = pokemon_hangman::commands::DEFAULT_USER)]
    user: String,

    /// Email registered with the player
    #[arg(short, long, global = true)]
    email: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text prompts without TUI)
    Simple,

    /// Let the automated player solve a specific Pokémon
    Solve {
        /// The Pokémon name to solve
        name: String,

        /// Show the message and attempts left after every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the automated player over the name list
    Benchmark {
        /// Number of names to play (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Load the Pokédex from the `--names` path, or the embedded list
fn load_pokedex(path: Option<&str>) -> Result<Pokedex> {
    let pokedex = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load name list from {path}"))?,
        None => pokedex_from_slice(NAMES),
    };
    anyhow::ensure!(!pokedex.is_empty(), "name list contains no valid names");
    info!("loaded {} names", pokedex.len());
    Ok(pokedex)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let pokedex = load_pokedex(cli.names.as_deref())?;
    let config = GameConfig::new(cli.user, cli.attempts).with_email(cli.email);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &pokedex),
        Commands::Simple => run_simple(&config, &pokedex).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { name, verbose } => {
            run_solve_command(&cli.strategy, &name, verbose, &config, &pokedex)
        }
        Commands::Benchmark { count, quiet } => {
            run_benchmark_command(&cli.strategy, count, !quiet, &config, &pokedex);
            Ok(())
        }
    }
}

fn run_solve_command(
    strategy_name: &str,
    name: &str,
    verbose: bool,
    config: &GameConfig,
    pokedex: &Pokedex,
) -> Result<()> {
    let pool: Vec<&str> = pokedex.names().collect();
    let player = Player::new(StrategyType::from_name(strategy_name), &pool);
    solve_command(name, verbose, config, &player, pokedex)
}

fn solve_command<S: GuessStrategy>(
    name: &str,
    verbose: bool,
    config: &GameConfig,
    player: &Player<S>,
    pokedex: &Pokedex,
) -> Result<()> {
    let solve_config = SolveConfig {
        attempts: config.attempts,
        ..SolveConfig::new(name.to_string())
    };
    let result = solve_name(&solve_config, player, pokedex).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    count: Option<usize>,
    show_progress: bool,
    config: &GameConfig,
    pokedex: &Pokedex,
) {
    let strategy = StrategyType::from_name(strategy_name);
    println!(
        "Running {} strategy benchmark on {} names...",
        strategy.name(),
        count.map_or(pokedex.len(), |n| n.min(pokedex.len()))
    );

    let pool: Vec<&str> = pokedex.names().collect();
    let targets = &pool[..count.map_or(pool.len(), |n| n.min(pool.len()))];
    let player = Player::new(strategy, &pool);

    let result = run_benchmark(&player, targets, config.attempts, show_progress);
    print_benchmark_result(&result);
}

fn run_play_command(config: &GameConfig, pokedex: &Pokedex) -> Result<()> {
    use pokemon_hangman::interactive::{App, run_tui};

    let app = App::new(config, pokedex)?;
    run_tui(app)
}
