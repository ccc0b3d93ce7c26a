use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::ai::RandomAgent;
use connect_four::config::AppConfig;
use connect_four::session::Session;

/// Play Connect Four against a computer that picks random columns.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the pause after each move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed the computer's choices for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Colour the tokens
    #[arg(long)]
    color: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(delay_ms) = cli.delay_ms {
        config.game.turn_delay_ms = delay_ms;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if cli.color {
        config.ui.color = true;
    }
    config.validate().context("validating command line overrides")?;

    let opponent = match config.game.seed {
        Some(seed) => {
            log::info!("seeding opponent with {}", seed);
            RandomAgent::with_seed(seed)
        }
        None => RandomAgent::new(),
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, opponent, &config);
    session.run().context("running game")?;

    Ok(())
}
