//! Wordle Clone - CLI
//!
//! Play in a TUI (default) or at a plain prompt, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_clone::{
    commands::{run_simple, score_guess},
    config::{GameConfig, WordSource},
    game::MAX_TRIES,
    interactive::{App, run_tui},
    output::print_score,
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the secret five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Where secret words and dictionary checks come from
    #[arg(short, long, global = true, value_enum, default_value_t = WordSource::Embedded)]
    source: WordSource,

    /// File of secret words, one per line (embedded source only)
    #[arg(long, global = true)]
    secrets: Option<PathBuf>,

    /// File of accepted guesses, one per line (embedded source only)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for a reproducible sequence of secret words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts per round
    #[arg(short = 't', long, global = true, default_value_t = MAX_TRIES)]
    max_tries: usize,

    /// Log filter when RUST_LOG is unset (e.g. "info", "wordle_clone=debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "wordle_clone.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode
    Simple,

    /// Score a guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

/// Install the tracing subscriber, writing to `log_file` if given or stderr otherwise
fn init_logging(log_level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)?,
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_tries: self.max_tries,
            source: self.source,
            secrets_path: self.secrets.clone(),
            dictionary_path: self.dictionary.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => {
            init_logging(&cli.log_level, Some(cli.log_file.as_path()))?;
            info!(source = ?cli.source, "Starting TUI");
            let driver = cli.config().driver()?;
            run_tui(App::new(driver))
        }
        Some(Commands::Simple) => {
            init_logging(&cli.log_level, None)?;
            info!(source = ?cli.source, "Starting line mode");
            let mut driver = cli.config().driver()?;
            run_simple(&mut driver)
        }
        Some(Commands::Score { secret, guess }) => {
            init_logging(&cli.log_level, None)?;
            let scored = score_guess(secret, guess)?;
            print_score(&scored.secret, &scored.guess, &scored.result);
            Ok(())
        }
    }
}
