//! Hangman - CLI
//!
//! Terminal hangman with TUI and line modes over JSON category wordlists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{print_categories, run_init, run_simple},
    game::{GameSession, SessionConfig},
    interactive::run_tui,
    wordlists::{WordlistStore, Wordlists},
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log destination; logging is only enabled when `RUST_LOG` is set
const LOG_FILE: &str = "hangman.log";

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with category wordlists",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist to start playing immediately ('random' picks one)
    category: Option<String>,

    /// Wordlist file (JSON object of category -> entries)
    #[arg(short = 'w', long, global = true, default_value = WordlistStore::DEFAULT_PATH)]
    wordlist: PathBuf,

    /// Wrong guesses allowed per round
    #[arg(
        short,
        long,
        global = true,
        default_value_t = SessionConfig::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    attempts: u8,

    /// Keep wordlists added with 'add' in memory only
    #[arg(long, global = true)]
    no_save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Wordlist to start with instead of the menu
        category: Option<String>,
    },

    /// Simple line mode (no raw terminal, works over pipes)
    Simple {
        /// Wordlist to start with instead of the menu
        category: Option<String>,
    },

    /// List the available wordlists
    List,

    /// Write the bundled wordlists to the wordlist file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let store = WordlistStore::new(&cli.wordlist);
    let config = SessionConfig {
        max_attempts: cli.attempts,
        save_permanently: !cli.no_save,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        category: cli.category,
    });

    match command {
        Commands::Play { category } => {
            let mut session = open_session(store, config, category.as_deref())?;
            run_tui(&mut session)
        }
        Commands::Simple { category } => {
            let mut session = open_session(store, config, category.as_deref())?;
            run_simple(&mut session)
        }
        Commands::List => {
            print_categories(&load_wordlists(&store)?);
            Ok(())
        }
        Commands::Init { force } => {
            let count = run_init(&store, force)?;
            println!(
                "Wrote {count} wordlists to {}",
                store.path().display()
            );
            Ok(())
        }
    }
}

/// Send logs to a file so they never mix with the game screen
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let log_file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized

    Ok(())
}

/// Load the wordlist file; a missing or broken file is fatal
fn load_wordlists(store: &WordlistStore) -> Result<Wordlists> {
    store.load().with_context(|| {
        format!(
            "cannot load wordlists (run `hangman init` to create {})",
            store.path().display()
        )
    })
}

fn open_session(
    store: WordlistStore,
    config: SessionConfig,
    category: Option<&str>,
) -> Result<GameSession> {
    let wordlists = load_wordlists(&store)?;
    info!(
        path = %store.path().display(),
        categories = wordlists.len(),
        max_attempts = config.max_attempts,
        "starting session"
    );

    let mut session = GameSession::new(wordlists, store, config);
    session.start(category);
    Ok(session)
}
