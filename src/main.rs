//! Wordle Game - CLI
//!
//! Terminal driver for the guess-evaluation engine: plays interactive games
//! and reports saved player history.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_play, run_stats},
    progress::ProgressStore,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Single-player Wordle in the terminal, with saved per-player history",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (only 5-letter entries are kept)
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: String,

    /// Directory where player progress files live
    #[arg(short = 'd', long, global = true, default_value = ".wordle")]
    data_dir: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactive games (default)
    Play {
        /// Player name to record results under; omit to play unsaved
        #[arg(short, long)]
        player: Option<String>,
    },

    /// Show a player's saved game history
    Stats {
        /// Player name to look up
        #[arg(short, long)]
        player: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { player: None });

    match command {
        Commands::Play { player } => {
            let words = load_from_file(&cli.wordlist)
                .with_context(|| format!("failed to read word list '{}'", cli.wordlist))?;
            if words.is_empty() {
                bail!(
                    "word list '{}' contains no valid 5-letter words",
                    cli.wordlist
                );
            }

            // The store is only opened when there is a player to record
            let store = player
                .as_ref()
                .map(|_| ProgressStore::new(&cli.data_dir))
                .transpose()
                .context("failed to open progress store")?;

            run_play(&words, store.as_ref(), player.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats { player } => {
            let store =
                ProgressStore::new(&cli.data_dir).context("failed to open progress store")?;
            run_stats(&store, &player).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
