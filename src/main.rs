//! Purrdle - CLI
//!
//! Daily word-guessing puzzle with a TUI and a plain text mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use purrdle::{
    catalog::loader::load_or_embedded,
    commands::{
        GameSetup, decode_id, encode_index, route_from_flags, run_audit, run_simple, today_entry,
        upcoming,
    },
    config::AppConfig,
    logging,
    output::{print_audit_report, print_schedule, print_today},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "purrdle",
    about = "Daily word-guessing puzzle with progressive definition and letter hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary file (CSV); the built-in dictionary is used when omitted
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Args, Clone, Default)]
struct WordChoice {
    /// Play a random word instead of today's
    #[arg(short, long, conflicts_with = "id")]
    random: bool,

    /// Play the word with this shared id
    #[arg(long)]
    id: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(WordChoice),

    /// Simple CLI mode (line-based, no TUI)
    Simple(WordChoice),

    /// Show today's word id and date
    Today,

    /// List upcoming daily word ids
    Schedule {
        /// Number of days to list
        #[arg(short, long, default_value = "7")]
        days: u64,
    },

    /// Convert between catalog indices and shareable ids
    Id {
        #[command(subcommand)]
        action: IdAction,
    },

    /// Check the dictionary, identifiers and daily schedule
    Audit,
}

#[derive(Subcommand)]
enum IdAction {
    /// Catalog index to shareable id
    Encode { index: usize },
    /// Shareable id to catalog index and word
    Decode { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let catalog = load_or_embedded(cli.words.as_deref()).context("Failed to load dictionary")?;
    debug!("catalog has {} words", catalog.len());
    let setup = GameSetup::new(catalog, config)?;

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(WordChoice::default()));

    match command {
        Commands::Play(choice) => run_play_command(&setup, &choice),
        Commands::Simple(choice) => {
            run_simple(&setup, &route_from_flags(choice.random, choice.id.as_deref()))
        }
        Commands::Today => {
            print_today(&today_entry(&setup));
            Ok(())
        }
        Commands::Schedule { days } => {
            print_schedule(&upcoming(&setup, setup.today(), days));
            Ok(())
        }
        Commands::Id { action } => run_id_command(&setup, action),
        Commands::Audit => {
            let report = run_audit(&setup, true)?;
            print_audit_report(&report);
            Ok(())
        }
    }
}

fn run_id_command(setup: &GameSetup, action: IdAction) -> Result<()> {
    match action {
        IdAction::Encode { index } => println!("{}", encode_index(setup, index)?),
        IdAction::Decode { id } => {
            let (index, word) = decode_id(setup, &id)?;
            println!("{index}\t{word}");
        }
    }
    Ok(())
}

fn run_play_command(setup: &GameSetup, choice: &WordChoice) -> Result<()> {
    use purrdle::interactive::{App, run_tui};

    let app = App::new(setup, &route_from_flags(choice.random, choice.id.as_deref()));
    run_tui(app)
}
