//! # todo - personal task tracker
//!
//! A small command-line to-do list. Tasks live in a single JSON file
//! (`~/todo.json` unless `--db` says otherwise) and are addressed by their
//! 1-based position in the list.
//!
//! ```bash
//! todo add "Buy milk" 2025-03-10
//! todo show          # list everything
//! todo show 1        # details plus a calendar with the due day bracketed
//! todo start 1
//! todo done 1
//! todo remove 1
//! todo clear
//! ```
//!
//! Each invocation loads the whole file, applies one change and writes the
//! whole file back. There is no locking: concurrent invocations race and the
//! last writer wins.
//!
//! Diagnostic logging goes to stderr and is enabled with `RUST_LOG`, e.g.
//! `RUST_LOG=todo=debug todo show`.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod calendar;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod db;
pub mod error;
pub mod fields;
pub mod task;

use cli::Cli;
use cmd::*;
use config::Config;
use db::Store;
use error::Result;

fn init_tracing() {
    // Opt-in via RUST_LOG; an unusable filter silently means "off".
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        cmd_completions(shell);
        return Ok(());
    }

    let config = Config::resolve(cli.db)?;
    let store = Store::new(config.store_path);
    tracing::debug!(path = %store.path().display(), "using task file");

    match cli.command {
        Commands::Add { task, due_date } => cmd_add(&store, task, due_date),
        Commands::Show { index } => cmd_show(&store, index),
        Commands::Remove { index } => cmd_remove(&store, index),
        Commands::Clear => cmd_clear(&store),
        Commands::Start { index } => cmd_start(&store, index),
        Commands::Done { index } => cmd_done(&store, index),
        Commands::Completions { .. } => unreachable!("completions handled above"),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
