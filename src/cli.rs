use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Personal task tracker.
/// Storage defaults to ~/todo.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "todo", version, about = "Personal task tracker with due-date calendars")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
