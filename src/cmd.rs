//! Command implementations for the CLI interface.
//!
//! Every handler loads the task file, performs one query or mutation, saves
//! if anything changed and only then prints its confirmation, so a failed
//! save is never reported as success.

use std::io::IsTerminal;

use chrono::Datelike;
use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::debug;

use crate::calendar::render_month;
use crate::db::{Store, TaskList};
use crate::error::Result;
use crate::fields::Status;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// What needs doing.
        task: String,
        /// Due date as YYYY-MM-DD.
        due_date: Option<String>,
    },

    /// Show all tasks, or one task with its due-date calendar.
    Show {
        /// Task number to show in detail.
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },

    /// Remove a task by number.
    Remove {
        /// Task number to remove.
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Remove all tasks.
    Clear,

    /// Mark a task as in progress.
    Start {
        /// Task number to start.
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Mark a task as done.
    Done {
        /// Task number to complete.
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn colored_output() -> bool {
    std::io::stdout().is_terminal()
}

/// Append a new task.
pub fn cmd_add(store: &Store, task: String, due_date: Option<String>) -> Result<()> {
    let mut tasks = store.load()?;
    let added = tasks.add(task, due_date).clone();
    store.save(&tasks)?;
    debug!(count = tasks.len(), "task added");
    println!("Task added: {} (Due: {})", added.description, added.due_label());
    Ok(())
}

/// List all tasks, or show one task in detail.
pub fn cmd_show(store: &Store, index: Option<i64>) -> Result<()> {
    let tasks = store.load()?;
    match index {
        Some(number) => show_one(&tasks, number),
        None => {
            show_all(&tasks);
            Ok(())
        }
    }
}

fn show_all(tasks: &TaskList) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    let colored = colored_output();
    for (i, t) in tasks.iter_numbered() {
        println!(
            "{i}. {} (Status: {}, Due: {})",
            t.description,
            t.status.styled(colored),
            t.due_label()
        );
    }
}

fn show_one(tasks: &TaskList, number: i64) -> Result<()> {
    let task = tasks.get(number)?;
    println!("Task {number}: {}", task.description);
    println!("Status: {}", task.status.styled(colored_output()));
    println!("Due: {}", task.due_label());

    match task.due() {
        None => {}
        Some(Ok(date)) => {
            if let Some(cal) = render_month(date.year(), date.month(), Some(date.day())) {
                println!();
                print!("{cal}");
            }
        }
        Some(Err(raw)) => {
            debug!(task = number, due_date = raw, "stored due date is not YYYY-MM-DD");
            eprintln!("cannot render calendar: invalid due date '{raw}'");
        }
    }
    Ok(())
}

/// Remove the task at `index`.
pub fn cmd_remove(store: &Store, index: i64) -> Result<()> {
    let mut tasks = store.load()?;
    let removed = tasks.remove(index)?;
    store.save(&tasks)?;
    println!("Task removed: {}", removed.description);
    Ok(())
}

/// Drop every task without reading the old file.
pub fn cmd_clear(store: &Store) -> Result<()> {
    store.save(&TaskList::default())?;
    println!("All tasks removed.");
    Ok(())
}

/// Mark the task at `index` as in progress.
pub fn cmd_start(store: &Store, index: i64) -> Result<()> {
    let description = set_status(store, index, Status::InProgress)?;
    println!("Task '{description}' is in progress.");
    Ok(())
}

/// Mark the task at `index` as done.
pub fn cmd_done(store: &Store, index: i64) -> Result<()> {
    let description = set_status(store, index, Status::Done)?;
    println!("Task '{description}' is done.");
    Ok(())
}

fn set_status(store: &Store, index: i64, status: Status) -> Result<String> {
    let mut tasks = store.load()?;
    let description = tasks.set_status(index, status)?.description.clone();
    store.save(&tasks)?;
    debug!(task = index, %status, "status updated");
    Ok(description)
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
