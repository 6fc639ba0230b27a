//! Task data structure.
//!
//! A `Task` is a single to-do item: what to do, how far along it is, and
//! optionally when it is due. The due date is kept exactly as the user typed
//! it and only parsed when a calendar is rendered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// Placeholder shown for tasks without a due date.
pub const UNSCHEDULED: &str = "unscheduled";

/// A to-do item as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,
    pub status: Status,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Task {
    /// Create a fresh, not yet started task.
    pub fn new(description: impl Into<String>, due_date: Option<String>) -> Self {
        Task {
            description: description.into(),
            status: Status::NotStarted,
            due_date,
        }
    }

    /// Due date for display, or `unscheduled`.
    pub fn due_label(&self) -> &str {
        self.due_date.as_deref().unwrap_or(UNSCHEDULED)
    }

    /// Parse the stored due date as `YYYY-MM-DD`.
    ///
    /// `None` when no due date is set, `Some(Err(raw))` when it is set but malformed.
    /// Surrounding whitespace counts as malformed.
    pub fn due(&self) -> Option<Result<NaiveDate, &str>> {
        self.due_date.as_deref().map(|raw| {
            if raw.trim() != raw {
                return Err(raw);
            }
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| raw)
        })
    }
}
