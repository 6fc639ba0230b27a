//! Enumerations and field types for task tracking.

use std::fmt;

use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

/// Task completion status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl Status {
    /// The label used both on disk and in command output.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::Done => "done",
        }
    }

    /// Terminal colour for the status label.
    pub fn color(self) -> Color {
        match self {
            Status::NotStarted => Color::White,
            Status::InProgress => Color::Yellow,
            Status::Done => Color::Green,
        }
    }

    /// Render the label, coloured when `colored` is set.
    pub fn styled(self, colored: bool) -> String {
        if colored {
            self.as_str().with(self.color()).to_string()
        } else {
            self.as_str().to_string()
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
