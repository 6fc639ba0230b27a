//! Error types for todo.
//!
//! Every failure ends the current invocation. The exit code tells the
//! three classes apart:
//! - 2: user error (bad task number, no home directory)
//! - 3: the task file exists but cannot be parsed
//! - 4: reading or writing the task file failed

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the todo CLI.
pub mod exit_codes {
    pub const USER_ERROR: i32 = 2;
    pub const PARSE_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid task number: {number} (expected 1..={count})")]
    InvalidTaskNumber { number: i64, count: usize },

    #[error("cannot determine home directory; pass --db <PATH>")]
    NoHomeDir,

    #[error("task file {path} is corrupt: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot access task file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialise tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidTaskNumber { .. } | Error::NoHomeDir => exit_codes::USER_ERROR,
            Error::Parse { .. } => exit_codes::PARSE_ERROR,
            Error::Io { .. } | Error::Serialize(_) => exit_codes::IO_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_map_correctly() {
        let user = Error::InvalidTaskNumber { number: 0, count: 3 };
        assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

        let parse_err = serde_json::from_str::<u8>("x").unwrap_err();
        let parse = Error::Parse {
            path: PathBuf::from("todo.json"),
            source: parse_err,
        };
        assert_eq!(parse.exit_code(), exit_codes::PARSE_ERROR);

        let io = Error::io("todo.json", std::io::Error::other("disk full"));
        assert_eq!(io.exit_code(), exit_codes::IO_ERROR);
    }

    #[test]
    fn test_invalid_task_number_message() {
        let err = Error::InvalidTaskNumber { number: 5, count: 2 };
        assert_eq!(err.to_string(), "invalid task number: 5 (expected 1..=2)");
    }
}
