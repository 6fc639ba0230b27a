//! Task storage and in-memory task list operations.
//!
//! `Store` owns the on-disk JSON file and `TaskList` holds the tasks of one
//! invocation. Tasks are addressed by their 1-based position in the list.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fields::Status;
use crate::task::Task;

/// The JSON file holding the full task list.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load tasks from the JSON file; a missing file is an empty list.
    pub fn load(&self) -> Result<TaskList> {
        let buf = match fs::read_to_string(&self.path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "task file absent, starting empty");
                return Ok(TaskList::default());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        let tasks: Vec<Task> = serde_json::from_str(&buf).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(TaskList { tasks })
    }

    /// Overwrite the JSON file with `tasks` using atomic write (temp file + rename).
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let mut data = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut data, formatter);
        tasks.tasks.serialize(&mut ser)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let mut f = File::create(&tmp)?;
            f.write_all(&data)?;
            f.flush()?;
            f.sync_all()
        };
        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp);
            return Err(Error::io(&tmp, e));
        }
        fs::rename(&tmp, &self.path).map_err(|e| Error::io(&self.path, e))?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Tasks in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate tasks together with their 1-based numbers.
    pub fn iter_numbered(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(i, t)| (i + 1, t))
    }

    /// Map a 1-based task number onto a vector position.
    fn position(&self, number: i64) -> Result<usize> {
        let count = self.tasks.len();
        usize::try_from(number)
            .ok()
            .filter(|n| (1..=count).contains(n))
            .map(|n| n - 1)
            .ok_or(Error::InvalidTaskNumber { number, count })
    }

    /// Append a new not-started task.
    pub fn add(&mut self, description: impl Into<String>, due_date: Option<String>) -> &Task {
        self.tasks.push(Task::new(description, due_date));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn get(&self, number: i64) -> Result<&Task> {
        let idx = self.position(number)?;
        Ok(&self.tasks[idx])
    }

    pub fn remove(&mut self, number: i64) -> Result<Task> {
        let idx = self.position(number)?;
        Ok(self.tasks.remove(idx))
    }

    /// Overwrite the status of a task.
    pub fn set_status(&mut self, number: i64, status: Status) -> Result<&Task> {
        let idx = self.position(number)?;
        let task = &mut self.tasks[idx];
        task.status = status;
        Ok(&*task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        let mut list = TaskList::default();
        list.add("a", None);
        list.add("b", Some("2025-03-10".into()));
        list.add("c", None);
        list
    }

    fn descriptions(list: &TaskList) -> Vec<&str> {
        list.iter_numbered().map(|(_, t)| t.description.as_str()).collect()
    }

    #[test]
    fn test_add_starts_not_started() {
        let mut list = TaskList::default();
        let task = list.add("Buy milk", None);
        assert_eq!(task.status, Status::NotStarted);
        assert_eq!(task.due_label(), "unscheduled");
    }

    #[test]
    fn test_remove_preserves_order() {
        for n in 1..=3 {
            let mut list = sample();
            let removed = list.remove(n).unwrap();
            assert_eq!(list.len(), 2);
            let mut expected = vec!["a", "b", "c"];
            expected.retain(|d| *d != removed.description);
            assert_eq!(descriptions(&list), expected);
        }
    }

    #[test]
    fn test_out_of_range_numbers_rejected() {
        let mut list = sample();
        for n in [0, -1, 4, i64::MAX, i64::MIN] {
            assert!(matches!(list.get(n), Err(Error::InvalidTaskNumber { count: 3, .. })));
            assert!(list.remove(n).is_err());
            assert!(list.set_status(n, Status::Done).is_err());
        }
        assert_eq!(list, sample());
    }

    #[test]
    fn test_start_then_done_is_done() {
        let mut list = sample();
        list.set_status(2, Status::InProgress).unwrap();
        assert_eq!(list.get(2).unwrap().status, Status::InProgress);
        list.set_status(2, Status::Done).unwrap();
        assert_eq!(list.get(2).unwrap().status, Status::Done);
        assert_eq!(list.get(1).unwrap().status, Status::NotStarted);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("todo.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("todo.json"));
        let mut list = sample();
        list.set_status(1, Status::Done).unwrap();
        list.set_status(3, Status::InProgress).unwrap();
        store.save(&list).unwrap();
        assert_eq!(store.load().unwrap(), list);
        assert!(!dir.path().join("nested").join("todo.json.tmp").exists());
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("todo.json"));
        let mut list = TaskList::default();
        list.add("Buy milk", Some("2025-03-10".into()));
        list.add("Call mum", None);
        store.save(&list).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n    {\n        \"task\": \"Buy milk\""));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["status"], "not_started");
        assert_eq!(value[0]["due_date"], "2025-03-10");
        assert!(value[1]["due_date"].is_null());
    }

    #[test]
    fn test_missing_due_date_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, r#"[{"task": "x", "status": "done"}]"#).unwrap();
        let list = Store::new(&path).load().unwrap();
        assert_eq!(list.get(1).unwrap().due_date, None);
        assert_eq!(list.get(1).unwrap().status, Status::Done);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        for body in ["{not json", "", r#"[{"task": "x", "status": "blocked", "due_date": null}]"#] {
            fs::write(&path, body).unwrap();
            assert!(matches!(Store::new(&path).load(), Err(Error::Parse { .. })));
        }
    }

    #[test]
    fn test_save_into_unwritable_location_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let store = Store::new(blocker.join("todo.json"));
        assert!(matches!(store.save(&sample()), Err(Error::Io { .. })));
    }
}
