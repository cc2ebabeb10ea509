//! Per-file counting task

use std::path::Path;

use tracing::trace;

use crate::domain::{CountError, Counter, Stats};
use crate::input::InputSource;

/// Lifecycle of a single counting task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Created,
    Opening,
    Accumulating,
    Succeeded,
    Failed,
}

impl TaskState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Failed)
    }
}

/// Outcome of one task, tagged with its position in the input list
#[derive(Debug)]
pub struct TaskResult {
    pub index: usize,
    pub stats: Stats,
    pub error: Option<CountError>,
}

impl TaskResult {
    fn succeeded(index: usize, stats: Stats) -> Self {
        Self {
            index,
            stats,
            error: None,
        }
    }

    fn failed(index: usize, error: CountError) -> Self {
        Self {
            index,
            stats: Stats::named(error.name()),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The terminal state this result was produced in
    pub fn state(&self) -> TaskState {
        if self.is_ok() {
            TaskState::Succeeded
        } else {
            TaskState::Failed
        }
    }
}

/// Counts one input: opening (for files), accumulating, reporting once
pub struct FileTask<'a> {
    index: usize,
    name: String,
    state: TaskState,
    counter: &'a Counter,
}

impl<'a> FileTask<'a> {
    pub fn new(index: usize, name: impl Into<String>, counter: &'a Counter) -> Self {
        Self {
            index,
            name: name.into(),
            state: TaskState::Created,
            counter,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    fn advance(&mut self, next: TaskState) {
        trace!(index = self.index, name = %self.name, from = ?self.state, to = ?next, "task transition");
        self.state = next;
    }

    /// Opens `path` and counts it. The file is closed before this returns.
    pub fn run_path(mut self, path: &Path) -> TaskResult {
        self.advance(TaskState::Opening);
        match InputSource::open(path) {
            Ok(source) => self.run_source(source),
            Err(error) => self.finish(Err(error)),
        }
    }

    /// Counts an already open source (standard input, or a reader in tests)
    pub fn run_source(mut self, source: InputSource) -> TaskResult {
        self.advance(TaskState::Accumulating);
        let outcome = self.counter.count(source);
        self.finish(outcome)
    }

    fn finish(mut self, outcome: Result<Stats, CountError>) -> TaskResult {
        match outcome {
            Ok(stats) => {
                self.advance(TaskState::Succeeded);
                TaskResult::succeeded(self.index, stats)
            }
            Err(error) => {
                self.advance(TaskState::Failed);
                TaskResult::failed(self.index, error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountSelection;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn new_task_starts_created() {
        let counter = Counter::default();
        let task = FileTask::new(0, "a.txt", &counter);
        assert_eq!(task.state(), TaskState::Created);
        assert!(!task.state().is_terminal());
    }

    #[test]
    fn file_task_names_result_after_given_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "one two\n").unwrap();

        let counter = Counter::new(CountSelection::ALL);
        let result = FileTask::new(3, path.to_string_lossy(), &counter).run_path(&path);

        assert!(result.is_ok());
        assert_eq!(result.index, 3);
        assert_eq!(result.state(), TaskState::Succeeded);
        assert_eq!(result.stats.name, path.to_string_lossy());
        assert_eq!(result.stats.words, 2);
    }

    #[test]
    fn missing_file_yields_open_error_with_zero_stats() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");

        let counter = Counter::default();
        let result = FileTask::new(1, path.to_string_lossy(), &counter).run_path(&path);

        assert_eq!(result.state(), TaskState::Failed);
        assert!(result.error.as_ref().unwrap().is_open_error());
        assert!(result.stats.is_zero());
        assert_eq!(result.stats.name, path.to_string_lossy());
    }

    #[test]
    fn source_task_counts_reader() {
        let counter = Counter::default();
        let source = InputSource::from_reader("stdin", Cursor::new(b"x\ny\n".to_vec()));
        let result = FileTask::new(0, "stdin", &counter).run_source(source);

        assert!(result.is_ok());
        assert_eq!(result.stats.lines, 2);
    }
}
