//! Fan-out/fan-in over many files

use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use super::task::{FileTask, TaskResult};
use crate::domain::{Counter, Stats};
use crate::input::InputSource;

/// Display name of the summed record
pub const TOTAL_NAME: &str = "total";

/// Ordered per-file results plus their sum
#[derive(Debug)]
pub struct AggregateReport {
    pub per_file: Vec<TaskResult>,
    pub total: Stats,
    pub any_error: bool,
}

impl AggregateReport {
    /// Builds the report once every task has finished.
    ///
    /// Failed entries keep their slot but add nothing to the total.
    pub fn from_results(per_file: Vec<TaskResult>) -> Self {
        let mut total = Stats::named(TOTAL_NAME);
        let mut any_error = false;

        for result in &per_file {
            if result.is_ok() {
                total.absorb(&result.stats);
            } else {
                any_error = true;
            }
        }

        Self {
            per_file,
            total,
            any_error,
        }
    }

    /// The total is only reported for more than one input
    pub fn has_total(&self) -> bool {
        self.per_file.len() > 1
    }

    pub fn failures(&self) -> impl Iterator<Item = &TaskResult> {
        self.per_file.iter().filter(|r| !r.is_ok())
    }
}

/// Resolves a `--jobs` value to a thread count (0 means one per CPU)
pub fn worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}

/// Runs `work` once per item on a bounded pool and joins all of them.
///
/// Results are written into a pre-sized slot array by item position, so the
/// output order matches `items` regardless of completion order.
pub fn fan_out<I, T, F>(items: &[I], jobs: usize, work: F) -> Result<Vec<T>>
where
    I: Sync,
    T: Send,
    F: Fn(usize, &I) -> T + Sync,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let threads = worker_count(jobs).min(items.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("textstat-worker-{}", i))
        .build()
        .context("Failed to start worker pool")?;

    let mut slots: Vec<Option<T>> = Vec::with_capacity(items.len());
    slots.resize_with(items.len(), || None);

    pool.install(|| {
        slots
            .par_iter_mut()
            .with_max_len(1)
            .enumerate()
            .for_each(|(index, slot)| {
                *slot = Some(work(index, &items[index]));
            });
    });

    Ok(slots.into_iter().flatten().collect())
}

/// Counts a list of files (or standard input) into an [`AggregateReport`]
pub struct Aggregator {
    counter: Counter,
    jobs: usize,
}

impl Aggregator {
    pub fn new(counter: Counter, jobs: usize) -> Self {
        Self { counter, jobs }
    }

    /// Counts every path, one task per path, and waits for all of them
    pub fn run(&self, paths: &[PathBuf]) -> Result<AggregateReport> {
        if paths.is_empty() {
            return Ok(self.run_stdin());
        }

        debug!(
            files = paths.len(),
            jobs = worker_count(self.jobs).min(paths.len()),
            "counting files"
        );

        let results = fan_out(paths, self.jobs, |index, path| {
            FileTask::new(index, path.to_string_lossy(), &self.counter).run_path(path)
        })?;

        let report = AggregateReport::from_results(results);
        for failed in report.failures() {
            if let Some(error) = &failed.error {
                debug!(index = failed.index, %error, "task failed");
            }
        }
        Ok(report)
    }

    /// Counts standard input as the only source
    pub fn run_stdin(&self) -> AggregateReport {
        self.run_source(InputSource::stdin())
    }

    /// Counts a single already-open source
    pub fn run_source(&self, source: InputSource) -> AggregateReport {
        debug!(name = source.name(), "counting single source");
        let name = source.name().to_string();
        let result = FileTask::new(0, name, &self.counter).run_source(source);
        AggregateReport::from_results(vec![result])
    }
}
