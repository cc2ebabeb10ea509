//! Counting commands (root, line, word, char)
//!
//! All four share one pipeline; the mode only decides which counters are
//! computed and which are shown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::output::Output;
use crate::config::{Config, OutputFormat};
use crate::domain::{CountSelection, Counter};
use crate::engine::Aggregator;

/// Which command is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// Root command: everything is counted, flags pick what text output shows
    Combined,
    Lines,
    Words,
    Letters,
}

/// Settings for one counting run, resolved from config and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub computed: CountSelection,
    pub shown: CountSelection,
    pub format: OutputFormat,
    pub jobs: usize,
}

impl RunOptions {
    pub fn resolve(mode: CountMode, config: &Config) -> Self {
        let (computed, shown) = match mode {
            CountMode::Combined => {
                let any = config.letters || config.words || config.bytes;
                let shown = CountSelection {
                    lines: true,
                    words: config.words || !any,
                    letters: config.letters || !any,
                    bytes: config.bytes || !any,
                };
                (CountSelection::ALL, shown)
            }
            CountMode::Lines => (CountSelection::LINES, CountSelection::LINES),
            CountMode::Words => (CountSelection::WORDS, CountSelection::WORDS),
            CountMode::Letters => (CountSelection::LETTERS, CountSelection::LETTERS),
        };

        Self {
            computed,
            shown,
            format: config.format,
            jobs: config.jobs,
        }
    }
}

/// Counts the paths (or stdin) and prints the report.
///
/// Returns true if every input was counted.
pub fn run(options: &RunOptions, paths: &[PathBuf]) -> Result<bool> {
    debug!(?options, inputs = paths.len(), "starting count");

    let aggregator = Aggregator::new(Counter::new(options.computed), options.jobs);
    let report = aggregator.run(paths)?;

    Output::new(options.format, options.shown)
        .report(&report)
        .context("Failed to write report")?;

    debug!(any_error = report.any_error, "count finished");
    Ok(!report.any_error)
}
