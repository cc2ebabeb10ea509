//! textstat - a `wc`-style text statistics tool
//!
//! Counts lines, words, letters and bytes in files or standard input.
//! Several files are counted concurrently on a bounded worker pool and
//! reported in the order they were given, followed by a total.

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod input;

pub use config::{Config, ConfigError, OutputFormat};
pub use domain::{CountError, CountSelection, Counter, Stats};
pub use engine::{AggregateReport, Aggregator, TaskResult};
