//! # Counting Engine
//!
//! Runs the accumulator over files and assembles the results.
//!
//! ## Flow
//!
//! ```text
//! paths ──► fan_out (bounded rayon pool) ──► FileTask per path
//!                                               │ open → count
//!                                               ▼
//!           ordered slots [TaskResult; N] ◄─────┘
//!                    │
//!                    ▼
//!           AggregateReport { per_file, total, any_error }
//! ```
//!
//! Every task writes exactly one slot, addressed by its position in the
//! input list, so the report keeps input order whatever the completion
//! order. No task is cancelled or retried because a sibling failed.

mod aggregate;
mod task;

pub use aggregate::{fan_out, worker_count, AggregateReport, Aggregator, TOTAL_NAME};
pub use task::{FileTask, TaskResult, TaskState};
