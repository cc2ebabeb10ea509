//! # Command-Line Interface
//!
//! ## Commands
//!
//! | Command | Counts | Shows |
//! |---------|--------|-------|
//! | `textstat [-l] [-w] [-b] [PATHS]` | everything | lines + selected fields |
//! | `textstat line [PATHS]` | lines | lines |
//! | `textstat word [PATHS]` | words | words |
//! | `textstat char [PATHS]` | letters | letters |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable blocks with a separator rule
//! - `json` - One JSON object per line
//! - `csv` - Header row, then one row per input
//!
//! ## Exit Status
//!
//! `0` when every input was counted, `1` when any input failed, `2` for
//! usage errors.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod count;
mod logging;
mod output;

pub use app::{run, Cli, Commands, CountFlags};
pub use count::{CountMode, RunOptions};
pub use output::Output;
