//! # Input Sources
//!
//! Uniform access to the byte streams being counted.
//!
//! - [`InputSource`] pairs a display name with an exclusively owned stream
//!   (a file, standard input, or any reader in tests). Dropping it closes
//!   the stream.
//! - [`LineReader`] splits a buffered stream into `\n`-terminated segments
//!   and refuses lines longer than [`MAX_LINE_BYTES`].

mod reader;
mod source;

pub use reader::{LineError, LineReader, MAX_LINE_BYTES};
pub use source::{InputSource, Stream, STDIN_NAME};
