//! Counting domain
//!
//! Statistics records and the accumulator that fills them, free of any
//! file-system or presentation concerns.

mod counter;
mod error;
mod stats;

pub use counter::{count_letters, count_words, Counter};
pub use error::CountError;
pub use stats::{CountSelection, Stats};
