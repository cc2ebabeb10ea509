//! Statistics accumulator
//!
//! One counting routine serves every mode; the [`CountSelection`] decides
//! which counters are filled in.
//!
//! Unit definitions:
//! - line: a `\n`-terminated segment, or a non-empty trailing segment
//! - letter: a code point in Unicode general category L (any script)
//! - word: a maximal run of letters, decimal digits, `_`, `'` or `-`
//! - byte: raw stream length, independent of encoding

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::CountError;
use super::stats::{CountSelection, Stats};
use crate::input::{InputSource, LineError};

static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}").unwrap());
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{Nd}_'-]+").unwrap());

/// Counts letters in a piece of text
pub fn count_letters(text: &str) -> u64 {
    LETTER.find_iter(text).count() as u64
}

/// Counts word tokens in a piece of text
pub fn count_words(text: &str) -> u64 {
    WORD.find_iter(text).count() as u64
}

/// Parameterized accumulator shared by all counting modes
#[derive(Debug, Clone, Copy, Default)]
pub struct Counter {
    selection: CountSelection,
}

impl Counter {
    pub fn new(selection: CountSelection) -> Self {
        Self { selection }
    }

    /// Consumes the source to the end and returns its statistics.
    ///
    /// Any read failure discards the partial counts.
    pub fn count(&self, source: InputSource) -> Result<Stats, CountError> {
        let (name, mut lines) = source.into_lines();
        let mut stats = Stats::named(name);

        loop {
            let line = match lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(LineError::Io(source)) => {
                    return Err(CountError::Read {
                        name: stats.name,
                        source,
                    })
                }
                Err(LineError::TooLong { limit }) => {
                    return Err(CountError::LineTooLong {
                        name: stats.name,
                        limit,
                    })
                }
            };

            self.accumulate(&mut stats, line);
        }

        Ok(stats)
    }

    fn accumulate(&self, stats: &mut Stats, line: &[u8]) {
        if self.selection.bytes {
            stats.bytes += line.len() as u64;
        }
        if self.selection.lines {
            stats.lines += 1;
        }
        if self.selection.needs_text() {
            let text: Cow<'_, str> = String::from_utf8_lossy(line);
            if self.selection.letters {
                stats.letters += count_letters(&text);
            }
            if self.selection.words {
                stats.words += count_words(&text);
            }
        }
    }
}
