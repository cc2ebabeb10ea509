//! Statistics record and field selection
//!
//! A [`Stats`] value holds the four counters for one input source. Which of
//! them are actually computed is decided by a [`CountSelection`]; counters
//! outside the selection stay at zero.

use serde::Serialize;

/// Counts gathered from one input source (or the sum of several)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Display name: the path as given on the command line, or `stdin`
    pub name: String,
    pub letters: u64,
    pub words: u64,
    pub bytes: u64,
    pub lines: u64,
}

impl Stats {
    /// Creates an empty record with the given display name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds another record's counters to this one, keeping this name
    pub fn absorb(&mut self, other: &Stats) {
        self.letters += other.letters;
        self.words += other.words;
        self.bytes += other.bytes;
        self.lines += other.lines;
    }

    /// Returns true if every counter is zero
    pub fn is_zero(&self) -> bool {
        self.letters == 0 && self.words == 0 && self.bytes == 0 && self.lines == 0
    }
}

/// Which counters to compute (or display)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSelection {
    pub lines: bool,
    pub words: bool,
    pub letters: bool,
    pub bytes: bool,
}

impl CountSelection {
    pub const ALL: Self = Self {
        lines: true,
        words: true,
        letters: true,
        bytes: true,
    };

    pub const LINES: Self = Self {
        lines: true,
        words: false,
        letters: false,
        bytes: false,
    };

    pub const WORDS: Self = Self {
        lines: false,
        words: true,
        letters: false,
        bytes: false,
    };

    pub const LETTERS: Self = Self {
        lines: false,
        words: false,
        letters: true,
        bytes: false,
    };

    /// Returns true if nothing is selected
    pub fn is_empty(&self) -> bool {
        !(self.lines || self.words || self.letters || self.bytes)
    }

    /// Returns true if the line text has to be decoded as UTF-8
    pub fn needs_text(&self) -> bool {
        self.words || self.letters
    }
}

impl Default for CountSelection {
    fn default() -> Self {
        Self::ALL
    }
}
