//! Named byte streams

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use super::reader::LineReader;
use crate::domain::CountError;

/// Display name used for standard input
pub const STDIN_NAME: &str = "stdin";

/// Boxed stream owned by a source
pub type Stream = Box<dyn Read + Send>;

/// A named byte stream owned by exactly one counting task
pub struct InputSource {
    name: String,
    stream: Stream,
}

impl InputSource {
    /// Wraps an arbitrary reader
    pub fn from_reader(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            name: name.into(),
            stream: Box::new(reader),
        }
    }

    /// Standard input, named `stdin`
    pub fn stdin() -> Self {
        Self::from_reader(STDIN_NAME, io::stdin())
    }

    /// Opens a file for reading.
    ///
    /// The display name is the path exactly as given. Directories are
    /// rejected here rather than failing on the first read.
    pub fn open(path: &Path) -> Result<Self, CountError> {
        let name = path.to_string_lossy().into_owned();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => return Err(CountError::Open { name, source }),
        };

        match file.metadata() {
            Ok(meta) if meta.is_dir() => Err(CountError::Open {
                name,
                source: io::Error::other("is a directory"),
            }),
            Ok(_) => Ok(Self::from_reader(name, file)),
            Err(source) => Err(CountError::Open { name, source }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Splits the source into its name and a bounded line reader
    pub fn into_lines(self) -> (String, LineReader<BufReader<Stream>>) {
        (self.name, LineReader::new(BufReader::new(self.stream)))
    }
}

impl std::fmt::Debug for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputSource").field("name", &self.name).finish()
    }
}
