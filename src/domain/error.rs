//! Errors raised while counting a single input source

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("cannot open {name}: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {name}: line exceeds {limit} bytes")]
    LineTooLong { name: String, limit: usize },
}

impl CountError {
    /// Name of the source the error belongs to
    pub fn name(&self) -> &str {
        match self {
            CountError::Open { name, .. }
            | CountError::Read { name, .. }
            | CountError::LineTooLong { name, .. } => name,
        }
    }

    /// Returns true if the source could not be opened
    pub fn is_open_error(&self) -> bool {
        matches!(self, CountError::Open { .. })
    }

    /// Returns true if the failure happened while reading an open source
    pub fn is_read_error(&self) -> bool {
        matches!(self, CountError::Read { .. } | CountError::LineTooLong { .. })
    }
}
