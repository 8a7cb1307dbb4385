//! Submodule defining the errors used across the crate.

use crate::parser::ParseError;

/// Errors that abort turning benchmark output into a chart document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A benchmark result line had the expected shape but could not be decoded.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based number of the offending input line.
        line: usize,
        /// What went wrong while decoding it.
        #[source]
        source: ParseError,
    },

    /// Reading the input stream failed.
    #[error("failed to read benchmark output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the 1-based input line of a decode failure, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
