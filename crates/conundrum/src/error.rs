use core::fmt;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::input::IStrError;

/// Errors which abort processing of a batch of records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input could not be read.
    #[error("{}: failed to read input", .path.display())]
    Io {
        path: Box<Path>,
        #[source]
        error: io::Error,
    },
    /// A line of input does not match the record grammar.
    #[error("{}:{pos}: malformed record", .path.display())]
    MalformedRecord {
        path: Box<Path>,
        pos: LineCol,
        #[source]
        error: IStrError,
    },
}

impl Error {
    /// Associate a parse error with the input it was raised for.
    pub fn malformed(path: &Path, data: &[u8], error: IStrError) -> Self {
        let pos = crate::env::pos_from(data, error.span());

        Self::MalformedRecord {
            path: path.into(),
            pos,
            error,
        }
    }
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The one-based line number.
    pub fn line(&self) -> usize {
        self.line + 1
    }

    /// The one-based column number.
    pub fn column(&self) -> usize {
        self.column + 1
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}
