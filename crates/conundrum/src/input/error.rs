use core::fmt;
use core::ops::Range;

use crate::env::Size;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(Box<str>),
    NotUtf8,
    ExpectedLine,
    ExpectedTuple(usize),
    UnexpectedEof,
    /// A delimiter which separates two required parts is missing.
    MissingDelimiter(&'static str),
    /// A specific word was expected, but something else was found.
    ExpectedWord(&'static str, Box<str>),
    /// Expected a record header like `Game 11`.
    ExpectedHeader,
    /// Expected a count followed by a color.
    ExpectedPull,
    TrailingInput(Box<str>),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::MissingDelimiter(d) => write!(f, "missing delimiter `{d}`"),
            ErrorKind::ExpectedWord(expected, actual) => {
                write!(f, "expected `{expected}`, but got `{actual}`")
            }
            ErrorKind::ExpectedHeader => write!(f, "expected header like `Game <id>`"),
            ErrorKind::ExpectedPull => write!(f, "expected count and color like `3 blue`"),
            ErrorKind::TrailingInput(rest) => write!(f, "trailing input `{rest}`"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through string processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The span of input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<Size> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.span.start.get();
        let end = self.span.end.get();
        write!(f, "{} (at {start}..{end})", self.kind)
    }
}

impl std::error::Error for IStrError {}
