//! Reading input and mapping offsets in it back to positions.

use core::ops::Range;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, LineCol};
use crate::input::NL;

/// An absolute byte offset into the input being processed.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) const fn new(n: usize) -> Self {
        Self(n)
    }

    /// Get the offset as a `usize`.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the position at which `span` starts inside of `data`.
pub fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let start = span.start.get().min(data.len());

    let Some(before) = data.get(..start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, before).count();

    let column = match memchr::memrchr(NL, before) {
        Some(n) => start - n - 1,
        None => start,
    };

    LineCol::new(line, column)
}

/// Read the input at `path` into memory.
pub fn input(path: &Path) -> Result<Vec<u8>, Error> {
    return inner(path).map_err(|error| Error::Io {
        path: path.into(),
        error,
    });

    #[inline]
    fn inner(path: &Path) -> io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
