//! Input parser.

mod error;
mod iter;

#[cfg(test)]
mod tests;

use core::ops;
use std::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::{InputIterator, Lines, SplitN, Splits};

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// Borrows the data being parsed and keeps track of the absolute byte offset
/// of where it starts, so that errors can be mapped back to a line and column.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Offset of `data` in the original input.
    index: Size,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    ///
    /// # Examples
    ///
    /// ```
    /// use conundrum::input::IStr;
    ///
    /// let mut input = IStr::new(b"12 13\n14\n");
    /// assert_eq!(input.try_line::<(u32, u32)>()?, Some((12, 13)));
    /// assert_eq!(input.try_line::<u32>()?, Some(14));
    /// assert_eq!(input.try_line::<u32>()?, None);
    /// # Ok::<_, conundrum::input::IStrError>(())
    /// ```
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_index(data, Size::ZERO)
    }

    #[inline]
    pub(crate) fn with_index(data: &'a [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// The span covered by the remaining input.
    #[inline]
    pub fn span(&self) -> ops::Range<Size> {
        self.index..self.index.saturating_add(Size::new(self.data.len()))
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Test if input is empty or only contains whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(u8::is_ascii_whitespace)
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'a [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'a BStr {
        BStr::new(self.data)
    }

    /// Strip leading and trailing whitespace.
    pub fn trim(&self) -> IStr<'a> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());

        let n = match self.data.iter().rposition(|b| !b.is_ascii_whitespace()) {
            Some(n) => n + 1,
            None => s,
        };

        match self.slice(s..n) {
            Some(input) => input,
            None => IStr::with_index(&[], self.index.saturating_add(Size::new(s))),
        }
    }

    /// Take all of the remaining input, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> IStr<'a> {
        let taken = *self;
        self.advance(self.data.len());
        taken
    }

    /// Iterate over lines, parsing each as `T`.
    ///
    /// See [IStr::try_line] for which lines are skipped.
    #[inline]
    pub fn lines<T>(&mut self) -> Lines<'_, 'a, T> {
        Lines::new(self)
    }

    /// Split on the first occurrence of `delim`, returning what comes before
    /// and after it. Returns `None` if `delim` does not occur.
    #[inline]
    pub fn split_at_str(&self, delim: &[u8]) -> Option<(IStr<'a>, IStr<'a>)> {
        let at = memchr::memmem::find(self.data, delim)?;
        let head = self.slice(0..at)?;
        let tail = self.slice(at.checked_add(delim.len())?..self.data.len())?;
        Some((head, tail))
    }

    /// Iterate over the pieces separated by `delim`.
    ///
    /// Like [str::split], empty input produces a single empty piece.
    ///
    /// # Examples
    ///
    /// ```
    /// use conundrum::input::IStr;
    ///
    /// let pieces = IStr::new(b"a; b; c")
    ///     .split_str(b"; ")
    ///     .map(|s| s.as_bstr().to_string())
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(pieces, ["a", "b", "c"]);
    /// ```
    #[inline]
    pub fn split_str<'d>(self, delim: &'d [u8]) -> Splits<'a, 'd> {
        Splits::new(self, delim)
    }

    /// Split `N` times on the given byte.
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> SplitN<'_, 'a> {
        SplitN::new(self, byte)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput<'a>,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the line is
    /// not a valid value of type `T`.
    ///
    /// Lines for which `T` produces nothing, such as blank lines for most
    /// types, are skipped. Returns `Ok(None)` once the input is exhausted.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        while let Some(mut line) = self.split_once(NL) {
            if let Some(output) = line.try_next()? {
                return Ok(Some(output));
            }
        }

        Ok(None)
    }

    /// Try to parse the next whitespace-delimited word.
    ///
    /// Returns the absolute index at which the word starts.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput<'a>,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        let start = self.index.saturating_add(Size::new(s));
        self.advance(n);
        Ok(Some((start, value)))
    }

    fn split_once_at<T>(&mut self, find: T) -> Option<IStr<'a>>
    where
        T: FnOnce(&[u8]) -> Option<usize>,
    {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = find(self.data) else {
            let data = self.data;
            self.advance(data.len());
            return Some(IStr::with_index(data, index));
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(IStr::with_index(data, index))
    }

    /// Split once at the given byte or until the end of string, returning the
    /// new IStr associated with the split.
    #[inline]
    fn split_once(&mut self, b: u8) -> Option<IStr<'a>> {
        self.split_once_at(|data| memchr::memchr(b, data))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index.advance(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr<'a>> {
        let index = self.index.checked_add(Size::new(range.start))?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'a>: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Optionally try to consume input ignoring leading whitespace by default.
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr<'a>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Parse something from a sequence of inputs.
pub trait FromInputIter<'a>: Sized {
    /// Try to parse one value out of each input produced by the iterator.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator<'a>;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<'a, $first, $($rest,)*> FromInput<'a> for ($first, $($rest, )*)
        where
            $first: FromInput<'a>,
            $($rest: FromInput<'a>,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty) => {
        impl<'a> FromInput<'a> for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
                let Some((start, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(n) = string.parse::<$ty>() else {
                    return Err(IStrError::new(start..p.index, ErrorKind::NotInteger(string.into())));
                };

                Ok(Some(n))
            }
        }
    };
}

tuple!(2 => A a, B b);

integer!(u32);
integer!(u64);

impl<'a> FromInput<'a> for IStr<'a> {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        Ok(Some(p.take()))
    }
}

impl<'a> FromInput<'a> for &'a [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        Ok(Some(p.take().data))
    }
}

impl<'a> FromInput<'a> for &'a str {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

/// Split on byte `D`, parsing each piece separately.
///
/// # Examples
///
/// ```
/// use conundrum::input::{IStr, Split};
///
/// let Split([r, g, b]) = IStr::new(b"12,13,14").next::<Split<',', [u32; 3]>>()?;
/// assert_eq!((r, g, b), (12, 13, 14));
/// # Ok::<_, conundrum::input::IStrError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<'a, const D: char, T> FromInput<'a> for Split<D, T>
where
    T: FromInputIter<'a>,
{
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let it = p.splitn(D as u8);

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

impl<'a, const N: usize, T> FromInputIter<'a> for [T; N]
where
    T: FromInput<'a>,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator<'a>,
    {
        let mut array = ArrayVec::<T, N>::new();

        while array.remaining_capacity() > 0 {
            let Some(mut value) = it.next() else {
                return Ok(None);
            };

            let Some(value) = T::try_from_input(&mut value)? else {
                return Ok(None);
            };

            array.push(value);
        }

        Ok(array.into_inner().ok())
    }
}

/// Parse a word of input, which parses until we reach a whitespace character.
pub struct W<T>(pub T);

impl<'a, T> FromInput<'a> for W<T>
where
    T: FromInput<'a>,
{
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}
