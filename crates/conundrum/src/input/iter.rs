use std::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError};

/// Iterator over the lines of an [IStr], see [IStr::lines].
pub struct Lines<'i, 'a, T> {
    input: &'i mut IStr<'a>,
    _marker: PhantomData<T>,
}

impl<'i, 'a, T> Lines<'i, 'a, T> {
    pub(crate) fn new(input: &'i mut IStr<'a>) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Lines<'_, 'a, T>
where
    T: FromInput<'a>,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_line().transpose()
    }
}

/// Iterator over delimited pieces of an [IStr], see [IStr::split_str].
pub struct Splits<'a, 'd> {
    input: Option<IStr<'a>>,
    delim: &'d [u8],
}

impl<'a, 'd> Splits<'a, 'd> {
    pub(crate) fn new(input: IStr<'a>, delim: &'d [u8]) -> Self {
        Self {
            input: Some(input),
            delim,
        }
    }
}

impl<'a> Iterator for Splits<'a, '_> {
    type Item = IStr<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input.take()?;

        if self.delim.is_empty() {
            return Some(input);
        }

        let Some((head, tail)) = input.split_at_str(self.delim) else {
            return Some(input);
        };

        self.input = Some(tail);
        Some(head)
    }
}

/// Iterator over inputs.
pub trait InputIterator<'a> {
    /// Get the next chunk.
    fn next(&mut self) -> Option<IStr<'a>>;
}

impl<'a, I> InputIterator<'a> for &mut I
where
    I: InputIterator<'a>,
{
    #[inline]
    fn next(&mut self) -> Option<IStr<'a>> {
        (**self).next()
    }
}

/// Splits off one chunk at a time, see [IStr::splitn].
pub struct SplitN<'i, 'a> {
    input: &'i mut IStr<'a>,
    byte: u8,
}

impl<'i, 'a> SplitN<'i, 'a> {
    pub(crate) fn new(input: &'i mut IStr<'a>, byte: u8) -> Self {
        Self { input, byte }
    }
}

impl<'a> InputIterator<'a> for SplitN<'_, 'a> {
    #[inline]
    fn next(&mut self) -> Option<IStr<'a>> {
        self.input.split_once(self.byte)
    }
}
