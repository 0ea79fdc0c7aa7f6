//! Parsing of game records.
//!
//! A record looks like this:
//!
//! ```text
//! Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
//! ```
//!
//! Handfuls are separated by `; ` and the pulls within a handful by `, `.
//! Colors other than `red`, `green` and `blue` are ignored, and if a color is
//! repeated within a handful the last count is used.

#[cfg(test)]
mod tests;

use core::fmt;
use core::str::FromStr;

use crate::cube::{Color, CubeSet};
use crate::input::{ErrorKind, FromInput, IStr, IStrError, W};

/// A single game, identified by its id, along with every handful of cubes
/// revealed during it in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub subsets: Vec<CubeSet>,
}

impl Game {
    /// Test if the game could have been played with the given bag.
    ///
    /// # Examples
    ///
    /// ```
    /// use conundrum::{CubeSet, Game};
    ///
    /// let game: Game = "Game 4: 1 green, 3 red, 6 blue; 3 green, 15 blue, 14 red".parse()?;
    /// assert!(!game.is_possible(&CubeSet::BUDGET));
    /// assert!(game.is_possible(&CubeSet::new(14, 3, 15)));
    /// # Ok::<_, conundrum::input::IStrError>(())
    /// ```
    pub fn is_possible(&self, budget: &CubeSet) -> bool {
        self.subsets.iter().all(|subset| subset.fits_within(budget))
    }

    /// The smallest bag which makes every handful of the game possible.
    pub fn minimum_bag(&self) -> CubeSet {
        self.subsets
            .iter()
            .fold(CubeSet::ZERO, |bag, subset| bag.max(*subset))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {}:", self.id)?;

        let mut it = self.subsets.iter();

        if let Some(first) = it.next() {
            write!(f, " {first}")?;
        }

        for subset in it {
            write!(f, "; {subset}")?;
        }

        Ok(())
    }
}

impl FromStr for Game {
    type Err = IStrError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IStr::new(s.as_bytes()).next()
    }
}

impl<'a> FromInput<'a> for Game {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedLine
    }

    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>, IStrError> {
        let line = p.take().trim();

        if line.is_empty() {
            return Ok(None);
        }

        let Some((header, body)) = line.split_at_str(b":") else {
            return Err(IStrError::new(line.span(), ErrorKind::MissingDelimiter(":")));
        };

        let id = header_id(header.trim())?;
        let mut subsets = Vec::new();

        for subset in body.trim().split_str(b"; ") {
            subsets.push(cube_set(subset)?);
        }

        Ok(Some(Game { id, subsets }))
    }
}

/// The `Game <id>` part of a record.
struct Header(u32);

from_input!(|value: (W<&str>, u32)| -> Header {
    let (W(word), id) = value;

    if word != "Game" {
        return Err(ErrorKind::ExpectedWord("Game", word.into()));
    }

    Ok(Header(id))
});

/// A count and a color, like `3 blue`.
struct Pull {
    count: u32,
    color: Option<Color>,
}

from_input!(|value: (u32, W<&[u8]>)| -> Pull {
    let (count, W(color)) = value;

    Ok(Pull {
        count,
        color: Color::from_bytes(color),
    })
});

fn header_id(mut header: IStr<'_>) -> Result<u32, IStrError> {
    let span = header.span();

    let Some(Header(id)) = header.try_next()? else {
        return Err(IStrError::new(span, ErrorKind::ExpectedHeader));
    };

    if !header.is_blank() {
        let rest = header.trim();
        let kind = ErrorKind::TrailingInput(rest.as_bstr().to_string().into());
        return Err(IStrError::new(rest.span(), kind));
    }

    Ok(id)
}

fn cube_set(subset: IStr<'_>) -> Result<CubeSet, IStrError> {
    let mut set = CubeSet::ZERO;

    for mut pull in subset.split_str(b", ") {
        let span = pull.span();

        let Some(Pull { count, color }) = pull.try_next()? else {
            return Err(IStrError::new(span, ErrorKind::ExpectedPull));
        };

        if let Some(color) = color {
            set.set(color, count);
        }
    }

    Ok(set)
}
