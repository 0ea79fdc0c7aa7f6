//! Records of games played with a bag of colored cubes.
//!
//! Each game reveals a few handfuls of red, green and blue cubes. This crate
//! parses such records, checks which games are possible with a given bag and
//! works out the smallest bag each game could have been played with.

#[macro_use]
mod macros;

pub mod cli;
pub mod cube;
pub mod env;
mod error;
pub mod game;
pub mod input;
pub mod totals;

pub use self::cube::{Color, CubeSet};
pub use self::error::{Error, LineCol};
pub use self::game::Game;
pub use self::totals::Totals;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, IStr, Split, W};
    pub use crate::{Color, CubeSet, Game, Totals};
    pub use anyhow::{anyhow, bail, Context, Result};
}
