//! Summing up games into a report.


use core::fmt;
use core::ops::AddAssign;

use serde::Serialize;

use crate::cube::CubeSet;
use crate::game::Game;
use crate::input::{IStr, IStrError};

/// The two sums reported for a batch of games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of the ids of every game possible with the budget.
    pub possible: u64,
    /// Sum of the power of the minimum bag of every game.
    pub power: u64,
}

impl Totals {
    /// Construct totals out of the two sums.
    #[inline]
    pub const fn new(possible: u64, power: u64) -> Self {
        Self { possible, power }
    }

    /// Sum up the given games.
    pub fn from_games<'g, I>(games: I, budget: &CubeSet) -> Self
    where
        I: IntoIterator<Item = &'g Game>,
    {
        let mut totals = Self::default();

        for game in games {
            totals.record(game, budget);
        }

        totals
    }

    /// Add the contribution of a single game.
    pub fn record(&mut self, game: &Game, budget: &CubeSet) {
        let possible = game.is_possible(budget);
        let bag = game.minimum_bag();
        let power = bag.power();

        log::debug!(
            "game {id}: possible: {possible}, minimum bag: {bag}, power: {power}",
            id = game.id
        );

        if possible {
            self.possible = self.possible.saturating_add(u64::from(game.id));
        }

        self.power = self.power.saturating_add(power);
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Totals { possible, power } = self;
        write!(f, "possible: {possible}, power: {power}")
    }
}

impl AddAssign<&Totals> for Totals {
    fn add_assign(&mut self, rhs: &Totals) {
        self.possible = self.possible.saturating_add(rhs.possible);
        self.power = self.power.saturating_add(rhs.power);
    }
}

/// Parse every non-blank line of input as a [Game].
///
/// Fails on the first malformed line without returning any games.
pub fn parse_games(mut input: IStr<'_>) -> Result<Vec<Game>, IStrError> {
    input.lines::<Game>().collect()
}

/// Parse all games in the input and sum them up against `budget`.
///
/// # Examples
///
/// ```
/// use conundrum::input::IStr;
/// use conundrum::{totals, CubeSet, Totals};
///
/// let input = IStr::new(b"Game 1: 3 blue, 4 red\n\nGame 2: 20 red\n");
/// let totals = totals::run(input, &CubeSet::BUDGET)?;
/// assert_eq!(totals, Totals::new(1, 0));
/// # Ok::<_, conundrum::input::IStrError>(())
/// ```
pub fn run(input: IStr<'_>, budget: &CubeSet) -> Result<Totals, IStrError> {
    let games = parse_games(input)?;
    log::info!("parsed {} games, budget: {budget}", games.len());
    Ok(Totals::from_games(&games, budget))
}
