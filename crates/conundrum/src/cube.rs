//! Cube colors and counts.

use core::fmt;

/// The color of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All colors in the order they're stored and printed in.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Match a color word exactly, returns `None` for anything unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use conundrum::Color;
    ///
    /// assert_eq!(Color::from_bytes(b"green"), Some(Color::Green));
    /// assert_eq!(Color::from_bytes(b"Green"), None);
    /// assert_eq!(Color::from_bytes(b"purple"), None);
    /// ```
    pub fn from_bytes(word: &[u8]) -> Option<Self> {
        match word {
            b"red" => Some(Color::Red),
            b"green" => Some(Color::Green),
            b"blue" => Some(Color::Blue),
            _ => None,
        }
    }

    /// The word used for the color in records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of red, green and blue cubes.
///
/// Used both for a single handful revealed during a game and for the contents
/// of a bag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeSet {
    /// The empty set.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// The default bag which games are checked against.
    pub const BUDGET: Self = Self::new(12, 13, 14);

    /// Construct a new set of cubes.
    #[inline]
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Get the count of the given color.
    #[inline]
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Blue => self.blue,
        }
    }

    /// Set the count of the given color, replacing any earlier count.
    #[inline]
    pub fn set(&mut self, color: Color, count: u32) {
        let slot = match color {
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Blue => &mut self.blue,
        };

        *slot = count;
    }

    /// Test if no color exceeds the count in `budget`.
    #[inline]
    pub fn fits_within(&self, budget: &CubeSet) -> bool {
        self.red <= budget.red && self.green <= budget.green && self.blue <= budget.blue
    }

    /// The pointwise maximum of two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use conundrum::CubeSet;
    ///
    /// let a = CubeSet::new(4, 0, 3);
    /// let b = CubeSet::new(1, 2, 6);
    /// assert_eq!(a.max(b), CubeSet::new(4, 2, 6));
    /// ```
    #[inline]
    #[must_use]
    pub fn max(self, other: CubeSet) -> CubeSet {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    /// The product of all counts, saturating at `u64::MAX`.
    #[inline]
    pub fn power(&self) -> u64 {
        u64::from(self.red)
            .saturating_mul(u64::from(self.green))
            .saturating_mul(u64::from(self.blue))
    }
}

impl fmt::Display for CubeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = Color::ALL.into_iter().filter(|c| self.get(*c) != 0);

        let Some(first) = it.next() else {
            return write!(f, "0 {}", Color::Red);
        };

        write!(f, "{} {first}", self.get(first))?;

        for color in it {
            write!(f, ", {} {color}", self.get(color))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, CubeSet};

    #[test]
    fn test_set_overwrites() {
        let mut set = CubeSet::ZERO;
        set.set(Color::Red, 1);
        set.set(Color::Red, 5);
        set.set(Color::Blue, 2);
        assert_eq!(set, CubeSet::new(5, 0, 2));
    }

    #[test]
    fn test_fits_within() {
        assert!(CubeSet::new(12, 13, 14).fits_within(&CubeSet::BUDGET));
        assert!(CubeSet::ZERO.fits_within(&CubeSet::ZERO));
        assert!(!CubeSet::new(0, 0, 15).fits_within(&CubeSet::BUDGET));
        assert!(!CubeSet::new(13, 0, 0).fits_within(&CubeSet::BUDGET));
    }

    #[test]
    fn test_power() {
        assert_eq!(CubeSet::new(4, 2, 6).power(), 48);
        assert_eq!(CubeSet::new(4, 0, 6).power(), 0);
        assert_eq!(CubeSet::new(u32::MAX, u32::MAX, u32::MAX).power(), u64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(CubeSet::new(4, 0, 3).to_string(), "4 red, 3 blue");
        assert_eq!(CubeSet::new(0, 2, 0).to_string(), "2 green");
        assert_eq!(CubeSet::ZERO.to_string(), "0 red");
    }
}
