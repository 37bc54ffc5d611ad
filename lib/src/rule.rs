//! Totalistic Life-like rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::error::Error;
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A totalistic Life-like rule, such as Conway's Game of Life (`B3/S23`).
///
/// The next state of a cell only depends on its own state and the number of
/// living cells in its Moore neighborhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// Whether a dead cell with `n` living neighbors becomes alive.
    birth: [bool; 9],
    /// Whether a living cell with `n` living neighbors stays alive.
    survival: [bool; 9],
}

/// Conway's Game of Life.
pub const CONWAY: Life = Life {
    birth: [false, false, false, true, false, false, false, false, false],
    survival: [false, false, true, true, false, false, false, false, false],
};

impl Default for Life {
    fn default() -> Self {
        CONWAY
    }
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Numbers greater than 8 are ignored.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for n in b.into_iter().filter(|&n| n <= 8) {
            birth[n as usize] = true;
        }
        for n in s.into_iter().filter(|&n| n <= 8) {
            survival[n as usize] = true;
        }
        Life { birth, survival }
    }

    /// Whether the rule contains `B0`.
    ///
    /// In other words, whether a dead cell with no living neighbors
    /// would become alive.
    pub fn has_b0(&self) -> bool {
        self.birth[0]
    }

    /// Whether a dead cell with `count` living neighbors is born.
    #[inline]
    pub fn born(&self, count: u8) -> bool {
        self.birth.get(count as usize).copied().unwrap_or(false)
    }

    /// Whether a living cell with `count` living neighbors survives.
    #[inline]
    pub fn survives(&self, count: u8) -> bool {
        self.survival.get(count as usize).copied().unwrap_or(false)
    }

    /// The state of a cell in the next generation.
    #[inline]
    pub fn next_state(&self, alive: bool, count: u8) -> bool {
        if alive {
            self.survives(count)
        } else {
            self.born(count)
        }
    }
}

impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        if rule.has_b0() {
            Err(Error::B0Error)
        } else {
            Ok(rule)
        }
    }
}

/// Displays the rule in `B/S` notation.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "B")?;
        for (n, _) in self.birth.iter().enumerate().filter(|(_, &b)| b) {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for (n, _) in self.survival.iter().enumerate().filter(|(_, &s)| s) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
