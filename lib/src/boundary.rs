//! Boundary policies.
//!
//! A boundary policy decides what lies beyond the edges of the universe.
//! It maps a coordinate which might be outside of `[0, width) × [0, height)`
//! to the cell it actually refers to, if any.

use crate::cells::{Cell, Dimension};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A boundary policy.
pub trait Topology {
    /// Resolves a coordinate to a cell in the universe.
    ///
    /// Returns `None` if the coordinate does not refer to any cell.
    fn resolve(&self, cell: Cell, dim: Dimension) -> Option<Cell>;
}

/// The universe is a rectangle.
///
/// Everything outside of it is permanently dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounded;

impl Topology for Bounded {
    #[inline]
    fn resolve(&self, cell: Cell, dim: Dimension) -> Option<Cell> {
        if dim.contains(cell) {
            Some(cell)
        } else {
            None
        }
    }
}

/// The universe is a torus.
///
/// The left edge is glued to the right edge, and the top edge to the bottom edge.
/// Each axis wraps around with its own size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Torus;

impl Torus {
    #[inline]
    fn wrap(coord: i32, size: i32) -> i32 {
        coord.rem_euclid(size)
    }
}

impl Topology for Torus {
    #[inline]
    fn resolve(&self, cell: Cell, dim: Dimension) -> Option<Cell> {
        Some(Cell::new(
            Self::wrap(cell.x, dim.width),
            Self::wrap(cell.y, dim.height),
        ))
    }
}

/// Which boundary policy a grid uses.
///
/// It is chosen once when the grid is created.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Boundary {
    /// See [`Bounded`].
    #[educe(Default)]
    Bounded,
    /// See [`Torus`].
    Torus,
}

impl Topology for Boundary {
    #[inline]
    fn resolve(&self, cell: Cell, dim: Dimension) -> Option<Cell> {
        match self {
            Boundary::Bounded => Bounded.resolve(cell, dim),
            Boundary::Torus => Torus.resolve(cell, dim),
        }
    }
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bounded" | "b" => Ok(Boundary::Bounded),
            "torus" | "toroidal" | "t" => Ok(Boundary::Torus),
            _ => Err(String::from("invalid Boundary")),
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            Boundary::Bounded => "bounded",
            Boundary::Torus => "torus",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIM: Dimension = Dimension {
        width: 4,
        height: 3,
    };

    #[test]
    fn bounded_drops_outside() {
        assert_eq!(Bounded.resolve(Cell::new(0, 0), DIM), Some(Cell::new(0, 0)));
        assert_eq!(Bounded.resolve(Cell::new(-1, 0), DIM), None);
        assert_eq!(Bounded.resolve(Cell::new(4, 2), DIM), None);
        assert_eq!(Bounded.resolve(Cell::new(3, 3), DIM), None);
    }

    #[test]
    fn torus_wraps_each_axis() {
        assert_eq!(Torus.resolve(Cell::new(-1, -1), DIM), Some(Cell::new(3, 2)));
        assert_eq!(Torus.resolve(Cell::new(4, 3), DIM), Some(Cell::new(0, 0)));
        // y wraps with the height, not the width.
        assert_eq!(Torus.resolve(Cell::new(0, 3), DIM), Some(Cell::new(0, 0)));
        assert_eq!(Torus.resolve(Cell::new(-9, 7), DIM), Some(Cell::new(3, 1)));
    }

    #[test]
    fn torus_wraps_near_i32_max() {
        let wide = Dimension {
            width: 2_000_000_000,
            height: 5,
        };
        assert_eq!(
            Torus.resolve(Cell::new(1_000_000_001, 0), wide),
            Some(Cell::new(1_000_000_001, 0))
        );
        assert_eq!(
            Torus.resolve(Cell::new(2_000_000_000, -1), wide),
            Some(Cell::new(0, 4))
        );
        assert_eq!(
            Torus.resolve(Cell::new(-1, 5), wide),
            Some(Cell::new(1_999_999_999, 0))
        );
        let widest = Dimension {
            width: i32::MAX,
            height: 1,
        };
        assert_eq!(
            Torus.resolve(Cell::new(i32::MAX, 0), widest),
            Some(Cell::new(0, 0))
        );
    }

    #[test]
    fn parse() {
        assert_eq!("torus".parse(), Ok(Boundary::Torus));
        assert_eq!("b".parse(), Ok(Boundary::Bounded));
        assert!("sphere".parse::<Boundary>().is_err());
        assert_eq!(Boundary::default(), Boundary::Bounded);
        assert_eq!(Boundary::Torus.to_string(), "torus");
    }
}
