//! Cells and the size of the universe.

use crate::error::Error;
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::Add,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// Both coordinates are 0-indexed. `x` grows to the right, `y` grows downwards.
///
/// Cells are ordered row by row: first by `y`, then by `x`.
/// This is also the order in which a frame is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// The x-coordinate (column).
    pub x: i32,
    /// The y-coordinate (row).
    pub y: i32,
}

impl Cell {
    /// Creates a cell at `(x, y)`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Translates a cell by an offset.
impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        Cell {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The size of the universe.
///
/// It never changes during the lifetime of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Dimension {
    /// Creates a new dimension.
    ///
    /// Returns an error if the width or the height is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        let dim = Dimension { width, height };
        dim.validate()?;
        Ok(dim)
    }

    /// Checks that both sides are positive.
    pub(crate) fn validate(self) -> Result<(), Error> {
        if self.width <= 0 || self.height <= 0 {
            Err(Error::NonPositiveError)
        } else {
            Ok(())
        }
    }

    /// Number of cells in the universe.
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the cell lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        0 <= cell.x && cell.x < self.width && 0 <= cell.y && cell.y < self.height
    }

    /// Index of a cell in a flat row-major buffer.
    ///
    /// The cell must be inside the universe.
    #[inline]
    pub(crate) fn index(self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// The cell at some index of a flat row-major buffer.
    #[inline]
    pub(crate) fn cell_at(self, index: usize) -> Cell {
        let width = self.width as usize;
        Cell::new((index % width) as i32, (index / width) as i32)
    }

    /// All cells in the universe, in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
