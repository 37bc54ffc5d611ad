//! A grid that stores one flag per cell.

use super::Grid;
use crate::{
    boundary::Boundary,
    cells::{Cell, Dimension},
};
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

/// A grid that stores the state of every cell in a flat row-major buffer.
///
/// The cell `(x, y)` is at index `y * width + x`.
/// [`is_alive`](Grid::is_alive) takes `O(1)` time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DenseGrid {
    dim: Dimension,
    boundary: Boundary,
    states: Box<[bool]>,
    population: usize,
}

impl DenseGrid {
    /// States of a row, from left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in `[0, height)`.
    pub fn row(&self, y: i32) -> &[bool] {
        assert!(0 <= y && y < self.dim.height, "row {} out of range", y);
        let width = self.dim.width as usize;
        let start = y as usize * width;
        &self.states[start..start + width]
    }

    /// States of all cells, in row-major order.
    pub fn states(&self) -> &[bool] {
        &self.states
    }
}

impl Grid for DenseGrid {
    fn from_live_set(dim: Dimension, boundary: Boundary, cells: BTreeSet<Cell>) -> Self {
        let mut states = vec![false; dim.area()];
        for &cell in cells.iter() {
            states[dim.index(cell)] = true;
        }
        DenseGrid {
            dim,
            boundary,
            states: states.into_boxed_slice(),
            population: cells.len(),
        }
    }

    fn from_states(dim: Dimension, boundary: Boundary, states: Vec<bool>) -> Self {
        debug_assert_eq!(states.len(), dim.area());
        let population = states.iter().filter(|&&alive| alive).count();
        DenseGrid {
            dim,
            boundary,
            states: states.into_boxed_slice(),
            population,
        }
    }

    #[inline]
    fn dim(&self) -> Dimension {
        self.dim
    }

    #[inline]
    fn boundary(&self) -> Boundary {
        self.boundary
    }

    #[inline]
    fn is_alive(&self, cell: Cell) -> bool {
        self.dim.contains(cell) && self.states[self.dim.index(cell)]
    }

    #[inline]
    fn population(&self) -> usize {
        self.population
    }

    fn live_cells(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        let dim = self.dim;
        Box::new(
            self.states
                .iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(i, _)| dim.cell_at(i)),
        )
    }

    fn cells(&self) -> Box<dyn Iterator<Item = (Cell, bool)> + '_> {
        let dim = self.dim;
        Box::new(
            self.states
                .iter()
                .enumerate()
                .map(move |(i, &alive)| (dim.cell_at(i), alive)),
        )
    }
}

impl Display for DenseGrid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.plaintext())
    }
}
