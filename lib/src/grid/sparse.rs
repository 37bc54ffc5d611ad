//! A grid that only stores the living cells.

use super::Grid;
use crate::{
    boundary::Boundary,
    cells::{Cell, Dimension},
};
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

/// A grid that only stores the living cells, in a [`BTreeSet`].
///
/// Efficient when most cells are dead. [`is_alive`](Grid::is_alive) takes
/// `O(log n)` time, where `n` is the population.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SparseGrid {
    dim: Dimension,
    boundary: Boundary,
    cells: BTreeSet<Cell>,
}

impl SparseGrid {
    /// The set of living cells.
    pub fn live_set(&self) -> &BTreeSet<Cell> {
        &self.cells
    }
}

impl Grid for SparseGrid {
    fn from_live_set(dim: Dimension, boundary: Boundary, cells: BTreeSet<Cell>) -> Self {
        SparseGrid {
            dim,
            boundary,
            cells,
        }
    }

    fn from_states(dim: Dimension, boundary: Boundary, states: Vec<bool>) -> Self {
        debug_assert_eq!(states.len(), dim.area());
        let cells = states
            .into_iter()
            .enumerate()
            .filter(|&(_, alive)| alive)
            .map(|(i, _)| dim.cell_at(i))
            .collect();
        SparseGrid {
            dim,
            boundary,
            cells,
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
        self.cells.contains(&cell)
    }

    #[inline]
    fn population(&self) -> usize {
        self.cells.len()
    }

    fn live_cells(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        Box::new(self.cells.iter().copied())
    }
}

impl Display for SparseGrid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.plaintext())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_states() {
        let dim = Dimension::new(3, 2).unwrap();
        let grid = SparseGrid::from_states(
            dim,
            Boundary::Bounded,
            vec![false, true, false, true, false, true],
        );
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(2, 1)]
        );
        assert_eq!(grid.to_string(), ".o.\no.o\n");
    }
}
