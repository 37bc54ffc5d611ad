//! The Moore neighborhood.

use crate::{
    boundary::Topology,
    cells::{Cell, Dimension},
    grid::Grid,
};
use std::collections::BTreeSet;

/// Offsets of the eight neighbors, in row-major order.
pub const NBHD: [Cell; 8] = [
    Cell::new(-1, -1),
    Cell::new(0, -1),
    Cell::new(1, -1),
    Cell::new(-1, 0),
    Cell::new(1, 0),
    Cell::new(-1, 1),
    Cell::new(0, 1),
    Cell::new(1, 1),
];

/// The neighbors of a cell, split by their states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    /// Living neighbors.
    pub alive: BTreeSet<Cell>,
    /// Dead neighbors.
    pub dead: BTreeSet<Cell>,
}

/// Positions of the neighbors of a cell under a boundary policy.
///
/// Positions that do not exist under the policy are skipped.
/// On a very small torus, the same position might appear more than once.
pub fn positions<T: Topology>(
    cell: Cell,
    dim: Dimension,
    topology: T,
) -> impl Iterator<Item = Cell> {
    NBHD.into_iter()
        .filter_map(move |offset| topology.resolve(cell + offset, dim))
}

/// Distinct positions of the neighbors of a cell.
///
/// The cell itself is included only when the universe is so small that
/// it wraps onto itself.
pub fn distinct_positions<T: Topology>(cell: Cell, dim: Dimension, topology: T) -> BTreeSet<Cell> {
    positions(cell, dim, topology).collect()
}

/// Splits the neighbors of a cell into living and dead ones.
pub fn neighbors<G: Grid>(grid: &G, cell: Cell) -> Neighbors {
    let (alive, dead) = distinct_positions(cell, grid.dim(), grid.boundary())
        .into_iter()
        .partition(|&n| grid.is_alive(n));
    Neighbors { alive, dead }
}
