//! Snapshots of the universe.
//!
//! A grid is immutable once it is created. Stepping a grid produces a new one.
//!
//! There are two representations with the same observable behavior:
//! - [`SparseGrid`] only stores the living cells;
//! - [`DenseGrid`] stores one flag per cell.

use crate::{
    boundary::{Boundary, Topology},
    cells::{Cell, Dimension},
    error::Error,
    nbhd::{self, Neighbors},
};
use log::debug;
use rand::Rng;
use std::{collections::BTreeSet, fmt::Write};

mod any;
mod dense;
mod sparse;

pub use any::{AnyGrid, Representation};
pub use dense::DenseGrid;
pub use sparse::SparseGrid;

/// A snapshot of the universe.
///
/// Some details of this trait is hidden in the doc.
/// Please use [`SparseGrid`] or [`DenseGrid`] instead of implementing by yourself.
pub trait Grid: Sized + Sync {
    /// Creates a grid from a set of living cells.
    ///
    /// All cells must already be inside the universe.
    #[doc(hidden)]
    fn from_live_set(dim: Dimension, boundary: Boundary, cells: BTreeSet<Cell>) -> Self;

    /// Creates a grid from the states of all cells, in row-major order.
    ///
    /// The length of `states` must be the area of `dim`.
    #[doc(hidden)]
    fn from_states(dim: Dimension, boundary: Boundary, states: Vec<bool>) -> Self;

    /// The size of the universe.
    fn dim(&self) -> Dimension;

    /// The boundary policy.
    fn boundary(&self) -> Boundary;

    /// Whether the cell is alive.
    ///
    /// Coordinates outside of the universe are never alive.
    fn is_alive(&self, cell: Cell) -> bool;

    /// Number of living cells.
    fn population(&self) -> usize;

    /// Living cells, in row-major order.
    fn live_cells(&self) -> Box<dyn Iterator<Item = Cell> + '_>;

    /// Creates a grid with some living cells.
    ///
    /// For a bounded universe, every cell must lie in `[0, width) × [0, height)`,
    /// otherwise [`Error::OutOfBounds`] is returned.
    /// For a toroidal universe, cells are taken modulo the dimension.
    fn new<I>(dim: Dimension, boundary: Boundary, cells: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Cell>,
    {
        dim.validate()?;
        let cells = cells
            .into_iter()
            .map(|cell| boundary.resolve(cell, dim).ok_or(Error::OutOfBounds(cell)))
            .collect::<Result<BTreeSet<_>, _>>()?;
        debug!(
            "new {} {} grid with {} living cells",
            dim,
            boundary,
            cells.len()
        );
        Ok(Self::from_live_set(dim, boundary, cells))
    }

    /// Creates a grid where all cells are dead.
    fn empty(dim: Dimension, boundary: Boundary) -> Result<Self, Error> {
        dim.validate()?;
        Ok(Self::from_live_set(dim, boundary, BTreeSet::new()))
    }

    /// Creates a random grid.
    ///
    /// Each cell is alive with probability `density`, independently.
    fn random<R: Rng + ?Sized>(
        dim: Dimension,
        boundary: Boundary,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        dim.validate()?;
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        let states = (0..dim.area()).map(|_| rng.gen_bool(density)).collect();
        Ok(Self::from_states(dim, boundary, states))
    }

    /// Number of living neighbors of a cell, from 0 to 8.
    fn alive_neighbors(&self, cell: Cell) -> u8 {
        nbhd::distinct_positions(cell, self.dim(), self.boundary())
            .into_iter()
            .filter(|&n| self.is_alive(n))
            .count() as u8
    }

    /// Neighbors of a cell, split by their states.
    fn neighbors(&self, cell: Cell) -> Neighbors {
        nbhd::neighbors(self, cell)
    }

    /// All cells in the universe with their states, in row-major order.
    ///
    /// This is what a renderer needs to draw a frame.
    fn cells(&self) -> Box<dyn Iterator<Item = (Cell, bool)> + '_> {
        Box::new(self.dim().iter().map(move |cell| (cell, self.is_alive(cell))))
    }

    /// Whether two grids have the same size and the same living cells,
    /// regardless of their representations.
    fn same_cells<H: Grid>(&self, other: &H) -> bool {
        self.dim() == other.dim()
            && self.population() == other.population()
            && self.live_cells().eq(other.live_cells())
    }

    /// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    fn plaintext(&self) -> String {
        let dim = self.dim();
        let mut str = String::with_capacity(dim.area() + dim.height as usize);
        for (cell, alive) in self.cells() {
            str.push(if alive { 'o' } else { '.' });
            if cell.x == dim.width - 1 {
                str.push('\n');
            }
        }
        str
    }

    /// Displays the grid in [RLE](https://conwaylife.com/wiki/Rle) format,
    /// with a header line.
    fn rle(&self, rule_string: &str) -> String {
        let dim = self.dim();
        let mut str = String::new();
        writeln!(
            str,
            "x = {}, y = {}, rule = {}",
            dim.width, dim.height, rule_string
        )
        .unwrap();
        let mut rows = Vec::with_capacity(dim.height as usize);
        let mut row = String::new();
        let mut run: Option<(char, usize)> = None;
        for (cell, alive) in self.cells() {
            let tag = if alive { 'o' } else { 'b' };
            run = match run {
                Some((t, n)) if t == tag => Some((t, n + 1)),
                Some((t, n)) => {
                    push_run(&mut row, t, n);
                    Some((tag, 1))
                }
                None => Some((tag, 1)),
            };
            if cell.x == dim.width - 1 {
                // Trailing dead cells are implicit.
                if let Some((t, n)) = run.take() {
                    if t == 'o' {
                        push_run(&mut row, t, n);
                    }
                }
                rows.push(std::mem::take(&mut row));
            }
        }
        str.push_str(&rows.join("$"));
        str.push_str("!\n");
        str
    }
}

fn push_run(str: &mut String, tag: char, n: usize) {
    if n > 1 {
        write!(str, "{}", n).unwrap();
    }
    str.push(tag);
}
