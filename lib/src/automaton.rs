//! Computing the next generation.

use crate::{
    cells::Cell,
    grid::Grid,
    nbhd::Neighbors,
    rule::Life,
};
use educe::Educe;
use log::trace;
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to evaluate a generation.
///
/// All strategies give the same result.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Applies the rule to every cell of the universe.
    ///
    /// Takes `O(width * height)` time.
    Scan,

    /// Only looks at the living cells and their neighbors.
    ///
    /// Each living cell is checked for survival, and each dead neighbor
    /// it touches gets one tally. Dead cells whose tally satisfies the
    /// birth condition are born. Better when the population is small
    /// compared to the universe.
    #[educe(Default)]
    Sparse,

    /// Same as [`Scan`](Strategy::Scan), but rows are split across threads.
    ///
    /// Without the `parallel` feature, it falls back to `Scan`.
    #[cfg_attr(feature = "serde", serde(rename = "parallel"))]
    ParallelScan,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(Strategy::Scan),
            "sparse" => Ok(Strategy::Sparse),
            "parallel" => Ok(Strategy::ParallelScan),
            _ => Err(String::from("invalid Strategy")),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            Strategy::Scan => "scan",
            Strategy::Sparse => "sparse",
            Strategy::ParallelScan => "parallel",
        };
        write!(f, "{}", s)
    }
}

/// The cellular automaton.
///
/// It holds no state between generations:
/// [`step`](Automaton::step) is a pure function of its input grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Automaton {
    /// The rule.
    pub rule: Life,
    /// The evaluation strategy.
    pub strategy: Strategy,
}

impl Automaton {
    /// Creates a new automaton.
    pub fn new(rule: Life, strategy: Strategy) -> Self {
        Automaton { rule, strategy }
    }

    /// Computes the next generation.
    ///
    /// The result has the same dimension, boundary policy and representation
    /// as the input. The input is left untouched.
    pub fn step<G: Grid>(&self, grid: &G) -> G {
        trace!(
            "step {} with {} living cells",
            self.strategy,
            grid.population()
        );
        match self.strategy {
            Strategy::Scan => self.scan(grid),
            Strategy::Sparse => self.sparse(grid),
            #[cfg(feature = "parallel")]
            Strategy::ParallelScan => self.parallel_scan(grid),
            #[cfg(not(feature = "parallel"))]
            Strategy::ParallelScan => self.scan(grid),
        }
    }

    /// Computes the `n`-th generation after `grid`.
    pub fn step_n<G: Grid + Clone>(&self, grid: &G, n: usize) -> G {
        let mut grid = grid.clone();
        for _ in 0..n {
            grid = self.step(&grid);
        }
        grid
    }

    #[inline]
    fn next_state<G: Grid>(&self, grid: &G, cell: Cell) -> bool {
        self.rule
            .next_state(grid.is_alive(cell), grid.alive_neighbors(cell))
    }

    fn scan<G: Grid>(&self, grid: &G) -> G {
        let dim = grid.dim();
        let states = dim.iter().map(|cell| self.next_state(grid, cell)).collect();
        G::from_states(dim, grid.boundary(), states)
    }

    /// Every worker reads only from `grid` and writes only to its own row.
    #[cfg(feature = "parallel")]
    fn parallel_scan<G: Grid>(&self, grid: &G) -> G {
        let dim = grid.dim();
        let mut states = vec![false; dim.area()];
        states
            .par_chunks_mut(dim.width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, state) in row.iter_mut().enumerate() {
                    *state = self.next_state(grid, Cell::new(x as i32, y as i32));
                }
            });
        G::from_states(dim, grid.boundary(), states)
    }

    fn sparse<G: Grid>(&self, grid: &G) -> G {
        let mut next = BTreeSet::new();
        let mut tally: BTreeMap<Cell, u8> = BTreeMap::new();

        for cell in grid.live_cells() {
            let Neighbors { alive, dead } = grid.neighbors(cell);
            if self.rule.survives(alive.len() as u8) {
                next.insert(cell);
            }
            for neighbor in dead {
                *tally.entry(neighbor).or_insert(0) += 1;
            }
        }

        // The tally of a dead cell is exactly its number of living neighbors.
        next.extend(
            tally
                .into_iter()
                .filter(|&(_, count)| self.rule.born(count))
                .map(|(cell, _)| cell),
        );

        G::from_live_set(grid.dim(), grid.boundary(), next)
    }
}
