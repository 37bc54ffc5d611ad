//! A grid whose representation is chosen at runtime.

use super::{DenseGrid, Grid, SparseGrid};
use crate::{
    automaton::Automaton,
    boundary::Boundary,
    cells::{Cell, Dimension},
    error::Error,
};
use auto_enums::auto_enum;
use educe::Educe;
use from_variants::FromVariants;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a grid stores its cells.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Representation {
    /// [`SparseGrid`].
    #[educe(Default)]
    Sparse,
    /// [`DenseGrid`].
    Dense,
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sparse" | "s" => Ok(Representation::Sparse),
            "dense" | "d" => Ok(Representation::Dense),
            _ => Err(String::from("invalid Representation")),
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            Representation::Sparse => "sparse",
            Representation::Dense => "dense",
        };
        write!(f, "{}", s)
    }
}

/// Either a [`SparseGrid`] or a [`DenseGrid`].
///
/// Stepping keeps the representation.
#[derive(Clone, Debug, PartialEq, Eq, FromVariants)]
pub enum AnyGrid {
    Sparse(SparseGrid),
    Dense(DenseGrid),
}

impl AnyGrid {
    /// Creates a grid with the given representation.
    ///
    /// See [`Grid::new`].
    pub fn new<I>(
        representation: Representation,
        dim: Dimension,
        boundary: Boundary,
        cells: I,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Cell>,
    {
        Ok(match representation {
            Representation::Sparse => SparseGrid::new(dim, boundary, cells)?.into(),
            Representation::Dense => DenseGrid::new(dim, boundary, cells)?.into(),
        })
    }

    pub fn representation(&self) -> Representation {
        match self {
            AnyGrid::Sparse(_) => Representation::Sparse,
            AnyGrid::Dense(_) => Representation::Dense,
        }
    }

    pub fn dim(&self) -> Dimension {
        match self {
            AnyGrid::Sparse(grid) => grid.dim(),
            AnyGrid::Dense(grid) => grid.dim(),
        }
    }

    pub fn boundary(&self) -> Boundary {
        match self {
            AnyGrid::Sparse(grid) => grid.boundary(),
            AnyGrid::Dense(grid) => grid.boundary(),
        }
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        match self {
            AnyGrid::Sparse(grid) => grid.is_alive(cell),
            AnyGrid::Dense(grid) => grid.is_alive(cell),
        }
    }

    pub fn population(&self) -> usize {
        match self {
            AnyGrid::Sparse(grid) => grid.population(),
            AnyGrid::Dense(grid) => grid.population(),
        }
    }

    /// Living cells, in row-major order.
    #[auto_enum(Iterator)]
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        match self {
            AnyGrid::Sparse(grid) => grid.live_set().iter().copied(),
            AnyGrid::Dense(grid) => grid.live_cells(),
        }
    }

    /// See [`Grid::cells`].
    pub fn cells(&self) -> Box<dyn Iterator<Item = (Cell, bool)> + '_> {
        match self {
            AnyGrid::Sparse(grid) => grid.cells(),
            AnyGrid::Dense(grid) => grid.cells(),
        }
    }

    /// See [`Grid::plaintext`].
    pub fn plaintext(&self) -> String {
        match self {
            AnyGrid::Sparse(grid) => grid.plaintext(),
            AnyGrid::Dense(grid) => grid.plaintext(),
        }
    }

    /// See [`Grid::rle`].
    pub fn rle(&self, rule_string: &str) -> String {
        match self {
            AnyGrid::Sparse(grid) => grid.rle(rule_string),
            AnyGrid::Dense(grid) => grid.rle(rule_string),
        }
    }

    /// Computes the next generation with the automaton.
    pub fn step(&self, automaton: &Automaton) -> Self {
        match self {
            AnyGrid::Sparse(grid) => automaton.step(grid).into(),
            AnyGrid::Dense(grid) => automaton.step(grid).into(),
        }
    }
}

impl Display for AnyGrid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AnyGrid::Sparse(grid) => Display::fmt(grid, f),
            AnyGrid::Dense(grid) => Display::fmt(grid, f),
        }
    }
}
