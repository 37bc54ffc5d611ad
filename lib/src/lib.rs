//! A [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life) engine.
//!
//! A [`Grid`] is an immutable snapshot of a finite universe, bounded or
//! toroidal. An [`Automaton`] turns a grid into the next generation.
//!
//! ```rust
//! use conlife_lib::{Automaton, Boundary, Cell, Dimension, Grid, SparseGrid};
//!
//! let dim = Dimension::new(5, 5)?;
//! let blinker = SparseGrid::new(dim, Boundary::Bounded, vec![(1, 2), (2, 2), (3, 2)]
//!     .into_iter()
//!     .map(Cell::from))?;
//! let next = Automaton::default().step(&blinker);
//! assert_eq!(next.plaintext(), ".....\n..o..\n..o..\n..o..\n.....\n");
//! # Ok::<(), conlife_lib::Error>(())
//! ```

mod automaton;
mod boundary;
mod cells;
mod config;
mod error;
mod grid;
pub mod nbhd;
pub mod pattern;
mod rule;

pub use automaton::{Automaton, Strategy};
pub use boundary::{Boundary, Bounded, Topology, Torus};
pub use cells::{Cell, Dimension};
pub use config::Config;
pub use error::Error;
pub use grid::{AnyGrid, DenseGrid, Grid, Representation, SparseGrid};
pub use rule::{Life, CONWAY};
