//! Simulation configuration.

use crate::{
    automaton::{Automaton, Strategy},
    boundary::Boundary,
    cells::{Cell, Dimension},
    error::Error,
    grid::{AnyGrid, Representation},
    rule::Life,
};
use educe::Educe;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The automaton and the initial grid will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 50)]
    pub width: i32,

    /// Height.
    #[educe(Default = 50)]
    pub height: i32,

    /// What lies beyond the edges.
    pub boundary: Boundary,

    /// The rule string of the cellular automaton.
    #[educe(Default = "B3/S23")]
    pub rule_string: String,

    /// How to evaluate a generation.
    pub strategy: Strategy,

    /// How the grid stores its cells.
    pub representation: Representation,

    /// Living cells in the first generation.
    pub cells: Vec<Cell>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the size.
    pub fn set_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the boundary policy.
    pub fn set_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the evaluation strategy.
    pub fn set_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the representation of the grid.
    pub fn set_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Sets the living cells of the first generation.
    pub fn set_cells<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        self.cells = cells.into_iter().collect();
        self
    }

    /// The size of the universe.
    pub fn dim(&self) -> Result<Dimension, Error> {
        Dimension::new(self.width, self.height)
    }

    /// Creates the automaton.
    /// Returns an error if the rule string is invalid.
    pub fn automaton(&self) -> Result<Automaton, Error> {
        let rule: Life = self.rule_string.parse()?;
        debug!("rule {}, strategy {}", rule, self.strategy);
        Ok(Automaton::new(rule, self.strategy))
    }

    /// Creates the first generation.
    /// Returns an error if the size is not positive, or some cell lies
    /// outside of a bounded universe.
    pub fn grid(&self) -> Result<AnyGrid, Error> {
        AnyGrid::new(
            self.representation,
            self.dim()?,
            self.boundary,
            self.cells.iter().copied(),
        )
    }
}
