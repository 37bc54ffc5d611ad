//! All kinds of errors in this crate.

use crate::cells::Cell;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Width and height should be positive.
    NonPositiveError,
    /// Cell {0} lies outside of the bounded universe.
    OutOfBounds(Cell),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// B0 rules are not supported.
    B0Error,
    /// Density should be between 0 and 1, got {0}.
    InvalidDensity(f64),
    /// Unable to read the pattern: {0}.
    PatternError(String),
}
