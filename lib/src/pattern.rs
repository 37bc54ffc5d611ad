#![cfg(feature = "read-rle")]
//! Reading patterns from [RLE](https://conwaylife.com/wiki/Rle) and
//! [Plaintext](https://conwaylife.com/wiki/Plaintext) files.

use crate::{cells::Cell, error::Error};
use ca_formats::{plaintext::Plaintext, rle::Rle, CellData};
use std::convert::TryFrom;

/// A pattern read from a file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    /// Width of the bounding box.
    pub width: i32,
    /// Height of the bounding box.
    pub height: i32,
    /// The rule string in the header, if any.
    pub rule_string: Option<String>,
    /// Living cells, relative to the top-left corner of the bounding box.
    pub cells: Vec<Cell>,
}

impl Pattern {
    /// Moves the pattern so that its top-left corner is at `origin`.
    pub fn translate(&self, origin: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |&cell| cell + origin)
    }
}

fn to_cell(data: CellData) -> Result<Option<Cell>, Error> {
    if data.state == 0 {
        return Ok(None);
    }
    let (x, y) = data.position;
    let x = i32::try_from(x).map_err(|e| Error::PatternError(e.to_string()))?;
    let y = i32::try_from(y).map_err(|e| Error::PatternError(e.to_string()))?;
    Ok(Some(Cell::new(x, y)))
}

/// Moves cells with negative coordinates (from a CXRLE `Pos`, for example)
/// into the first quadrant, and returns the size of the bounding box.
fn normalize(cells: &mut [Cell]) -> (i32, i32) {
    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0).min(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0).min(0);
    let offset = Cell::new(-min_x, -min_y);
    for cell in cells.iter_mut() {
        *cell = *cell + offset;
    }
    let width = cells.iter().map(|c| c.x + 1).max().unwrap_or(0);
    let height = cells.iter().map(|c| c.y + 1).max().unwrap_or(0);
    (width, height)
}

/// Reads a pattern in RLE format.
///
/// The size in the header is used when it is present, otherwise the
/// bounding box of the living cells.
pub fn parse_rle(text: &str) -> Result<Pattern, Error> {
    let rle = Rle::new(text).map_err(|e| Error::PatternError(e.to_string()))?;
    let header = rle.header_data().cloned();
    let mut cells = Vec::new();
    for data in rle {
        let data = data.map_err(|e| Error::PatternError(e.to_string()))?;
        if let Some(cell) = to_cell(data)? {
            cells.push(cell);
        }
    }
    let (mut width, mut height) = normalize(&mut cells);
    let mut rule_string = None;
    if let Some(header) = header {
        width = width.max(i32::try_from(header.x).unwrap_or(i32::MAX));
        height = height.max(i32::try_from(header.y).unwrap_or(i32::MAX));
        rule_string = header.rule;
    }
    Ok(Pattern {
        width,
        height,
        rule_string,
        cells,
    })
}

/// Reads a pattern in Plaintext format.
pub fn parse_plaintext(text: &str) -> Result<Pattern, Error> {
    let plaintext = Plaintext::new(text).map_err(|e| Error::PatternError(e.to_string()))?;
    let mut cells = Vec::new();
    for data in plaintext {
        let data = data.map_err(|e| Error::PatternError(e.to_string()))?;
        if let Some(cell) = to_cell(data.into())? {
            cells.push(cell);
        }
    }
    let (width, height) = normalize(&mut cells);
    Ok(Pattern {
        width,
        height,
        rule_string: None,
        cells,
    })
}
