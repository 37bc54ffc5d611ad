//! Drawing generations as text.

use conlife_lib::AnyGrid;

#[cfg(feature = "tui")]
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
#[cfg(feature = "tui")]
use std::io::{self, Write};

/// Glyphs for living and dead cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Glyphs {
    pub(crate) live: char,
    pub(crate) dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            live: '#',
            dead: ' ',
        }
    }
}

/// Draws a grid, one line per row.
pub(crate) fn frame(grid: &AnyGrid, glyphs: Glyphs) -> String {
    let width = grid.dim().width;
    let mut str = String::with_capacity(grid.dim().area() + grid.dim().height as usize);
    for (cell, alive) in grid.cells() {
        str.push(if alive { glyphs.live } else { glyphs.dead });
        if cell.x == width - 1 {
            str.push('\n');
        }
    }
    str
}

/// The status line below a frame.
pub(crate) fn status(grid: &AnyGrid, gen: u64) -> String {
    format!("Gen: {}  Cells: {}", gen, grid.population())
}

/// Draws frames on a terminal.
///
/// Each frame moves the cursor home and clears the screen first.
/// The cursor is never hidden.
#[cfg(feature = "tui")]
pub(crate) struct Screen<W: Write> {
    out: W,
    glyphs: Glyphs,
}

#[cfg(feature = "tui")]
impl<W: Write> Screen<W> {
    pub(crate) fn new(out: W, glyphs: Glyphs) -> Self {
        Screen { out, glyphs }
    }

    pub(crate) fn draw(&mut self, grid: &AnyGrid, gen: u64) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        self.out.write_all(frame(grid, self.glyphs).as_bytes())?;
        writeln!(self.out, "{}", status(grid, gen))?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
