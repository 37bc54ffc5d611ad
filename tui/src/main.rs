mod args;
mod error;
mod presets;
mod render;
mod settings;

use crate::{
    args::{Args, Format},
    error::Error,
};
use conlife_lib::{AnyGrid, Automaton};
use log::info;
use std::{
    io::{self, Write},
    process,
};

#[cfg(feature = "tui")]
use crate::render::Screen;
#[cfg(feature = "tui")]
use std::{thread, time::Duration};

/// Draws every generation, pausing between frames.
#[cfg(feature = "tui")]
fn animate(args: &Args, automaton: &Automaton, mut grid: AnyGrid) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut screen = Screen::new(stdout.lock(), args.glyphs);
    let delay = Duration::from_secs(1) / args.fps;
    let mut gen = 0;
    loop {
        screen.draw(&grid, gen)?;
        if args.gens == Some(gen) {
            break;
        }
        thread::sleep(delay);
        grid = grid.step(automaton);
        gen += 1;
    }
    Ok(())
}

/// Prints the last generation only.
fn print_last(args: &Args, automaton: &Automaton, mut grid: AnyGrid) -> Result<(), Error> {
    let gens = args.gens.unwrap_or_default();
    for _ in 0..gens {
        grid = grid.step(automaton);
    }
    info!("generation {}: {} cells", gens, grid.population());
    let text = match args.format {
        Format::Plaintext => grid.plaintext(),
        Format::Rle => grid.rle(&automaton.rule.to_string()),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn run(args: Args) -> Result<(), Error> {
    let automaton = args.config.automaton()?;
    let grid = args.config.grid()?;
    info!(
        "{} {} universe, {} cells, {} representation",
        grid.dim(),
        grid.boundary(),
        grid.population(),
        grid.representation()
    );

    #[cfg(feature = "tui")]
    if !args.no_tui {
        return animate(&args, &automaton, grid);
    }
    print_last(&args, &automaton, grid)
}

fn main() {
    let args = Args::parse().unwrap_or_else(|e| match e {
        Error::Clap(e) => e.exit(),
        e => {
            eprintln!("error: {}", e);
            process::exit(1)
        }
    });
    simple_logger::init_with_level(args.log_level).unwrap_or_else(|e| eprintln!("{}", e));
    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
