//! Parsing command-line arguments.

use crate::{
    error::Error,
    presets::{self, DEFAULT_PRESET, PRESET_NAMES},
    render::Glyphs,
    settings,
};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::ErrorKind, value_parser,
    Arg, ArgAction, ArgMatches, Command,
};
use conlife_lib::{
    pattern::{self, Pattern},
    Boundary, Cell, Config, Grid, Life, Representation, SparseGrid, Strategy,
};
use log::Level;
use rand::{rngs::StdRng, SeedableRng};
use std::{ffi::OsString, fs, path::PathBuf};

/// Output format of the last generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Plaintext,
    Rle,
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    /// Number of generations to run. `None` means forever.
    pub(crate) gens: Option<u64>,
    pub(crate) fps: u32,
    pub(crate) glyphs: Glyphs,
    pub(crate) format: Format,
    pub(crate) log_level: Level,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn command() -> Command {
    let command = Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life in the terminal\n\
             \n\
             The first generation comes from a preset, a pattern file (RLE or Plaintext), \
             a config file (JSON, YAML or TOML), or a random soup.\n\
             Options given on the command line override the config file.\n",
        )
        .arg(
            Arg::new("PATTERN")
                .help("Preset pattern")
                .short('p')
                .long("pattern")
                .value_parser(PRESET_NAMES)
                .conflicts_with_all(["FILE", "RANDOM"]),
        )
        .arg(
            Arg::new("FILE")
                .help("Pattern file, in RLE (.rle) or Plaintext (.cells) format")
                .short('f')
                .long("file")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("RANDOM"),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Config file, in JSON, YAML or TOML format")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("RANDOM")
                .help("Fills the universe randomly with this density")
                .long("random")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random soup")
                .long("seed")
                .requires("RANDOM")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("WIDTH")
                .help("Width of the universe")
                .short('x')
                .long("width")
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("HEIGHT")
                .help("Height of the universe")
                .short('y')
                .long("height")
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("BOUNDARY")
                .help("What lies beyond the edges")
                .long_help(
                    "What lies beyond the edges\n\
                     \"bounded\": cells outside of the universe are always dead.\n\
                     \"torus\": the edges wrap around.\n",
                )
                .short('b')
                .long("boundary")
                .value_parser(["bounded", "torus"]),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton")
                .long_help(
                    "Rule of the cellular automaton\n\
                     Supports Life-like rules without B0, such as B36/S23.\n",
                )
                .short('r')
                .long("rule")
                .value_parser(|s: &str| s.parse::<Life>().map(|_| s.to_string())),
        )
        .arg(
            Arg::new("STRATEGY")
                .help("How to compute a generation")
                .long_help(
                    "How to compute a generation\n\
                     \"scan\": looks at every cell.\n\
                     \"sparse\": only looks at living cells and their neighbors.\n\
                     \"parallel\": like scan, with rows split across threads.\n",
                )
                .short('s')
                .long("strategy")
                .value_parser(["scan", "sparse", "parallel"]),
        )
        .arg(
            Arg::new("REPR")
                .help("How the grid stores its cells")
                .long("repr")
                .value_parser(["sparse", "dense"]),
        )
        .arg(
            Arg::new("GENS")
                .help("Number of generations")
                .long_help(
                    "Number of generations\n\
                     The first generation is generation 0, so N + 1 frames are drawn, \
                     and --no-tui prints generation N.\n\
                     If this value is set to 0, it runs forever.\n",
                )
                .short('g')
                .long("gens")
                .default_value("1000")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("FPS")
                .help("Frames per second")
                .long("fps")
                .default_value("25")
                .value_parser(value_parser!(u32).range(1..=1000)),
        )
        .arg(
            Arg::new("LIVE")
                .help("Character for living cells")
                .long("live")
                .default_value("#")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("DEAD")
                .help("Character for dead cells")
                .long("dead")
                .default_value(" ")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("RLE")
                .help("Prints the last generation in RLE instead of Plaintext")
                .long("rle")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs more, can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        );

    #[cfg(feature = "tui")]
    let command = command.arg(
        Arg::new("NOTUI")
            .help("Prints the last generation, without animation")
            .short('n')
            .long("no-tui")
            .action(ArgAction::SetTrue),
    );

    command
}

fn read(path: &PathBuf) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.clone(),
        source,
    })
}

/// Reads a pattern file. Files ending in `.rle` are RLE, others are Plaintext.
fn load_pattern(path: &PathBuf) -> Result<Pattern, Error> {
    let text = read(path)?;
    let is_rle = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("rle"));
    let pattern = if is_rle {
        pattern::parse_rle(&text)?
    } else {
        pattern::parse_plaintext(&text)?
    };
    Ok(pattern)
}

/// Places the pattern in the middle of a universe large enough to hold it.
fn place_pattern(config: Config, pattern: &Pattern) -> Config {
    let width = config.width.max(pattern.width);
    let height = config.height.max(pattern.height);
    let origin = Cell::new((width - pattern.width) / 2, (height - pattern.height) / 2);
    let cells: Vec<_> = pattern.translate(origin).collect();
    config.set_size(width, height).set_cells(cells)
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(iter)?;
        let args = Self::from_matches(&matches)?;

        #[cfg(feature = "tui")]
        if args.no_tui && args.gens.is_none() {
            return Err(command
                .error(
                    ErrorKind::ArgumentConflict,
                    "--no-tui needs a positive number of generations",
                )
                .into());
        }
        #[cfg(not(feature = "tui"))]
        if args.gens.is_none() {
            return Err(command
                .error(
                    ErrorKind::InvalidValue,
                    "the number of generations must be positive",
                )
                .into());
        }

        Ok(args)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => settings::load(path)?,
            None => Config::default(),
        };
        let from_config = matches.contains_id("CONFIG");

        let pattern = match matches.get_one::<PathBuf>("FILE") {
            Some(path) => Some(load_pattern(path)?),
            None => None,
        };

        if let Some(pattern) = &pattern {
            if let Some(rule_string) = &pattern.rule_string {
                config.rule_string = rule_string.clone();
            }
        } else if let Some(name) = matches.get_one::<String>("PATTERN").map(String::as_str).or(
            if from_config || matches.contains_id("RANDOM") {
                None
            } else {
                Some(DEFAULT_PRESET)
            },
        ) {
            // Names are checked by clap.
            if let Some(preset) = presets::find(name) {
                config = config
                    .set_size(preset.width, preset.height)
                    .set_cells(preset.cells.iter().map(|&c| Cell::from(c)));
            }
        }

        if let Some(&width) = matches.get_one::<i32>("WIDTH") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<i32>("HEIGHT") {
            config.height = height;
        }
        if let Some(pattern) = &pattern {
            config = place_pattern(config, pattern);
        }
        if let Some(boundary) = matches.get_one::<String>("BOUNDARY") {
            config.boundary = boundary.parse::<Boundary>().map_err(invalid)?;
        }
        if let Some(rule_string) = matches.get_one::<String>("RULE") {
            config.rule_string = rule_string.clone();
        }
        if let Some(strategy) = matches.get_one::<String>("STRATEGY") {
            config.strategy = strategy.parse::<Strategy>().map_err(invalid)?;
        }
        if let Some(repr) = matches.get_one::<String>("REPR") {
            config.representation = repr.parse::<Representation>().map_err(invalid)?;
        }

        if let Some(&density) = matches.get_one::<f64>("RANDOM") {
            let mut rng = match matches.get_one::<u64>("SEED") {
                Some(&seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let soup = SparseGrid::random(config.dim()?, config.boundary, density, &mut rng)?;
            config.cells = soup.live_cells().collect();
        }

        let gens = match matches.get_one::<u64>("GENS").copied() {
            Some(0) | None => None,
            Some(n) => Some(n),
        };
        let fps = matches.get_one::<u32>("FPS").copied().unwrap_or(25);
        let mut glyphs = Glyphs::default();
        if let Some(&live) = matches.get_one::<char>("LIVE") {
            glyphs.live = live;
        }
        if let Some(&dead) = matches.get_one::<char>("DEAD") {
            glyphs.dead = dead;
        }
        let format = if matches.get_flag("RLE") {
            Format::Rle
        } else {
            Format::Plaintext
        };
        let log_level = match matches.get_count("VERBOSE") {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        };

        Ok(Args {
            config,
            gens,
            fps,
            glyphs,
            format,
            log_level,
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}

/// Values are checked by clap, so this never happens in practice.
fn invalid(message: String) -> Error {
    Error::Clap(clap::Error::raw(ErrorKind::InvalidValue, message))
}
