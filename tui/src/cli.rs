//! Parsing command-line arguments and driving the run.

use crate::tui::Screen;
use clap::{value_parser, Arg, ArgAction, Command};
use lifegrid_lib::{Config, Pattern};
use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) toroidal: bool,
    pub(crate) silent: bool,
    pub(crate) generations: u64,
    pub(crate) input: Option<PathBuf>,
    pub(crate) output: Option<PathBuf>,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Self {
        let matches = Command::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .long_about(
                "Conway's Game of Life in the terminal\n\
                 \n\
                 The initial state is read from a file or the standard input:\n\
                 * The first line holds the grid dimensions, `rows cols`;\n\
                 * Each further line is a `row col` pair marking a live cell.\n\
                 \n\
                 The grid evolves under the standard B3/S23 rule for a fixed\n\
                 number of generations, with each generation drawn live in the\n\
                 terminal unless the display is suppressed. The final state is\n\
                 written to a file or the standard output, one line per row,\n\
                 with `o` for live cells and `.` for dead ones.\n",
            )
            .arg(
                Arg::new("TOROIDAL")
                    .help("Treats the grid as a torus")
                    .long_help(
                        "Treats the grid as a torus\n\
                         Neighbor counting wraps across the edges, so every cell\n\
                         has exactly eight neighbors. Without this flag the grid\n\
                         is bounded and positions outside it count as dead.\n",
                    )
                    .short('t')
                    .long("toroidal")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("SILENT")
                    .help("Suppresses the live display")
                    .long_help(
                        "Suppresses the live display\n\
                         The simulation still runs to the end and the final\n\
                         state is still written to the output.\n",
                    )
                    .short('s')
                    .long("silent")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("GENS")
                    .help("Number of generations to simulate")
                    .short('n')
                    .long("generations")
                    .value_parser(value_parser!(u64))
                    .default_value("100"),
            )
            .arg(
                Arg::new("INPUT")
                    .help("File to read the initial state from")
                    .long_help(
                        "File to read the initial state from\n\
                         Reads from the standard input when omitted.\n",
                    )
                    .short('i')
                    .long("input")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("OUTPUT")
                    .help("File to write the final state to")
                    .long_help(
                        "File to write the final state to\n\
                         Writes to the standard output when omitted.\n",
                    )
                    .short('o')
                    .long("output")
                    .value_parser(value_parser!(PathBuf)),
            )
            .get_matches();

        Self {
            toroidal: matches.get_flag("TOROIDAL"),
            silent: matches.get_flag("SILENT"),
            generations: *matches.get_one::<u64>("GENS").unwrap(),
            input: matches.get_one::<PathBuf>("INPUT").cloned(),
            output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
        }
    }
}

/// Opens a file, naming the path in the error message.
fn open(path: &Path) -> Result<File, String> {
    File::open(path).map_err(|e| format!("{}: {e}", path.display()))
}

/// Runs the simulation described by the arguments.
///
/// Bad paths, malformed input and out-of-range cells are all reported
/// before any simulation work happens.
pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let pattern = match &args.input {
        Some(path) => Pattern::from_reader(BufReader::new(open(path)?))?,
        None => Pattern::from_reader(io::stdin().lock())?,
    };

    let config = Config::new()
        .set_toroidal(args.toroidal)
        .set_generations(args.generations);
    let mut simulation = config.simulation(&pattern)?;

    if args.silent {
        simulation.run(config.generations);
    } else {
        let mut screen = Screen::new()?;
        simulation.run_with(config.generations, |universe, generation| {
            screen.draw(universe, generation)
        })?;
    }

    match &args.output {
        Some(path) => {
            let mut file =
                File::create(path).map_err(|e| format!("{}: {e}", path.display()))?;
            write!(file, "{}", simulation.universe())?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", simulation.universe())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
