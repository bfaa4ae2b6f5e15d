use std::io::IsTerminal;
use std::path::PathBuf;

use cubepuzzle::{Cube, MoveSequence, ScrambleParams};
use cubepuzzle_view::ColorScheme;
use eyre::{Context, Result};

use crate::prefs::Preferences;

/// Speedcube command-line interface
///
/// If no subcommand is specified, then a cube is scrambled and solved move by
/// move in the terminal.
#[derive(Debug, clap::Parser)]
#[command(version, args_conflicts_with_subcommands = true)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,

    /// Number of moves in the scramble.
    #[arg(short, long)]
    pub length: Option<usize>,
    /// Seed for a reproducible scramble.
    #[arg(short, long)]
    pub seed: Option<String>,
    /// File to write the scramble and solution to.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Apply every move immediately instead of pacing them.
    #[arg(long)]
    pub instant: bool,
    /// Only scramble the cube; don't solve it afterward.
    #[arg(long)]
    pub no_solve: bool,
    /// Preferences file to load on top of the user preferences.
    #[arg(long)]
    pub prefs: Option<PathBuf>,
    /// Only print the cube once it is finished.
    #[arg(short, long)]
    pub quiet_net: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print a random scramble.
    Scramble {
        /// Number of moves in the scramble.
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<String>,
        /// Also print the solution.
        #[arg(long)]
        solution: bool,
    },
    /// Print the sequence that undoes a move sequence.
    Invert {
        /// Moves, such as `R U' F`.
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Apply a move sequence to a solved cube and print the result.
    Apply {
        /// Moves, such as `R U' F`.
        moves: Vec<String>,
        /// Print the cube without colors.
        #[arg(long)]
        no_color: bool,
    },
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Scramble {
            length,
            seed,
            solution,
        } => {
            let params = scramble_params(length.unwrap_or(prefs.scramble_length), seed);
            log::debug!("Scramble seed: {:?}", params.seed);
            let scramble = params.generate();
            println!("{scramble}");
            if solution {
                println!("{}", scramble.inverse());
            }
            Ok(())
        }

        Subcommand::Invert { moves } => {
            println!("{}", parse_moves(&moves)?.inverse());
            Ok(())
        }

        Subcommand::Apply { moves, no_color } => {
            let moves = parse_moves(&moves)?;
            let mut cube = Cube::solved();
            cube.apply_sequence(&moves);
            let colors = net_colors(prefs).filter(|_| !no_color);
            println!("{}", cubepuzzle_view::render_net(&cube, colors.as_ref()));
            log::info!("Solved: {}", cube.is_solved());
            Ok(())
        }
    }
}

/// Returns scramble parameters with `seed`, or a fresh seed if there is none.
pub(crate) fn scramble_params(length: usize, seed: Option<String>) -> ScrambleParams {
    match seed {
        Some(seed) => ScrambleParams::with_seed(length, seed),
        None => ScrambleParams::new(length),
    }
}

/// Parses moves given as separate arguments. An argument may also contain
/// several whitespace-separated moves.
pub(crate) fn parse_moves(args: &[String]) -> Result<MoveSequence> {
    let notation = args.join(" ");
    notation
        .parse()
        .wrap_err_with(|| format!("invalid move sequence {notation:?}"))
}

/// Returns the colors to print the net with, or `None` to print it without
/// colors.
pub(crate) fn net_colors(prefs: &Preferences) -> Option<ColorScheme> {
    (prefs.colored_net && std::io::stdout().is_terminal()).then(|| prefs.color_scheme())
}
