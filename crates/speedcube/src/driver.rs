//! Scrambles a cube and steps through the moves in real time.

use std::path::PathBuf;
use std::time::Instant;

use cubepuzzle::{Cube, ScrambleParams, ScrambledCube};
use cubepuzzle_view::{ColorScheme, Simulation, render_net};
use eyre::Result;

use crate::move_log;
use crate::prefs::Preferences;

/// Settings for a single run, after applying command-line overrides to the
/// preferences.
#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub params: ScrambleParams,
    pub log_file: PathBuf,
    pub instant: bool,
    pub solve: bool,
    pub print_each_move: bool,
    pub colors: Option<ColorScheme>,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub(crate) struct RunOutput {
    pub scrambled: ScrambledCube,
    pub final_state: Cube,
    pub moves_applied: usize,
}

/// Scrambles a cube, writes the move log, and then applies the scramble (and
/// solution, if enabled) one move at a time.
pub(crate) fn run(opts: &RunOptions, prefs: &Preferences) -> Result<RunOutput> {
    let scrambled = ScrambledCube::new(opts.params.clone());
    log::info!("Seed: {}", scrambled.params.seed);
    log::info!("Scramble: {}", scrambled.scramble);
    move_log::write_file(&opts.log_file, &scrambled)?;

    let moves = match opts.solve {
        true => scrambled.full_sequence(),
        false => scrambled.scramble.clone(),
    };
    let mut sim = Simulation::new(
        Cube::solved(),
        moves,
        prefs.move_interval()?,
        prefs.animation_prefs(),
    );

    if opts.instant {
        for mv in sim.skip_to_end() {
            log::info!("Move: {mv}");
        }
    } else {
        let frame = prefs.frame_duration();
        let mut last_frame = Instant::now();
        while !sim.is_finished() {
            let now = Instant::now();
            let delta = now - last_frame;
            last_frame = now;
            if let Some(mv) = sim.step(delta) {
                log::info!("Move: {mv}");
                if opts.print_each_move {
                    let n = sim.applied_moves().len();
                    println!("{n}. {mv}\n{}\n", render_net(sim.cube(), opts.colors.as_ref()));
                }
            }
            std::thread::sleep(frame.saturating_sub(last_frame.elapsed()));
        }
    }

    let final_state = sim.cube().clone();
    println!("{}", render_net(&final_state, opts.colors.as_ref()));
    Ok(RunOutput {
        moves_applied: sim.applied_moves().len(),
        scrambled,
        final_state,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_options(dir: &tempfile::TempDir, instant: bool, solve: bool) -> RunOptions {
        RunOptions {
            params: ScrambleParams::with_seed(6, "driver"),
            log_file: dir.path().join("moves.txt"),
            instant,
            solve,
            print_each_move: false,
            colors: None,
        }
    }

    fn fast_prefs() -> Preferences {
        Preferences {
            move_interval: 0.0,
            twist_duration: 0.0,
            frame_rate: 1000,
            ..Preferences::default()
        }
    }

    #[test]
    fn test_instant_run_solves_cube() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let out = run(&test_options(&dir, true, true), &fast_prefs()).expect("error running");
        assert_eq!(out.moves_applied, 12);
        assert!(out.final_state.is_solved());
        assert!(dir.path().join("moves.txt").is_file());
    }

    #[test]
    fn test_paced_run_without_solve() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let out = run(&test_options(&dir, false, false), &fast_prefs()).expect("error running");
        assert_eq!(out.moves_applied, 6);
        assert_eq!(out.final_state, out.scrambled.state);
    }

    #[test]
    fn test_invalid_interval() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let prefs = Preferences {
            move_interval: f64::NAN,
            ..fast_prefs()
        };
        assert!(run(&test_options(&dir, true, true), &prefs).is_err());
    }
}
