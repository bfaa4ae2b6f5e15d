//! Human-readable log of a scramble and its solution.

use std::io::Write;
use std::path::Path;

use cubepuzzle::ScrambledCube;
use eyre::{Context, Result};

/// Writes the scramble and solution notation, one per line.
pub(crate) fn write_to(w: &mut impl Write, scrambled: &ScrambledCube) -> std::io::Result<()> {
    writeln!(w, "Scramble: {}", scrambled.scramble)?;
    writeln!(w, "Solution: {}", scrambled.solution)?;
    Ok(())
}

/// Writes the move log to a file, replacing it if it exists.
pub(crate) fn write_file(path: &Path, scrambled: &ScrambledCube) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .wrap_err_with(|| format!("error creating move log {}", path.display()))?;
    write_to(&mut file, scrambled)
        .wrap_err_with(|| format!("error writing move log {}", path.display()))?;
    log::debug!("Wrote move log to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use cubepuzzle::{Cube, MoveSequence, ScrambleParams};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_move_log_file() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let path = dir.path().join("moves.txt");
        std::fs::write(&path, "old contents\n").expect("error writing file");

        let scrambled = ScrambledCube::new(ScrambleParams::with_seed(12, "log"));
        write_file(&path, &scrambled).expect("error writing move log");

        let contents = std::fs::read_to_string(&path).expect("error reading file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let scramble: MoveSequence = lines[0]
            .strip_prefix("Scramble: ")
            .expect("missing scramble")
            .parse()
            .expect("bad scramble");
        let solution: MoveSequence = lines[1]
            .strip_prefix("Solution: ")
            .expect("missing solution")
            .parse()
            .expect("bad solution");
        assert_eq!(scramble, scrambled.scramble);

        let mut cube = Cube::solved();
        cube.apply_sequence(&scramble);
        cube.apply_sequence(&solution);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_empty_scramble_log() {
        let scrambled = ScrambledCube::new(ScrambleParams::with_seed(0, "empty"));
        let mut out = vec![];
        write_to(&mut out, &scrambled).expect("error writing move log");
        assert_eq!(String::from_utf8_lossy(&out), "Scramble: \nSolution: \n");
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let path = dir.path().join("missing_dir").join("moves.txt");
        let scrambled = ScrambledCube::new(ScrambleParams::with_seed(3, "err"));
        let err = write_file(&path, &scrambled).unwrap_err();
        assert!(err.to_string().starts_with("error creating move log"));
    }
}
