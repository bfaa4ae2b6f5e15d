use chrono::{SecondsFormat, SubsecRound, Utc};
use rand::{Rng, SeedableRng};
use sha2::Digest;
use smallvec::SmallVec;

use crate::{Cube, Direction, FaceLabel, Move, MoveSequence};

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Parameters to deterministically generate a scramble.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of moves.
    pub length: usize,
    /// Random seed. Any string is allowed.
    pub seed: String,
}
impl Default for ScrambleParams {
    fn default() -> Self {
        Self::new(DEFAULT_SCRAMBLE_LENGTH)
    }
}
impl ScrambleParams {
    /// Generates new scramble parameters based on the current time and a
    /// random number.
    pub fn new(length: usize) -> Self {
        let time = Utc::now()
            .trunc_subsecs(3)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let random_u64: u64 = rand::rng().random();
        Self::with_seed(length, format!("{time}_{random_u64}"))
    }
    /// Returns scramble parameters with a specific seed, for reproducible
    /// scrambles.
    pub fn with_seed(length: usize, seed: impl Into<String>) -> Self {
        Self {
            length,
            seed: seed.into(),
        }
    }

    /// Returns the random number generator for this scramble.
    ///
    /// The seed string is hashed so that the same parameters produce the same
    /// scramble on every platform.
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        rand_chacha::ChaCha12Rng::from_seed(sha256.finalize().into())
    }

    /// Generates the scramble.
    pub fn generate(&self) -> MoveSequence {
        generate_scramble_with_rng(self.length, &mut self.rng())
    }
}

/// Generates a random scramble of `count` moves using a fresh seed.
pub fn generate_scramble(count: usize) -> MoveSequence {
    ScrambleParams::new(count).generate()
}

/// Generates a random scramble of `count` moves.
///
/// Each move turns a uniformly random face other than the one turned by the
/// previous move, in a uniformly random direction.
pub fn generate_scramble_with_rng(count: usize, rng: &mut impl Rng) -> MoveSequence {
    let mut moves = Vec::with_capacity(count);
    let mut last_face = None;
    for _ in 0..count {
        let candidates: SmallVec<[FaceLabel; 6]> = FaceLabel::ALL
            .into_iter()
            .filter(|&face| Some(face) != last_face)
            .collect();
        let face = candidates[rng.random_range(0..candidates.len())];
        let direction = match rng.random::<bool>() {
            true => Direction::Clockwise,
            false => Direction::CounterClockwise,
        };
        last_face = Some(face);
        moves.push(Move::new(face, direction));
    }
    MoveSequence::from(moves)
}

/// Output of scrambling a cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Scramble moves applied.
    pub scramble: MoveSequence,
    /// Moves that return the cube to the solved state.
    pub solution: MoveSequence,
    /// State of the cube after scrambling.
    pub state: Cube,
}
impl ScrambledCube {
    /// Scrambles a solved cube.
    pub fn new(params: ScrambleParams) -> Self {
        let scramble = params.generate();
        let solution = scramble.inverse();
        let mut state = Cube::solved();
        state.apply_sequence(&scramble);
        log::debug!("scrambled with seed {:?}: {scramble}", params.seed);
        Self {
            params,
            scramble,
            solution,
            state,
        }
    }

    /// Returns the scramble followed by its solution.
    pub fn full_sequence(&self) -> MoveSequence {
        self.scramble.concat(&self.solution)
    }
}
