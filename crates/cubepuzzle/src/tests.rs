use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;

use crate::*;

fn all_moves() -> Vec<Move> {
    FaceLabel::ALL
        .into_iter()
        .flat_map(|face| [Move::cw(face), Move::ccw(face)])
        .collect()
}

fn assert_cube_invariants(cube: &Cube, original: &Cube) {
    let positions: HashSet<Vec3i> = cube.iter().map(|c| c.position()).collect();
    let grid: HashSet<Vec3i> = Vec3i::grid_points().collect();
    assert_eq!(positions, grid);
    assert_eq!(cube.cubelets().len(), CUBELET_COUNT);
    assert_eq!(cube.sticker_count(), STICKER_COUNT);
    for (c, orig) in cube.iter().zip(original) {
        assert_eq!(c.stickers().len(), orig.stickers().len());
        // A sticker on a cubelet always faces outward from its position.
        for (face, _) in c.stickers().iter() {
            assert_eq!(c.position()[face.axis()], face.layer());
        }
    }
}

#[test]
fn test_solved_cube() {
    let cube = Cube::solved();
    assert!(cube.is_solved());
    assert_cube_invariants(&cube, &cube);

    let kinds = |kind| cube.iter().filter(|c| c.kind() == kind).count();
    assert_eq!(kinds(CubeletKind::Core), 1);
    assert_eq!(kinds(CubeletKind::Center), 6);
    assert_eq!(kinds(CubeletKind::Edge), 12);
    assert_eq!(kinds(CubeletKind::Corner), 8);

    let corner = cube.cubelet_at(Vec3i::new(1, 1, 1)).unwrap();
    let faces: Vec<FaceLabel> = corner.stickers().iter().map(|(f, _)| f).collect();
    assert_eq!(faces, [FaceLabel::Up, FaceLabel::Front, FaceLabel::Right]);
    assert_eq!(corner.stickers().get(FaceLabel::Up), Some(Rgb::WHITE));

    for face in FaceLabel::ALL {
        assert_eq!(cube.layer(face).count(), LAYER_SIZE);
    }
}

#[test]
fn test_right_turn_moves_corner() {
    let mut cube = Cube::solved();
    let before = *cube.cubelet_at(Vec3i::new(1, 1, 1)).unwrap();
    let r: Move = "R".parse().unwrap();
    assert_eq!(r.axis(), Axis::X);
    assert_eq!(r.layer(), 1);
    cube.apply_move(r);

    let after = cube.iter().find(|c| c.stickers() == before.stickers());
    assert_eq!(after, None, "stickers must be relabeled");

    let corner = cube.cubelet_at(Vec3i::new(1, 1, -1)).unwrap();
    assert_eq!(corner.stickers().get(FaceLabel::Back), Some(Rgb::WHITE));
    assert_eq!(corner.stickers().get(FaceLabel::Right), Some(Rgb::RED));
    assert_eq!(corner.stickers().get(FaceLabel::Up), Some(Rgb::GREEN));
    assert_eq!(corner.stickers().len(), 3);

    // Cubelets off the right layer don't move.
    for c in cube.iter().filter(|c| c.position().x() < 1) {
        assert_eq!(*c, Cubelet::new(c.position()));
    }
    assert_cube_invariants(&cube, &Cube::solved());
}

#[test]
fn test_clockwise_turns_match_physical_cube() {
    // After a clockwise turn, the sticker that was on face `from` of the
    // turning layer ends up on face `to`.
    let cases = [
        ("R", FaceLabel::Front, FaceLabel::Up),
        ("L", FaceLabel::Up, FaceLabel::Front),
        ("U", FaceLabel::Front, FaceLabel::Left),
        ("D", FaceLabel::Front, FaceLabel::Right),
        ("F", FaceLabel::Up, FaceLabel::Right),
        ("B", FaceLabel::Up, FaceLabel::Left),
    ];
    for (token, from, to) in cases {
        let mv: Move = token.parse().unwrap();
        let mut cube = Cube::solved();
        cube.apply_move(mv);
        let center_of_from = mv.face.normal() + from.normal();
        let center_of_to = mv.face.normal() + to.normal();
        assert_eq!(
            cube.sticker_at(to, center_of_to),
            Some(from.color()),
            "{token}: {from} sticker should move to {to}",
        );
        assert_eq!(cube.sticker_at(to, center_of_from), None);
    }
}

#[test]
fn test_turning_face_keeps_its_own_stickers() {
    for mv in all_moves() {
        let mut cube = Cube::solved();
        cube.apply_move(mv);
        for c in cube.layer(mv.face) {
            assert_eq!(c.stickers().get(mv.face), Some(mv.face.color()), "{mv}");
        }
    }
}

#[test]
fn test_four_turns_are_identity() {
    let scrambled = ScrambledCube::new(ScrambleParams::with_seed(25, "four turns")).state;
    for mv in all_moves() {
        let mut cube = scrambled.clone();
        for i in 1..=4 {
            cube.apply_move(mv);
            assert_eq!(cube == scrambled, i == 4, "{mv} applied {i} times");
        }
    }
}

#[test]
fn test_parse_moves() {
    let mv: Move = "F'".parse().unwrap();
    assert_eq!(mv, Move::new(FaceLabel::Front, Direction::CounterClockwise));
    assert_eq!(mv.inverse(), Move::new(FaceLabel::Front, Direction::Clockwise));
    assert_eq!(mv.inverse().to_string(), "F");
    assert_eq!(mv.to_string(), "F'");

    assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
    assert_eq!("X".parse::<Move>(), Err(ParseMoveError::UnknownFace('X')));
    assert_eq!("r".parse::<Move>(), Err(ParseMoveError::UnknownFace('r')));
    for token in ["F2", "F''", "F'2", "FF", "U "] {
        assert_eq!(
            token.parse::<Move>(),
            Err(ParseMoveError::InvalidSuffix {
                token: token.to_owned()
            }),
        );
    }
}

#[test]
fn test_parse_sequences() {
    let seq: MoveSequence = "  U R'\tF  D' ".parse().unwrap();
    assert_eq!(seq.to_string(), "U R' F D'");
    assert_eq!(seq.inverse().to_string(), "D F' R U'");
    assert_eq!("".parse::<MoveSequence>(), Ok(MoveSequence::default()));

    let err = "U R F2 D".parse::<MoveSequence>().unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.token, "F2");
    assert_eq!(
        err.to_string(),
        "move #3 (\"F2\"): invalid move token \"F2\"; expected a face optionally followed by '",
    );
}

#[test]
fn test_empty_scramble() {
    let params = ScrambleParams::with_seed(0, "empty");
    assert!(params.generate().is_empty());
    let scrambled = ScrambledCube::new(params);
    assert!(scrambled.state.is_solved());
    assert!(scrambled.full_sequence().is_empty());
}

#[test]
fn test_scramble_then_solve() {
    let scrambled = ScrambledCube::new(ScrambleParams::with_seed(DEFAULT_SCRAMBLE_LENGTH, "seed"));
    assert_eq!(scrambled.scramble.len(), 20);
    assert!(!scrambled.state.is_solved());
    assert_cube_invariants(&scrambled.state, &Cube::solved());

    let mut cube = scrambled.state.clone();
    cube.apply_sequence(&scrambled.solution);
    assert!(cube.is_solved());
    assert_eq!(cube, Cube::solved());

    let mut cube = Cube::solved();
    cube.apply_sequence(&scrambled.full_sequence());
    assert_eq!(cube, Cube::solved());
}

#[test]
fn test_scrambles_are_reproducible() {
    let a = ScrambleParams::with_seed(30, "hello").generate();
    let b = ScrambleParams::with_seed(30, "hello").generate();
    let c = ScrambleParams::with_seed(30, "hello!").generate();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let fresh = ScrambleParams::new(5);
    assert_eq!(fresh.length, 5);
    assert_eq!(generate_scramble(7).len(), 7);
}

#[test]
fn test_seeded_scramble_is_stable() {
    // Must not change between versions or platforms.
    let scramble = ScrambleParams::with_seed(10, "hello").generate();
    assert_eq!(scramble.to_string(), "R' B U R' F R' F' L' U B");

    let longer = ScrambleParams::with_seed(20, "hello").generate();
    assert!(longer.to_string().starts_with(&scramble.to_string()));
}

#[test]
fn test_move_order_matters() {
    let mut a = Cube::solved();
    a.apply_sequence(&"R U".parse().unwrap());
    let mut b = Cube::solved();
    b.apply_sequence(&"U R".parse().unwrap());
    assert_ne!(a, b);

    // Undoing without reversing the order does not solve the cube.
    a.apply_sequence(&"R' U'".parse().unwrap());
    assert!(!a.is_solved());
}

fn move_strategy() -> impl Strategy<Value = Move> {
    (0..FaceLabel::ALL.len(), any::<bool>()).prop_map(|(i, ccw)| {
        let face = FaceLabel::ALL[i];
        match ccw {
            true => Move::ccw(face),
            false => Move::cw(face),
        }
    })
}

fn sequence_strategy() -> impl Strategy<Value = MoveSequence> {
    prop::collection::vec(move_strategy(), 0..40).prop_map(MoveSequence::from)
}

proptest! {
    #[test]
    fn proptest_moves_preserve_invariants(seq in sequence_strategy()) {
        let mut cube = Cube::solved();
        for &mv in &seq {
            cube.apply_move(mv);
            assert_cube_invariants(&cube, &Cube::solved());
        }
    }

    #[test]
    fn proptest_sequence_then_inverse_is_identity(setup in sequence_strategy(), seq in sequence_strategy()) {
        let mut start = Cube::solved();
        start.apply_sequence(&setup);

        let mut cube = start.clone();
        cube.apply_sequence(&seq);
        cube.apply_sequence(&seq.inverse());
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn proptest_invert_move_twice(mv in move_strategy()) {
        prop_assert_eq!(mv.inverse().inverse(), mv);
        prop_assert_ne!(mv.inverse(), mv);
        prop_assert_eq!(mv.inverse().angle(), -mv.angle());
    }

    #[test]
    fn proptest_notation_round_trip(seq in sequence_strategy()) {
        prop_assert_eq!(seq.to_string().parse::<MoveSequence>(), Ok(seq.clone()));
        prop_assert_eq!(seq.inverse().inverse(), seq);
    }

    #[test]
    fn proptest_scramble_never_repeats_face(seed in any::<u64>(), len in 0..100_usize) {
        let mut rng = rand_chacha::ChaCha12Rng::seed_from_u64(seed);
        let scramble = generate_scramble_with_rng(len, &mut rng);
        prop_assert_eq!(scramble.len(), len);
        for pair in scramble.moves().windows(2) {
            prop_assert_ne!(pair[0].face, pair[1].face);
        }
    }
}
