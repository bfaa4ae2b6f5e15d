//! Unfolded text display of a cube.
//!
//! ```text
//!     WWW
//!     WWW
//!     WWW
//! OOO GGG RRR BBB
//! OOO GGG RRR BBB
//! OOO GGG RRR BBB
//!     YYY
//!     YYY
//!     YYY
//! ```

use cubepuzzle::{Cube, FaceLabel, Rgb, Vec3i};
use itertools::Itertools;
use owo_colors::OwoColorize;

/// Faces of the middle row of the net, from left to right.
const MIDDLE_ROW: [FaceLabel; 4] = [
    FaceLabel::Left,
    FaceLabel::Front,
    FaceLabel::Right,
    FaceLabel::Back,
];

/// Colors to draw the stickers of each face with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorScheme([Rgb; 6]);
impl Default for ColorScheme {
    fn default() -> Self {
        Self::from_fn(FaceLabel::color)
    }
}
impl ColorScheme {
    /// Constructs a color scheme from the color for each face.
    pub fn from_fn(f: impl FnMut(FaceLabel) -> Rgb) -> Self {
        Self(FaceLabel::ALL.map(f))
    }
    /// Returns the color to draw stickers belonging to `face` with.
    pub fn get(&self, face: FaceLabel) -> Rgb {
        self.0[face.index()]
    }
}

/// Returns the directions of increasing column and row when `face` is viewed
/// from outside in its position on the net.
fn face_basis(face: FaceLabel) -> (Vec3i, Vec3i) {
    use FaceLabel::*;

    let x = Vec3i::new(1, 0, 0);
    let y = Vec3i::new(0, 1, 0);
    let z = Vec3i::new(0, 0, 1);
    match face {
        Up => (x, z),
        Down => (x, -z),
        Front => (x, -y),
        Back => (-x, -y),
        Left => (z, -y),
        Right => (-z, -y),
    }
}

/// Returns the position of the cubelet whose sticker is shown at `row` and
/// `col` (each from 0 to 2) of `face` on the net.
pub fn sticker_position(face: FaceLabel, row: i32, col: i32) -> Vec3i {
    let (right, down) = face_basis(face);
    face.normal() + right * (col - 1) + down * (row - 1)
}

/// Returns the face whose stickers have `color` on a solved cube.
fn home_face(color: Rgb) -> Option<FaceLabel> {
    FaceLabel::ALL.into_iter().find(|f| (*f).color() == color)
}

/// Returns the letter for a sticker color, or `?` if it isn't one of the
/// standard face colors.
pub fn color_letter(color: Rgb) -> char {
    match home_face(color) {
        Some(FaceLabel::Up) => 'W',
        Some(FaceLabel::Down) => 'Y',
        Some(FaceLabel::Front) => 'G',
        Some(FaceLabel::Back) => 'B',
        Some(FaceLabel::Left) => 'O',
        Some(FaceLabel::Right) => 'R',
        None => '?',
    }
}

fn render_sticker(
    cube: &Cube,
    face: FaceLabel,
    row: i32,
    col: i32,
    colors: Option<&ColorScheme>,
) -> String {
    let Some(color) = cube.sticker_at(face, sticker_position(face, row, col)) else {
        // Only possible if the cube is missing a sticker.
        return " ".to_owned();
    };
    let letter = color_letter(color);
    match colors {
        Some(scheme) => {
            let [r, g, b] = home_face(color).map_or(color, |f| scheme.get(f)).rgb;
            letter.black().on_truecolor(r, g, b).to_string()
        }
        None => letter.to_string(),
    }
}

fn render_face_row(
    cube: &Cube,
    face: FaceLabel,
    row: i32,
    colors: Option<&ColorScheme>,
) -> String {
    (0..3)
        .map(|col| render_sticker(cube, face, row, col, colors))
        .collect()
}

/// Renders the cube as an unfolded net, with Up on top, Left, Front, Right,
/// and Back in the middle, and Down on the bottom.
///
/// If `colors` is given, each sticker is drawn with ANSI true-color escape
/// codes using the color for its home face. Otherwise only letters are drawn.
pub fn render_net(cube: &Cube, colors: Option<&ColorScheme>) -> String {
    let indent = "    ";
    let single_face = |face: FaceLabel| {
        (0..3).map(move |row| format!("{indent}{}", render_face_row(cube, face, row, colors)))
    };
    let middle = (0..3).map(|row| {
        MIDDLE_ROW
            .iter()
            .map(|&face| render_face_row(cube, face, row, colors))
            .join(" ")
    });

    single_face(FaceLabel::Up)
        .chain(middle)
        .chain(single_face(FaceLabel::Down))
        .join("\n")
}
