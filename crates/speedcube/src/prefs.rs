//! User preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use cubepuzzle::{FaceLabel, Rgb};
use cubepuzzle_view::{AnimationPrefs, ColorScheme};
use directories::ProjectDirs;
use eyre::{Context, OptionExt, Result};
use serde::Deserialize;

const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const PREFS_FILE_NAME: &str = "speedcube-prefs.yaml";

lazy_static::lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> = ProjectDirs::from("", "", "Speedcube");
}

/// Returns the user preferences file in the platform config directory.
pub(crate) fn prefs_file() -> Result<PathBuf> {
    let dirs = PROJECT_DIRS.as_ref().ok_or_eyre("no home directory")?;
    Ok(dirs.config_dir().join(PREFS_FILE_NAME))
}

/// Preferences for scrambling and displaying the cube. Every field is
/// optional in a preferences file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct Preferences {
    /// Number of moves in a generated scramble.
    pub scramble_length: usize,
    /// Seconds to animate a single quarter turn.
    pub twist_duration: f64,
    /// Seconds between moves.
    pub move_interval: f64,
    /// Whether to speed up animation when several moves are queued.
    pub dynamic_twist_speed: bool,
    /// Frames per second of the driving loop.
    pub frame_rate: u32,
    /// File that receives the scramble and solution notation.
    pub log_file: PathBuf,
    /// Whether to draw the net with terminal colors.
    pub colored_net: bool,
    /// Colors for the stickers of each face on the colored net.
    pub face_colors: FaceColors,
}
impl Default for Preferences {
    fn default() -> Self {
        Self {
            scramble_length: cubepuzzle::DEFAULT_SCRAMBLE_LENGTH,
            twist_duration: 0.3,
            move_interval: 1.0,
            dynamic_twist_speed: true,
            frame_rate: 60,
            log_file: PathBuf::from("moves.txt"),
            colored_net: true,
            face_colors: FaceColors::default(),
        }
    }
}
impl Preferences {
    /// Loads preferences from the defaults, the user preferences file, and
    /// then `extra` if it is given. Later sources override earlier ones.
    ///
    /// If anything goes wrong, a warning is logged and the default
    /// preferences are returned.
    pub fn load(extra: Option<&Path>) -> Self {
        let user_file = prefs_file()
            .inspect_err(|e| log::warn!("Error locating user preferences: {e}"))
            .ok();
        Self::load_from(user_file.as_deref(), extra)
    }

    /// Loads preferences from the defaults, then an optional user file that
    /// may not exist, then an optional extra file that must exist.
    pub fn load_from(user_file: Option<&Path>, extra: Option<&Path>) -> Self {
        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        let mut config = config::Config::builder().add_source(default_config_source.clone());

        if let Some(path) = user_file {
            log::debug!("Reading user preferences from {}", path.display());
            config = config.add_source(config::File::from(path).required(false));
        }
        if let Some(path) = extra {
            log::debug!("Reading preferences from {}", path.display());
            config = config.add_source(config::File::from(path));
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");

                config::Config::builder()
                    .add_source(default_config_source)
                    .build()
                    .and_then(|c| c.try_deserialize())
                    .unwrap_or_default()
            })
    }

    /// Returns the time between frames of the driving loop.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
    /// Returns the time between moves.
    pub fn move_interval(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.move_interval)
            .wrap_err_with(|| format!("invalid move interval {}", self.move_interval))
    }
    /// Returns the preferences for animating twists.
    pub fn animation_prefs(&self) -> AnimationPrefs {
        AnimationPrefs {
            twist_duration: self.twist_duration,
            dynamic_twist_speed: self.dynamic_twist_speed,
        }
    }
    /// Returns the colors to draw the net with.
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_fn(|face| self.face_colors.get(face))
    }
}

/// Sticker color for each face, as hex strings like `"#ff8000"`.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct FaceColors {
    pub up: Rgb,
    pub down: Rgb,
    pub front: Rgb,
    pub back: Rgb,
    pub left: Rgb,
    pub right: Rgb,
}
impl Default for FaceColors {
    fn default() -> Self {
        Self {
            up: FaceLabel::Up.color(),
            down: FaceLabel::Down.color(),
            front: FaceLabel::Front.color(),
            back: FaceLabel::Back.color(),
            left: FaceLabel::Left.color(),
            right: FaceLabel::Right.color(),
        }
    }
}
impl FaceColors {
    fn get(&self, face: FaceLabel) -> Rgb {
        match face {
            FaceLabel::Up => self.up,
            FaceLabel::Down => self.down,
            FaceLabel::Front => self.front,
            FaceLabel::Back => self.back,
            FaceLabel::Left => self.left,
            FaceLabel::Right => self.right,
        }
    }
}
