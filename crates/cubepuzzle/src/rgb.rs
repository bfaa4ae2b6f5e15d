//! Sticker colors.

use std::str::FromStr;

use serde::Deserialize;
use serde::de::Error;

/// 8-bit sRGB color, written as a hex string like `"#ff8000"` or `"#f80"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.strip_prefix('#').unwrap_or(s).trim();
        match s.len() {
            3 => {
                let s = &s.chars().flat_map(|c| [c, c]).collect::<String>();
                hex::decode_to_slice(s, &mut rgb)?;
            }
            _ => hex::decode_to_slice(s, &mut rgb)?,
        }
        Ok(Rgb { rgb })
    }
}
impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>()
            .map_err(|e| D::Error::custom(format!("invalid color {s:?}: {e}")))
    }
}
impl Rgb {
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Pure yellow
    pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
    /// Pure green
    pub const GREEN: Rgb = Rgb::new(0x00, 0xff, 0x00);
    /// Pure blue
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);
    /// Orange
    pub const ORANGE: Rgb = Rgb::new(0xff, 0x80, 0x00);
    /// Pure red
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);

    /// Constructs a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_strings() {
        assert_eq!("#ff8000".parse(), Ok(Rgb::ORANGE));
        assert_eq!("#00ff00 ".parse(), Ok(Rgb::GREEN));
        assert_eq!("ff0".parse(), Ok(Rgb::YELLOW));
        assert!("#ff80".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
    }
}
