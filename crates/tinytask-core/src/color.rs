use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Named colours offered by the picker.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum PaletteColor {
    /// Blue (default for new tasks).
    #[default]
    Blue,
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Mint.
    Mint,
    /// Teal.
    Teal,
    /// Cyan.
    Cyan,
    /// Indigo.
    Indigo,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
    /// Brown.
    Brown,
    /// Gray.
    Gray,
}

impl PaletteColor {
    /// Every palette entry in picker order.
    pub const ALL: [Self; 13] = [
        Self::Blue,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Mint,
        Self::Teal,
        Self::Cyan,
        Self::Indigo,
        Self::Purple,
        Self::Pink,
        Self::Brown,
        Self::Gray,
    ];

    /// Lower-case name used in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Mint => "mint",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::Gray => "gray",
        }
    }

    /// Approximate sRGB value of the named colour.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0x00, 0x7a, 0xff),
            Self::Red => (0xff, 0x3b, 0x30),
            Self::Orange => (0xff, 0x95, 0x00),
            Self::Yellow => (0xff, 0xcc, 0x00),
            Self::Green => (0x34, 0xc7, 0x59),
            Self::Mint => (0x00, 0xc7, 0xbe),
            Self::Teal => (0x30, 0xb0, 0xc7),
            Self::Cyan => (0x32, 0xad, 0xe6),
            Self::Indigo => (0x58, 0x56, 0xd6),
            Self::Purple => (0xaf, 0x52, 0xde),
            Self::Pink => (0xff, 0x2d, 0x55),
            Self::Brown => (0xa2, 0x84, 0x5e),
            Self::Gray => (0x8e, 0x8e, 0x93),
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let name = if name == "grey" { "gray" } else { name };
        Self::ALL.into_iter().find(|color| color.name() == name)
    }
}

/// Presentation colour attached to a task.
///
/// The store carries this value around without looking at it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TaskColor {
    /// One of the fixed palette entries.
    Palette(PaletteColor),
    /// Arbitrary colour picked outside the palette.
    Rgb(u8, u8, u8),
}

impl Default for TaskColor {
    fn default() -> Self {
        Self::Palette(PaletteColor::default())
    }
}

impl TaskColor {
    /// Resolve to concrete RGB components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Palette(color) => color.rgb(),
            Self::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl From<PaletteColor> for TaskColor {
    fn from(color: PaletteColor) -> Self {
        Self::Palette(color)
    }
}

/// Failure to parse a colour name or hex triplet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown colour '{0}': expected a palette name or #rrggbb")]
pub struct ParseColorError(String);

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(color) => f.write_str(color.name()),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl FromStr for TaskColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError(s.to_owned()));
        }
        PaletteColor::from_name(&trimmed.to_ascii_lowercase())
            .map(Self::Palette)
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

fn parse_hex(hex: &str) -> Option<TaskColor> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(TaskColor::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl Serialize for TaskColor {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TaskColor {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> TaskColor {
        input
            .parse()
            .unwrap_or_else(|err| panic!("{input} should parse: {err}"))
    }

    #[test]
    fn default_colour_is_blue() {
        assert_eq!(TaskColor::default(), TaskColor::Palette(PaletteColor::Blue));
    }

    #[test]
    fn palette_names_are_case_insensitive() {
        assert_eq!(parse("Green"), TaskColor::Palette(PaletteColor::Green));
        assert_eq!(parse(" purple "), TaskColor::Palette(PaletteColor::Purple));
        assert_eq!(parse("grey"), TaskColor::Palette(PaletteColor::Gray));
    }

    #[test]
    fn hex_triplets_become_rgb() {
        assert_eq!(parse("#FF8800"), TaskColor::Rgb(0xff, 0x88, 0x00));
        assert_eq!(TaskColor::Rgb(0xff, 0x88, 0x00).to_string(), "#ff8800");
    }

    #[test]
    fn malformed_colours_are_rejected() {
        for input in ["", "#12345", "#gggggg", "magenta", "#ffffffff"] {
            assert!(input.parse::<TaskColor>().is_err(), "{input} should fail");
        }
    }

    #[test]
    fn every_palette_name_parses_back() {
        for color in PaletteColor::ALL {
            assert_eq!(parse(color.name()), TaskColor::Palette(color));
        }
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&TaskColor::Palette(PaletteColor::Teal))
            .unwrap_or_else(|err| panic!("serialize: {err}"));
        assert_eq!(json, "\"teal\"");
    }
}
