//! Day and night color themes.

use crate::error::{Error, ErrorKind};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// An RGB triple.
///
/// Displays as a bare comma-separated list (`10, 10, 20`), the form expected
/// inside CSS `rgb()` / `rgba()` custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const INK: Rgb = Rgb(10, 10, 20);
    pub const PAPER: Rgb = Rgb(255, 255, 255);
}
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// The two colors a theme assigns.
///
/// `dark` is the foreground (text) color and `light` the background; a night
/// theme is simply the pair swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeColors {
    pub dark: Rgb,
    pub light: Rgb,
}

/// A color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
// Deserialization goes through `FromStr`, so config files and the environment
// accept the same spellings as everywhere else.
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum Theme {
    /// Dark text on a light background
    #[default]
    Day,
    /// Light text on a dark background
    Night,
}
impl Theme {
    /// The initial theme, following the environment's color scheme preference.
    pub fn preferred(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Night } else { Self::Day }
    }

    /// Resolves a theme name leniently: anything other than `night` is [`Theme::Day`].
    ///
    /// Names are trimmed and compared case-insensitively, so `NIGHT` is night too.
    pub fn from_name(name: impl AsRef<str>) -> Self {
        name.as_ref().parse().unwrap_or_else(|_| {
            tracing::warn!(theme = name.as_ref(), "Unknown theme name; falling back to day");
            Self::Day
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            Self::Day => ThemeColors { dark: Rgb::INK, light: Rgb::PAPER },
            Self::Night => ThemeColors { dark: Rgb::PAPER, light: Rgb::INK },
        }
    }
}
impl FromStr for Theme {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "day" => Self::Day,
            "night" => Self::Night,
            _ => exn::bail!(ErrorKind::ParseError { field: "theme", value: s.to_string() }),
        })
    }
}
impl TryFrom<String> for Theme {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}
impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
