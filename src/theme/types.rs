use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };
use crate::error::ParseThemeError;

/// User-facing theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Dark, Theme::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Resolves the stored preference, falling back to `System` when the
    /// value is missing or unrecognized.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some(value) =>
                value.parse().unwrap_or_else(|e: ParseThemeError| {
                    log::debug!("Ignoring stored preference: {}", e);
                    Theme::System
                }),
            None => Theme::System,
        }
    }

    /// Effective appearance for this theme. `os_prefers_dark` is only
    /// consulted in `System` mode.
    pub fn is_dark(self, os_prefers_dark: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::System => os_prefers_dark(),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Theme::System),
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ParseThemeError { value: other.to_string() }),
        }
    }
}
