//! Theming support: light/dark context, persistence and design tokens.
//!
//! A [`ThemeProvider`] is an ordinary value rather than a process-wide
//! singleton, so several can coexist (one per window, one per test).
//!
//! # Example
//!
//! ```rust,ignore
//! use tabula::theme::{MemoryThemeStorage, ThemeMode, ThemePreference, ThemeProvider};
//!
//! let provider = ThemeProvider::load(MemoryThemeStorage::new(), ThemeMode::Light).await?;
//! let mut changes = provider.subscribe();
//!
//! provider.set_preference(ThemePreference::Dark).await?;
//! changes.changed().await?;
//! assert_eq!(*changes.borrow(), ThemeMode::Dark);
//!
//! let background = provider.tokens().colors.background.to_hex();
//! ```

mod color;
mod provider;
mod storage;
mod tokens;

pub use color::{Color, Rgb};
pub use provider::{AppearanceListener, PREFERENCE_KEY, ThemeProvider};
pub use storage::{FileThemeStorage, MemoryThemeStorage, ThemeStorage};
pub use tokens::{
    ColorTokens, DesignTokens, RadiusTokens, Shadow, ShadowTokens, SpacingTokens, TextStyle,
    TypographyTokens,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Theme error type.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("invalid theme preference: {0:?}")]
    InvalidPreference(String),
}

/// A resolved appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other mode.
    pub fn inverse(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// What the user asked for; `System` follows the OS appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Resolve against the current OS appearance.
    pub fn resolve(&self, system: ThemeMode) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
            Self::System => system,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ThemeError::InvalidPreference(s.to_string())),
        }
    }
}

impl From<ThemeMode> for ThemePreference {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::Light,
            ThemeMode::Dark => Self::Dark,
        }
    }
}
