//! # Theme Preference
//!
//! Light/dark preference persisted as a one-line TOML file:
//!
//! ```toml
//! theme = "dark"
//! ```
//!
//! The effective mode is the stored preference when one exists, otherwise the
//! system preference. Toggling always writes a stored preference.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};
use crate::style::Theme;

/// Default file name inside the config directory.
pub const THEME_FILE_NAME: &str = "theme.toml";

/// Light or dark page mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds.
    #[default]
    Light,
    /// Dark backgrounds.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Page colors for this mode.
    #[must_use]
    pub const fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::LIGHT,
            Self::Dark => Theme::DARK,
        }
    }

    /// Lowercase name, as stored on disk.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Mode implied by a system "prefers dark" flag.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: ThemeMode,
}

/// Reads and writes the stored theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Creates a store backed by `path`. Nothing is read until asked.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory, e.g. `~/.config/wisdom_wheel/theme.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoConfigDir`] when the platform has none.
    pub fn in_config_dir() -> UiResult<Self> {
        let dir = dirs::config_dir().ok_or(UiError::NoConfigDir)?;
        Ok(Self::new(dir.join("wisdom_wheel").join(THEME_FILE_NAME)))
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored preference, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load(&self) -> UiResult<Option<ThemeMode>> {
        let source = match std::fs::read_to_string(&self.path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(UiError::Io {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };
        let file: ThemeFile = toml::from_str(&source)?;
        Ok(Some(file.theme))
    }

    /// Writes `mode` as the stored preference, creating parent directories.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save(&self, mode: ThemeMode) -> UiResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| UiError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let text = toml::to_string(&ThemeFile { theme: mode })?;
        std::fs::write(&self.path, text).map_err(|source| UiError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::debug!("Saved theme preference {} to {}", mode.as_str(), self.path.display());
        Ok(())
    }

    /// Stored preference if present, else the system preference.
    ///
    /// # Errors
    ///
    /// Fails if a stored preference exists but cannot be read.
    pub fn effective(&self, system_prefers_dark: bool) -> UiResult<ThemeMode> {
        Ok(self
            .load()?
            .unwrap_or_else(|| ThemeMode::from_system(system_prefers_dark)))
    }

    /// Flips the effective mode and stores the result.
    ///
    /// # Errors
    ///
    /// Fails if the preference cannot be read or written.
    pub fn toggle(&self, system_prefers_dark: bool) -> UiResult<ThemeMode> {
        let next = self.effective(system_prefers_dark)?.toggled();
        self.save(next)?;
        tracing::info!("Theme switched to {}", next.as_str());
        Ok(next)
    }
}
