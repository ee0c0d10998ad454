//! Light/dark appearance preference.

use std::fmt;

use tracing::info;

use crate::settings::{DARK_MODE_KEY, SettingsError, SettingsStore};

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    /// Light background (default).
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Appearance {
    /// Map the stored dark-mode flag to an appearance.
    #[must_use]
    pub const fn from_dark_mode(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark scheme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Reads and persists the appearance through an injected settings store.
#[derive(Debug)]
pub struct AppearanceService<S: SettingsStore> {
    settings: S,
    current: Appearance,
}

impl<S: SettingsStore> AppearanceService<S> {
    /// Load the current preference; an unset flag means light.
    ///
    /// # Errors
    /// Returns an error when the stored flag cannot be read.
    pub fn new(settings: S) -> Result<Self, SettingsError> {
        let dark = settings.get_bool(DARK_MODE_KEY)?.unwrap_or(false);
        Ok(Self {
            settings,
            current: Appearance::from_dark_mode(dark),
        })
    }

    /// Appearance currently in effect.
    #[must_use]
    pub const fn current(&self) -> Appearance {
        self.current
    }

    /// Switch to `appearance` and persist it.
    ///
    /// # Errors
    /// Returns an error when the flag cannot be stored; the current
    /// appearance is left unchanged in that case.
    pub fn set(&mut self, appearance: Appearance) -> Result<Appearance, SettingsError> {
        self.settings.set_bool(DARK_MODE_KEY, appearance.is_dark())?;
        if self.current != appearance {
            info!(%appearance, "appearance changed");
        }
        self.current = appearance;
        Ok(appearance)
    }

    /// Flip between light and dark.
    ///
    /// # Errors
    /// Same as [`Self::set`].
    pub fn toggle(&mut self) -> Result<Appearance, SettingsError> {
        self.set(self.current.toggled())
    }

    /// Underlying settings store.
    #[must_use]
    pub const fn settings(&self) -> &S {
        &self.settings
    }
}
