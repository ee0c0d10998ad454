//! Key/value storage for user preferences.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, info, warn};

use crate::config::config_dir;

/// Settings key holding the dark-mode flag.
pub const DARK_MODE_KEY: &str = "dark_mode";

const SETTINGS_FILE: &str = "settings.toml";

/// Errors raised while reading or writing settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Settings file could not be read or written.
    #[error("failed to access settings file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Settings file is not valid TOML.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Settings could not be serialized back to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Stored value has a different type than requested.
    #[error("setting '{key}' holds a {found}, expected a boolean")]
    TypeMismatch {
        /// Offending key.
        key: String,
        /// TOML type actually stored.
        found: &'static str,
    },

    /// No configuration directory could be determined for this platform.
    #[error("could not determine the configuration directory")]
    NoConfigDir,
}

/// Storage for simple preference values.
///
/// Injected into the services that need it so they stay testable without
/// touching the user's real configuration directory.
pub trait SettingsStore {
    /// Read a boolean value; `None` when the key is unset.
    ///
    /// # Errors
    /// Returns an error when the stored value is not a boolean.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, SettingsError>;

    /// Store a boolean value.
    ///
    /// # Errors
    /// Returns an error when the value cannot be persisted.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), SettingsError>;
}

/// Settings kept in a TOML file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
    values: Table,
}

impl FileSettingsStore {
    /// Open the settings file at its default location.
    ///
    /// # Errors
    /// Returns an error when the config directory is unknown or the file is
    /// unreadable.
    pub fn open_default() -> Result<Self, SettingsError> {
        let dir = config_dir().ok_or(SettingsError::NoConfigDir)?;
        Self::open(dir.join(SETTINGS_FILE))
    }

    /// Open the settings file at `path`. A missing file yields empty settings.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|source| SettingsError::Io {
                path: path.clone(),
                source,
            })?;
            contents
                .parse::<Table>()
                .map_err(|source| SettingsError::Parse {
                    path: path.clone(),
                    source,
                })?
        } else {
            debug!(path = %path.display(), "settings file missing, using defaults");
            Table::new()
        };
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents).map_err(io_err)?;
        info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, SettingsError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Boolean(value)) => Ok(Some(*value)),
            Some(other) => Err(SettingsError::TypeMismatch {
                key: key.to_owned(),
                found: other.type_str(),
            }),
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), SettingsError> {
        let previous = self.values.insert(key.to_owned(), Value::Boolean(value));
        if let Err(err) = self.persist() {
            warn!(key, error = %err, "settings write failed, keeping previous value");
            match previous {
                Some(old) => self.values.insert(key.to_owned(), old),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

/// Settings held only in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, bool>,
}

impl MemorySettingsStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one preset value.
    #[must_use]
    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.values.insert(key.to_owned(), value);
        self
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, SettingsError> {
        Ok(self.values.get(key).copied())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), SettingsError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}
