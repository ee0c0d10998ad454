//! Application layer logic for tinytask.
//!
//! This crate wires the in-memory task store to the pieces that live outside
//! it: the persisted appearance preference and the user configuration.

pub mod appearance;
pub mod config;
pub mod settings;

// Re-exports for convenience
pub use appearance::{Appearance, AppearanceService};
pub use config::{TasksConfig, config_dir};
pub use settings::{
    DARK_MODE_KEY, FileSettingsStore, MemorySettingsStore, SettingsError, SettingsStore,
};
