use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tinytask_core::{PaletteColor, TaskColor};

const APP_DIR: &str = "tinytask";

/// Directory holding tinytask's config and settings files.
///
/// On Linux/macOS: `~/.config/tinytask`
/// On Windows: `%APPDATA%\tinytask`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// `[tasks]` block of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    default_color: TaskColor,
    palette: Vec<TaskColor>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_color: TaskColor::default(),
            palette: PaletteColor::ALL.into_iter().map(TaskColor::Palette).collect(),
        }
    }
}

impl TasksConfig {
    /// Construct a configuration from explicit values.
    #[must_use]
    pub const fn new(default_color: TaskColor, palette: Vec<TaskColor>) -> Self {
        Self {
            default_color,
            palette,
        }
    }

    /// Colour preselected for new tasks.
    #[must_use]
    pub const fn default_color(&self) -> TaskColor {
        self.default_color
    }

    /// Colours offered by the picker, in cycling order.
    #[must_use]
    pub fn palette(&self) -> &[TaskColor] {
        &self.palette
    }

    /// Colour following `current` in the palette, wrapping around.
    ///
    /// Colours outside the palette jump to its first entry.
    #[must_use]
    pub fn next_color(&self, current: TaskColor) -> TaskColor {
        self.step(current, 1)
    }

    /// Colour preceding `current` in the palette, wrapping around.
    #[must_use]
    pub fn prev_color(&self, current: TaskColor) -> TaskColor {
        self.step(current, self.palette.len().saturating_sub(1))
    }

    fn step(&self, current: TaskColor, offset: usize) -> TaskColor {
        let Some(&first) = self.palette.first() else {
            return current;
        };
        self.palette
            .iter()
            .position(|&color| color == current)
            .map_or(first, |index| {
                self.palette[(index + offset) % self.palette.len()]
            })
    }

    /// Check the palette is usable.
    ///
    /// # Errors
    /// Fails on an empty palette, duplicate entries, or a default colour
    /// missing from the palette.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            bail!("task palette must contain at least one colour");
        }
        let mut seen = HashSet::new();
        for color in &self.palette {
            if !seen.insert(color) {
                bail!("duplicate palette colour detected: {color}");
            }
        }
        if !self.palette.contains(&self.default_color) {
            bail!(
                "default colour '{}' is not part of the palette",
                self.default_color
            );
        }
        Ok(())
    }
}
