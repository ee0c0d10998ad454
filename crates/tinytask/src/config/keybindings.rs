//! Keybindings configuration for the TUI.

#![allow(clippy::enum_glob_use, clippy::unused_self)]

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Keybindings configuration.
    pub keybindings: KeyBindingsConfig,
}

/// Keybindings configuration for all TUI views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindingsConfig {
    /// Keybindings for the task list.
    pub task_list: TaskListKeyBindings,
    /// Keybindings for the new-task input bar.
    pub new_task: NewTaskKeyBindings,
    /// Keybindings for the edit form.
    pub edit_form: EditFormKeyBindings,
}

/// Keybindings for the task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move the selection down.
    pub down: Vec<String>,
    /// Move the selection up.
    pub up: Vec<String>,
    /// Focus the new-task input.
    pub new_task: Vec<String>,
    /// Open the edit form for the selected task.
    pub edit_task: Vec<String>,
    /// Delete the selected task.
    pub delete_task: Vec<String>,
    /// Flip the importance flag of the selected task.
    pub toggle_important: Vec<String>,
    /// Move the selected task one row up.
    pub move_up: Vec<String>,
    /// Move the selected task one row down.
    pub move_down: Vec<String>,
    /// Switch between light and dark appearance.
    pub toggle_theme: Vec<String>,
    /// Pick the next colour for new tasks.
    pub next_color: Vec<String>,
    /// Pick the previous colour for new tasks.
    pub prev_color: Vec<String>,
}

/// Keybindings for the new-task input bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTaskKeyBindings {
    /// Add the typed task.
    pub submit: Vec<String>,
    /// Leave the input without adding.
    pub cancel: Vec<String>,
    /// Pick the next colour.
    pub next_color: Vec<String>,
    /// Pick the previous colour.
    pub prev_color: Vec<String>,
}

/// Keybindings for the edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditFormKeyBindings {
    /// Save the draft.
    pub save: Vec<String>,
    /// Discard the draft.
    pub cancel: Vec<String>,
    /// Focus the next field.
    pub next_field: Vec<String>,
    /// Focus the previous field.
    pub prev_field: Vec<String>,
    /// Step the focused field forward.
    pub increase: Vec<String>,
    /// Step the focused field backward.
    pub decrease: Vec<String>,
}

impl Default for TaskListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Esc"],
            down: vec_of_strings!["j", "Down"],
            up: vec_of_strings!["k", "Up"],
            new_task: vec_of_strings!["a", "n"],
            edit_task: vec_of_strings!["e", "Enter"],
            delete_task: vec_of_strings!["d", "Delete"],
            toggle_important: vec_of_strings!["i", "Space"],
            move_up: vec_of_strings!["K", "Shift+Up"],
            move_down: vec_of_strings!["J", "Shift+Down"],
            toggle_theme: vec_of_strings!["t"],
            next_color: vec_of_strings!["c"],
            prev_color: vec_of_strings!["C"],
        }
    }
}

impl Default for NewTaskKeyBindings {
    fn default() -> Self {
        Self {
            submit: vec_of_strings!["Enter"],
            cancel: vec_of_strings!["Esc"],
            next_color: vec_of_strings!["Tab"],
            prev_color: vec_of_strings!["BackTab"],
        }
    }
}

impl Default for EditFormKeyBindings {
    fn default() -> Self {
        Self {
            save: vec_of_strings!["Enter"],
            cancel: vec_of_strings!["Esc"],
            next_field: vec_of_strings!["Tab", "Down"],
            prev_field: vec_of_strings!["BackTab", "Up"],
            increase: vec_of_strings!["Right"],
            decrease: vec_of_strings!["Left"],
        }
    }
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Enter" -> `KeyCode::Enter`
/// - "Shift+Up" -> `KeyCode::Up` with SHIFT modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    // "+" on its own is a key, not a separator.
    if s == "+" {
        return Ok(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE));
    }

    let parts: Vec<&str> = s.split('+').collect();
    let Some((key_part, modifier_parts)) = parts.split_last() else {
        bail!("Empty key string");
    };

    let mut modifiers = KeyModifiers::NONE;
    for &modifier in modifier_parts {
        match modifier {
            "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
            "Alt" => modifiers |= KeyModifiers::ALT,
            "Shift" => modifiers |= KeyModifiers::SHIFT,
            other => bail!("Unknown modifier: {other}"),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "BackTab" => Ok(KeyCode::BackTab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        "Space" => Ok(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("Empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        other => bail!("Unknown key: {other}"),
    }
}

/// Validate the TUI configuration.
pub fn validate_tui_config(config: &TuiConfig) -> Result<()> {
    validate_keybindings_config(&config.keybindings)
}

/// Validate the keybindings configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Key conflicts within each view
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    for view in ViewType::ALL {
        let bindings = config.bindings_for(view);
        for (action, keys) in &bindings {
            if keys.is_empty() {
                bail!("{}.{action} has no keys assigned", view.name());
            }
            for key in *keys {
                parse_key(key)
                    .with_context(|| format!("{}.{action}: invalid key '{key}'", view.name()))?;
            }
        }
        validate_view_conflicts(view, &bindings)?;
    }
    Ok(())
}

fn validate_view_conflicts(view: ViewType, bindings: &[(&'static str, &[String])]) -> Result<()> {
    let mut owners: HashMap<(KeyCode, KeyModifiers), &str> = HashMap::new();
    for (action, keys) in bindings {
        for key in *keys {
            let parsed = parse_key(key)?;
            if let Some(previous) = owners.insert(normalized_key(&parsed), *action) {
                bail!(
                    "Key '{key}' is bound to both {}.{previous} and {}.{action}",
                    view.name(),
                    view.name()
                );
            }
        }
    }
    Ok(())
}

/// Identity of a key as `matches` sees it: SHIFT is ignored on characters.
fn normalized_key(key: &KeyEvent) -> (KeyCode, KeyModifiers) {
    match key.code {
        KeyCode::Char(_) => (key.code, key.modifiers.difference(KeyModifiers::SHIFT)),
        _ => (key.code, key.modifiers),
    }
}

/// View type for keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Task list.
    TaskList,
    /// New-task input bar.
    NewTask,
    /// Edit form popup.
    EditForm,
}

impl ViewType {
    const ALL: [Self; 3] = [Self::TaskList, Self::NewTask, Self::EditForm];

    const fn name(self) -> &'static str {
        match self {
            Self::TaskList => "task_list",
            Self::NewTask => "new_task",
            Self::EditForm => "edit_form",
        }
    }
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // TaskList
    /// Quit.
    Quit,
    /// Move down.
    Down,
    /// Move up.
    Up,
    /// Focus the new-task input.
    NewTask,
    /// Edit the selected task.
    EditTask,
    /// Delete the selected task.
    DeleteTask,
    /// Toggle importance.
    ToggleImportant,
    /// Reorder upwards.
    MoveUp,
    /// Reorder downwards.
    MoveDown,
    /// Toggle appearance.
    ToggleTheme,

    // Shared by TaskList and NewTask
    /// Next colour.
    NextColor,
    /// Previous colour.
    PrevColor,

    // NewTask
    /// Add the typed task.
    Submit,

    // NewTask and EditForm
    /// Leave without applying.
    Cancel,

    // EditForm
    /// Save the draft.
    Save,
    /// Next field.
    NextField,
    /// Previous field.
    PrevField,
    /// Step forward.
    Increase,
    /// Step backward.
    Decrease,
}

impl KeyBindingsConfig {
    /// Generate help text for a specific view.
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::TaskList => self.generate_task_list_help(),
            ViewType::NewTask => self.generate_new_task_help(),
            ViewType::EditForm => self.generate_edit_form_help(),
        }
    }

    fn generate_task_list_help(&self) -> String {
        let keys = &self.task_list;
        format!(
            "{}:move {}:add {}:edit {}:delete {}:important {}:reorder {}:colour {}:theme {}:quit",
            self.format_key_pair(&keys.down, &keys.up),
            self.format_first_key(&keys.new_task),
            self.format_first_key(&keys.edit_task),
            self.format_first_key(&keys.delete_task),
            self.format_first_key(&keys.toggle_important),
            self.format_key_pair(&keys.move_down, &keys.move_up),
            self.format_key_pair(&keys.next_color, &keys.prev_color),
            self.format_first_key(&keys.toggle_theme),
            self.format_first_key(&keys.quit),
        )
    }

    fn generate_new_task_help(&self) -> String {
        let keys = &self.new_task;
        format!(
            "{}:add {}:colour {}:cancel",
            self.format_first_key(&keys.submit),
            self.format_key_pair(&keys.next_color, &keys.prev_color),
            self.format_first_key(&keys.cancel),
        )
    }

    fn generate_edit_form_help(&self) -> String {
        let keys = &self.edit_form;
        format!(
            "{}:field {}:change {}:save {}:cancel",
            self.format_key_pair(&keys.next_field, &keys.prev_field),
            self.format_key_pair(&keys.decrease, &keys.increase),
            self.format_first_key(&keys.save),
            self.format_first_key(&keys.cancel),
        )
    }

    /// Format the first key of a key binding list for display.
    fn format_first_key(&self, keys: &[String]) -> String {
        keys.first()
            .map_or_else(|| "?".to_string(), |k| self.format_key_display(k))
    }

    /// Format two keys as a pair (e.g., "j/k" for down/up).
    fn format_key_pair(&self, first: &[String], second: &[String]) -> String {
        format!("{}/{}", self.format_first_key(first), self.format_first_key(second))
    }

    /// Format a key for display, converting special keys to readable symbols.
    fn format_key_display(&self, key: &str) -> String {
        match key {
            "Enter" => "↵".to_string(),
            "Backspace" => "BS".to_string(),
            "Delete" => "Del".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "PageUp" => "PgUp".to_string(),
            "PageDown" => "PgDn".to_string(),
            "Shift+Up" => "S-↑".to_string(),
            "Shift+Down" => "S-↓".to_string(),
            other if other.contains('+') && other.len() > 1 => other.replace('+', "-"),
            other => other.to_string(),
        }
    }

    /// Check if a key event matches a configured action in a view.
    ///
    /// Shift is ignored for character keys since the terminal already
    /// reports the shifted character ("K" arrives as `Char('K')` + SHIFT).
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        self.get_keys(view, action)
            .iter()
            .filter_map(|key_str| parse_key(key_str).ok())
            .any(|expected| Self::key_event_matches(&expected, key))
    }

    fn key_event_matches(expected: &KeyEvent, actual: &KeyEvent) -> bool {
        if expected.code != actual.code {
            return false;
        }
        match actual.code {
            KeyCode::Char(_) => {
                expected.modifiers.difference(KeyModifiers::SHIFT)
                    == actual.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => expected.modifiers == actual.modifiers,
        }
    }

    fn bindings_for(&self, view: ViewType) -> Vec<(&'static str, &[String])> {
        match view {
            ViewType::TaskList => {
                let keys = &self.task_list;
                vec![
                    ("quit", keys.quit.as_slice()),
                    ("down", keys.down.as_slice()),
                    ("up", keys.up.as_slice()),
                    ("new_task", keys.new_task.as_slice()),
                    ("edit_task", keys.edit_task.as_slice()),
                    ("delete_task", keys.delete_task.as_slice()),
                    ("toggle_important", keys.toggle_important.as_slice()),
                    ("move_up", keys.move_up.as_slice()),
                    ("move_down", keys.move_down.as_slice()),
                    ("toggle_theme", keys.toggle_theme.as_slice()),
                    ("next_color", keys.next_color.as_slice()),
                    ("prev_color", keys.prev_color.as_slice()),
                ]
            }
            ViewType::NewTask => {
                let keys = &self.new_task;
                vec![
                    ("submit", keys.submit.as_slice()),
                    ("cancel", keys.cancel.as_slice()),
                    ("next_color", keys.next_color.as_slice()),
                    ("prev_color", keys.prev_color.as_slice()),
                ]
            }
            ViewType::EditForm => {
                let keys = &self.edit_form;
                vec![
                    ("save", keys.save.as_slice()),
                    ("cancel", keys.cancel.as_slice()),
                    ("next_field", keys.next_field.as_slice()),
                    ("prev_field", keys.prev_field.as_slice()),
                    ("increase", keys.increase.as_slice()),
                    ("decrease", keys.decrease.as_slice()),
                ]
            }
        }
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        use Action::*;
        use ViewType::*;

        match (view, action) {
            // TaskList
            (TaskList, Quit) => &self.task_list.quit,
            (TaskList, Down) => &self.task_list.down,
            (TaskList, Up) => &self.task_list.up,
            (TaskList, Action::NewTask) => &self.task_list.new_task,
            (TaskList, EditTask) => &self.task_list.edit_task,
            (TaskList, DeleteTask) => &self.task_list.delete_task,
            (TaskList, ToggleImportant) => &self.task_list.toggle_important,
            (TaskList, MoveUp) => &self.task_list.move_up,
            (TaskList, MoveDown) => &self.task_list.move_down,
            (TaskList, ToggleTheme) => &self.task_list.toggle_theme,
            (TaskList, NextColor) => &self.task_list.next_color,
            (TaskList, PrevColor) => &self.task_list.prev_color,

            // NewTask
            (ViewType::NewTask, Submit) => &self.new_task.submit,
            (ViewType::NewTask, Cancel) => &self.new_task.cancel,
            (ViewType::NewTask, NextColor) => &self.new_task.next_color,
            (ViewType::NewTask, PrevColor) => &self.new_task.prev_color,

            // EditForm
            (EditForm, Save) => &self.edit_form.save,
            (EditForm, Cancel) => &self.edit_form.cancel,
            (EditForm, NextField) => &self.edit_form.next_field,
            (EditForm, PrevField) => &self.edit_form.prev_field,
            (EditForm, Increase) => &self.edit_form.increase,
            (EditForm, Decrease) => &self.edit_form.decrease,

            // Invalid combinations
            _ => &[],
        }
    }
}
