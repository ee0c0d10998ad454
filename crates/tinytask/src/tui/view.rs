use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Block,
};
use tinytask_app::SettingsStore;
use tinytask_core::StoreEvent;

use super::app::App;
use super::constants::UI_MESSAGE_TTL_SECS;
use super::theme::Theme;
use crate::config::{KeyBindingsConfig, ViewType};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Browsing the task list.
    TaskList,
    /// Typing into the input bar.
    NewTask,
    /// Edit popup is open.
    EditForm,
}

impl Focus {
    pub(super) const fn view_type(self) -> ViewType {
        match self {
            Self::TaskList => ViewType::TaskList,
            Self::NewTask => ViewType::NewTask,
            Self::EditForm => ViewType::EditForm,
        }
    }
}

/// Field highlighted in the edit popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EditField {
    Title,
    Color,
    Important,
}

impl EditField {
    pub(super) const fn next(self) -> Self {
        match self {
            Self::Title => Self::Color,
            Self::Color => Self::Important,
            Self::Important => Self::Title,
        }
    }

    pub(super) const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Important,
            Self::Color => Self::Title,
            Self::Important => Self::Color,
        }
    }
}

pub(super) struct Ui<S: SettingsStore> {
    pub(super) app: App<S>,
    pub(super) focus: Focus,
    pub(super) edit_field: EditField,
    /// Text typed into the input bar.
    pub(super) input: String,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    pub(super) keybindings: KeyBindingsConfig,
}

impl<S: SettingsStore> Ui<S> {
    pub(super) const HEADER_HEIGHT: u16 = 3;
    pub(super) const INPUT_HEIGHT: u16 = 3;
    pub(super) const MAIN_MIN_HEIGHT: u16 = 3;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;
    pub(super) const STATUS_MESSAGE_HEIGHT: u16 = 3;

    pub(super) const fn new(app: App<S>, keybindings: KeyBindingsConfig) -> Self {
        Self {
            app,
            focus: Focus::TaskList,
            edit_field: EditField::Title,
            input: String::new(),
            message: None,
            should_quit: false,
            keybindings,
        }
    }

    pub(super) const fn theme(&self) -> Theme {
        Theme::for_appearance(self.app.appearance())
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let theme = self.theme();
        let size = f.area();
        f.render_widget(Block::default().style(theme.base), size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::HEADER_HEIGHT),
                Constraint::Length(Self::INPUT_HEIGHT),
                Constraint::Min(Self::MAIN_MIN_HEIGHT),
                Constraint::Length(Self::INSTRUCTIONS_HEIGHT + Self::STATUS_MESSAGE_HEIGHT),
            ])
            .split(size);

        self.draw_header(f, chunks[0], &theme);
        self.draw_input_bar(f, chunks[1], &theme);
        self.draw_task_list(f, chunks[2], &theme);
        self.draw_status(f, chunks[3], &theme);

        if self.focus == Focus::EditForm {
            self.draw_edit_popup(f, &theme);
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }

    /// Turn pending store notifications into a status message.
    pub(super) fn absorb_changes(&mut self) {
        for event in self.app.take_changes() {
            if let Some(text) = self.describe_change(event) {
                self.info(text);
            }
        }
    }

    fn describe_change(&self, event: StoreEvent) -> Option<String> {
        let title = |id| {
            self.app
                .store()
                .get(id)
                .map_or_else(String::new, |task| task.title.clone())
        };
        match event {
            StoreEvent::Added(id) => Some(format!("Added \"{}\"", title(id))),
            StoreEvent::Updated(id) => Some(format!("Saved \"{}\"", title(id))),
            StoreEvent::Deleted(_) => Some("Task deleted".to_string()),
            StoreEvent::Moved { .. } => None,
            StoreEvent::ImportanceToggled { id, is_important } => Some(if is_important {
                format!("Marked \"{}\" as important", title(id))
            } else {
                format!("\"{}\" is no longer important", title(id))
            }),
            StoreEvent::EditStarted(_) => None,
            StoreEvent::EditCancelled(_) => Some("Edit discarded".to_string()),
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
