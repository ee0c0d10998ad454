use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tinytask_app::SettingsStore;

use super::super::theme::Theme;
use super::super::view::Ui;

impl<S: SettingsStore> Ui<S> {
    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::INSTRUCTIONS_HEIGHT),
                Constraint::Length(Self::STATUS_MESSAGE_HEIGHT),
            ])
            .split(area);

        let instructions = Paragraph::new(self.instructions())
            .style(theme.muted)
            .block(
                Block::default()
                    .title("Keys")
                    .borders(Borders::ALL)
                    .border_style(theme.border),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(instructions, rows[0]);

        let message = Paragraph::new(self.status_text())
            .block(
                Block::default()
                    .title("Status")
                    .borders(Borders::ALL)
                    .border_style(theme.border),
            )
            .style(self.status_style(theme));
        f.render_widget(message, rows[1]);
    }

    pub(in crate::tui) fn instructions(&self) -> String {
        self.keybindings.generate_help_text(self.focus.view_type())
    }

    fn status_text(&self) -> Cow<'_, str> {
        self.message
            .as_ref()
            .map_or(Cow::Borrowed(""), |msg| Cow::Borrowed(msg.text.as_str()))
    }

    fn status_style(&self, theme: &Theme) -> Style {
        self.message
            .as_ref()
            .map_or(theme.base, |msg| theme.base.patch(msg.style()))
    }
}
