use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tinytask_app::SettingsStore;

use super::super::constants::SWATCH;
use super::super::theme::{Theme, to_color};
use super::super::view::{Focus, Ui};

impl<S: SettingsStore> Ui<S> {
    pub(in crate::tui) fn draw_input_bar(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let focused = self.focus == Focus::NewTask;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(18)])
            .split(area);

        let text = if focused {
            Line::from(vec![Span::raw(self.input.as_str()), Span::styled("_", theme.muted)])
        } else if self.input.is_empty() {
            Line::from(Span::styled("What needs to be done?", theme.muted))
        } else {
            Line::from(self.input.as_str())
        };
        let input = Paragraph::new(text).style(theme.base).block(
            Block::default()
                .title("New task")
                .borders(Borders::ALL)
                .border_style(theme.border_for(focused)),
        );
        f.render_widget(input, columns[0]);

        let color = self.app.new_task_color();
        let swatch = Paragraph::new(Line::from(vec![
            Span::styled(SWATCH, theme.base.fg(to_color(color))),
            Span::raw(" "),
            Span::styled(color.to_string(), theme.muted),
        ]))
        .block(
            Block::default()
                .title("Colour")
                .borders(Borders::ALL)
                .border_style(theme.border),
        );
        f.render_widget(swatch, columns[1]);
    }
}
