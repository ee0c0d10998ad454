use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tinytask_app::SettingsStore;

use super::super::constants::{
    EDIT_POPUP_HEIGHT, EDIT_POPUP_MIN_WIDTH, EDIT_POPUP_WIDTH_PERCENT, SWATCH,
};
use super::super::theme::{Theme, to_color};
use super::super::view::{EditField, Ui};
use super::util::centered_rect;

impl<S: SettingsStore> Ui<S> {
    pub(in crate::tui) fn draw_edit_popup(&self, f: &mut Frame<'_>, theme: &Theme) {
        let Some(session) = self.app.edit_session() else {
            return;
        };

        let area = f.area();
        let width = (area.width.saturating_mul(EDIT_POPUP_WIDTH_PERCENT) / 100).max(EDIT_POPUP_MIN_WIDTH);
        let popup_area = centered_rect(width, EDIT_POPUP_HEIGHT, area);

        let block = Block::default()
            .title("Edit task")
            .borders(Borders::ALL)
            .border_style(theme.focused_border)
            .style(theme.base);

        f.render_widget(Clear, popup_area);

        let field_style = |field: EditField| -> Style {
            if self.edit_field == field {
                theme.selected
            } else {
                theme.base
            }
        };
        let cursor = if self.edit_field == EditField::Title { "_" } else { "" };
        let checkbox = if session.is_important() { "[x]" } else { "[ ]" };

        let lines = vec![
            Line::from(vec![
                Span::styled("Title:     ", theme.muted),
                Span::styled(format!("{}{cursor}", session.title()), field_style(EditField::Title)),
            ]),
            Line::from(vec![
                Span::styled("Colour:    ", theme.muted),
                Span::styled(SWATCH, theme.base.fg(to_color(session.color()))),
                Span::styled(format!(" {}", session.color()), field_style(EditField::Color)),
            ]),
            Line::from(vec![
                Span::styled("Important: ", theme.muted),
                Span::styled(checkbox, field_style(EditField::Important)),
            ]),
        ];

        f.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}
