use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    widgets::{Block, Borders, Paragraph},
};
use tinytask_app::{Appearance, SettingsStore};

use super::super::constants::{DARK_ICON, LIGHT_ICON};
use super::super::theme::Theme;
use super::super::view::Ui;

impl<S: SettingsStore> Ui<S> {
    pub(in crate::tui) fn draw_header(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(4), Constraint::Length(10)])
            .split(inner);

        let title = Paragraph::new("Todo").style(theme.base.add_modifier(Modifier::BOLD));
        f.render_widget(title, columns[0]);

        let appearance = self.app.appearance();
        // The icon names the appearance the toggle switches to.
        let icon = match appearance {
            Appearance::Light => DARK_ICON,
            Appearance::Dark => LIGHT_ICON,
        };
        let toggle = Paragraph::new(format!("{icon} {appearance}"))
            .style(theme.muted)
            .alignment(Alignment::Right);
        f.render_widget(toggle, columns[1]);
    }
}
