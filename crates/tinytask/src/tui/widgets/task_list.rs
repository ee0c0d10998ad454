use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tinytask_app::SettingsStore;

use super::super::constants::{IMPORTANT_MARKER, TASK_LIST_HIGHLIGHT_SYMBOL};
use super::super::theme::{Theme, swatch_style};
use super::super::view::{Focus, Ui};
use super::util::truncate_with_ellipsis;

impl<S: SettingsStore> Ui<S> {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let tasks = self.app.tasks();
        // Borders, highlight symbol and marker column.
        let title_width = usize::from(area.width).saturating_sub(8);

        let items: Vec<ListItem<'_>> = if tasks.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No tasks yet",
                theme.muted,
            )))]
        } else {
            tasks
                .iter()
                .map(|task| {
                    let marker = if task.is_important { IMPORTANT_MARKER } else { " " };
                    let title = truncate_with_ellipsis(&task.title, title_width);
                    let row = format!(" {marker} {title} ");
                    ListItem::new(Line::from(Span::styled(
                        row,
                        swatch_style(task.color, task.is_important),
                    )))
                })
                .collect()
        };

        let focused = self.focus == Focus::TaskList;
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Tasks ({})", tasks.len()))
                    .borders(Borders::ALL)
                    .border_style(theme.border_for(focused)),
            )
            .style(theme.base)
            .highlight_style(theme.highlight)
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if !tasks.is_empty() {
            state.select(Some(self.app.selected_index()));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}
