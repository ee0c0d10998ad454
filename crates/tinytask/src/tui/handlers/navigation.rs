use crossterm::event::KeyEvent;
use tinytask_app::SettingsStore;

use super::super::app::MoveDirection;
use super::super::view::{EditField, Focus, Ui};
use crate::config::{Action, ViewType};

impl<S: SettingsStore> Ui<S> {
    pub(super) fn handle_task_list_key(&mut self, key: &KeyEvent) {
        let Some(action) = self.task_list_action(key) else {
            return;
        };

        match action {
            Action::Quit => self.should_quit = true,
            Action::Down => self.app.select_next(),
            Action::Up => self.app.select_prev(),
            Action::NewTask => self.focus = Focus::NewTask,
            Action::EditTask => self.open_edit_form(),
            Action::DeleteTask => {
                if !self.app.delete_selected() {
                    self.error("No task selected");
                }
            }
            Action::ToggleImportant => {
                if !self.app.toggle_selected_importance() {
                    self.error("No task selected");
                }
            }
            Action::MoveUp => self.move_selected(MoveDirection::Up),
            Action::MoveDown => self.move_selected(MoveDirection::Down),
            Action::ToggleTheme => match self.app.toggle_appearance() {
                Ok(appearance) => self.info(format!("Switched to {appearance} mode")),
                Err(err) => self.error(format!("Failed to save appearance: {err}")),
            },
            Action::NextColor => self.app.cycle_new_task_color(true),
            Action::PrevColor => self.app.cycle_new_task_color(false),
            _ => {}
        }
    }

    fn task_list_action(&self, key: &KeyEvent) -> Option<Action> {
        const ACTIONS: [Action; 12] = [
            Action::Quit,
            Action::Down,
            Action::Up,
            Action::NewTask,
            Action::EditTask,
            Action::DeleteTask,
            Action::ToggleImportant,
            Action::MoveUp,
            Action::MoveDown,
            Action::ToggleTheme,
            Action::NextColor,
            Action::PrevColor,
        ];
        ACTIONS
            .into_iter()
            .find(|&action| self.keybindings.matches(ViewType::TaskList, action, key))
    }

    fn open_edit_form(&mut self) {
        match self.app.begin_edit_selected() {
            Ok(true) => {
                self.focus = Focus::EditForm;
                self.edit_field = EditField::Title;
            }
            Ok(false) => self.error("No task selected"),
            Err(err) => self.error(err.to_string()),
        }
    }

    fn move_selected(&mut self, direction: MoveDirection) {
        if let Err(err) = self.app.move_selected(direction) {
            self.error(err.to_string());
        }
    }
}
