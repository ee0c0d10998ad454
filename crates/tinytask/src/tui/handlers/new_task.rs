use crossterm::event::KeyEvent;
use tinytask_app::SettingsStore;

use super::super::input::apply_text_key;
use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl<S: SettingsStore> Ui<S> {
    pub(super) fn handle_new_task_key(&mut self, key: &KeyEvent) {
        let bindings = &self.keybindings;
        if bindings.matches(ViewType::NewTask, Action::Submit, key) {
            // Blank input adds nothing and keeps the bar open.
            if self.app.add_task(&self.input).is_some() {
                self.input.clear();
            }
        } else if bindings.matches(ViewType::NewTask, Action::Cancel, key) {
            self.input.clear();
            self.focus = Focus::TaskList;
        } else if bindings.matches(ViewType::NewTask, Action::NextColor, key) {
            self.app.cycle_new_task_color(true);
        } else if bindings.matches(ViewType::NewTask, Action::PrevColor, key) {
            self.app.cycle_new_task_color(false);
        } else {
            apply_text_key(&mut self.input, key);
        }
    }
}
