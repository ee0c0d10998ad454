use crossterm::event::{KeyEvent, KeyEventKind};
use tinytask_app::SettingsStore;

use super::view::{Focus, Ui};

pub(super) mod edit;
pub(super) mod navigation;
pub(super) mod new_task;

impl<S: SettingsStore> Ui<S> {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.focus {
            Focus::TaskList => self.handle_task_list_key(&key),
            Focus::NewTask => self.handle_new_task_key(&key),
            Focus::EditForm => self.handle_edit_form_key(&key),
        }
        self.absorb_changes();
    }
}
