use crossterm::event::{KeyCode, KeyEvent};
use tinytask_app::SettingsStore;

use super::super::input::apply_text_key;
use super::super::view::{EditField, Focus, Ui};
use crate::config::{Action, ViewType};

impl<S: SettingsStore> Ui<S> {
    pub(super) fn handle_edit_form_key(&mut self, key: &KeyEvent) {
        let bindings = &self.keybindings;
        if bindings.matches(ViewType::EditForm, Action::Save, key) {
            self.save_edit();
        } else if bindings.matches(ViewType::EditForm, Action::Cancel, key) {
            self.app.cancel_edit();
            self.focus = Focus::TaskList;
        } else if bindings.matches(ViewType::EditForm, Action::NextField, key) {
            self.edit_field = self.edit_field.next();
        } else if bindings.matches(ViewType::EditForm, Action::PrevField, key) {
            self.edit_field = self.edit_field.prev();
        } else if bindings.matches(ViewType::EditForm, Action::Increase, key) {
            self.adjust_field(true);
        } else if bindings.matches(ViewType::EditForm, Action::Decrease, key) {
            self.adjust_field(false);
        } else {
            self.edit_field_input(key);
        }
    }

    fn save_edit(&mut self) {
        // The session is closed either way.
        self.focus = Focus::TaskList;
        if let Err(err) = self.app.commit_edit() {
            self.error(format!("Could not save task: {err}"));
        }
    }

    fn adjust_field(&mut self, forward: bool) {
        match self.edit_field {
            EditField::Title => {}
            EditField::Color => self.app.cycle_draft_color(forward),
            EditField::Important => self.toggle_draft_importance(),
        }
    }

    fn edit_field_input(&mut self, key: &KeyEvent) {
        match self.edit_field {
            EditField::Title => {
                if let Some(session) = self.app.edit_session_mut() {
                    apply_text_key(session.title_mut(), key);
                }
            }
            EditField::Important if key.code == KeyCode::Char(' ') => {
                self.toggle_draft_importance();
            }
            EditField::Color | EditField::Important => {}
        }
    }

    fn toggle_draft_importance(&mut self) {
        if let Some(session) = self.app.edit_session_mut() {
            session.set_important(!session.is_important());
        }
    }
}
