use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

use tinytask_app::{Appearance, AppearanceService, SettingsError, SettingsStore, TasksConfig};
use tinytask_core::{EditSession, StoreError, StoreEvent, Task, TaskColor, TaskId, TaskStore};

/// Direction for single-step reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MoveDirection {
    Up,
    Down,
}

/// Application state shared between the TUI event loop and rendering.
pub(super) struct App<S: SettingsStore> {
    store: TaskStore,
    appearance: AppearanceService<S>,
    tasks_config: TasksConfig,
    /// Index of the highlighted row in the task list.
    selected: usize,
    /// Colour applied to the next task typed into the input bar.
    new_task_color: TaskColor,
    /// Store notifications not yet turned into status messages.
    changes: Rc<RefCell<VecDeque<StoreEvent>>>,
}

impl<S: SettingsStore> App<S> {
    pub(super) fn new(appearance: AppearanceService<S>, tasks_config: TasksConfig) -> Self {
        let mut store = TaskStore::new();
        let changes = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&changes);
        store.subscribe(move |event| sink.borrow_mut().push_back(*event));

        Self {
            store,
            appearance,
            new_task_color: tasks_config.default_color(),
            tasks_config,
            selected: 0,
            changes,
        }
    }

    pub(super) const fn store(&self) -> &TaskStore {
        &self.store
    }

    pub(super) fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub(super) const fn appearance(&self) -> Appearance {
        self.appearance.current()
    }

    pub(super) const fn new_task_color(&self) -> TaskColor {
        self.new_task_color
    }

    pub(super) const fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected)
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(Task::id)
    }

    pub(super) const fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    pub(super) const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_id(&mut self, id: TaskId) {
        if let Some(index) = self.store.position(id) {
            self.selected = index;
        }
    }

    const fn clamp_selection(&mut self) {
        let len = self.store.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Drain store notifications received since the last call.
    pub(super) fn take_changes(&self) -> Vec<StoreEvent> {
        self.changes.borrow_mut().drain(..).collect()
    }

    /// Append a task with the current input colour and select it.
    ///
    /// Blank titles are ignored and yield `None`.
    pub(super) fn add_task(&mut self, title: &str) -> Option<TaskId> {
        let id = self.store.add(title, self.new_task_color).ok()?;
        self.select_id(id);
        Some(id)
    }

    pub(super) fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected_task_id() else {
            return false;
        };
        let deleted = self.store.delete(id);
        self.clamp_selection();
        deleted
    }

    pub(super) fn toggle_selected_importance(&mut self) -> bool {
        self.selected_task_id()
            .is_some_and(|id| self.store.toggle_importance(id))
    }

    /// Move the selected task one row, keeping it selected.
    ///
    /// Returns `Ok(false)` when the task is already at the edge.
    pub(super) fn move_selected(&mut self, direction: MoveDirection) -> Result<bool, StoreError> {
        let Some(id) = self.selected_task_id() else {
            return Ok(false);
        };
        let from = self.selected;
        let to = match direction {
            MoveDirection::Up if from > 0 => from - 1,
            MoveDirection::Down if from + 1 < self.store.len() => from + 2,
            _ => return Ok(false),
        };
        self.store.move_tasks(&BTreeSet::from([from]), to)?;
        self.select_id(id);
        Ok(true)
    }

    /// Open an edit session on the selected task.
    ///
    /// Returns `Ok(false)` when nothing is selected.
    pub(super) fn begin_edit_selected(&mut self) -> Result<bool, StoreError> {
        let Some(id) = self.selected_task_id() else {
            return Ok(false);
        };
        self.store.begin_edit(id)?;
        Ok(true)
    }

    pub(super) const fn edit_session(&self) -> Option<&EditSession> {
        self.store.edit_session()
    }

    pub(super) const fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.store.edit_session_mut()
    }

    pub(super) fn commit_edit(&mut self) -> Result<TaskId, StoreError> {
        let result = self.store.commit_edit();
        if let Ok(id) = result {
            self.select_id(id);
        }
        self.clamp_selection();
        result
    }

    pub(super) fn cancel_edit(&mut self) {
        self.store.cancel_edit();
    }

    pub(super) fn cycle_new_task_color(&mut self, forward: bool) {
        self.new_task_color = self.step_color(self.new_task_color, forward);
    }

    pub(super) fn cycle_draft_color(&mut self, forward: bool) {
        let Some(current) = self.store.edit_session().map(EditSession::color) else {
            return;
        };
        let next = self.step_color(current, forward);
        if let Some(session) = self.store.edit_session_mut() {
            session.set_color(next);
        }
    }

    fn step_color(&self, current: TaskColor, forward: bool) -> TaskColor {
        if forward {
            self.tasks_config.next_color(current)
        } else {
            self.tasks_config.prev_color(current)
        }
    }

    pub(super) fn toggle_appearance(&mut self) -> Result<Appearance, SettingsError> {
        self.appearance.toggle()
    }
}
