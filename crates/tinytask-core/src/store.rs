//! In-memory task list with identity-based mutation.

use std::collections::BTreeSet;

use tracing::debug;

use crate::color::TaskColor;
use crate::error::{Result, StoreError};
use crate::id::TaskId;
use crate::notify::{Listeners, StoreEvent, SubscriptionId};
use crate::task::Task;

/// Whether an edit form is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// No edit session.
    Idle,
    /// An edit session holds a draft.
    Editing,
}

/// Draft copy of a task while the edit form is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    draft: Task,
    origin: usize,
}

impl EditSession {
    /// Task being edited.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.draft.id()
    }

    /// Position of the task when the session opened.
    #[must_use]
    pub const fn origin(&self) -> usize {
        self.origin
    }

    /// Current state of the draft.
    #[must_use]
    pub const fn draft(&self) -> &Task {
        &self.draft
    }

    /// Draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.draft.title
    }

    /// Mutable access to the draft title for in-place text editing.
    pub const fn title_mut(&mut self) -> &mut String {
        &mut self.draft.title
    }

    /// Replace the draft title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Draft colour.
    #[must_use]
    pub const fn color(&self) -> TaskColor {
        self.draft.color
    }

    /// Replace the draft colour.
    pub const fn set_color(&mut self, color: TaskColor) {
        self.draft.color = color;
    }

    /// Draft importance flag.
    #[must_use]
    pub const fn is_important(&self) -> bool {
        self.draft.is_important
    }

    /// Replace the draft importance flag.
    pub const fn set_important(&mut self, is_important: bool) {
        self.draft.is_important = is_important;
    }
}

/// Ordered task list plus the optional active edit session.
///
/// Lookups by id are linear scans. Lists in this application stay small; a
/// `HashMap<TaskId, usize>` index would be needed before this scales to
/// thousands of entries.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    edit: Option<EditSession>,
    listeners: Listeners,
    revision: u64,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Current position of a task.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Number of change notifications emitted so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a callback invoked after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a callback. Returns `false` when the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Append a new task.
    ///
    /// # Errors
    /// [`StoreError::EmptyTitle`] when `title` is empty or whitespace only;
    /// the list is left untouched.
    pub fn add(&mut self, title: impl Into<String>, color: TaskColor) -> Result<TaskId> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = Task::new(title, color);
        let id = task.id();
        self.tasks.push(task);
        self.emit(StoreEvent::Added(id));
        Ok(id)
    }

    /// Open an edit session on a task, replacing any pending session.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no task has this id.
    pub fn begin_edit(&mut self, id: TaskId) -> Result<&mut EditSession> {
        let origin = self.position(id).ok_or(StoreError::NotFound(id))?;
        if let Some(previous) = &self.edit {
            debug!(replaced = %previous.task_id(), "edit session replaced");
        }
        let session = EditSession {
            draft: self.tasks[origin].clone(),
            origin,
        };
        self.emit(StoreEvent::EditStarted(id));
        Ok(self.edit.insert(session))
    }

    /// Active edit session, if any.
    #[must_use]
    pub const fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Mutable access to the active edit session.
    pub const fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    /// Whether an edit session is open.
    #[must_use]
    pub const fn edit_state(&self) -> EditState {
        if self.edit.is_some() {
            EditState::Editing
        } else {
            EditState::Idle
        }
    }

    /// Write the draft back over the original task and close the session.
    ///
    /// The task keeps its current position and id. The session is closed
    /// even when the commit fails.
    ///
    /// # Errors
    /// [`StoreError::NoActiveEdit`] when no session is open, and
    /// [`StoreError::NotFound`] when the task was deleted while editing.
    pub fn commit_edit(&mut self) -> Result<TaskId> {
        let session = self.edit.take().ok_or(StoreError::NoActiveEdit)?;
        let id = session.task_id();
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.tasks[index] = session.draft;
        self.emit(StoreEvent::Updated(id));
        Ok(id)
    }

    /// Discard the active edit session. No-op when idle.
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.edit.take() {
            self.emit(StoreEvent::EditCancelled(session.task_id()));
        }
    }

    /// Remove a task. Returns `false` (and does nothing) when it is absent.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        self.emit(StoreEvent::Deleted(id));
        true
    }

    /// Flip the importance flag. Returns `false` when the task is absent.
    pub fn toggle_importance(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return false;
        };
        task.is_important = !task.is_important;
        let is_important = task.is_important;
        self.emit(StoreEvent::ImportanceToggled { id, is_important });
        true
    }

    /// Move the tasks at `from` so they form one block at `to`.
    ///
    /// `to` is expressed in positions of the list before the move; the block
    /// lands at `to` minus the number of moved tasks that sat before it. The
    /// moved tasks keep their relative order.
    ///
    /// # Errors
    /// [`StoreError::OutOfRange`] when any source index is `>= len` or
    /// `to > len`; the list is left untouched.
    pub fn move_tasks(&mut self, from: &BTreeSet<usize>, to: usize) -> Result<()> {
        let len = self.tasks.len();
        if let Some(&index) = from.iter().find(|&&index| index >= len) {
            return Err(StoreError::OutOfRange { index, len });
        }
        if to > len {
            return Err(StoreError::OutOfRange { index: to, len });
        }
        if from.is_empty() {
            return Ok(());
        }

        let (moving, mut rest): (Vec<_>, Vec<_>) = self
            .tasks
            .drain(..)
            .enumerate()
            .partition(|(index, _)| from.contains(index));
        let start = to - from.range(..to).count();
        let count = moving.len();
        let tail = rest.split_off(start);
        self.tasks = rest
            .into_iter()
            .chain(moving)
            .chain(tail)
            .map(|(_, task)| task)
            .collect();
        self.emit(StoreEvent::Moved { count, start });
        Ok(())
    }

    fn emit(&mut self, event: StoreEvent) {
        self.revision += 1;
        debug!(revision = self.revision, ?event, "task store changed");
        self.listeners.notify(&event);
    }
}
