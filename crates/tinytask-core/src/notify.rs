//! Change notifications emitted by the task store.

use std::fmt;

use crate::id::TaskId;

/// A successful mutation of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task was appended.
    Added(TaskId),
    /// An edit session was committed onto the task.
    Updated(TaskId),
    /// A task was removed.
    Deleted(TaskId),
    /// A block of tasks was moved.
    Moved {
        /// Number of tasks in the moved block.
        count: usize,
        /// Index of the first moved task after the move.
        start: usize,
    },
    /// The importance flag of a task flipped.
    ImportanceToggled {
        /// Affected task.
        id: TaskId,
        /// Flag value after the flip.
        is_important: bool,
    },
    /// An edit session opened (or replaced the previous one).
    EditStarted(TaskId),
    /// The active edit session was discarded.
    EditCancelled(TaskId),
}

/// Handle returned by [`crate::TaskStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Registered listeners, called in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
