use crate::color::TaskColor;
use crate::id::TaskId;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    /// Display text.
    pub title: String,
    /// Presentation colour.
    pub color: TaskColor,
    /// Whether the task is flagged as important.
    pub is_important: bool,
}

impl Task {
    pub(crate) fn new(title: String, color: TaskColor) -> Self {
        Self {
            id: TaskId::new(),
            title,
            color,
            is_important: false,
        }
    }

    /// Identity of the task; fixed for its whole lifetime.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }
}
