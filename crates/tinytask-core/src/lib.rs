//! Domain types for tinytask: tasks, colours and the in-memory task store.

/// Presentation colours.
pub mod color;
/// Store error types.
pub mod error;
/// Identifier types.
pub mod id;
/// Change notifications.
pub mod notify;
/// The task list and its edit session.
pub mod store;
/// Task record.
pub mod task;

pub use color::{PaletteColor, ParseColorError, TaskColor};
pub use error::StoreError;
pub use id::TaskId;
pub use notify::{StoreEvent, SubscriptionId};
pub use store::{EditSession, EditState, TaskStore};
pub use task::Task;
