//! Task Store: the single owner of the to-do collection.
//!
//! All mutations go through [`TaskReducer`]; presenters receive the
//! state read-only and send [`TaskIntent`]s back up.

mod intent;
mod reducer;
mod state;

pub use intent::TaskIntent;
pub use reducer::TaskReducer;
pub use state::{counter_label, Notice, Task, TaskId, TaskListState};
