use crate::tasks::state::TaskId;
use crate::ui::mvi::Intent;

/// Mutations accepted by the Task Store.
#[derive(Debug, Clone)]
pub enum TaskIntent {
    /// Append a new task unless the title already exists (exact,
    /// case-sensitive match), in which case a notice is raised instead.
    Add { title: String },
    /// Flip `done` on the matching task. Absent id is a no-op.
    Toggle { id: TaskId },
    /// Arm the removal confirmation dialog for the matching task.
    RequestRemove { id: TaskId },
    /// User accepted the confirmation: drop the armed task.
    ConfirmRemove,
    /// User declined the confirmation: collection unchanged.
    CancelRemove,
    /// Replace the title of the matching task, keeping id and done.
    /// Absent id is a no-op. No duplicate check, unlike `Add`.
    Rename { id: TaskId, title: String },
    /// Clear the duplicate-add notice.
    DismissNotice,
}

impl Intent for TaskIntent {}
