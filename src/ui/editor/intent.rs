use crate::tasks::TaskId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Edit affordance pressed: seed the buffer with the current title.
    Open { id: TaskId, title: String },
    /// Append a typed character to the buffer.
    Type(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Commit: closes the editor. The app dispatches the rename with the
    /// buffer as typed — even when unchanged or empty, per the item
    /// interaction contract.
    Submit,
    /// Discard the buffer and restore the original title.
    Cancel,
}

impl Intent for EditorIntent {}
