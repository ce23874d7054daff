use crate::tasks::TaskId;
use crate::ui::mvi::UiState;

/// Edit mode of the task item presenter.
///
/// At most one task is editable at a time. While `Editing`, key input is
/// captured by the editor, which also keeps the remove binding from firing
/// mid-rename.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Editing {
        id: TaskId,
        /// Working copy of the title; the task itself is untouched until
        /// submit.
        buffer: String,
    },
}

impl UiState for EditorState {}

impl EditorState {
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Id of the task being edited, if any.
    pub fn editing_id(&self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Editing { id, .. } => Some(*id),
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { buffer, .. } => Some(buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(EditorState::default(), EditorState::Idle);
    }

    #[test]
    fn accessors_on_editing() {
        let state = EditorState::Editing {
            id: TaskId(3),
            buffer: "abc".to_string(),
        };
        assert!(state.is_editing());
        assert_eq!(state.editing_id(), Some(TaskId(3)));
        assert_eq!(state.buffer(), Some("abc"));
    }
}
