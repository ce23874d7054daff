use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::EditorState;
use crate::ui::mvi::Reducer;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Open { id, title } => EditorState::Editing { id, buffer: title },
            EditorIntent::Type(ch) => match state {
                EditorState::Editing { id, mut buffer } => {
                    buffer.push(ch);
                    EditorState::Editing { id, buffer }
                }
                idle => idle,
            },
            EditorIntent::Backspace => match state {
                EditorState::Editing { id, mut buffer } => {
                    buffer.pop();
                    EditorState::Editing { id, buffer }
                }
                idle => idle,
            },
            // Submit and Cancel both close the editor; whether a rename is
            // dispatched is decided by the caller, which still holds the
            // buffer from before the reduce.
            EditorIntent::Submit | EditorIntent::Cancel => EditorState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskId;

    fn open() -> EditorState {
        EditorReducer::reduce(
            EditorState::Idle,
            EditorIntent::Open {
                id: TaskId(1),
                title: "abc".to_string(),
            },
        )
    }

    #[test]
    fn open_seeds_buffer_with_title() {
        assert_eq!(open().buffer(), Some("abc"));
    }

    #[test]
    fn typing_appends_and_backspace_pops() {
        let state = EditorReducer::reduce(open(), EditorIntent::Type('!'));
        assert_eq!(state.buffer(), Some("abc!"));
        let state = EditorReducer::reduce(state, EditorIntent::Backspace);
        let state = EditorReducer::reduce(state, EditorIntent::Backspace);
        assert_eq!(state.buffer(), Some("ab"));
    }

    #[test]
    fn typing_while_idle_is_noop() {
        let state = EditorReducer::reduce(EditorState::Idle, EditorIntent::Type('x'));
        assert_eq!(state, EditorState::Idle);
    }

    #[test]
    fn submit_and_cancel_close_the_editor() {
        assert_eq!(
            EditorReducer::reduce(open(), EditorIntent::Submit),
            EditorState::Idle
        );
        assert_eq!(
            EditorReducer::reduce(open(), EditorIntent::Cancel),
            EditorState::Idle
        );
    }
}
