use crate::tasks::{counter_label, Notice, TaskId, TaskIntent, TaskListState, TaskReducer};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use crate::ui::mvi::Reducer;
use crate::ui::shell::InputBuffer;

/// Which region receives plain key input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// The add-task input field.
    Shell,
    /// The task list (selection, toggle, edit, remove).
    List,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    /// Task Store state (MVI pattern). The only owner of the collection.
    tasks: TaskListState,
    /// Inline title editor state (MVI pattern).
    editor: EditorState,
    /// Add-task input field.
    input: InputBuffer,
    /// Cursor into the task list; clamped after every mutation.
    selected: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Shell,
            size: None,
            tasks: TaskListState::default(),
            editor: EditorState::default(),
            input: InputBuffer::default(),
            selected: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Shell => Focus::List,
            Focus::List => Focus::Shell,
        };
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    // -- Shell ---------------------------------------------------------------

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_push(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn input_backspace(&mut self) {
        self.input.backspace();
    }

    /// Submit the add-task field: forwards the raw text to the store and
    /// clears the field. Empty submissions are dropped here.
    pub fn submit_new_task(&mut self) {
        if let Some(title) = self.input.submit() {
            dispatch_mvi!(self, tasks, TaskReducer, TaskIntent::Add { title });
        }
    }

    // -- Task Store ----------------------------------------------------------

    pub fn tasks(&self) -> &TaskListState {
        &self.tasks
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.tasks.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        dispatch_mvi!(self, tasks, TaskReducer, TaskIntent::DismissNotice);
    }

    pub fn confirming_removal(&self) -> bool {
        self.tasks.pending_remove.is_some()
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            dispatch_mvi!(self, tasks, TaskReducer, TaskIntent::Toggle { id });
        }
    }

    pub fn request_remove_selected(&mut self) {
        // The editor owns input while open; never arm a removal mid-rename.
        if self.editor.is_editing() {
            return;
        }
        if let Some(id) = self.selected_id() {
            dispatch_mvi!(self, tasks, TaskReducer, TaskIntent::RequestRemove { id });
        }
    }

    pub fn confirm_remove(&mut self) {
        dispatch_mvi!(self, tasks, TaskReducer, TaskIntent::ConfirmRemove);
        self.clamp_selection();
    }

    pub fn cancel_remove(&mut self) {
        dispatch_mvi!(self, tasks, TaskReducer, TaskIntent::CancelRemove);
    }

    // -- Selection -----------------------------------------------------------

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.tasks.tasks.get(self.selected).map(|task| task.id)
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let len = len as i32;
        let next = (self.selected as i32 + delta).rem_euclid(len);
        self.selected = next as usize;
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len() - 1;
        }
    }

    // -- Editor --------------------------------------------------------------

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn start_edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(title) = self.tasks.task(id).map(|task| task.title.clone()) else {
            return;
        };
        dispatch_mvi!(self, editor, EditorReducer, EditorIntent::Open { id, title });
    }

    pub fn editor_type(&mut self, ch: char) {
        dispatch_mvi!(self, editor, EditorReducer, EditorIntent::Type(ch));
    }

    pub fn editor_backspace(&mut self) {
        dispatch_mvi!(self, editor, EditorReducer, EditorIntent::Backspace);
    }

    /// Commit the edit: renames with the buffer as typed, even when
    /// unchanged or empty. No validation at this layer.
    pub fn submit_edit(&mut self) {
        if let EditorState::Editing { id, buffer } = self.editor.clone() {
            dispatch_mvi!(self, editor, EditorReducer, EditorIntent::Submit);
            dispatch_mvi!(
                self,
                tasks,
                TaskReducer,
                TaskIntent::Rename { id, title: buffer }
            );
        }
    }

    /// Cancel the edit: the typed buffer is discarded, no rename happens.
    pub fn cancel_edit(&mut self) {
        dispatch_mvi!(self, editor, EditorReducer, EditorIntent::Cancel);
    }

    // -- Read-side helpers (also the test surface) ---------------------------

    pub fn counter_text(&self) -> String {
        counter_label(self.tasks.len())
    }

    pub fn task_title(&self, index: usize) -> Option<&str> {
        self.tasks.tasks.get(index).map(|task| task.title.as_str())
    }

    pub fn task_done(&self, index: usize) -> Option<bool> {
        self.tasks.tasks.get(index).map(|task| task.done)
    }
}
