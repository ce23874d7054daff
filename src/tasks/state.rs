use crate::ui::mvi::UiState;

/// Identifier of a task, assigned as `len + 1` at creation time.
///
/// Monotonic within a session only: ids are not reissued after a removal,
/// and a removal followed by an add may mint an id that was used before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u32);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

/// User-facing notice raised by the store (currently only duplicate adds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    pub fn duplicate_task() -> Self {
        Self {
            title: "Task já cadastrada",
            message: "Você não pode cadastrar uma task com o mesmo nome",
        }
    }
}

/// The whole task-list state: the collection plus the two transient
/// dialog conditions, so the reducer stays pure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskListState {
    /// Insertion-ordered collection. No two tasks share a title or an id.
    pub tasks: Vec<Task>,
    /// Set when an add was rejected; cleared by `DismissNotice`.
    pub notice: Option<Notice>,
    /// Armed removal awaiting confirmation; cleared by confirm or cancel.
    pub pending_remove: Option<TaskId>,
}

impl UiState for TaskListState {}

impl TaskListState {
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Counter text shown in the header: `"1 tarefa"`, `"{n} tarefas"` otherwise
/// (zero uses the plural form).
pub fn counter_label(count: usize) -> String {
    if count == 1 {
        format!("{count} tarefa")
    } else {
        format!("{count} tarefas")
    }
}
