use crate::tasks::intent::TaskIntent;
use crate::tasks::state::{Notice, Task, TaskId, TaskListState};
use crate::ui::mvi::Reducer;

pub struct TaskReducer;

impl Reducer for TaskReducer {
    type State = TaskListState;
    type Intent = TaskIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TaskIntent::Add { title } => add(state, title),
            TaskIntent::Toggle { id } => toggle(state, id),
            TaskIntent::RequestRemove { id } => request_remove(state, id),
            TaskIntent::ConfirmRemove => confirm_remove(state),
            TaskIntent::CancelRemove => TaskListState {
                pending_remove: None,
                ..state
            },
            TaskIntent::Rename { id, title } => rename(state, id, title),
            TaskIntent::DismissNotice => TaskListState {
                notice: None,
                ..state
            },
        }
    }
}

fn add(state: TaskListState, title: String) -> TaskListState {
    if state.tasks.iter().any(|task| task.title == title) {
        tracing::debug!(%title, "rejected duplicate task");
        return TaskListState {
            notice: Some(Notice::duplicate_task()),
            ..state
        };
    }

    let mut tasks = state.tasks;
    let id = TaskId(tasks.len() as u32 + 1);
    tasks.push(Task {
        id,
        title,
        done: false,
    });
    TaskListState { tasks, ..state }
}

fn toggle(state: TaskListState, id: TaskId) -> TaskListState {
    let mut tasks = state.tasks;
    if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
        task.done = !task.done;
    }
    TaskListState { tasks, ..state }
}

fn request_remove(state: TaskListState, id: TaskId) -> TaskListState {
    // Arming for an unknown id would show a dialog that can never resolve.
    if state.task(id).is_none() {
        return state;
    }
    TaskListState {
        pending_remove: Some(id),
        ..state
    }
}

fn confirm_remove(state: TaskListState) -> TaskListState {
    let Some(id) = state.pending_remove else {
        return state;
    };
    let mut tasks = state.tasks;
    tasks.retain(|task| task.id != id);
    TaskListState {
        tasks,
        pending_remove: None,
        ..state
    }
}

fn rename(state: TaskListState, id: TaskId, title: String) -> TaskListState {
    let mut tasks = state.tasks;
    if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
        task.title = title;
    }
    TaskListState { tasks, ..state }
}
