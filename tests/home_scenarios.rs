//! End-to-end gesture scenarios, driven through the key router.

mod common;

use common::{add_task, app_with, press, type_text};
use crossterm::event::KeyCode;
use tarefas::ui::app::{App, Focus};

#[test]
fn renders_new_added_tasks_with_counter() {
    let mut app = App::new();
    assert_eq!(app.counter_text(), "0 tarefas");

    add_task(&mut app, "Primeira tarefa");
    assert_eq!(app.task_title(0), Some("Primeira tarefa"));
    assert_eq!(app.counter_text(), "1 tarefa");

    add_task(&mut app, "Segunda tarefa");
    assert_eq!(app.task_title(0), Some("Primeira tarefa"));
    assert_eq!(app.task_title(1), Some("Segunda tarefa"));
    assert_eq!(app.counter_text(), "2 tarefas");
}

#[test]
fn submitting_clears_the_input_field() {
    let mut app = App::new();
    add_task(&mut app, "Primeira tarefa");
    assert!(app.input().is_empty());
}

#[test]
fn empty_submit_adds_nothing() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.counter_text(), "0 tarefas");
}

#[test]
fn duplicate_add_raises_notice_and_keeps_state() {
    let mut app = app_with(&["Primeira tarefa"]);
    add_task(&mut app, "Primeira tarefa");

    assert_eq!(app.counter_text(), "1 tarefa");
    let notice = app.notice().expect("duplicate add should raise a notice");
    assert_eq!(notice.title, "Task já cadastrada");
    assert_eq!(
        notice.message,
        "Você não pode cadastrar uma task com o mesmo nome"
    );

    // Any key dismisses the notice and is otherwise swallowed.
    press(&mut app, KeyCode::Char('x'));
    assert!(app.notice().is_none());
    assert!(app.input().is_empty());
}

#[test]
fn marker_toggles_done_and_back() {
    let mut app = app_with(&["Primeira tarefa"]);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::List);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.task_done(0), Some(true));

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.task_done(0), Some(false));
}

#[test]
fn toggling_one_task_leaves_the_other_untouched() {
    let mut app = app_with(&["Primeira tarefa", "Segunda tarefa"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));

    assert_eq!(app.task_done(0), Some(true));
    assert_eq!(app.task_done(1), Some(false));
    assert_eq!(app.task_title(1), Some("Segunda tarefa"));
}

#[test]
fn remove_declined_keeps_the_task() {
    let mut app = app_with(&["Primeira tarefa", "Segunda tarefa"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Delete);
    assert!(app.confirming_removal());

    press(&mut app, KeyCode::Char('n'));
    assert!(!app.confirming_removal());
    assert_eq!(app.counter_text(), "2 tarefas");
    assert_eq!(app.task_title(0), Some("Primeira tarefa"));
}

#[test]
fn remove_confirmed_drops_only_the_target() {
    let mut app = app_with(&["Primeira tarefa", "Segunda tarefa"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Char('s'));

    assert_eq!(app.counter_text(), "1 tarefa");
    assert_eq!(app.task_title(0), Some("Segunda tarefa"));
    assert_eq!(app.task_title(1), None);
}

#[test]
fn edit_submit_renames_even_to_empty() {
    let mut app = app_with(&["Primeira tarefa"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));
    assert!(app.editor().is_editing());

    for _ in 0.."Primeira tarefa".chars().count() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);

    assert!(!app.editor().is_editing());
    assert_eq!(app.task_title(0), Some(""));
    assert_eq!(app.task_done(0), Some(false));
}

#[test]
fn edit_cancel_restores_original_title() {
    let mut app = app_with(&["Primeira tarefa"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " editada");
    press(&mut app, KeyCode::Esc);

    assert!(!app.editor().is_editing());
    assert_eq!(app.task_title(0), Some("Primeira tarefa"));
}

#[test]
fn edit_keeps_done_flag() {
    let mut app = app_with(&["Primeira tarefa"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "!");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.task_title(0), Some("Primeira tarefa!"));
    assert_eq!(app.task_done(0), Some(true));
}

#[test]
fn remove_binding_is_inert_while_editing() {
    let mut app = app_with(&["Primeira tarefa"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));

    // 'd' is typed into the buffer, Delete does nothing: no dialog.
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Delete);
    assert!(!app.confirming_removal());
    assert_eq!(app.editor().buffer(), Some("Primeira tarefad"));
}

#[test]
fn selection_wraps_and_follows_removals() {
    let mut app = app_with(&["a", "b", "c"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected(), 2);

    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.counter_text(), "2 tarefas");
    assert_eq!(app.selected(), 1);
}

#[test]
fn ids_are_not_reused_within_a_session_path() {
    // Remove the last task, add a new one: the original assigns len + 1,
    // so the freed id is minted again. Documented session-local behavior.
    let mut app = app_with(&["a", "b"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Tab);
    add_task(&mut app, "c");

    assert_eq!(app.task_title(1), Some("c"));
    assert_eq!(app.tasks().tasks[1].id.0, 2);
}
