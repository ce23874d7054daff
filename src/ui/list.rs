use crate::tasks::{Task, TaskListState};
use crate::ui::editor::EditorState;
use crate::ui::theme::{ACCENT_GREEN, GLOBAL_BORDER, MARKER_BORDER, SELECTED_BG, TASK_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Marker glyphs: bordered empty box when undone, filled box with a check
/// when done. The two states are fixed by the visual contract.
const MARKER_UNDONE: &str = "[ ]";
const MARKER_DONE: &str = "[✓]";

pub struct TaskList<'a> {
    tasks: &'a TaskListState,
    editor: &'a EditorState,
    selected: usize,
    list_focused: bool,
}

impl<'a> TaskList<'a> {
    pub fn new(
        tasks: &'a TaskListState,
        editor: &'a EditorState,
        selected: usize,
        list_focused: bool,
    ) -> Self {
        Self {
            tasks,
            editor,
            selected,
            list_focused,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'a> {
        let content_width = area.width.saturating_sub(2) as usize;
        let lines: Vec<Line<'a>> = self
            .tasks
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| self.row(index, task, content_width))
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn row(&self, index: usize, task: &'a Task, content_width: usize) -> Line<'a> {
        if self.editor.editing_id() == Some(task.id) {
            let buffer = self.editor.buffer().unwrap_or_default().to_string();
            return Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(marker(task.done), marker_style(task.done)),
                Span::raw(" "),
                Span::styled(
                    buffer,
                    Style::default()
                        .fg(ACCENT_GREEN)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled("▏", Style::default().fg(MARKER_BORDER)),
            ]);
        }

        let mut spans = vec![
            Span::styled(" ", Style::default()),
            Span::styled(marker(task.done), marker_style(task.done)),
            Span::raw(" "),
            Span::styled(task.title.as_str(), title_style(task.done)),
        ];

        let highlighted = self.list_focused && index == self.selected;
        if highlighted {
            let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
            spans.push(Span::raw(" ".repeat(content_width.saturating_sub(used))));
        }

        let mut line = Line::from(spans);
        if highlighted {
            line = line.style(Style::default().bg(SELECTED_BG));
        }
        line
    }
}

fn marker(done: bool) -> &'static str {
    if done {
        MARKER_DONE
    } else {
        MARKER_UNDONE
    }
}

fn marker_style(done: bool) -> Style {
    if done {
        Style::default().fg(ACCENT_GREEN)
    } else {
        Style::default().fg(MARKER_BORDER)
    }
}

fn title_style(done: bool) -> Style {
    if done {
        Style::default()
            .fg(ACCENT_GREEN)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(TASK_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_has_two_fixed_states() {
        assert_eq!(marker(false), "[ ]");
        assert_eq!(marker(true), "[✓]");
    }

    #[test]
    fn done_title_is_accent_and_struck_through() {
        let style = title_style(true);
        assert_eq!(style.fg, Some(ACCENT_GREEN));
        assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn undone_title_is_neutral() {
        let style = title_style(false);
        assert_eq!(style.fg, Some(TASK_TEXT));
        assert!(!style.add_modifier.contains(Modifier::CROSSED_OUT));
    }
}
