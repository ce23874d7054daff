use crate::tasks::{Notice, TaskListState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT_GREEN, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const CONFIRM_TITLE: &str = "Remover item";
pub const CONFIRM_MESSAGE: &str = "Tem certeza que você deseja remover esse item?";

/// Confirmation dialog for an armed removal. `sim` maps to Enter/`s`,
/// `não` to Esc/`n`.
pub fn render_confirm_remove(frame: &mut Frame<'_>, body: Rect, tasks: &TaskListState) {
    if tasks.pending_remove.is_none() {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            CONFIRM_MESSAGE,
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[s] sim",
                Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("[n] não", Style::default().fg(HEADER_TEXT)),
        ]),
    ];

    render_popup(frame, body, CONFIRM_TITLE, lines);
}

/// Notice raised by the store (duplicate add). Any key dismisses it.
pub fn render_notice(frame: &mut Frame<'_>, body: Rect, notice: &Notice) {
    let lines = vec![
        Line::from(Span::styled(
            notice.message.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pressione qualquer tecla",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    render_popup(frame, body, notice.title, lines);
}

fn render_popup(frame: &mut Frame<'_>, body: Rect, title: &str, lines: Vec<Line<'_>>) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4);
    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(ACCENT_GREEN),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
