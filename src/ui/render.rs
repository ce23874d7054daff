use crate::ui::app::{App, Focus};
use crate::ui::dialog::{render_confirm_remove, render_notice};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::TaskList;
use crate::ui::shell::PLACEHOLDER;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, HINT_DIM};
use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, input, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.tasks().len()).widget(header), header);
    draw_input(frame, app, input);

    frame.render_widget(Clear, body);
    let list = TaskList::new(
        app.tasks(),
        app.editor(),
        app.selected(),
        app.focus() == Focus::List && !app.editor().is_editing(),
    );
    frame.render_widget(list.widget(body), body);

    frame.render_widget(Footer::new(app.editor().is_editing()).widget(footer), footer);

    if let Some(notice) = app.notice() {
        render_notice(frame, body, notice);
    } else {
        render_confirm_remove(frame, body, app.tasks());
    }
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let focused = app.focus() == Focus::Shell && !app.editor().is_editing();
    let text = app.input().text();

    let line = if text.is_empty() {
        Line::from(Span::styled(
            format!(" {PLACEHOLDER}"),
            Style::default().fg(HINT_DIM).add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(HEADER_TEXT),
        ))
    };

    let border = if focused { HEADER_TEXT } else { GLOBAL_BORDER };
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );

    if focused && area.width > 2 && area.height > 2 {
        let cursor_x = area.x + 2 + text.chars().count().min(area.width as usize - 4) as u16;
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}
