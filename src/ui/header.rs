use crate::tasks::counter_label;
use crate::ui::theme::{ACCENT_GREEN, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    task_count: usize,
}

impl Header {
    pub fn new(task_count: usize) -> Self {
        Self { task_count }
    }

    /// App title on the left, pluralized counter on the right.
    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let title = " to.do";
        let counter = format!("{} ", counter_label(self.task_count));

        let title_width = title.chars().count();
        let counter_width = counter.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(title_width)
            .saturating_sub(counter_width);

        let line = Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(counter, Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
