use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, HINT_DIM};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    /// Editing captures input, so the remove binding cannot fire; its hint
    /// is rendered dimmed to match.
    editing: bool,
}

impl Footer {
    pub fn new(editing: bool) -> Self {
        Self { editing }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let disabled_style = Style::default().fg(HINT_DIM).add_modifier(Modifier::DIM);

        let hints: Vec<Span<'static>> = if self.editing {
            vec![
                Span::styled(" Enter: Salvar │ Esc: Cancelar │ ", text_style),
                Span::styled("Del: Remover", disabled_style),
            ]
        } else {
            vec![Span::styled(
                " Tab: Foco │ Espaço: Concluir │ e: Editar │ Del: Remover │ Ctrl+Q: Sair",
                text_style,
            )]
        };

        let version = format!("v{} ", VERSION);
        let hints_width: usize = hints.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version.chars().count());

        let mut spans = hints;
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
