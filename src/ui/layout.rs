use ratatui::layout::Rect;

/// Fixed vertical split: 3-row header, 3-row input shell, footer pinned to
/// the bottom, the task list filling the rest.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let input_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(
        area.height
            .saturating_sub(header_height)
            .saturating_sub(input_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let input = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: input_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + input_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + input_height + footer_height),
    };
    (header, input, body, footer)
}

/// Centered rect of a fixed size, clamped to `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
