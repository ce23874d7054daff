use ratatui::style::Color;

// Palette lifted from the original screen design.
pub const ACCENT_GREEN: Color = Color::Rgb(0x1d, 0xb8, 0x63);
pub const TASK_TEXT: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const MARKER_BORDER: Color = Color::Rgb(0xb2, 0xb2, 0xb2);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SELECTED_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const HINT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
