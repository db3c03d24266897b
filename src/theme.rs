use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

pub const HEADER_BG: Color = Color::Rgb(0x53, 0xA5, 0xD0);
pub const HEADER_FG: Color = Color::Rgb(0xFB, 0xFC, 0xFD);
pub const IDENTITY_BG: Color = Color::Rgb(0x1E, 0x2B, 0x34);
pub const INFO_BG: Color = Color::Rgb(0x20, 0x46, 0x5E);
pub const TEXT_MUTED: Color = Color::Gray;
pub const TEXT_DIM: Color = Color::DarkGray;
pub const ACCENT: Color = Color::Cyan;
pub const ACTIVE: Color = Color::Green;
pub const GAUGE: Color = Color::Rgb(0x53, 0xA5, 0xD0);

pub fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
}

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}
