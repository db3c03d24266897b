use std::io;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::icons::IconResolver;
use crate::model::ProfileData;
use crate::profile_page::render_profile_page;
use crate::theme;

pub fn ui(frame: &mut Frame, data: &ProfileData, icons: &dyn IconResolver) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(data)).style(
        Style::default()
            .fg(theme::HEADER_FG)
            .bg(theme::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, chunks[0]);

    render_profile_page(frame, chunks[1], data, icons);

    let footer = Paragraph::new(footer_text()).style(theme::muted());
    frame.render_widget(footer, chunks[2]);
}

pub fn header_text(data: &ProfileData) -> String {
    if data.identity.display_name.is_empty() {
        return " PROFILE".to_string();
    }
    format!(" PROFILE | {}", data.identity.display_name)
}

pub fn footer_text() -> String {
    "q/Esc Quit".to_string()
}

/// Draws one frame into an off-screen buffer of the given size.
pub fn render_to_buffer(
    data: &ProfileData,
    icons: &dyn IconResolver,
    width: u16,
    height: u16,
) -> io::Result<Buffer> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| ui(f, data, icons))?;
    Ok(terminal.backend().buffer().clone())
}

/// Buffer contents as plain text, one string per row, trailing spaces trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    if width == 0 {
        return Vec::new();
    }
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}
