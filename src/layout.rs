use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Width of the identity column, in cells.
pub const IDENTITY_COLUMN_WIDTH: u16 = 32;

/// Named column roles. Each role maps to exactly one constraint so a
/// primitive is never reused for an unrelated grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Fixed(u16),
    Flexible,
    FlexibleWide,
}

impl Column {
    pub fn constraint(self) -> Constraint {
        match self {
            Column::Fixed(width) => Constraint::Length(width),
            Column::Flexible => Constraint::Fill(3),
            Column::FlexibleWide => Constraint::Fill(5),
        }
    }
}

pub fn split_columns(area: Rect, columns: &[Column]) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns.iter().map(|c| c.constraint()))
        .split(area)
}

/// Splits `area` into consecutive slots of `slot_height` rows, dropping
/// any slot that would not fit completely.
pub fn row_slots(area: Rect, slot_height: u16, count: usize) -> Vec<Rect> {
    if slot_height == 0 || area.width == 0 || area.height < slot_height {
        return Vec::new();
    }
    let visible = (area.height / slot_height) as usize;
    (0..count.min(visible))
        .map(|i| Rect {
            x: area.x,
            y: area.y + (i as u16) * slot_height,
            width: area.width,
            height: slot_height,
        })
        .collect()
}

/// Splits `total` items over `capacity` slots as `(shown, hidden)`. When
/// not everything fits, the last slot is given up to the overflow marker.
pub fn fit_with_overflow(total: usize, capacity: usize) -> (usize, usize) {
    if total <= capacity {
        return (total, 0);
    }
    let shown = capacity.saturating_sub(1);
    (shown, total - shown)
}

pub fn overflow_label(hidden: usize) -> String {
    format!("+{hidden} more")
}

pub fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let text_area = Rect {
        x: area.x,
        y: area.y + (area.height / 2),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(text).style(style);
    frame.render_widget(paragraph, text_area);
}
