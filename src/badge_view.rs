use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::icons::{IconResolver, glyph_prefix};
use crate::layout::{fit_with_overflow, overflow_label};
use crate::model::Badge;
use crate::theme;

pub const BADGE_CELL_WIDTH: u16 = 16;
pub const BADGE_CELL_HEIGHT: u16 = 2;

pub fn badge_panel_title(badges: &[Badge]) -> String {
    format!("MY BADGES ({})", badges.len())
}

/// Cells per row and number of rows needed for `count` badges in `width` cells.
pub fn badge_grid(count: usize, width: u16) -> (usize, usize) {
    let per_row = ((width / BADGE_CELL_WIDTH) as usize).max(1);
    (per_row, count.div_ceil(per_row))
}

pub fn render_badge_view(
    frame: &mut Frame,
    area: Rect,
    badges: &[Badge],
    icons: &dyn IconResolver,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (per_row, _) = badge_grid(badges.len(), area.width);
    let cell_width = BADGE_CELL_WIDTH.min(area.width);
    let capacity = per_row * (area.height / BADGE_CELL_HEIGHT) as usize;
    let (shown, hidden) = fit_with_overflow(badges.len(), capacity);
    let cell_at = |idx: usize| Rect {
        x: area.x + (idx % per_row) as u16 * cell_width,
        y: area.y + (idx / per_row) as u16 * BADGE_CELL_HEIGHT,
        width: cell_width,
        height: BADGE_CELL_HEIGHT,
    };

    for (idx, badge) in badges[..shown].iter().enumerate() {
        let cell = cell_at(idx);

        let glyph = badge
            .glyph
            .as_deref()
            .map(|name| glyph_prefix(icons, name))
            .unwrap_or_default();
        let mut lines = vec![Line::from(vec![
            Span::styled(glyph, Style::default().fg(theme::ACCENT)),
            Span::styled(badge.name.as_str(), theme::bold()),
        ])];
        if let Some(sub) = &badge.sub_badge {
            lines.push(Line::from(Span::styled(sub.as_str(), theme::muted())));
        }
        frame.render_widget(Paragraph::new(lines), cell);
    }

    // No marker when not even one cell fits.
    if hidden > 0 && shown < capacity {
        let marker =
            Paragraph::new(overflow_label(hidden)).style(Style::default().fg(theme::TEXT_DIM));
        frame.render_widget(marker, cell_at(shown));
    }
}
