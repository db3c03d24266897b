use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

use crate::layout::{render_cell_text, row_slots};
use crate::model::MilestoneEntry;
use crate::theme;

/// Rows per milestone: title line, gauge, remaining/threshold line.
pub const MILESTONE_ROW_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneRow {
    pub name: String,
    pub level_label: String,
    pub fill_percent: u16,
    pub detail: String,
}

pub fn level_label(level: u32, total_levels: u32) -> String {
    if total_levels == 0 {
        return "0/0".to_string();
    }
    format!("{level}/{total_levels}")
}

pub fn clamp_percent(progress_percent: i32) -> u16 {
    progress_percent.clamp(0, 100) as u16
}

pub fn milestone_rows(entries: &[MilestoneEntry]) -> Vec<MilestoneRow> {
    entries
        .iter()
        .map(|m| MilestoneRow {
            name: m.name.clone(),
            level_label: level_label(m.level, m.total_levels),
            fill_percent: clamp_percent(m.progress_percent),
            detail: format!(
                "{} remaining of {}",
                m.remaining_to_next, m.next_level_threshold
            ),
        })
        .collect()
}

pub fn render_milestone_view(frame: &mut Frame, area: Rect, entries: &[MilestoneEntry]) {
    let rows = milestone_rows(entries);
    let slots = row_slots(area, MILESTONE_ROW_HEIGHT, rows.len());

    for (row, slot) in rows.iter().zip(slots) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(slot);

        let title = Line::from(vec![
            Span::styled(row.name.as_str(), theme::bold()),
            Span::raw("  "),
            Span::styled(
                format!("Level {}", row.level_label),
                Style::default().fg(theme::ACCENT),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), lines[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme::GAUGE).bg(theme::TEXT_DIM))
            .percent(row.fill_percent)
            .label(format!("{}%", row.fill_percent));
        frame.render_widget(gauge, lines[1]);

        render_cell_text(frame, lines[2], &row.detail, theme::muted());
    }
}
