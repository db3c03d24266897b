use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::layout::{fit_with_overflow, overflow_label};
use crate::model::RankEntry;
use crate::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankRow {
    pub leaderboard: String,
    pub points: String,
    pub rank: String,
}

impl RankRow {
    pub fn text(&self) -> String {
        format!("{} {} pts {}", self.leaderboard, self.points, self.rank)
    }
}

/// One row per entry, in the order given.
pub fn rank_rows(entries: &[RankEntry]) -> Vec<RankRow> {
    entries
        .iter()
        .map(|entry| RankRow {
            leaderboard: entry.leaderboard_name.clone(),
            points: entry.points.to_string(),
            rank: format!("#{}", entry.rank),
        })
        .collect()
}

pub fn render_rank_view(frame: &mut Frame, area: Rect, entries: &[RankEntry]) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // First line is the heading.
    let capacity = (area.height - 1) as usize;
    let (shown, hidden) = fit_with_overflow(entries.len(), capacity);

    let mut lines = vec![Line::from(Span::styled("LEADERBOARDS", theme::bold()))];
    for row in rank_rows(&entries[..shown]) {
        lines.push(Line::from(vec![
            Span::styled(row.leaderboard, Style::default().fg(theme::HEADER_FG)),
            Span::raw(" "),
            Span::styled(format!("{} pts", row.points), theme::muted()),
            Span::raw(" "),
            Span::styled(row.rank, Style::default().fg(theme::ACCENT)),
        ]));
    }
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            overflow_label(hidden),
            Style::default().fg(theme::TEXT_DIM),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
