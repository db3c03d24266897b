use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::icons::{IconResolver, glyph_prefix};
use crate::model::TeamHistoryEntry;
use crate::theme;

pub const UNKNOWN_TEAM: &str = "Unknown Team";
pub const HISTORY_GLYPH: &str = "users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamHistoryLine {
    pub team: String,
    pub active: bool,
}

impl TeamHistoryLine {
    pub fn status_label(&self) -> &'static str {
        if self.active { "ACTIVE" } else { "inactive" }
    }
}

pub fn team_history_line(entry: &TeamHistoryEntry) -> TeamHistoryLine {
    let team = entry
        .team_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(UNKNOWN_TEAM)
        .to_string();
    TeamHistoryLine {
        team,
        active: entry.is_active,
    }
}

pub fn render_team_history_record(
    frame: &mut Frame,
    area: Rect,
    entry: &TeamHistoryEntry,
    icons: &dyn IconResolver,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let record = team_history_line(entry);
    let (name_style, status_style) = if record.active {
        (
            Style::default()
                .fg(theme::ACTIVE)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Black).bg(theme::ACTIVE),
        )
    } else {
        (theme::muted(), Style::default().fg(theme::TEXT_DIM))
    };

    let line = Line::from(vec![
        Span::styled(glyph_prefix(icons, HISTORY_GLYPH), name_style),
        Span::styled(record.team.clone(), name_style),
        Span::raw(" "),
        Span::styled(record.status_label(), status_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
