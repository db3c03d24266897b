//! Composition root for the profile dashboard.
//!
//! The body is a fixed-width identity column next to a wide main column.
//! The main column stacks the milestone panel over a nested sub-row that
//! holds the badge and team-history panels, so the sub-row can size its
//! two children without touching the identity column.

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::badge_view::{badge_panel_title, render_badge_view};
use crate::icons::{IconResolver, glyph_prefix};
use crate::layout::{
    Column, IDENTITY_COLUMN_WIDTH, fit_with_overflow, overflow_label, render_cell_text,
    row_slots, split_columns,
};
use crate::milestone_view::{MILESTONE_ROW_HEIGHT, render_milestone_view};
use crate::model::{ProfileData, ProfileIdentity};
use crate::rank_view::render_rank_view;
use crate::team_history::render_team_history_record;
use crate::theme;

pub const MILESTONE_PANEL_TITLE: &str = "Milestone Progress";
pub const TEAM_HISTORY_PANEL_TITLE: &str = "TEAM HISTORY";
pub const TEAM_GLYPH: &str = "football-ball";
pub const EMAIL_GLYPH: &str = "at";

// Keeps the badge/team row visible when there are many milestones.
const SUB_ROW_MIN_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub identity: Rect,
    pub main: Rect,
    pub milestones: Rect,
    pub badges: Rect,
    pub team_history: Rect,
}

pub fn page_layout(area: Rect, milestone_count: usize) -> PageAreas {
    let columns = split_columns(
        area,
        &[Column::Fixed(IDENTITY_COLUMN_WIDTH), Column::FlexibleWide],
    );
    let identity = columns[0];
    let main = columns[1];

    let milestone_height = u16::try_from(milestone_count)
        .unwrap_or(u16::MAX)
        .saturating_mul(MILESTONE_ROW_HEIGHT)
        .saturating_add(2)
        .min(main.height.saturating_sub(SUB_ROW_MIN_HEIGHT));
    let stacked = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(milestone_height), Constraint::Fill(1)])
        .split(main);

    let sub_row = split_columns(stacked[1], &[Column::FlexibleWide, Column::Flexible]);

    PageAreas {
        identity,
        main,
        milestones: stacked[0],
        badges: sub_row[0],
        team_history: sub_row[1],
    }
}

pub fn render_profile_page(
    frame: &mut Frame,
    area: Rect,
    data: &ProfileData,
    icons: &dyn IconResolver,
) {
    let areas = page_layout(area, data.milestones.len());

    render_identity_column(frame, areas.identity, data, icons);

    let milestone_block = theme::panel_block(MILESTONE_PANEL_TITLE);
    let inner = milestone_block.inner(areas.milestones);
    frame.render_widget(milestone_block, areas.milestones);
    render_milestone_view(frame, inner, &data.milestones);

    let badge_title = badge_panel_title(&data.badges);
    let badge_block = theme::panel_block(&badge_title);
    let inner = badge_block.inner(areas.badges);
    frame.render_widget(badge_block, areas.badges);
    render_badge_view(frame, inner, &data.badges, icons);

    let team_block = theme::panel_block(TEAM_HISTORY_PANEL_TITLE);
    let inner = team_block.inner(areas.team_history);
    frame.render_widget(team_block, areas.team_history);
    let slots = row_slots(inner, 1, data.team_history.len());
    let (shown, hidden) = fit_with_overflow(data.team_history.len(), slots.len());
    for (entry, slot) in data.team_history[..shown].iter().zip(&slots) {
        render_team_history_record(frame, *slot, entry, icons);
    }
    if let Some(slot) = slots.get(shown).filter(|_| hidden > 0) {
        render_cell_text(
            frame,
            *slot,
            &overflow_label(hidden),
            Style::default().fg(theme::TEXT_DIM),
        );
    }
}

fn render_identity_column(
    frame: &mut Frame,
    area: Rect,
    data: &ProfileData,
    icons: &dyn IconResolver,
) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::IDENTITY_BG)),
        area,
    );
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(1),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

    let identity = &data.identity;

    let avatar = Paragraph::new(avatar_label(identity))
        .alignment(Alignment::Center)
        .style(theme::muted())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(avatar, chunks[0]);

    let name = Paragraph::new(identity.display_name.to_uppercase())
        .alignment(Alignment::Center)
        .style(theme::bold().fg(theme::HEADER_FG));
    frame.render_widget(name, chunks[1]);

    let designation = Paragraph::new(identity.designation.as_str())
        .alignment(Alignment::Center)
        .style(theme::muted())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme::TEXT_DIM)),
        );
    frame.render_widget(designation, chunks[2]);

    let info = Paragraph::new(info_lines(identity, icons))
        .style(Style::default().bg(theme::INFO_BG));
    frame.render_widget(info, chunks[3]);

    render_rank_view(frame, chunks[5], &data.rankings);
}

fn avatar_label(identity: &ProfileIdentity) -> String {
    if identity.avatar_image.is_empty() {
        "no avatar".to_string()
    } else {
        identity.avatar_image.clone()
    }
}

fn info_lines(identity: &ProfileIdentity, icons: &dyn IconResolver) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::raw(glyph_prefix(icons, TEAM_GLYPH)),
            Span::styled("Team: ", theme::muted()),
            Span::raw(identity.team.clone()),
        ]),
        Line::from(vec![
            Span::raw(glyph_prefix(icons, EMAIL_GLYPH)),
            Span::raw(identity.email.clone()),
        ]),
    ]
}
