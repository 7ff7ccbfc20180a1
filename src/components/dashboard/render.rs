// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! UI rendering logic for the dashboard view.
//!
//! A loaded dashboard is drawn top to bottom as the server status banner, the
//! summary cards, the library breakdown tiles, the recently added list and
//! the quick actions. A failed load replaces all of it with a single error
//! banner and the retry hint.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::{
    api::models::{RecentItem, ServerStatus},
    components::DashboardView,
    dashboard::{DashboardSnapshot, DashboardState},
    model::{MediaKind, breakdown_tiles},
    render::{
        Render, RenderContext,
        icons::{ICON_CONNECTED, ICON_DISCONNECTED, ICON_HISTORY, ICON_REFRESH, ICON_SPEED},
        widgets::{error_banner, hint_line, muted, panel, spinner},
    },
    theme::Theme,
    util::format::{format_count, format_relative},
};

impl Render for DashboardView {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        draw_header(f, chunks[0], ctx.theme);

        match &self.state {
            DashboardState::Idle | DashboardState::Loading => {
                f.render_widget(spinner("Loading dashboard", ctx), centre_line(chunks[1]));
            }
            DashboardState::Failed(message) => draw_failure(f, chunks[1], message, ctx.theme),
            DashboardState::Loaded(snapshot) => {
                draw_snapshot(f, chunks[1], snapshot, &mut self.recent_state, ctx)
            }
        }
    }
}

fn draw_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Dashboard",
            Style::default()
                .fg(theme.text_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(muted("Overview of your Plex media server", theme)),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(header, area);
}

fn centre_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

fn draw_failure(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(error_banner(message, theme), chunks[1]);
    f.render_widget(
        Paragraph::new(hint_line(&[("r", "Retry")], theme)),
        chunks[2],
    );
}

fn draw_snapshot(
    f: &mut Frame,
    area: Rect,
    snapshot: &DashboardSnapshot,
    recent_state: &mut ListState,
    ctx: &RenderContext,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    f.render_widget(status_banner(&snapshot.status, ctx.theme), chunks[0]);
    draw_cards(f, chunks[1], snapshot, ctx);
    draw_breakdown(f, chunks[2], snapshot, ctx.theme);
    draw_recent(f, chunks[3], &snapshot.recent, recent_state, ctx);
    draw_quick_actions(f, chunks[4], ctx.theme);
}

/// Builds the server status banner.
///
/// Each optional field is only shown when the backend reported it.
fn status_banner<'a>(status: &ServerStatus, theme: &Theme) -> Paragraph<'a> {
    let (icon, label, fg, bg) = if status.connected {
        (ICON_CONNECTED, "Connected", theme.success_fg, theme.success_bg)
    } else {
        (ICON_DISCONNECTED, "Disconnected", theme.error_fg, theme.error_bg)
    };

    let mut spans = vec![Span::styled(
        format!("{icon} {label}"),
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    )];

    let mut push = |text: String| {
        spans.push(Span::styled("  |  ", Style::default().fg(theme.border_colour)));
        spans.push(Span::styled(text, Style::default().fg(theme.text_fg)));
    };

    if let Some(name) = &status.server_name {
        push(format!("Server: {name}"));
    }
    if let Some(version) = &status.version {
        push(format!("Version: {version}"));
    }
    if let Some(ms) = status.response_time_ms {
        push(format!("{ICON_SPEED} Response: {ms}ms"));
    }
    if let Some(error) = status.error.as_ref().filter(|_| !status.connected) {
        push(error.clone());
    }

    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(fg))
                .padding(Padding::horizontal(1)),
        )
}

fn draw_cards(f: &mut Frame, area: Rect, snapshot: &DashboardSnapshot, ctx: &RenderContext) {
    let stats = &snapshot.stats;
    let cards = [
        (stats.total_libraries.to_string(), "Libraries"),
        (format_count(stats.total_items), "Total Items"),
        (stats.recent_scans.to_string(), "Scans (24h)"),
        (
            format_relative(stats.last_scan.as_deref(), ctx.now),
            "Last Scan",
        ),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((value, label), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(ctx.theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(muted(label, ctx.theme)),
        ])
        .alignment(Alignment::Center)
        .block(panel("", ctx.theme).style(Style::default().bg(ctx.theme.panel_colour)));

        f.render_widget(card, *column);
    }
}

fn draw_breakdown(f: &mut Frame, area: Rect, snapshot: &DashboardSnapshot, theme: &Theme) {
    let tiles = breakdown_tiles(&snapshot.stats.by_type);

    let mut spans = Vec::new();
    for tile in &tiles {
        spans.push(Span::styled(
            format!("{} {} ", tile.kind.icon(), format_count(tile.count)),
            Style::default()
                .fg(tile.kind.colour())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{}    ", tile.label),
            Style::default().fg(theme.muted_fg),
        ));
    }

    if tiles.is_empty() {
        spans.push(muted("No media in any library", theme));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(panel(" Library Breakdown ", theme)),
        area,
    );
}

fn recent_item_line<'a>(item: &RecentItem, ctx: &RenderContext) -> Line<'a> {
    let kind = MediaKind::classify(&item.kind);

    let mut spans = vec![
        Span::styled(format!("{} ", kind.icon()), Style::default().fg(kind.colour())),
        Span::styled(
            item.title.clone(),
            Style::default()
                .fg(ctx.theme.text_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", item.kind),
            Style::default().fg(ctx.theme.text_fg).bg(kind.colour()),
        ),
    ];

    if let Some(year) = item.year {
        spans.push(muted(format!(" ({year})"), ctx.theme));
    }

    spans.push(muted(
        format!(
            "  {}  {}",
            item.library,
            format_relative(item.added_at.as_deref(), ctx.now)
        ),
        ctx.theme,
    ));

    Line::from(spans)
}

fn draw_recent(
    f: &mut Frame,
    area: Rect,
    items: &[RecentItem],
    state: &mut ListState,
    ctx: &RenderContext,
) {
    let title = Line::from(vec![
        Span::raw(" Recently Added "),
        muted(format!("[r] {ICON_REFRESH} Refresh "), ctx.theme),
    ]);
    let block = panel(title, ctx.theme);

    if items.is_empty() {
        f.render_widget(
            Paragraph::new(muted("No recently added items", ctx.theme))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let list = List::new(
        items
            .iter()
            .map(|item| ListItem::new(recent_item_line(item, ctx)))
            .collect::<Vec<_>>(),
    )
    .block(block)
    .highlight_style(Style::default().bg(ctx.theme.highlight_bg));

    f.render_stateful_widget(list, area, state);
}

fn draw_quick_actions(f: &mut Frame, area: Rect, theme: &Theme) {
    let history = format!("{ICON_HISTORY} Scan History");
    let actions = Paragraph::new(hint_line(
        &[
            ("l", "Libraries"),
            ("s", "Settings"),
            ("h", history.as_str()),
            ("r", "Refresh"),
        ],
        theme,
    ))
    .block(panel(" Quick Actions ", theme));

    f.render_widget(actions, area);
}
