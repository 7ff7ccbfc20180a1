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

//! UI rendering logic for the library browser.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, List, ListItem, Paragraph, Row, Table},
};

use crate::{
    components::{LibrariesView, LibraryDetail},
    model::{LoadState, MediaKind},
    render::{
        Render, RenderContext,
        widgets::{error_banner, hint_line, muted, panel, spinner},
    },
    util::format::{format_count, format_relative, format_time},
};

impl Render for LibrariesView {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[0]);

        self.draw_list(f, columns[0], ctx);
        self.draw_detail(f, columns[1], ctx);

        let hints = hint_line(
            &[
                ("Enter", "Open"),
                ("n/p", "Page"),
                ("s", "Scan"),
                ("S", "Quick scan"),
                ("r", "Reload"),
                ("Esc", "Back"),
            ],
            ctx.theme,
        );
        f.render_widget(Paragraph::new(hints), chunks[1]);
    }
}

impl LibrariesView {
    fn draw_list(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = panel(" Libraries ", ctx.theme);

        match &self.libraries {
            LoadState::Idle | LoadState::Loading => {
                let inner = block.inner(area);
                f.render_widget(block, area);
                f.render_widget(spinner("Loading libraries", ctx), inner);
            }
            LoadState::Failed(message) => {
                f.render_widget(error_banner(message, ctx.theme), area);
            }
            LoadState::Loaded(libraries) if libraries.is_empty() => {
                f.render_widget(
                    Paragraph::new(muted("No libraries", ctx.theme)).block(block),
                    area,
                );
            }
            LoadState::Loaded(libraries) => {
                let items = libraries.iter().map(|library| {
                    let kind = MediaKind::classify(&library.kind);
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{} ", kind.icon()),
                            Style::default().fg(kind.colour()),
                        ),
                        Span::styled(library.title.clone(), Style::default().fg(ctx.theme.text_fg)),
                        muted(format!(" ({})", format_count(library.total_items)), ctx.theme),
                    ]))
                });

                let list = List::new(items.collect::<Vec<_>>())
                    .block(block)
                    .highlight_style(Style::default().bg(ctx.theme.highlight_bg));

                f.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }

    fn draw_detail(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        match &self.detail {
            LoadState::Idle => {
                f.render_widget(
                    Paragraph::new(muted("Select a library", ctx.theme))
                        .alignment(Alignment::Center)
                        .block(panel("", ctx.theme)),
                    area,
                );
            }
            LoadState::Loading => {
                let block = panel("", ctx.theme);
                let inner = block.inner(area);
                f.render_widget(block, area);
                f.render_widget(spinner("Loading library", ctx), inner);
            }
            LoadState::Failed(message) => f.render_widget(error_banner(message, ctx.theme), area),
            LoadState::Loaded(detail) => draw_library_detail(f, area, detail, self.paging, ctx),
        }
    }
}

fn draw_library_detail(
    f: &mut Frame,
    area: Rect,
    detail: &LibraryDetail,
    paging: bool,
    ctx: &RenderContext,
) {
    let kind = MediaKind::classify(&detail.library.kind);
    let block = panel(
        Line::from(vec![
            Span::styled(
                format!(" {} {} ", kind.icon(), detail.library.title),
                Style::default()
                    .fg(kind.colour())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        ctx.theme,
    );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let library = &detail.library;
    let stats = &detail.stats;
    let info = Paragraph::new(vec![
        Line::from(vec![
            muted("Type: ", ctx.theme),
            Span::raw(library.kind.clone()),
            muted("  Agent: ", ctx.theme),
            Span::raw(library.agent.clone().unwrap_or_else(|| "-".to_string())),
            muted("  Language: ", ctx.theme),
            Span::raw(library.language.clone().unwrap_or_else(|| "-".to_string())),
        ]),
        Line::from(vec![
            muted("Items: ", ctx.theme),
            Span::raw(format_count(stats.total_items)),
            muted("  Duration: ", ctx.theme),
            Span::raw(format!("{}h", format_count(stats.total_duration_minutes / 60))),
            muted("  Added this week: ", ctx.theme),
            Span::raw(stats.recently_added_count.to_string()),
        ]),
        Line::from(vec![
            muted("Last scanned: ", ctx.theme),
            Span::raw(format_relative(
                stats.last_scanned.as_deref().or(library.scanned_at.as_deref()),
                ctx.now,
            )),
        ]),
    ])
    .style(Style::default().fg(ctx.theme.text_fg));
    f.render_widget(info, chunks[0]);

    let rows = detail.content.items.iter().map(|item| {
        Row::new(vec![
            Cell::from(item.title.as_str()),
            Cell::from(item.year.map(|y| y.to_string()).unwrap_or_default()),
            Cell::from(item.rating.map(|r| format!("{r:.1}")).unwrap_or_default()),
            Cell::from(
                Line::from(
                    item.duration
                        .map(|ms| format_time(ms / 1000))
                        .unwrap_or_default(),
                )
                .alignment(Alignment::Right),
            ),
        ])
        .style(Style::default().fg(ctx.theme.text_fg))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Title", "Year", "Rating", "Length"])
            .style(
                Style::default()
                    .fg(ctx.theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1),
    );
    f.render_widget(table, chunks[1]);

    let shown = detail.content.items.len() as u64;
    let first = u64::from(detail.offset) + u64::from(shown > 0);
    let last = u64::from(detail.offset) + shown;
    let mut footer = vec![muted(
        format!(
            "Items {first}-{last} of {}",
            format_count(detail.content.total)
        ),
        ctx.theme,
    )];
    if paging {
        footer.push(muted("  loading...", ctx.theme));
    }
    f.render_widget(Paragraph::new(Line::from(footer)), chunks[2]);
}
