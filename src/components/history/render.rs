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

//! UI rendering logic for the scan history modal.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Clear, Paragraph, Row, Table},
};

use crate::{
    api::models::{ScanHistoryPage, ScanHistoryRecord, ScanStatus},
    components::ScanHistoryView,
    model::LoadState,
    render::{
        Render, RenderContext,
        icons::ICON_HISTORY,
        widgets::{error_banner, hint_line, muted, panel, spinner},
    },
    theme::Theme,
    util::format::{format_relative, format_time},
};

impl Render for ScanHistoryView {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        f.render_widget(Clear, area);

        let block = panel(format!(" {ICON_HISTORY} Scan History "), ctx.theme)
            .style(Style::default().bg(ctx.theme.background_colour));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_filter(f, chunks[0], ctx.theme);

        match &self.state {
            LoadState::Idle | LoadState::Loading => {
                f.render_widget(spinner("Loading scan history", ctx), chunks[1]);
            }
            LoadState::Failed(message) => {
                let banner_area = Rect {
                    height: chunks[1].height.min(4),
                    ..chunks[1]
                };
                f.render_widget(error_banner(message, ctx.theme), banner_area);
            }
            LoadState::Loaded(page) if page.scans.is_empty() => {
                f.render_widget(
                    Paragraph::new(muted("No scans recorded", ctx.theme))
                        .alignment(Alignment::Center),
                    chunks[1],
                );
            }
            LoadState::Loaded(page) => {
                f.render_stateful_widget(history_table(page, ctx), chunks[1], &mut self.table_state);
            }
        }

        let hints = if self.editing_filter {
            hint_line(&[("Enter", "Apply"), ("Esc", "Cancel")], ctx.theme)
        } else {
            hint_line(
                &[
                    ("j/k", "Move"),
                    ("d", "Delete"),
                    ("/", "Filter"),
                    ("r", "Reload"),
                    ("Esc", "Close"),
                ],
                ctx.theme,
            )
        };
        f.render_widget(Paragraph::new(hints), chunks[2]);
    }
}

impl ScanHistoryView {
    fn draw_filter(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let label = "Library: ";

        let value = if self.editing_filter {
            Span::styled(
                self.filter.value().to_string(),
                Style::default().fg(theme.text_fg).bg(theme.highlight_bg),
            )
        } else {
            match &self.applied_filter {
                Some(key) => Span::styled(key.clone(), Style::default().fg(theme.accent_colour)),
                None => muted("all", theme),
            }
        };

        let mut spans = vec![muted(label, theme), value];
        if let Some(page) = self.state.loaded() {
            spans.push(muted(
                format!("    {} of {} scans", page.scans.len(), page.total),
                theme,
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);

        if self.editing_filter {
            let x = area.x + (label.len() + self.filter.visual_cursor()) as u16;
            f.set_cursor_position((x, area.y));
        }
    }
}

fn status_cell<'a>(status: ScanStatus, theme: &Theme) -> Cell<'a> {
    let (label, colour) = match status {
        ScanStatus::Started => ("started", theme.accent_colour),
        ScanStatus::Completed => ("completed", theme.success_fg),
        ScanStatus::Failed => ("failed", theme.error_fg),
    };
    Cell::from(Span::styled(label, Style::default().fg(colour)))
}

fn duration_text(record: &ScanHistoryRecord) -> String {
    match record.duration_seconds {
        Some(seconds) => format_time(seconds.max(0.0).round() as u64),
        None => "-".to_string(),
    }
}

fn history_table<'a>(page: &'a ScanHistoryPage, ctx: &RenderContext) -> Table<'a> {
    let rows = page.scans.iter().map(|record| {
        Row::new(vec![
            Cell::from(record.library_name.as_str()),
            Cell::from(record.scan_type.as_str()),
            status_cell(record.status, ctx.theme),
            Cell::from(format_relative(Some(&record.started_at), ctx.now)),
            Cell::from(Line::from(duration_text(record)).alignment(Alignment::Right)),
            Cell::from(Span::styled(
                record.error_message.as_deref().unwrap_or(""),
                Style::default().fg(ctx.theme.error_fg),
            )),
        ])
        .style(Style::default().fg(ctx.theme.text_fg))
    });

    Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from("Library"),
            Cell::from("Type"),
            Cell::from("Status"),
            Cell::from("Started"),
            Cell::from(Line::from("Duration").alignment(Alignment::Right)),
            Cell::from("Error"),
        ])
        .style(
            Style::default()
                .fg(ctx.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1),
    )
    .row_highlight_style(Style::default().bg(ctx.theme.highlight_bg))
}
