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

//! Small widget builders shared by the views.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    render::{RenderContext, icons::SPINNER},
    theme::Theme,
};

/// A bordered panel with a title, in the theme's border colour.
pub(crate) fn panel<'a>(title: impl Into<Line<'a>>, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(title)
        .padding(Padding::horizontal(1))
}

/// A `[key] label` pair as shown in hint bars and action rows.
pub(crate) fn key_hint<'a>(key: &'a str, label: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::styled(
            format!("[{key}]"),
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {label}  "), Style::default().fg(theme.text_fg)),
    ]
}

/// A line made of several key hints.
pub(crate) fn hint_line<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    Line::from(
        hints
            .iter()
            .flat_map(|(key, label)| key_hint(key, label, theme))
            .collect::<Vec<_>>(),
    )
}

pub(crate) fn spinner<'a>(label: &str, ctx: &RenderContext) -> Paragraph<'a> {
    let frame = SPINNER[ctx.tick % SPINNER.len()];
    Paragraph::new(format!("{frame} {label}"))
        .style(Style::default().fg(ctx.theme.muted_fg))
        .alignment(Alignment::Center)
}

/// The red banner used for a failed load.
pub(crate) fn error_banner<'a>(message: &str, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(message.to_string())
        .style(Style::default().fg(theme.error_fg).bg(theme.error_bg))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error_fg))
                .title(" Error ")
                .padding(Padding::horizontal(1)),
        )
}

pub(crate) fn muted<'a>(text: impl Into<String>, theme: &Theme) -> Span<'a> {
    Span::styled(text.into(), Style::default().fg(theme.muted_fg))
}

/// Returns a rectangle of the given percentage size centered in `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
