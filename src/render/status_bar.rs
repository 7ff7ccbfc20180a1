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

//! Render the status bar.
//!
//! The bottom line of the screen: the main view tabs on the left, the latest
//! notice or error on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, MainView, StatusMessage, render::RenderContext};

const TABS: [(MainView, &str, &str); 3] = [
    (MainView::Dashboard, "1", "Dashboard"),
    (MainView::Libraries, "2", "Libraries"),
    (MainView::Settings, "3", "Settings"),
];

pub(crate) fn draw_status_bar(f: &mut Frame, area: Rect, app: &App, ctx: &RenderContext) {
    let theme = ctx.theme;
    let bar_style = Style::default().bg(theme.status_bar_bg).fg(theme.muted_fg);

    f.render_widget(Paragraph::new("").style(bar_style), area);

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let tabs = TABS
        .iter()
        .flat_map(|(view, key, label)| {
            let style = if *view == app.main_view {
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted_fg)
            };
            [Span::styled(format!("{key} {label}"), style), Span::raw("  ")]
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(Line::from(tabs)).style(bar_style), container[0]);

    let message = match app.status.as_ref().map(|status| &status.message) {
        Some(StatusMessage::Notice(text)) => {
            Span::styled(text.clone(), Style::default().fg(theme.success_fg))
        }
        Some(StatusMessage::Error(text)) => {
            Span::styled(text.clone(), Style::default().fg(theme.error_fg))
        }
        None => Span::raw("q quit"),
    };

    f.render_widget(
        Paragraph::new(Line::from(message))
            .style(bar_style)
            .alignment(Alignment::Right),
        container[1],
    );
}
