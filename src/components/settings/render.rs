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

//! UI rendering logic for the settings view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use serde_json::Value;

use crate::{
    api::models::{ConnectionTest, PlexServerInfo},
    components::{SettingsView, settings::SettingsField},
    model::LoadState,
    render::{
        Render, RenderContext,
        icons::{ICON_CONNECTED, ICON_DISCONNECTED, ICON_SETTINGS},
        widgets::{error_banner, hint_line, muted, panel, spinner},
    },
    theme::Theme,
};

const MASK: char = '*';

impl Render for SettingsView {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(7),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[0]);

        match &self.snapshot {
            LoadState::Idle | LoadState::Loading => {
                f.render_widget(spinner("Loading settings", ctx), chunks[0]);
            }
            LoadState::Failed(message) => f.render_widget(error_banner(message, ctx.theme), chunks[0]),
            LoadState::Loaded(snapshot) => {
                draw_section(f, columns[0], " Backend ", &snapshot.health, value_lines, ctx.theme);
                draw_section(f, columns[1], " Plex Server ", &snapshot.server, server_lines, ctx.theme);
                draw_section(f, columns[2], " Saved Configuration ", &snapshot.config, value_lines, ctx.theme);
            }
        }

        self.draw_form(f, chunks[1], ctx.theme);

        let hints = if self.editing {
            hint_line(&[("Tab", "Next field"), ("Enter", "Done")], ctx.theme)
        } else {
            hint_line(
                &[
                    ("e", "Edit"),
                    ("t", "Test"),
                    ("w", "Save"),
                    ("r", "Reload"),
                    ("Esc", "Back"),
                ],
                ctx.theme,
            )
        };
        f.render_widget(Paragraph::new(hints), chunks[2]);
    }
}

fn draw_section<T>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    part: &Result<T, String>,
    lines: fn(&T, &Theme) -> Vec<Line<'static>>,
    theme: &Theme,
) {
    match part {
        Ok(value) => f.render_widget(
            Paragraph::new(lines(value, theme)).block(panel(title.to_string(), theme)),
            area,
        ),
        Err(message) => f.render_widget(error_banner(message, theme), area),
    }
}

fn field_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        muted(format!("{label}: "), theme),
        Span::styled(value, Style::default().fg(theme.text_fg)),
    ])
}

fn server_lines(info: &PlexServerInfo, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        field_line("Name", info.name.clone(), theme),
        field_line("Version", info.version.clone(), theme),
        field_line(
            "Platform",
            format!("{} {}", info.platform, info.platform_version),
            theme,
        ),
        field_line("Machine", info.machine_identifier.clone(), theme),
    ]
}

/// Flattens a JSON object into `key: value` lines, secrets masked.
fn value_lines(value: &Value, theme: &Theme) -> Vec<Line<'static>> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) if key.contains("token") => MASK.to_string().repeat(s.len().min(8)),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                field_line(key, text, theme)
            })
            .collect(),
        other => vec![Line::from(other.to_string())],
    }
}

impl SettingsView {
    fn draw_form(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = panel(format!(" {ICON_SETTINGS} Plex Connection "), theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let label_width = 8;
        let masked = MASK.to_string().repeat(self.token.value().chars().count());

        for (row, field, label, text) in [
            (rows[0], SettingsField::Url, "URL", self.url.value().to_string()),
            (rows[1], SettingsField::Token, "Token", masked),
        ] {
            let focused = self.focus == field;
            let style = if focused && self.editing {
                Style::default().fg(theme.text_fg).bg(theme.highlight_bg)
            } else if focused {
                Style::default()
                    .fg(theme.text_fg)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_fg)
            };

            f.render_widget(
                Paragraph::new(Line::from(vec![
                    muted(format!("{label:<label_width$}"), theme),
                    Span::styled(text, style),
                ])),
                row,
            );
        }

        if self.editing {
            let (row, input) = match self.focus {
                SettingsField::Url => (rows[0], &self.url),
                SettingsField::Token => (rows[1], &self.token),
            };
            let x = row.x + (label_width + input.visual_cursor()) as u16;
            f.set_cursor_position((x, row.y));
        }

        let status = if self.testing {
            Line::from(muted("Testing connection...", theme))
        } else {
            match &self.last_test {
                Some(result) => test_result_line(result, theme),
                None => Line::default(),
            }
        };
        f.render_widget(Paragraph::new(status), rows[3]);
    }
}

fn test_result_line(result: &ConnectionTest, theme: &Theme) -> Line<'static> {
    if result.success {
        let mut text = format!("{ICON_CONNECTED} Connected");
        if let Some(name) = &result.server_name {
            text.push_str(&format!(" to {name}"));
        }
        if let Some(version) = &result.version {
            text.push_str(&format!(" ({version})"));
        }
        Line::from(Span::styled(text, Style::default().fg(theme.success_fg)))
    } else {
        let reason = result.error.as_deref().unwrap_or("Connection failed");
        Line::from(Span::styled(
            format!("{ICON_DISCONNECTED} {reason}"),
            Style::default().fg(theme.error_fg),
        ))
    }
}
