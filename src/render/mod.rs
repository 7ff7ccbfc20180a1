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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event (including the periodic tick) to provide a reactive
//! user interface.

pub(crate) mod icons;
mod status_bar;
pub(crate) mod widgets;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{App, MainView, render::status_bar::draw_status_bar, theme::Theme};

/// Per-frame values shared by every view.
pub(crate) struct RenderContext<'a> {
    pub(crate) theme: &'a Theme,
    /// Reference point for relative times, fixed for the whole frame.
    pub(crate) now: DateTime<Utc>,
    /// Tick counter, drives the loading spinner.
    pub(crate) tick: usize,
}

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

/// Renders the user interface to the terminal frame.
///
/// The active main view fills the screen above a one-line status bar. When
/// the scan history is open it is drawn last, as a modal over the view.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let ctx = RenderContext {
        theme: &app.theme,
        now: Utc::now(),
        tick: app.tick,
    };

    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match app.main_view {
        MainView::Dashboard => app.dashboard_view.draw(f, outer[0], &ctx),
        MainView::Libraries => app.libraries_view.draw(f, outer[0], &ctx),
        MainView::Settings => app.settings_view.draw(f, outer[0], &ctx),
    }

    if app.history_view.is_open {
        let modal = widgets::centered_rect(85, 80, outer[0]);
        app.history_view.draw(f, modal, &ctx);
    }

    draw_status_bar(f, outer[1], app, &ctx);
}
