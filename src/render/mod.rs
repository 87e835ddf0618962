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
//! The primary entry point is the [`draw`] function, which is called on
//! every terminal tick or state change to provide a reactive user
//! interface.

mod player;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App, MainView,
    render::{player::draw_player, status::draw_status},
};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`]: the tab bar, the
/// active main view, the archive status line, the player, and the command
/// line.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: tabs, main, status, player, commander
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, outer[0], app);

    match app.main_view {
        MainView::Library => {
            app.library_view
                .draw(f, outer[1], &app.favourites, &app.theme)
        }
        MainView::Search => app
            .search_view
            .draw(f, outer[1], &app.favourites, &app.theme),
        MainView::Favourites => {
            app.favourites_view
                .draw(f, outer[1], &app.favourites, &app.theme)
        }
        MainView::Playlist => app.playlist_view.draw(
            f,
            outer[1],
            app.now_playing.as_ref(),
            &app.favourites,
            &app.theme,
        ),
    };

    draw_status(f, outer[2], app);

    draw_player(f, outer[3], app);

    app.commander.draw(f, outer[4], &app.theme);
}

fn draw_tabs(f: &mut Frame, area: ratatui::prelude::Rect, app: &App) {
    let tabs = [
        (MainView::Library, "1 Library", app.library_view.total()),
        (MainView::Search, "2 Search", app.search_view.table.len()),
        (
            MainView::Favourites,
            "3 Favourites",
            app.favourites.len(),
        ),
        (MainView::Playlist, "4 Playlist", app.queue.len()),
    ];

    let mut spans = Vec::new();
    for (view, label, count) in tabs {
        let text = format!(" {} ({}) ", label, count);
        let style = if app.main_view == view {
            Style::default().fg(Color::Black).bg(app.theme.accent_colour).bold()
        } else {
            Style::default().fg(app.theme.border_colour)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
