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

//! Reusable UI components and the main views built from them.
//!
//! Every main view wraps the shared [`LectureTable`] widget and adds its own
//! header and data source: the full archive (paginated), the search results,
//! the favourites subset, or the play queue.

mod favourites;
mod lecture_table;
mod library;
mod playlist;
mod search;

pub(crate) use favourites::FavouritesView;
pub(crate) use lecture_table::{LectureTable, LectureTableAction};
pub(crate) use library::LibraryView;
pub(crate) use playlist::{PlaylistAction, PlaylistView};
pub(crate) use search::SearchView;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Renders a view's one-line header above a bottom border and returns the
/// body area beneath it. All main views share this frame.
fn draw_view_header(f: &mut Frame, area: Rect, text: String) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(text).block(block), chunks[0]);

    chunks[1]
}
