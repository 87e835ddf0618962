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

//! UI rendering logic for the playlist view.

use std::fmt::Write;

use ratatui::{Frame, prelude::Rect};

use crate::{
    components::{PlaylistView, draw_view_header},
    model::{Lecture, favourites::Favourites},
    theme::Theme,
};

impl PlaylistView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        now_playing: Option<&Lecture>,
        favourites: &Favourites,
        theme: &Theme,
    ) {
        let mut header = format!("Playlist | {} lectures", self.table.len());

        if let Some(lecture) = now_playing {
            let _ = write!(header, " | Playing: {}", lecture.title);
        }

        let selected_count = self.table.selected_count();
        if selected_count > 0 {
            let _ = write!(header, " | {} selected", selected_count);
        }

        let body = draw_view_header(f, area, header);
        self.table.draw(f, body, favourites, theme);
    }
}
