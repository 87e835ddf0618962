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

//! UI rendering logic for the library view.

use std::fmt::Write;

use ratatui::{Frame, prelude::Rect};

use crate::{
    components::{LibraryView, draw_view_header},
    model::favourites::Favourites,
    theme::Theme,
};

impl LibraryView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        favourites: &Favourites,
        theme: &Theme,
    ) {
        let mut header = format!(
            "Library | {} lectures | Page {}/{}",
            self.total(),
            self.pagination.page_number(),
            self.pagination.page_count(),
        );

        let selected_count = self.table.selected_count();
        if selected_count > 0 {
            let _ = write!(header, " | {} selected", selected_count);
        }

        let body = draw_view_header(f, area, header);
        self.table.draw(f, body, favourites, theme);
    }
}
