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

//! UI rendering logic for the favourites view.

use ratatui::{Frame, prelude::Rect};

use crate::{
    components::{FavouritesView, draw_view_header},
    model::favourites::Favourites,
    theme::Theme,
};

impl FavouritesView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        favourites: &Favourites,
        theme: &Theme,
    ) {
        let header = format!("Favourites | {} lectures", self.table.len());

        let body = draw_view_header(f, area, header);
        self.table.draw(f, body, favourites, theme);
    }
}
