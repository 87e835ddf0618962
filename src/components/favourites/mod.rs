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

//! Favourites view: the favourited subset of the archive.
//!
//! The table contents are rebuilt from the archive order whenever the
//! archive loads or a favourite is toggled, so the view always shows
//! favourites in archive order.

mod event;
mod render;

use crate::{
    components::LectureTable,
    model::{Lecture, favourites::Favourites},
};

pub(crate) struct FavouritesView {
    pub(crate) table: LectureTable,
    pub(crate) is_active: bool,
}

impl FavouritesView {
    pub(crate) fn new() -> Self {
        Self {
            table: LectureTable::new(),
            is_active: false,
        }
    }

    pub(crate) fn refresh(&mut self, lectures: &[Lecture], favourites: &Favourites) {
        let favourited = lectures
            .iter()
            .filter(|l| favourites.contains(l))
            .cloned()
            .collect();
        self.table.set_lectures(favourited);
    }
}
