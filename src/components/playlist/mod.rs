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

//! Playlist view: the play queue.
//!
//! This module coordinates the lecture table for the queued lectures. The
//! queue itself lives in the application model; the view is re-synced from
//! a snapshot whenever the queue changes.

mod event;
mod render;

pub(crate) use event::PlaylistAction;

use crate::{components::LectureTable, model::Lecture};

pub(crate) struct PlaylistView {
    pub(crate) table: LectureTable,
    pub(crate) is_active: bool,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            table: LectureTable::new(),
            is_active: false,
        }
    }

    pub(crate) fn sync(&mut self, lectures: Vec<Lecture>) {
        self.table.set_lectures(lectures);
    }
}
