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

//! Search results view and lecture selection management.
//!
//! This module coordinates the lecture table for filter results, keeping the
//! filter that produced them so the header can describe what is shown.

mod event;
mod render;

use crate::{
    components::LectureTable,
    model::{Lecture, filter::LectureFilter},
};

pub(crate) struct SearchView {
    pub(crate) table: LectureTable,
    pub(crate) filter: LectureFilter,
    pub(crate) is_active: bool,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            table: LectureTable::new(),
            filter: LectureFilter::default(),
            is_active: false,
        }
    }

    pub(crate) fn set_results(&mut self, filter: LectureFilter, lectures: Vec<Lecture>) {
        self.filter = filter;
        self.table.set_lectures(lectures);
    }
}
