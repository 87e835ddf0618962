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

//! Library view: the full archive, one page at a time.
//!
//! This module coordinates the lecture table for the whole archive. The
//! archive can run to thousands of rows, so the view owns a [`Pagination`]
//! and only hands the current page to the table; `[` and `]` move between
//! pages.

mod event;
mod render;

use crate::{
    components::LectureTable,
    model::{Lecture, session::Pagination},
};

pub(crate) struct LibraryView {
    pub(crate) table: LectureTable,
    pub(crate) pagination: Pagination,
    pub(crate) is_active: bool,
    lectures: Vec<Lecture>,
}

impl LibraryView {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            table: LectureTable::new(),
            pagination: Pagination::new(page_size),
            is_active: false,
            lectures: vec![],
        }
    }

    /// Replaces the archive contents and returns to the first page.
    pub(crate) fn set_lectures(&mut self, lectures: Vec<Lecture>) {
        self.lectures = lectures;
        self.pagination.set_total(self.lectures.len());
        self.pagination.first_page();
        self.refresh_page();
    }

    pub(crate) fn total(&self) -> usize {
        self.lectures.len()
    }

    pub(crate) fn next_page(&mut self) {
        if self.pagination.next_page() {
            self.refresh_page();
        }
    }

    pub(crate) fn previous_page(&mut self) {
        if self.pagination.previous_page() {
            self.refresh_page();
        }
    }

    fn refresh_page(&mut self) {
        let page = self.lectures[self.pagination.range()].to_vec();
        self.table.set_lectures(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lectures(n: u32) -> Vec<Lecture> {
        (0..n)
            .map(|i| {
                Lecture::new(
                    &format!("Talk {}", i),
                    &format!("http://example.com/{}.mp3", i),
                    String::new(),
                    None,
                    "Unknown",
                )
            })
            .collect()
    }

    #[test]
    fn table_holds_one_page_at_a_time() {
        let mut view = LibraryView::new(10);
        view.set_lectures(lectures(25));

        assert_eq!(view.total(), 25);
        assert_eq!(view.table.len(), 10);
        assert_eq!(view.table.lectures()[0].title, "Talk 0");
    }

    #[test]
    fn page_motion_slides_the_window() {
        let mut view = LibraryView::new(10);
        view.set_lectures(lectures(25));

        view.next_page();
        assert_eq!(view.table.lectures()[0].title, "Talk 10");

        view.next_page();
        assert_eq!(view.table.len(), 5);

        // Already on the last page.
        view.next_page();
        assert_eq!(view.pagination.page_number(), 3);

        view.previous_page();
        assert_eq!(view.table.lectures()[0].title, "Talk 10");
    }

    #[test]
    fn reload_returns_to_the_first_page() {
        let mut view = LibraryView::new(10);
        view.set_lectures(lectures(25));
        view.next_page();

        view.set_lectures(lectures(12));
        assert_eq!(view.pagination.page_number(), 1);
        assert_eq!(view.table.lectures()[0].title, "Talk 0");
    }
}
