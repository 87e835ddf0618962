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

//! Interactive lecture table widget and state management.
//!
//! This module provides the reusable table component backing every main
//! view: an owned lecture list, a multi-selection keyed on lecture ids, and
//! the Ratatui table cursor. Input handling returns [`LectureTableAction`]s
//! for the event layer to translate, keeping the widget free of application
//! wiring.

mod event;
mod render;

use std::collections::HashSet;

use ratatui::widgets::TableState;

use crate::model::Lecture;

/// A request produced by table input that the surrounding view cannot
/// satisfy on its own.
#[derive(Debug)]
pub(crate) enum LectureTableAction {
    /// Play the lecture under the cursor.
    Activate(Lecture),
    /// Add the selection (or the cursor row) to the playlist.
    AddToPlaylist(Vec<Lecture>),
    /// Toggle the favourite state of the lecture under the cursor.
    ToggleFavourite(Lecture),
}

pub(crate) struct LectureTable {
    lectures: Vec<Lecture>,
    selection: HashSet<u64>,
    table_state: TableState,
}

impl LectureTable {
    pub(crate) fn new() -> Self {
        Self {
            lectures: vec![],
            selection: HashSet::new(),
            table_state: TableState::new(),
        }
    }

    /// Replaces the table contents, dropping selections that no longer
    /// resolve and moving the cursor to the first row.
    pub(crate) fn set_lectures(&mut self, lectures: Vec<Lecture>) {
        let ids: HashSet<u64> = lectures.iter().map(|l| l.id).collect();
        self.selection.retain(|id| ids.contains(id));
        self.lectures = lectures;
        self.reset_cursor();
    }

    pub(crate) fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub(crate) fn len(&self) -> usize {
        self.lectures.len()
    }

    pub(crate) fn current(&self) -> Option<&Lecture> {
        self.table_state
            .selected()
            .and_then(|i| self.lectures.get(i))
    }

    /// The explicit selection in table order, or the cursor row when
    /// nothing is selected.
    pub(crate) fn clone_selected(&self) -> Vec<Lecture> {
        if self.selection.is_empty() {
            return self.current().cloned().into_iter().collect();
        }

        self.lectures
            .iter()
            .filter(|l| self.selection.contains(&l.id))
            .cloned()
            .collect()
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn reset_cursor(&mut self) {
        let selected = if self.lectures.is_empty() { None } else { Some(0) };
        self.table_state.select(selected);
    }

    fn goto_next(&mut self) {
        let len = self.lectures.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.lectures.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.lectures.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.lectures.is_empty() {
            self.table_state.select(Some(self.lectures.len() - 1));
        }
    }

    fn toggle_select_current(&mut self) {
        if let Some(lecture) = self.current() {
            let id = lecture.id;
            if !self.selection.insert(id) {
                self.selection.remove(&id);
            }
        }
    }

    fn select_all(&mut self) {
        self.selection.extend(self.lectures.iter().map(|l| l.id));
    }

    fn select_inverse(&mut self) {
        for lecture in self.lectures.iter() {
            let id = lecture.id;
            if !self.selection.insert(id) {
                self.selection.remove(&id);
            }
        }
    }

    fn select_none(&mut self) {
        self.selection.clear();
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
    fn cursor_starts_on_the_first_row() {
        let mut table = LectureTable::new();
        table.set_lectures(lectures(3));
        assert_eq!(table.current().unwrap().title, "Talk 0");
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut table = LectureTable::new();
        table.set_lectures(lectures(2));

        table.goto_previous();
        assert_eq!(table.current().unwrap().title, "Talk 1");
        table.goto_next();
        assert_eq!(table.current().unwrap().title, "Talk 0");
    }

    #[test]
    fn clone_selected_falls_back_to_the_cursor() {
        let mut table = LectureTable::new();
        table.set_lectures(lectures(3));
        table.goto_next();

        let selected = table.clone_selected();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Talk 1");
    }

    #[test]
    fn clone_selected_returns_selection_in_table_order() {
        let mut table = LectureTable::new();
        table.set_lectures(lectures(3));
        table.goto_last();
        table.toggle_select_current();
        table.goto_first();
        table.toggle_select_current();

        let selected = table.clone_selected();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].title, "Talk 0");
        assert_eq!(selected[1].title, "Talk 2");
    }

    #[test]
    fn stale_selection_is_dropped_on_data_change() {
        let mut table = LectureTable::new();
        table.set_lectures(lectures(3));
        table.select_all();
        assert_eq!(table.selected_count(), 3);

        table.set_lectures(lectures(1));
        assert_eq!(table.selected_count(), 1);
    }

    #[test]
    fn select_inverse_flips_membership() {
        let mut table = LectureTable::new();
        table.set_lectures(lectures(3));
        table.toggle_select_current();
        table.select_inverse();
        assert_eq!(table.selected_count(), 2);
    }

    #[test]
    fn empty_table_has_no_cursor() {
        let mut table = LectureTable::new();
        table.set_lectures(vec![]);
        assert!(table.current().is_none());
        assert!(table.clone_selected().is_empty());
    }
}
