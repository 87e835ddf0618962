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

//! Input handling and event processing for the lecture table.
//!
//! Motion and selection keys are absorbed by the table itself and yield
//! `None`; the play/queue/favourite keys yield a [`LectureTableAction`]
//! for the event layer to translate.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::{LectureTable, LectureTableAction};

impl LectureTable {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<LectureTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            // Motion
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => {
                self.goto_next();
                None
            }
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => {
                self.goto_previous();
                None
            }
            (KeyCode::Char('g'), _) => {
                self.goto_first();
                None
            }
            (KeyCode::Char('G'), _) => {
                self.goto_last();
                None
            }

            // Selection
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.select_all();
                None
            }
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                self.select_inverse();
                None
            }
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                self.select_none();
                None
            }
            (KeyCode::Char(' '), _) => {
                self.toggle_select_current();
                self.goto_next();
                None
            }
            (KeyCode::Backspace, _) => {
                self.toggle_select_current();
                self.goto_previous();
                None
            }

            // Actions for the event layer
            (KeyCode::Enter, _) => self.current().cloned().map(LectureTableAction::Activate),

            (KeyCode::Char('a'), KeyModifiers::NONE) => Some(&self.clone_selected())
                .filter(|s| !s.is_empty())
                .map(|s| LectureTableAction::AddToPlaylist(s.clone())),

            (KeyCode::Char('f'), _) => self
                .current()
                .cloned()
                .map(LectureTableAction::ToggleFavourite),

            _ => None,
        }
    }
}
