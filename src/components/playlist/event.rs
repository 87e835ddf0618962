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

//! Event routing for the playlist view.
//!
//! In addition to the shared table handling, `d` removes the selected
//! lectures from the queue.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::{LectureTableAction, PlaylistView};
use crate::model::Lecture;

/// A playlist-specific request for the event layer.
#[derive(Debug)]
pub(crate) enum PlaylistAction {
    Table(LectureTableAction),
    Remove(Vec<Lecture>),
}

impl PlaylistView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<PlaylistAction> {
        if let Event::Key(key_event) = event {
            if let (KeyCode::Char('d'), KeyModifiers::NONE) =
                (key_event.code, key_event.modifiers)
            {
                let selected = self.table.clone_selected();
                if !selected.is_empty() {
                    return Some(PlaylistAction::Remove(selected));
                }
                return None;
            }
        }

        self.table.process_event(event).map(PlaylistAction::Table)
    }
}
