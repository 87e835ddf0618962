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

//! Command-line input logic and state management.
//!
//! This module implements the logic for the command-line processing
//! component, handling a text input component, and dispatching a
//! corresponding application command when typing is finished and a command
//! is submitted.

mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    MainView, RepeatMode,
    events::{AppEvent, FilterCommand},
    tasks::AppTask,
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(
        &mut self,
        event: Event,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Esc => {
                        self.active = false;
                        self.input.reset();
                        true
                    }

                    KeyCode::Enter => {
                        let buffer = self.input.value().trim().to_string();
                        if !buffer.is_empty() {
                            let _ = self.run_command(&buffer, task_tx, event_tx);
                        }
                        self.input.reset();
                        self.active = false;
                        true
                    }

                    _ => {
                        // Delegate all key events to the managed input
                        // component.
                        self.input.handle_event(&event);
                        true
                    }
                },

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char(':') => {
                        self.active = true;
                        true
                    }

                    _ => false,
                },

                _ => false,
            }
        }
    }

    fn run_command(
        &self,
        buffer: &str,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] => event_tx.send(AppEvent::ExitApplication)?,

            ["reload"] => task_tx.send(AppTask::LoadArchive { refresh: false })?,
            ["refresh"] => task_tx.send(AppTask::LoadArchive { refresh: true })?,

            ["f", query @ ..] => {
                let query = query.join(" ");
                event_tx.send(AppEvent::Filter(FilterCommand::Query(query)))?
            }
            ["fy"] => event_tx.send(AppEvent::Filter(FilterCommand::Year(None)))?,
            ["fy", year] => match year.parse::<i32>() {
                Ok(year) => {
                    event_tx.send(AppEvent::Filter(FilterCommand::Year(Some(year))))?
                }
                Err(_) => event_tx.send(AppEvent::Error(format!("invalid year: {}", year)))?,
            },
            ["fl", location @ ..] => {
                let location = location.join(" ");
                event_tx.send(AppEvent::Filter(FilterCommand::Location(location)))?
            }
            ["cf"] => event_tx.send(AppEvent::Filter(FilterCommand::Clear))?,

            ["p"] => event_tx.send(AppEvent::PlayPlaylist)?,
            ["shuffle"] | ["ms"] => event_tx.send(AppEvent::ShufflePlaylist)?,
            ["cq"] => event_tx.send(AppEvent::ClearPlaylist)?,

            ["repeat", "off"] => event_tx.send(AppEvent::SetRepeatMode(RepeatMode::Off))?,
            ["repeat", "one"] => {
                event_tx.send(AppEvent::SetRepeatMode(RepeatMode::RepeatOne))?
            }
            ["repeat", "all"] => {
                event_tx.send(AppEvent::SetRepeatMode(RepeatMode::RepeatAll))?
            }

            ["1"] => event_tx.send(AppEvent::SetMainView(MainView::Library))?,
            ["2"] => event_tx.send(AppEvent::SetMainView(MainView::Search))?,
            ["3"] => event_tx.send(AppEvent::SetMainView(MainView::Favourites))?,
            ["4"] => event_tx.send(AppEvent::SetMainView(MainView::Playlist))?,

            [] => {} // empty (no command)

            [cmd, ..] => {
                event_tx.send(AppEvent::Error(format!("unknown command: {}", cmd)))?
            }
        }

        Ok(())
    }
}
