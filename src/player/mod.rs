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

//! Lecture playback control.
//!
//! The archive's audio lives behind HTTP(S) links, so playback means
//! streaming: the [`AudioPlayer`] hands lecture links to an MPV engine
//! running on a worker thread and relays its progress back to the event
//! loop. The UI never blocks on the network; a stream that stalls while
//! the demuxer cache refills is surfaced as [`PlayerState::Buffering`]
//! rather than freezing anything.

mod engine;

use std::sync::mpsc;

use anyhow::Result;

use crate::{events::AppEvent, model::Lecture, player::engine::AudioPlayerCommand};

/// Playback status as shown to the user.
///
/// `Buffering` means a stream is loaded but playback is stalled waiting on
/// the network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Buffering,
    Stopped,
}

/// A handle to the streaming playback engine.
///
/// This struct is a command proxy: every method queues an instruction for
/// the engine worker thread, which owns the MPV context.
pub(crate) struct AudioPlayer {
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the engine worker and returns a handle to it.
    ///
    /// Progress updates (state, duration, position, volume, stream title)
    /// arrive on `event_tx` as [`AppEvent`]s.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        engine::spawn_player_worker(command_rx, event_tx);

        Self { command_tx }
    }

    fn send(&self, command: AudioPlayerCommand) -> Result<()> {
        self.command_tx.send(command)?;
        Ok(())
    }

    /// Starts streaming a lecture, replacing whatever is playing.
    ///
    /// The lecture's own title is pushed into the engine as the display
    /// title; the raw stream usually only knows its file name.
    pub(crate) fn play(&self, lecture: &Lecture) -> Result<()> {
        self.send(AudioPlayerCommand::Play {
            link: lecture.link.clone(),
            title: lecture.title.clone(),
        })
    }

    /// Toggles between paused and playing.
    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.send(AudioPlayerCommand::TogglePause)
    }

    /// Stops playback and drops the current stream.
    pub(crate) fn stop(&self) -> Result<()> {
        self.send(AudioPlayerCommand::Stop)
    }

    /// Seeks relative to the current position, in seconds.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.send(AudioPlayerCommand::Seek(delta))
    }

    /// Changes the volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.send(AudioPlayerCommand::AdjustVolume(delta))
    }

    /// Toggles the mute state.
    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.send(AudioPlayerCommand::ToggleMute)
    }
}
