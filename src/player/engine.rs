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

//! MPV-backed streaming engine.
//!
//! The engine worker owns a `libmpv` context configured for audio-only
//! network streaming: video is disabled outright, a demuxer cache absorbs
//! connection jitter, and requests carry this application's user agent so
//! the archive host can tell it apart from a browser.
//!
//! The worker alternates between draining queued [`AudioPlayerCommand`]s
//! and polling MPV's property stream. Property changes are folded into an
//! [`Engine`] snapshot (paused / idle / stalled-on-cache) and broadcast as
//! [`AppEvent`]s whenever the derived [`PlayerState`] changes, so the UI
//! can show buffering distinctly from an ordinary pause.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{events::AppEvent, player::PlayerState};

const USER_AGENT: &str = concat!("vani/", env!("CARGO_PKG_VERSION"));

/// Seconds of audio the demuxer keeps buffered ahead of playback.
const CACHE_SECS: &str = "30";

/// Seconds before a dead connection is given up on.
const NETWORK_TIMEOUT_SECS: &str = "30";

/// How long one poll waits for an MPV event, in seconds.
const POLL_TIMEOUT: f64 = 0.05;

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    /// Stream `link`, displaying `title` instead of the stream's own name.
    Play { link: String, title: String },
    TogglePause,
    Seek(i32),
    Stop,
    AdjustVolume(i32),
    ToggleMute,
}

/// Spawns the engine worker thread.
///
/// The worker runs until the command channel closes. If the engine fails
/// to initialize or dies mid-stream the error is broadcast as a fatal
/// application event instead of unwinding into the UI.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = run_engine(command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!(
                "Playback engine failure: {:?}",
                e
            )));
        }
    });
}

fn run_engine(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) -> Result<()> {
    let mut engine = Engine::new()?;

    loop {
        while let Ok(command) = command_rx.try_recv() {
            engine.apply(command)?;
        }
        engine.poll(&event_tx)?;
    }
}

/// The MPV context plus the property flags that together determine the
/// externally visible [`PlayerState`].
///
/// The flags live in their own struct because MPV events borrow the
/// handler while they are being folded in.
struct Engine {
    handler: mpv::MpvHandler,
    flags: StreamFlags,
}

struct StreamFlags {
    paused: bool,
    idle: bool,
    stalled: bool,
    state: PlayerState,
}

impl Engine {
    /// Builds an MPV context tuned for streaming lecture audio.
    fn new() -> Result<Self> {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;

        // Audio only: never select a video track or open a window, even
        // for links that turn out to carry video.
        builder
            .set_option("vid", "no")
            .context("Failed to disable video tracks")?;
        builder
            .set_option("force-window", "no")
            .context("Failed to disable the MPV window")?;

        // Streaming behaviour: read ahead over the network and identify
        // ourselves to the archive host.
        builder
            .set_option("cache", "yes")
            .context("Failed to enable the stream cache")?;
        builder
            .set_option("cache-secs", CACHE_SECS)
            .context("Failed to size the stream cache")?;
        builder
            .set_option("network-timeout", NETWORK_TIMEOUT_SECS)
            .context("Failed to set the network timeout")?;
        builder
            .set_option("user-agent", USER_AGENT)
            .context("Failed to set the user agent")?;

        let mut handler = builder.build().context("Failed to build MPV handler")?;

        for property in ["pause", "idle-active", "paused-for-cache"] {
            handler
                .observe_property::<bool>(property, 0)
                .context(format!("Failed to observe {}", property))?;
        }
        for property in ["duration", "time-pos", "volume"] {
            handler
                .observe_property::<f64>(property, 0)
                .context(format!("Failed to observe {}", property))?;
        }
        handler
            .observe_property::<&str>("media-title", 0)
            .context("Failed to observe media-title")?;

        Ok(Self {
            handler,
            flags: StreamFlags {
                paused: false,
                idle: true,
                stalled: false,
                state: PlayerState::Stopped,
            },
        })
    }

    /// Executes one queued command against the MPV context.
    fn apply(&mut self, command: AudioPlayerCommand) -> Result<()> {
        match command {
            AudioPlayerCommand::Play { link, title } => {
                // The sheet's title beats whatever file name the stream
                // reports.
                self.handler
                    .set_property("force-media-title", title.as_str())?;
                self.handler
                    .command(&["loadfile", &link, "replace"])
                    .context(format!("Failed to open stream: {}", &link))?;
                self.handler.set_property("pause", false)?;
            }
            AudioPlayerCommand::TogglePause => {
                self.handler.command(&["cycle", "pause"])?;
            }
            AudioPlayerCommand::Seek(delta) => {
                self.handler
                    .command(&["seek", &delta.to_string(), "relative"])?;
            }
            AudioPlayerCommand::Stop => {
                self.handler.command(&["stop"])?;
            }
            AudioPlayerCommand::AdjustVolume(delta) => {
                self.handler
                    .command(&["add", "volume", &delta.to_string()])?;
            }
            AudioPlayerCommand::ToggleMute => {
                self.handler.command(&["cycle", "mute"])?;
            }
        }

        Ok(())
    }

    /// Waits briefly for MPV activity and broadcasts any resulting
    /// application events.
    fn poll(&mut self, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Some(mpv_event) = self.handler.wait_event(POLL_TIMEOUT) else {
            return Ok(());
        };

        let app_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => {
                self.flags.property_changed(name, change)
            }
            mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
                Some(AppEvent::TrackFinished)
            }
            _ => None,
        };

        let new_state = self.flags.derive_state();
        if new_state != self.flags.state {
            self.flags.state = new_state;
            event_tx
                .send(AppEvent::PlayerStateChanged(new_state))
                .context("Failed to send player state event")?;
        }

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send player event")?;
        }

        Ok(())
    }
}

impl StreamFlags {
    /// Folds one property change into the flags, returning the
    /// application event it implies, if any.
    fn property_changed(&mut self, name: &str, change: Format) -> Option<AppEvent> {
        match (name, change) {
            ("pause", Format::Flag(paused)) => {
                self.paused = paused;
                None
            }
            ("idle-active", Format::Flag(idle)) => {
                self.idle = idle;
                None
            }
            ("paused-for-cache", Format::Flag(stalled)) => {
                self.stalled = stalled;
                None
            }
            ("duration", Format::Double(duration)) => {
                Some(AppEvent::DurationChanged(duration as u64))
            }
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                Some(AppEvent::TimeChanged(seconds))
            }
            ("volume", Format::Double(volume)) => {
                Some(AppEvent::VolumeChanged(volume.round() as u32))
            }
            ("media-title", Format::Str(title)) => Some(AppEvent::TitleChanged(title.to_string())),
            _ => None,
        }
    }

    // Stalled-on-cache outranks paused: a stream waiting for the network
    // reads as buffering even though MPV also flags it paused.
    fn derive_state(&self) -> PlayerState {
        if self.idle {
            PlayerState::Stopped
        } else if self.stalled {
            PlayerState::Buffering
        } else if self.paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }
}
