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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs (keyboard, archive worker
//! results, audio player updates, ticks) are translated into internal state
//! changes.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`]
//!    state, triggers tasks on background workers (like the archive loader
//!    or player), and manages UI navigation logic.
//! 3. **Render**: After each event is processed, the UI is re-drawn using
//!    the `ratatui` terminal.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView, RepeatMode,
    archive::ArchiveOrigin,
    components::{LectureTableAction, PlaylistAction},
    model::{Lecture, filter::LectureFilter},
    player::PlayerState,
    render::draw,
    tasks::AppTask,
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 20;

/// A change to the active lecture filter, issued from the command line.
#[derive(Debug)]
pub(crate) enum FilterCommand {
    Query(String),
    Year(Option<i32>),
    Location(String),
    Clear,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    ArchiveLoading,
    ArchiveReady {
        lectures: Vec<Lecture>,
        dropped: usize,
        origin: ArchiveOrigin,
    },
    ArchiveEmpty {
        dropped: usize,
    },
    ArchiveFailed(String),

    SetMainView(MainView),

    Filter(FilterCommand),
    SearchResultsReady {
        filter: LectureFilter,
        lectures: Vec<Lecture>,
    },

    PlayLecture(Lecture),
    PlayFromPlaylist(Lecture),
    PlayPlaylist,
    PlayNext,
    PlayPrevious,

    AddLecturesToPlaylist(Vec<Lecture>),
    RemoveLecturesFromPlaylist(Vec<Lecture>),
    ShufflePlaylist,
    ClearPlaylist,
    SetRepeatMode(RepeatMode),

    ToggleFavourite(Lecture),

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    TrackFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event
/// channel is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::ArchiveLoading => handle_archive_loading(app),
            AppEvent::ArchiveReady {
                lectures,
                dropped,
                origin,
            } => handle_archive_ready(app, lectures, dropped, origin)?,
            AppEvent::ArchiveEmpty { dropped } => handle_archive_empty(app, dropped),
            AppEvent::ArchiveFailed(reason) => handle_archive_failed(app, reason),

            AppEvent::SetMainView(view) => handle_set_main_view(app, view),

            AppEvent::Filter(command) => handle_filter_command(app, command)?,
            AppEvent::SearchResultsReady { filter, lectures } => {
                handle_search_results_ready(app, filter, lectures)?
            }

            AppEvent::PlayLecture(lecture) => handle_play_lecture(app, lecture)?,
            AppEvent::PlayFromPlaylist(lecture) => handle_play_from_playlist(app, lecture)?,
            AppEvent::PlayPlaylist => handle_play_playlist(app)?,
            AppEvent::PlayNext => handle_play_next(app)?,
            AppEvent::PlayPrevious => handle_play_previous(app)?,

            AppEvent::AddLecturesToPlaylist(lectures) => {
                handle_add_lectures_to_playlist(app, lectures)
            }
            AppEvent::RemoveLecturesFromPlaylist(lectures) => {
                handle_remove_lectures_from_playlist(app, lectures)
            }
            AppEvent::ShufflePlaylist => handle_shuffle_playlist(app),
            AppEvent::ClearPlaylist => handle_clear_playlist(app),
            AppEvent::SetRepeatMode(mode) => handle_set_repeat_mode(app, mode),

            AppEvent::ToggleFavourite(lecture) => handle_toggle_favourite(app, lecture),

            AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
            AppEvent::TitleChanged(title) => handle_title_changed(app, title),
            AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
            AppEvent::VolumeChanged(volume) => handle_volume_changed(app, volume),
            AppEvent::TrackFinished => handle_track_finished(app)?,
            AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),

            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => handle_fatal_error(app, message),

            AppEvent::Tick | _ => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Maps keyboard input to application actions and playback commands.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Application Control**: Life-cycle events like exiting the program.
/// * **Navigation**: Switching views and moving through lecture tables.
/// * **Playback**: Controlling the audio engine (play, pause, seek,
///   volume).
/// * **Playlist Management**: Adding lectures to the play queue or clearing
///   it.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // A transient error has been seen once the user touches the keyboard.
    app.last_error = None;

    let event = Event::Key(key);
    let handled = app
        .commander
        .handle_event(event.clone(), &app.task_tx, &app.event_tx);
    if handled {
        return Ok(());
    }

    if app.playlist_view.is_active {
        if let Some(action) = app.playlist_view.process_event(&event) {
            match action {
                PlaylistAction::Table(LectureTableAction::Activate(lecture)) => {
                    app.event_tx.send(AppEvent::PlayFromPlaylist(lecture))?;
                }
                PlaylistAction::Table(action) => dispatch_table_action(app, action)?,
                PlaylistAction::Remove(lectures) => {
                    app.event_tx
                        .send(AppEvent::RemoveLecturesFromPlaylist(lectures))?;
                }
            }
            return Ok(());
        }
    } else {
        let action = if app.library_view.is_active {
            app.library_view.process_event(&event)
        } else if app.search_view.is_active {
            app.search_view.process_event(&event)
        } else if app.favourites_view.is_active {
            app.favourites_view.process_event(&event)
        } else {
            None
        };

        if let Some(action) = action {
            dispatch_table_action(app, action)?;
            return Ok(());
        }
    }

    process_global_key_event(app, key)
}

fn dispatch_table_action(app: &mut App, action: LectureTableAction) -> Result<()> {
    match action {
        LectureTableAction::Activate(lecture) => {
            app.event_tx.send(AppEvent::PlayLecture(lecture))?;
        }
        LectureTableAction::AddToPlaylist(lectures) => {
            app.event_tx
                .send(AppEvent::AddLecturesToPlaylist(lectures))?;
        }
        LectureTableAction::ToggleFavourite(lecture) => {
            app.event_tx.send(AppEvent::ToggleFavourite(lecture))?;
        }
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('r'), _) => app.task_tx.send(AppTask::LoadArchive { refresh: false })?,
        (KeyCode::Char('R'), _) => app.task_tx.send(AppTask::LoadArchive { refresh: true })?,

        (KeyCode::Char('1'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Library))?,
        (KeyCode::Char('2'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Search))?,
        (KeyCode::Char('3'), _) => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Favourites))?,
        (KeyCode::Char('4'), _) => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Playlist))?,

        // Playback controls
        (KeyCode::Char('p'), _) => app.audio_player.toggle_pause()?,
        (KeyCode::Char('s'), _) => app.audio_player.stop()?,
        (KeyCode::Char(','), _) => app.audio_player.seek(-FINE_SEEK_DELTA)?,
        (KeyCode::Char('.'), _) => app.audio_player.seek(FINE_SEEK_DELTA)?,
        (KeyCode::Char('<'), _) => app.audio_player.seek(-SEEK_DELTA)?,
        (KeyCode::Char('>'), _) => app.audio_player.seek(SEEK_DELTA)?,
        (KeyCode::Char('-'), _) => app.audio_player.adjust_volume(-FINE_VOLUME_DELTA)?,
        (KeyCode::Char('='), _) => app.audio_player.adjust_volume(FINE_VOLUME_DELTA)?,
        (KeyCode::Char('_'), _) => app.audio_player.adjust_volume(-VOLUME_DELTA)?,
        (KeyCode::Char('+'), _) => app.audio_player.adjust_volume(VOLUME_DELTA)?,
        (KeyCode::Char('m'), _) => app.audio_player.toggle_mute()?,

        (KeyCode::Char('n'), _) => app.event_tx.send(AppEvent::PlayNext)?,
        (KeyCode::Char('b'), _) => app.event_tx.send(AppEvent::PlayPrevious)?,
        (KeyCode::Char('P'), _) => app.event_tx.send(AppEvent::PlayPlaylist)?,

        // Playlist Management
        (KeyCode::Char('x'), _) => app.event_tx.send(AppEvent::ShufflePlaylist)?,
        (KeyCode::Char('c'), _) => app.event_tx.send(AppEvent::ClearPlaylist)?,

        _ => {}
    }

    Ok(())
}
