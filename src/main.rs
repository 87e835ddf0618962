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

//! # Lecture Archive Player TUI.
//!
//! A terminal player for audio archives published as spreadsheets.
//!
//! The application fetches a published sheet (Google Sheets CSV export or a
//! local CSV file), parses it into normalized lecture records, and presents
//! a searchable, tabbed, paginated playlist bound to an MPV-backed audio
//! player that streams the lecture links.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** handle archive fetching/parsing and audio
//!   playback via asynchronous command processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure
//! the terminal state is preserved even in the event of a crash.
//! Communication between the UI and background workers is handled via
//! `std::sync::mpsc` channels.

mod archive;
mod commander;
mod components;
mod config;
mod events;
mod model;
mod parser;
mod player;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use directories::ProjectDirs;
use log::LevelFilter;
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::WriteLogger;
use std::{
    fs::File,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    archive::ArchiveState,
    commander::Commander,
    components::{FavouritesView, LibraryView, PlaylistView, SearchView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{
        Lecture, favourites::Favourites, filter::LectureFilter, queue::Queue,
    },
    player::{AudioPlayer, PlayerState},
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MainView {
    Library,
    Search,
    Favourites,
    Playlist,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PlayMode {
    PlayOne,
    Playlist,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RepeatMode {
    Off,
    RepeatOne,
    RepeatAll,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub audio_player: AudioPlayer,

    pub archive_state: ArchiveState,
    pub all_lectures: Vec<Lecture>,
    pub filter: LectureFilter,
    pub favourites: Favourites,
    pub queue: Queue,

    pub library_view: LibraryView,
    pub search_view: SearchView,
    pub favourites_view: FavouritesView,
    pub playlist_view: PlaylistView,

    pub commander: Commander,

    pub play_mode: PlayMode,
    pub repeat_mode: RepeatMode,
    pub current_queue_idx: Option<usize>,

    pub player_state: PlayerState,
    pub now_playing: Option<Lecture>,
    pub player_track_name: Option<String>,
    pub player_duration: Option<u64>,
    pub player_time: Option<u64>,
    pub player_position: Option<f64>,
    pub volume: Option<u32>,

    pub last_error: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player_event_tx = event_tx.clone();

        let page_size = config.page_size;

        Ok(Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Library,
            event_tx,
            event_rx,
            task_tx,
            audio_player: AudioPlayer::new(audio_player_event_tx),
            archive_state: ArchiveState::NotLoaded,
            all_lectures: vec![],
            filter: LectureFilter::default(),
            favourites: Favourites::load(),
            queue: Queue::new(),
            library_view: LibraryView::new(page_size),
            search_view: SearchView::new(),
            favourites_view: FavouritesView::new(),
            playlist_view: PlaylistView::new(),
            commander: Commander::new(),
            play_mode: PlayMode::PlayOne,
            repeat_mode: RepeatMode::Off,
            current_queue_idx: None,
            player_state: PlayerState::Stopped,
            now_playing: None,
            player_track_name: None,
            player_duration: None,
            player_time: None,
            player_position: None,
            volume: None,
            last_error: None,
        })
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error
/// if any part of the execution fails.
fn main() -> Result<()> {
    init_logging();

    let config = config::load_config();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Initializes file logging in the platform data directory.
///
/// A TUI owns the terminal, so log output goes to a file. Logging is
/// best-effort: failure to set it up must not stop the application.
fn init_logging() {
    let Some(dirs) = ProjectDirs::from("", "", "vani") else {
        return;
    };
    if std::fs::create_dir_all(dirs.data_dir()).is_err() {
        return;
    }
    let log_path = dirs.data_dir().join("vani.log");
    if let Ok(file) = File::create(&log_path) {
        let _ = WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file);
    }
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd
    // get a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including
/// disabling raw mode, leaving the alternate screen, and resetting the
/// background color. It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event
/// loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an
/// unrecoverable application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: mpsc::Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks
    // asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI
    // application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to load the archive from the configured source
    app.task_tx
        .send(AppTask::LoadArchive { refresh: false })
        .ok();

    // Make the startup view active so the table receives input.
    app.library_view.is_active = true;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
