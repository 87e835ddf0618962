use anyhow::Result;
use log::{error, info, warn};

use crate::{
    App, MainView, PlayMode, RepeatMode,
    archive::{ArchiveOrigin, ArchiveState},
    events::{AppEvent, FilterCommand},
    model::{Lecture, filter::LectureFilter},
    player::PlayerState,
    tasks::AppTask,
};

pub(super) fn handle_archive_loading(app: &mut App) {
    app.archive_state = ArchiveState::Loading;
}

pub(super) fn handle_archive_ready(
    app: &mut App,
    lectures: Vec<Lecture>,
    dropped: usize,
    origin: ArchiveOrigin,
) -> Result<()> {
    info!(
        "archive ready: {} lectures, {} dropped ({:?})",
        lectures.len(),
        dropped,
        origin
    );

    app.archive_state = ArchiveState::Ready {
        total: lectures.len(),
        dropped,
        origin,
    };

    app.library_view.set_lectures(lectures.clone());
    app.favourites_view.refresh(&lectures, &app.favourites);
    app.all_lectures = lectures;

    // Refresh stale search results against the new archive.
    if !app.filter.is_empty() {
        app.task_tx.send(AppTask::Filter(app.filter.clone()))?;
    }

    Ok(())
}

pub(super) fn handle_archive_empty(app: &mut App, dropped: usize) {
    warn!("archive empty: no usable rows ({} dropped)", dropped);
    app.archive_state = ArchiveState::Empty { dropped };
    app.all_lectures.clear();
    app.library_view.set_lectures(vec![]);
    app.favourites_view.refresh(&[], &app.favourites);
}

pub(super) fn handle_archive_failed(app: &mut App, reason: String) {
    warn!("archive load failed: {}", reason);
    app.archive_state = ArchiveState::Failed(reason);
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    app.library_view.is_active = matches!(main_view, MainView::Library);
    app.search_view.is_active = matches!(main_view, MainView::Search);
    app.favourites_view.is_active = matches!(main_view, MainView::Favourites);
    app.playlist_view.is_active = matches!(main_view, MainView::Playlist);
    app.main_view = main_view;
}

pub(super) fn handle_filter_command(app: &mut App, command: FilterCommand) -> Result<()> {
    match command {
        FilterCommand::Query(query) => app.filter.query = query,
        FilterCommand::Year(year) => app.filter.year = year,
        FilterCommand::Location(location) => app.filter.location = location,
        FilterCommand::Clear => app.filter = LectureFilter::default(),
    }

    app.task_tx.send(AppTask::Filter(app.filter.clone()))?;

    Ok(())
}

pub(super) fn handle_search_results_ready(
    app: &mut App,
    filter: LectureFilter,
    lectures: Vec<Lecture>,
) -> Result<()> {
    app.search_view.set_results(filter, lectures);
    app.event_tx.send(AppEvent::SetMainView(MainView::Search))?;

    Ok(())
}

pub(super) fn handle_play_lecture(app: &mut App, lecture: Lecture) -> Result<()> {
    app.play_mode = PlayMode::PlayOne;
    app.audio_player.play(&lecture)?;
    app.now_playing = Some(lecture);

    Ok(())
}

pub(super) fn handle_play_from_playlist(app: &mut App, lecture: Lecture) -> Result<()> {
    app.play_mode = PlayMode::Playlist;
    app.current_queue_idx = app.queue.position(lecture.id);
    app.audio_player.play(&lecture)?;
    app.now_playing = Some(lecture);

    Ok(())
}

pub(super) fn handle_play_playlist(app: &mut App) -> Result<()> {
    app.play_mode = PlayMode::Playlist;
    if app.current_queue_idx.is_none() && !app.queue.is_empty() {
        app.current_queue_idx = Some(0);
        if let Some(lecture) = app.queue.get(0).cloned() {
            app.audio_player.play(&lecture)?;
            app.now_playing = Some(lecture);
        }
    }

    Ok(())
}

pub(super) fn handle_play_next(app: &mut App) -> Result<()> {
    if app.queue.is_empty() {
        return Ok(());
    }

    let next_idx = match app.current_queue_idx {
        Some(idx) if idx + 1 < app.queue.len() => idx + 1,
        Some(_) if app.repeat_mode == RepeatMode::RepeatAll => 0,
        Some(idx) => idx,
        None => 0,
    };

    play_queue_position(app, next_idx)
}

pub(super) fn handle_play_previous(app: &mut App) -> Result<()> {
    if app.queue.is_empty() {
        return Ok(());
    }

    let previous_idx = match app.current_queue_idx {
        Some(idx) if idx > 0 => idx - 1,
        Some(idx) => idx,
        None => 0,
    };

    play_queue_position(app, previous_idx)
}

fn play_queue_position(app: &mut App, idx: usize) -> Result<()> {
    app.play_mode = PlayMode::Playlist;
    if let Some(lecture) = app.queue.get(idx).cloned() {
        app.current_queue_idx = Some(idx);
        app.audio_player.play(&lecture)?;
        app.now_playing = Some(lecture);
    }

    Ok(())
}

pub(super) fn handle_add_lectures_to_playlist(app: &mut App, lectures: Vec<Lecture>) {
    app.queue.add_lectures(lectures);
    sync_playlist(app);

    if app.library_view.is_active {
        app.library_view.table.clear_selection();
    } else if app.search_view.is_active {
        app.search_view.table.clear_selection();
    } else if app.favourites_view.is_active {
        app.favourites_view.table.clear_selection();
    }
}

pub(super) fn handle_remove_lectures_from_playlist(app: &mut App, lectures: Vec<Lecture>) {
    let ids = lectures.iter().map(|l| l.id).collect();
    app.queue.remove_lectures(&ids);
    sync_playlist(app);
}

pub(super) fn handle_shuffle_playlist(app: &mut App) {
    app.queue.shuffle();
    sync_playlist(app);
}

pub(super) fn handle_clear_playlist(app: &mut App) {
    // Clear the queue and current index, but if the audio is playing keep
    // it playing
    app.queue.clear();
    sync_playlist(app);
}

pub(super) fn handle_set_repeat_mode(app: &mut App, mode: RepeatMode) {
    app.repeat_mode = mode;
}

pub(super) fn handle_toggle_favourite(app: &mut App, lecture: Lecture) {
    app.favourites.toggle(&lecture);
    if let Err(e) = app.favourites.save() {
        warn!("failed to save favourites: {}", e);
    }
    app.favourites_view.refresh(&app.all_lectures, &app.favourites);
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_title_changed(app: &mut App, title: String) {
    app.player_track_name = Some(title);
}

pub(super) fn handle_duration_changed(app: &mut App, dur: u64) {
    app.player_duration = Some(dur);
}

pub(super) fn handle_volume_changed(app: &mut App, vol: u32) {
    app.volume = Some(vol);
}

pub(super) fn handle_track_finished(app: &mut App) -> Result<()> {
    app.player_time = app.player_duration;
    if app.play_mode == PlayMode::Playlist {
        if let Some(idx) = app.current_queue_idx {
            app.current_queue_idx = advance_index(idx, app.queue.len(), app.repeat_mode);

            if let Some(valid_idx) = app.current_queue_idx {
                if let Some(lecture) = app.queue.get(valid_idx).cloned() {
                    app.audio_player.play(&lecture)?;
                    app.now_playing = Some(lecture);
                }
            } else {
                app.now_playing = None;
            }
        }
    }

    Ok(())
}

/// The queue index to play after the current one finishes, `None` when
/// playback should stop.
fn advance_index(idx: usize, total: usize, repeat_mode: RepeatMode) -> Option<usize> {
    if total == 0 {
        return None;
    }

    match repeat_mode {
        RepeatMode::RepeatOne => Some(idx),
        _ => {
            let next_idx = idx + 1;
            if next_idx < total {
                Some(next_idx)
            } else if repeat_mode == RepeatMode::RepeatAll {
                Some(0)
            } else {
                None
            }
        }
    }
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{}", message);
    app.last_error = Some(message);
}

pub(super) fn handle_fatal_error(app: &mut App, message: String) {
    error!("{}", message);
    app.last_error = Some(message);
}

pub(super) fn handle_tick(_app: &mut App) {}

fn sync_playlist(app: &mut App) {
    // Keep the playing position attached to the lecture, not the slot.
    app.current_queue_idx = app
        .now_playing
        .as_ref()
        .and_then(|l| app.queue.position(l.id));
    app.playlist_view.sync(app.queue.snapshot());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_walks_the_queue_then_stops() {
        assert_eq!(advance_index(0, 3, RepeatMode::Off), Some(1));
        assert_eq!(advance_index(1, 3, RepeatMode::Off), Some(2));
        assert_eq!(advance_index(2, 3, RepeatMode::Off), None);
    }

    #[test]
    fn repeat_all_wraps_to_the_start() {
        assert_eq!(advance_index(2, 3, RepeatMode::RepeatAll), Some(0));
        assert_eq!(advance_index(0, 3, RepeatMode::RepeatAll), Some(1));
    }

    #[test]
    fn repeat_one_stays_put() {
        assert_eq!(advance_index(1, 3, RepeatMode::RepeatOne), Some(1));
    }

    #[test]
    fn empty_queue_stops_playback() {
        assert_eq!(advance_index(0, 0, RepeatMode::RepeatAll), None);
    }
}
