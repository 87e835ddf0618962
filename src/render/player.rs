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

//! Render the playback bar.
//!
//! Three content rows inside a bordered strip: the now-playing line with
//! elapsed/total/remaining times, a mode line (play mode, queue position,
//! repeat mode) beside the volume gauge, and the stream position gauge.
//! A stalled stream is called out as buffering right in the title line.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{App, PlayMode, RepeatMode, player::PlayerState, theme::Theme, util};

const ICON_PLAY: &str = "\u{25B6}";
const ICON_PAUSE: &str = "\u{23F8}";
const ICON_STOP: &str = "\u{23F9}";
const ICON_BUFFERING: &str = "\u{231B}";

// MPV allows boosting volume above 100%.
const MAX_VOLUME: f64 = 130.0;

/// Renders the playback bar.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let title_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(rows[0]);

    f.render_widget(Paragraph::new(now_playing_line(app)), title_row[0]);
    f.render_widget(
        Paragraph::new(time_line(app)).alignment(Alignment::Right),
        title_row[1],
    );

    let mode_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(rows[2]);

    f.render_widget(
        Paragraph::new(mode_text(app)).style(Style::default().fg(app.theme.border_colour)),
        mode_row[0],
    );
    draw_volume(f, mode_row[1], app);

    let position = app.player_position.unwrap_or(0.0).clamp(0.0, 1.0);
    f.render_widget(gauge(position, &app.theme), rows[4]);
}

fn accent(text: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    )
}

fn now_playing_line(app: &App) -> Line<'static> {
    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Buffering => ICON_BUFFERING,
        PlayerState::Stopped => ICON_STOP,
    };

    let mut spans = vec![Span::raw(format!(" {} ", icon))];

    if let Some(lecture) = &app.now_playing {
        spans.push(accent(&lecture.title, &app.theme));
        spans.push(Span::raw(" at "));
        spans.push(accent(&lecture.location, &app.theme));
        if !lecture.date.is_empty() {
            spans.push(Span::raw(" on "));
            spans.push(accent(&lecture.date, &app.theme));
        }
    } else if let Some(title) = &app.player_track_name {
        // A stream started outside the archive only has its own metadata
        // title.
        spans.push(accent(title, &app.theme));
    } else {
        spans.push(Span::styled(
            "Nothing playing",
            Style::default().fg(app.theme.border_colour),
        ));
    }

    if app.player_state == PlayerState::Buffering {
        spans.push(Span::styled(
            " (buffering...)",
            Style::default().fg(app.theme.border_colour),
        ));
    }

    Line::from(spans)
}

fn time_line(app: &App) -> Line<'static> {
    if app.now_playing.is_none() && app.player_track_name.is_none() {
        return Line::from("");
    }

    let duration = app.player_duration.unwrap_or(0);
    let time = app.player_time.unwrap_or(0);
    let remaining = duration.saturating_sub(time);

    Line::from(vec![
        accent(&util::format::format_time(time), &app.theme),
        Span::raw(" / "),
        accent(&util::format::format_time(duration), &app.theme),
        Span::raw(" (-"),
        accent(&util::format::format_time(remaining), &app.theme),
        Span::raw(")"),
    ])
}

fn mode_text(app: &App) -> String {
    let mut text = match app.play_mode {
        PlayMode::PlayOne => " single".to_string(),
        PlayMode::Playlist => match app.current_queue_idx {
            Some(idx) => format!(" playlist {}/{}", idx + 1, app.queue.len()),
            None => " playlist".to_string(),
        },
    };

    match app.repeat_mode {
        RepeatMode::Off => {}
        RepeatMode::RepeatOne => {
            let _ = write!(text, " | repeat one");
        }
        RepeatMode::RepeatAll => {
            let _ = write!(text, " | repeat all");
        }
    }

    text
}

fn draw_volume(f: &mut Frame, area: Rect, app: &App) {
    let volume = app.volume.unwrap_or(0);
    let ratio = (volume as f64 / MAX_VOLUME).clamp(0.0, 1.0);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    f.render_widget(gauge(ratio, &app.theme), split[0]);
    f.render_widget(
        Paragraph::new(format!(" {}%", volume)).alignment(Alignment::Right),
        split[1],
    );
}

fn gauge(ratio: f64, theme: &Theme) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(ratio)
        .label("")
        .use_unicode(true)
}
