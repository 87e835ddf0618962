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

//! Render the archive status line.
//!
//! The status line is the one place that distinguishes the archive's load
//! states: not yet loaded, loading, ready (with diagnostics), empty, and
//! failed. Transient worker errors take precedence until the next key
//! press.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Paragraph,
};

use crate::{App, archive::{ArchiveOrigin, ArchiveState}};

pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let (text, is_error) = if let Some(error) = &app.last_error {
        (format!(" {}", error), true)
    } else {
        status_text(&app.archive_state)
    };

    let colour = if is_error {
        app.theme.error_colour
    } else {
        app.theme.border_colour
    };

    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(colour)),
        area,
    );
}

fn status_text(state: &ArchiveState) -> (String, bool) {
    match state {
        ArchiveState::NotLoaded => (" Archive not loaded".to_string(), false),
        ArchiveState::Loading => (" Loading archive...".to_string(), false),
        ArchiveState::Ready {
            total,
            dropped,
            origin,
        } => {
            let origin = match origin {
                ArchiveOrigin::Remote => "remote",
                ArchiveOrigin::Cache => "cache",
                ArchiveOrigin::File => "file",
            };
            let mut text = format!(" Archive: {} lectures ({})", total, origin);
            if *dropped > 0 {
                let _ = write!(text, " | {} rows dropped", dropped);
            }
            (text, false)
        }
        ArchiveState::Empty { dropped } => (
            format!(
                " Archive has no usable rows ({} dropped) | :refresh to retry",
                dropped
            ),
            true,
        ),
        ArchiveState::Failed(reason) => (
            format!(" Archive load failed: {} | :reload to retry", reason),
            true,
        ),
    }
}
