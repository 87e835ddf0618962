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

//! UI rendering logic for the command line.
//!
//! While the commander is active the line shows a `:` prompt, the typed
//! text and a live cursor; otherwise it doubles as a key-hint bar so the
//! core bindings are always on screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{commander::Commander, theme::Theme};

const KEY_HINTS: &str =
    ": command   1-4 views   enter play   a queue   f favourite   [ ] page   r reload   q quit";

impl Commander {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let inner = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };

        if self.active() {
            let line = Line::from(vec![
                Span::styled(":", Style::default().fg(theme.accent_colour)),
                Span::styled(
                    self.input.value(),
                    Style::default().fg(theme.commander_colour),
                ),
            ]);
            f.render_widget(
                Paragraph::new(line).style(Style::default().bg(theme.gauge_track_colour)),
                inner,
            );

            // Cursor sits after the prompt character.
            let cursor_x = inner.x + 1 + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x, inner.y));
        } else {
            f.render_widget(
                Paragraph::new(KEY_HINTS).style(Style::default().fg(theme.border_colour)),
                inner,
            );
        }
    }
}
