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

//! Terminal environment and styling utilities.
//!
//! Emitting OSC (Operating System Command) escape sequences lets the
//! application tint the whole terminal window to the theme background,
//! not just the drawn cells. Most modern terminal emulators (XTerm,
//! iTerm2, Alacritty, Kitty) honour these codes.

use std::io::{self, Write};

use ratatui::style::Color;

/// Tints the terminal background to a theme colour using OSC 11.
///
/// Only RGB colours can be expressed in the escape sequence; palette
/// colours are left alone. The output is flushed immediately so the tint
/// applies before the first frame.
pub(crate) fn set_terminal_bg(colour: Color) {
    if let Color::Rgb(r, g, b) = colour {
        print!("\x1b]11;#{:02x}{:02x}{:02x}\x07", r, g, b);
        io::stdout().flush().ok();
    }
}

/// Reverts the terminal background to the user's own configuration using
/// OSC 111; called during teardown.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
