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

//! UI rendering logic for the lecture table.
//!
//! This module handles the visual representation of lecture data, including
//! column layout, selection highlighting, favourite markers, and theme
//! application using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::LectureTable, model::favourites::Favourites, theme::Theme};

const FAVOURITE_MARK: &str = "\u{2764}";

impl LectureTable {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        favourites: &Favourites,
        theme: &Theme,
    ) {
        let rows = self.lectures.iter().map(|item| {
            let selected = self.selection.contains(&item.id);
            let selection_indicator = if selected {
                Line::from("+").style(Style::default().fg(Color::Black).bg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let favourite_indicator = if favourites.contains(item) {
                Line::from(FAVOURITE_MARK).style(Style::default().fg(theme.favourite_colour))
            } else {
                Line::from("")
            };

            Row::new(vec![
                Cell::from(selection_indicator),
                Cell::from(favourite_indicator),
                Cell::from(
                    Line::from(item.date.as_str()).style(Style::default().fg(theme.table_date_fg)),
                ),
                Cell::from(
                    Line::from(item.location.as_str())
                        .style(Style::default().fg(theme.table_location_fg)),
                ),
                Cell::from(
                    Line::from(item.title.as_str())
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Percentage(25),
                Constraint::Percentage(75),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(""),
                Cell::from("Date"),
                Cell::from("Location"),
                Cell::from("Title"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
