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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the Lecture
//! and the parsed Archive, together with filtering, pagination, favourites
//! and play-queue state built on top of them.

pub(crate) mod favourites;
pub(crate) mod filter;
pub(crate) mod queue;
pub(crate) mod session;

use chrono::{Datelike, NaiveDate};
use xxhash_rust::xxh3::xxh3_64;

/// One normalized archive entry: a playable talk with its metadata.
///
/// Instances are immutable once built by the parser. The id is derived from
/// the audio link, so it is stable across refetches and reorderings of the
/// sheet; selections and favourites key on it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Lecture {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) link: String,
    /// `YYYY-MM-DD` when the sheet date parsed, the cleaned original text
    /// otherwise; may be empty.
    pub(crate) date: String,
    /// The calendar day backing `date`, present only for the ISO form.
    pub(crate) day: Option<NaiveDate>,
    pub(crate) location: String,
}

impl Lecture {
    pub(crate) fn new(
        title: &str,
        link: &str,
        date: String,
        day: Option<NaiveDate>,
        location: &str,
    ) -> Self {
        Self {
            id: lecture_id(link),
            title: title.to_string(),
            link: link.to_string(),
            date,
            day,
            location: location.to_string(),
        }
    }

    pub(crate) fn year(&self) -> Option<i32> {
        self.day.map(|d| d.year())
    }
}

/// Stable identity of a lecture, derived from its audio link.
pub(crate) fn lecture_id(link: &str) -> u64 {
    xxh3_64(link.as_bytes())
}

/// The parsed archive: the ordered lecture list plus the count of source
/// rows dropped during parsing, kept for diagnostics and the status line.
#[derive(Debug, Clone, Default)]
pub(crate) struct Archive {
    pub(crate) lectures: Vec<Lecture>,
    pub(crate) dropped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_for_a_link() {
        let a = Lecture::new("A", "http://example.com/a.mp3", String::new(), None, "Unknown");
        let b = Lecture::new("B", "http://example.com/a.mp3", String::new(), None, "Delhi");
        assert_eq!(a.id, b.id);
        assert_eq!(a.id, lecture_id("http://example.com/a.mp3"));
    }

    #[test]
    fn ids_differ_between_links() {
        assert_ne!(
            lecture_id("http://example.com/a.mp3"),
            lecture_id("http://example.com/b.mp3")
        );
    }

    #[test]
    fn year_follows_the_parsed_day() {
        let day = NaiveDate::from_ymd_opt(1972, 9, 1);
        let dated = Lecture::new("A", "x", "1972-09-01".into(), day, "Delhi");
        let undated = Lecture::new("B", "y", "not-a-date".into(), None, "Delhi");
        assert_eq!(dated.year(), Some(1972));
        assert_eq!(undated.year(), None);
    }
}
