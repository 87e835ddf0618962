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

//! Lecture filtering.
//!
//! This module implements the in-memory search used by the search view:
//! a free-text query plus optional year and location narrowing, AND-composed
//! the way the archive's filter controls combine.

use std::fmt;

use crate::model::Lecture;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct LectureFilter {
    pub(crate) query: String,
    pub(crate) year: Option<i32>,
    pub(crate) location: String,
}

impl LectureFilter {
    pub(crate) fn is_empty(&self) -> bool {
        self.query.is_empty() && self.year.is_none() && self.location.is_empty()
    }

    /// A lecture matches when every populated criterion matches: the query
    /// as a case-insensitive substring of title or location, the year as an
    /// exact calendar-year match, and the location as a case-insensitive
    /// substring of the lecture's location.
    pub(crate) fn matches(&self, lecture: &Lecture) -> bool {
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            let in_title = lecture.title.to_lowercase().contains(&query);
            let in_location = lecture.location.to_lowercase().contains(&query);
            if !in_title && !in_location {
                return false;
            }
        }

        if let Some(year) = self.year {
            if lecture.year() != Some(year) {
                return false;
            }
        }

        if !self.location.is_empty() {
            let location = self.location.to_lowercase();
            if !lecture.location.to_lowercase().contains(&location) {
                return false;
            }
        }

        true
    }
}

impl fmt::Display for LectureFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(no filter)");
        }

        let mut parts = Vec::new();
        if !self.query.is_empty() {
            parts.push(format!("\"{}\"", self.query));
        }
        if let Some(year) = self.year {
            parts.push(format!("year {}", year));
        }
        if !self.location.is_empty() {
            parts.push(format!("location \"{}\"", self.location));
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// Applies the filter to an ordered lecture list, preserving order.
pub(crate) fn filter_lectures(lectures: &[Lecture], filter: &LectureFilter) -> Vec<Lecture> {
    lectures
        .iter()
        .filter(|l| filter.matches(l))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn lecture(title: &str, location: &str, year: Option<i32>) -> Lecture {
        let day = year.and_then(|y| NaiveDate::from_ymd_opt(y, 6, 1));
        let date = day.map(|d| d.to_string()).unwrap_or_default();
        Lecture::new(title, &format!("http://example.com/{}.mp3", title), date, day, location)
    }

    #[test]
    fn empty_filter_matches_everything() {
        let lectures = vec![lecture("A", "Delhi", Some(1972)), lecture("B", "Unknown", None)];
        let filter = LectureFilter::default();
        assert_eq!(filter_lectures(&lectures, &filter).len(), 2);
    }

    #[test]
    fn query_matches_title_case_insensitive() {
        let lectures = vec![
            lecture("Morning Walk", "Delhi", None),
            lecture("Evening Talk", "Delhi", None),
        ];
        let filter = LectureFilter {
            query: "morning".into(),
            ..Default::default()
        };
        let matched = filter_lectures(&lectures, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Morning Walk");
    }

    #[test]
    fn query_also_matches_location() {
        let lectures = vec![lecture("A", "Los Angeles", None), lecture("B", "Delhi", None)];
        let filter = LectureFilter {
            query: "angeles".into(),
            ..Default::default()
        };
        assert_eq!(filter_lectures(&lectures, &filter).len(), 1);
    }

    #[test]
    fn year_requires_a_parsed_date() {
        let lectures = vec![lecture("A", "Delhi", Some(1972)), lecture("B", "Delhi", None)];
        let filter = LectureFilter {
            year: Some(1972),
            ..Default::default()
        };
        let matched = filter_lectures(&lectures, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "A");
    }

    #[test]
    fn criteria_compose_with_and() {
        let lectures = vec![
            lecture("Morning Walk", "Delhi", Some(1972)),
            lecture("Morning Walk", "Bombay", Some(1972)),
            lecture("Morning Walk", "Delhi", Some(1973)),
        ];
        let filter = LectureFilter {
            query: "walk".into(),
            year: Some(1972),
            location: "delhi".into(),
        };
        let matched = filter_lectures(&lectures, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location, "Delhi");
        assert_eq!(matched[0].year(), Some(1972));
    }

    #[test]
    fn display_summarizes_the_filter() {
        let filter = LectureFilter {
            query: "walk".into(),
            year: Some(1972),
            location: "Delhi".into(),
        };
        assert_eq!(filter.to_string(), "\"walk\", year 1972, location \"Delhi\"");
        assert_eq!(LectureFilter::default().to_string(), "(no filter)");
    }
}
