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

//! Lecture archive parsing.
//!
//! This module converts the raw text of a published spreadsheet (CSV export)
//! into the ordered list of [`Lecture`] records that drives the rest of the
//! application.
//!
//! Published sheets are edited by hand, so individual malformed rows are
//! dropped and counted rather than treated as errors. The only hard failure
//! mode is an archive with no usable rows at all, which the archive layer
//! reports as a load failure.
//!
//! # Column mapping
//!
//! Columns are located by the header row, not by position: the first header
//! cell whose lowercased text contains `date`, `location`, `title` or `link`
//! supplies the index for that field. Extra columns are ignored and column
//! order is irrelevant, so `"Lecture Date", "City / Location", "Talk Title",
//! "Audio Link"` works as well as the plain four-column layout.

pub(crate) mod date;

use crate::model::{Archive, Lecture};

/// Minimum number of fields a body row must tokenize into before it is even
/// considered; shorter rows are treated as incomplete and dropped.
const MIN_ROW_FIELDS: usize = 4;

/// Substituted for a blank location field.
const UNKNOWN_LOCATION: &str = "Unknown";

/// Splits one line of delimited text into trimmed fields.
///
/// Fields are separated by `,` and may be wrapped in `"` quotes; a doubled
/// `""` inside a quoted field produces a literal quote. The scanner is
/// tolerant of malformed quoting: a stray quote simply toggles quote mode,
/// and a line that ends while still inside quotes finalizes the field with
/// whatever accumulated.
fn tokenize_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut buffer = String::new();
    let mut in_quotes = false;

    let mut chars = row.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => in_quotes = true,
            '"' if chars.peek() == Some(&'"') => {
                buffer.push('"');
                chars.next();
            }
            '"' => in_quotes = false,
            ',' if !in_quotes => fields.push(std::mem::take(&mut buffer)),
            _ => buffer.push(c),
        }
    }
    fields.push(buffer);

    fields.iter().map(|f| f.trim().to_string()).collect()
}

/// Column indices for the logical record fields, resolved from the header
/// row by case-insensitive substring match.
#[derive(Debug, Default, PartialEq)]
struct HeaderMap {
    date: Option<usize>,
    location: Option<usize>,
    title: Option<usize>,
    link: Option<usize>,
}

impl HeaderMap {
    fn from_header_row(fields: &[String]) -> Self {
        let lowered: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
        let find = |name: &str| lowered.iter().position(|f| f.contains(name));

        Self {
            date: find("date"),
            location: find("location"),
            title: find("title"),
            link: find("link"),
        }
    }

    /// Looks up a field by mapped index, resolving an absent or out-of-range
    /// index to the empty string.
    fn field<'a>(index: Option<usize>, fields: &'a [String]) -> &'a str {
        index.and_then(|i| fields.get(i)).map_or("", |f| f.as_str())
    }
}

/// Parses the full text of a published sheet into an ordered [`Archive`].
///
/// Rows that tokenize to fewer than four fields, or whose title or link is
/// empty after trimming, are dropped and tallied in [`Archive::dropped`].
/// The surviving records are sorted by date, most recent first; records
/// without a parseable date keep their source order relative to their
/// neighbours (the comparator treats them as equal to any partner).
///
/// Parsing never fails: an archive with zero usable rows is returned as an
/// empty list and converted into a load error by the caller.
pub(crate) fn parse_archive(text: &str) -> Archive {
    let mut rows = text.lines().filter(|line| !line.trim().is_empty());

    let header = match rows.next() {
        Some(row) => HeaderMap::from_header_row(&tokenize_row(row)),
        None => return Archive::default(),
    };

    let mut lectures = Vec::new();
    let mut dropped = 0;

    for row in rows {
        let fields = tokenize_row(row);
        if fields.len() < MIN_ROW_FIELDS {
            dropped += 1;
            continue;
        }

        let title = HeaderMap::field(header.title, &fields).trim();
        let link = HeaderMap::field(header.link, &fields).trim();
        if title.is_empty() || link.is_empty() {
            dropped += 1;
            continue;
        }

        let location = HeaderMap::field(header.location, &fields).trim();
        let location = if location.is_empty() {
            UNKNOWN_LOCATION
        } else {
            location
        };

        let cleaned = date::clean_date(HeaderMap::field(header.date, &fields));

        lectures.push(Lecture::new(title, link, cleaned.text, cleaned.day, location));
    }

    order_by_date(&mut lectures);

    Archive { lectures, dropped }
}

// Newest first. Undated records compare equal to any partner, so only the
// dated subset is reordered; undated rows keep their source slots. Sorting
// the subset separately keeps the comparator a total order.
fn order_by_date(lectures: &mut [Lecture]) {
    let dated: Vec<usize> = (0..lectures.len())
        .filter(|&i| lectures[i].day.is_some())
        .collect();

    let mut ordered: Vec<Lecture> = dated.iter().map(|&i| lectures[i].clone()).collect();
    ordered.sort_by(|a, b| b.day.cmp(&a.day));

    for (&slot, lecture) in dated.iter().zip(ordered) {
        lectures[slot] = lecture;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive(body: &str) -> Archive {
        let text = format!("Date,Location,Title,Link\n{}", body);
        parse_archive(&text)
    }

    #[test]
    fn tokenize_simple_row() {
        assert_eq!(tokenize_row("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn tokenize_trims_fields() {
        assert_eq!(tokenize_row(" a , b ,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn tokenize_keeps_empty_fields() {
        assert_eq!(tokenize_row("a,,c,"), vec!["a", "", "c", ""]);
    }

    #[test]
    fn tokenize_quoted_comma_is_one_field() {
        assert_eq!(
            tokenize_row("1970-01-01,\"Talk, Part 2\",x,y"),
            vec!["1970-01-01", "Talk, Part 2", "x", "y"]
        );
    }

    #[test]
    fn tokenize_escaped_quote() {
        assert_eq!(
            tokenize_row("\"He said \"\"Hi\"\"\",b"),
            vec!["He said \"Hi\"", "b"]
        );
    }

    #[test]
    fn tokenize_unterminated_quote_is_tolerated() {
        assert_eq!(tokenize_row("a,\"unclosed, field"), vec!["a", "unclosed, field"]);
    }

    #[test]
    fn tokenize_round_trips_field_content() {
        let original = vec!["2024-03-01", "Delhi", "Talk, Part 2", "http://example.com/a.mp3"];
        let rejoined = original
            .iter()
            .map(|f| {
                if f.contains(',') {
                    format!("\"{}\"", f)
                } else {
                    f.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(tokenize_row(&rejoined), original);
    }

    #[test]
    fn header_map_matches_by_substring_case_insensitive() {
        let fields = tokenize_row("Audio Link,Talk Title,City / Location,Lecture Date");
        let header = HeaderMap::from_header_row(&fields);
        assert_eq!(header.link, Some(0));
        assert_eq!(header.title, Some(1));
        assert_eq!(header.location, Some(2));
        assert_eq!(header.date, Some(3));
    }

    #[test]
    fn header_map_takes_first_match() {
        let fields = tokenize_row("Date,Upload Date,Title,Link");
        let header = HeaderMap::from_header_row(&fields);
        assert_eq!(header.date, Some(0));
    }

    #[test]
    fn header_map_absent_column_resolves_empty() {
        let fields = tokenize_row("Date,Title,Link,Notes");
        let header = HeaderMap::from_header_row(&fields);
        assert_eq!(header.location, None);
        assert_eq!(HeaderMap::field(header.location, &fields), "");
    }

    #[test]
    fn empty_text_yields_empty_archive() {
        let archive = parse_archive("");
        assert!(archive.lectures.is_empty());
        assert_eq!(archive.dropped, 0);
    }

    #[test]
    fn example_row_normalizes_fully() {
        let archive = archive("Sept. 5 2023,,\"My Talk\",http://example.com/a.mp3");
        assert_eq!(archive.lectures.len(), 1);
        let lecture = &archive.lectures[0];
        assert_eq!(lecture.date, "2023-09-05");
        assert_eq!(lecture.location, "Unknown");
        assert_eq!(lecture.title, "My Talk");
        assert_eq!(lecture.link, "http://example.com/a.mp3");
    }

    #[test]
    fn short_rows_are_dropped_and_counted() {
        let archive = archive("2024-01-01,Delhi,Missing link column");
        assert!(archive.lectures.is_empty());
        assert_eq!(archive.dropped, 1);
    }

    #[test]
    fn rows_without_title_or_link_are_dropped() {
        let archive = archive(
            "2024-01-01,Delhi,,http://example.com/a.mp3\n\
             2024-01-02,Delhi,A Talk,\n\
             2024-01-03,Delhi,Kept,http://example.com/b.mp3",
        );
        assert_eq!(archive.lectures.len(), 1);
        assert_eq!(archive.lectures[0].title, "Kept");
        assert_eq!(archive.dropped, 2);
    }

    #[test]
    fn blank_lines_are_not_rows() {
        let archive = archive("\n2024-01-01,Delhi,A,http://example.com/a.mp3\n\n");
        assert_eq!(archive.lectures.len(), 1);
        assert_eq!(archive.dropped, 0);
    }

    #[test]
    fn unparseable_date_is_kept_verbatim() {
        let archive = archive("not-a-date,Delhi,A Talk,http://example.com/a.mp3");
        assert_eq!(archive.lectures.len(), 1);
        assert_eq!(archive.lectures[0].date, "not-a-date");
        assert_eq!(archive.lectures[0].day, None);
    }

    #[test]
    fn records_sort_newest_first_and_keep_undated_rows() {
        let archive = archive(
            "2023-12-25,Delhi,Older,http://example.com/1.mp3\n\
             not-a-date,Delhi,Undated,http://example.com/2.mp3\n\
             2024-03-01,Delhi,Newer,http://example.com/3.mp3",
        );
        assert_eq!(archive.lectures.len(), 3);

        let position = |title: &str| {
            archive
                .lectures
                .iter()
                .position(|l| l.title == title)
                .unwrap()
        };
        assert!(position("Newer") < position("Older"));
        assert_eq!(position("Undated"), 1);
    }

    #[test]
    fn all_invalid_body_yields_empty_sequence() {
        let archive = archive(
            ",Delhi,,http://example.com/a.mp3\n\
             ,Delhi,,http://example.com/b.mp3",
        );
        assert!(archive.lectures.is_empty());
        assert_eq!(archive.dropped, 2);
    }

    #[test]
    fn crlf_rows_are_tolerated() {
        let archive = parse_archive(
            "Date,Location,Title,Link\r\n2024-01-01,Delhi,A,http://example.com/a.mp3\r\n",
        );
        assert_eq!(archive.lectures.len(), 1);
        assert_eq!(archive.lectures[0].title, "A");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = "Id,Date,Location,Speaker,Title,Link\n\
                    7,2024-01-01,Delhi,Someone,A Talk,http://example.com/a.mp3";
        let archive = parse_archive(text);
        assert_eq!(archive.lectures.len(), 1);
        assert_eq!(archive.lectures[0].title, "A Talk");
        assert_eq!(archive.lectures[0].link, "http://example.com/a.mp3");
    }
}
