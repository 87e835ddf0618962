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

//! Date field cleanup and normalization.
//!
//! Sheet date cells arrive in whatever form the archive maintainers typed:
//! ISO dates, US-style slashed dates, prose like `Sep 5 2023`, sometimes
//! with a trailing time of day. Parseable values are normalized to
//! `YYYY-MM-DD`; anything else is kept as cleaned text rather than being
//! rejected, since an odd date must not cost the row its audio link.

use chrono::NaiveDate;

/// Literal rewrites for month spellings the calendar parser does not
/// accept. The archive's habitual offender is the four-letter September
/// abbreviation with a trailing period.
const MONTH_SUBSTITUTIONS: &[(&str, &str)] = &[("Sept.", "Sep")];

/// Accepted calendar forms, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// A cleaned date cell: the display text, and the calendar day when the
/// text holds the normalized ISO form.
#[derive(Debug, PartialEq)]
pub(crate) struct CleanedDate {
    pub(crate) text: String,
    pub(crate) day: Option<NaiveDate>,
}

/// Cleans one raw date cell.
///
/// Applies the literal month substitutions, then attempts calendar parsing
/// of the whole text; if that fails, retries with any time-of-day suffix
/// (text after the first space) stripped. A parsed date is reformatted to
/// `YYYY-MM-DD`; an unparseable one keeps the substituted text verbatim.
pub(crate) fn clean_date(raw: &str) -> CleanedDate {
    let mut cleaned = raw.trim().to_string();
    if cleaned.is_empty() {
        return CleanedDate {
            text: cleaned,
            day: None,
        };
    }

    for (from, to) in MONTH_SUBSTITUTIONS {
        cleaned = cleaned.replace(from, to);
    }

    let day = parse_day(&cleaned)
        .or_else(|| cleaned.split_once(' ').and_then(|(prefix, _)| parse_day(prefix)));

    match day {
        Some(day) => CleanedDate {
            text: day.format("%Y-%m-%d").to_string(),
            day: Some(day),
        },
        None => CleanedDate { text: cleaned, day: None },
    }
}

fn parse_day(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_date_passes_through() {
        let cleaned = clean_date("2024-03-01");
        assert_eq!(cleaned.text, "2024-03-01");
        assert_eq!(cleaned.day, Some(day(2024, 3, 1)));
    }

    #[test]
    fn september_abbreviation_is_rewritten_and_parsed() {
        let cleaned = clean_date("Sept. 5 2023");
        assert_eq!(cleaned.text, "2023-09-05");
        assert_eq!(cleaned.day, Some(day(2023, 9, 5)));
    }

    #[test]
    fn time_of_day_suffix_is_stripped() {
        let cleaned = clean_date("2024-03-01 14:30:00");
        assert_eq!(cleaned.text, "2024-03-01");
        assert_eq!(cleaned.day, Some(day(2024, 3, 1)));
    }

    #[test]
    fn slashed_us_date_parses() {
        let cleaned = clean_date("3/1/2024");
        assert_eq!(cleaned.text, "2024-03-01");
    }

    #[test]
    fn prose_date_with_comma_parses() {
        let cleaned = clean_date("September 5, 2023");
        assert_eq!(cleaned.text, "2023-09-05");
    }

    #[test]
    fn unparseable_text_is_kept_verbatim() {
        let cleaned = clean_date("not-a-date");
        assert_eq!(cleaned.text, "not-a-date");
        assert_eq!(cleaned.day, None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let cleaned = clean_date("  2024-03-01  ");
        assert_eq!(cleaned.text, "2024-03-01");
    }

    #[test]
    fn empty_cell_stays_empty() {
        let cleaned = clean_date("");
        assert_eq!(cleaned.text, "");
        assert_eq!(cleaned.day, None);
    }
}
