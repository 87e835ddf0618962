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

//! Archive download.
//!
//! Blocking HTTP lives here because archive loads run on the task worker
//! thread, never on the UI thread.

use std::time::Duration;

use crate::archive::ArchiveError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the CSV export URL for a published Google Sheet.
pub(crate) fn sheet_csv_url(sheet_id: &str, sheet_name: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
        sheet_id, sheet_name
    )
}

/// Fetches the archive CSV, treating any non-success status as an error.
pub(crate) fn fetch_csv(url: &str) -> Result<String, ArchiveError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(ArchiveError::Status(response.status()));
    }

    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_embeds_id_and_sheet_name() {
        let url = sheet_csv_url("1AbCdEf", "Lectures");
        assert_eq!(
            url,
            "https://docs.google.com/spreadsheets/d/1AbCdEf/gviz/tq?tqx=out:csv&sheet=Lectures"
        );
    }
}
