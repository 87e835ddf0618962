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

//! Application configuration.
//!
//! This module manages the application configuration file. The archive
//! source is resolved from the configured fields in order of specificity:
//! a local CSV file, then an explicit CSV URL, then a Google Sheets id and
//! sheet name combined into the CSV export URL.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "vani";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,

    /// Google Sheets document id of the published archive.
    pub sheet_id: String,
    /// Sheet (tab) name within the document.
    pub sheet_name: String,
    /// Full CSV URL; takes precedence over `sheet_id`/`sheet_name`.
    pub sheet_url: Option<String>,
    /// Local CSV file; takes precedence over any remote source.
    pub sheet_file: Option<String>,

    /// Maximum age of the fetched-archive cache, in seconds.
    pub cache_max_age_secs: u64,
    /// Lectures per library page.
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sheet_id: String::new(),
            sheet_name: String::new(),
            sheet_url: None,
            sheet_file: None,
            cache_max_age_secs: 3600,
            page_size: 20,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}
