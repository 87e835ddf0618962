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

//! Archive acquisition.
//!
//! This module resolves the configured sheet source to CSV text and turns
//! it into a parsed [`Archive`]. Remote sources go through a file cache so
//! restarts do not hammer the sheet host, and a failed fetch falls back to
//! a stale cache when one exists.
//!
//! An archive with zero usable rows is a load failure
//! ([`ArchiveError::Empty`]) rather than a valid empty list: the UI must
//! show it like a fetch failure, distinct from an empty search result.

pub(crate) mod cache;
pub(crate) mod fetch;

use std::path::PathBuf;
use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

use crate::{config::AppConfig, model::Archive, parser};

#[derive(Debug, Error)]
pub(crate) enum ArchiveError {
    #[error("archive contains no usable rows ({dropped} dropped)")]
    Empty { dropped: usize },

    #[error("failed to fetch archive: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("archive request returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to read archive file {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the archive CSV comes from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SheetSource {
    GoogleSheet { sheet_id: String, sheet_name: String },
    Url(String),
    File(PathBuf),
}

impl SheetSource {
    /// Resolves the configured source, most specific first. `None` means
    /// the configuration names no archive at all.
    pub(crate) fn from_config(config: &AppConfig) -> Option<Self> {
        if let Some(file) = &config.sheet_file {
            return Some(Self::File(PathBuf::from(file)));
        }
        if let Some(url) = &config.sheet_url {
            return Some(Self::Url(url.clone()));
        }
        if !config.sheet_id.is_empty() {
            return Some(Self::GoogleSheet {
                sheet_id: config.sheet_id.clone(),
                sheet_name: config.sheet_name.clone(),
            });
        }
        None
    }
}

/// How a loaded archive was obtained, for the status line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ArchiveOrigin {
    Remote,
    Cache,
    File,
}

/// Load progress as seen by the UI. `Empty` and `Failed` are both terminal
/// load failures; `Empty` is kept separate so the status line can say the
/// sheet itself had no usable rows.
#[derive(Debug)]
pub(crate) enum ArchiveState {
    NotLoaded,
    Loading,
    Ready {
        total: usize,
        dropped: usize,
        origin: ArchiveOrigin,
    },
    Empty {
        dropped: usize,
    },
    Failed(String),
}

/// Loads and parses the archive from the given source.
///
/// Remote loads consult the cache first (unless `refresh` forces a fetch),
/// write successful fetches back to it, and fall back to a stale cache when
/// the fetch fails. Local files bypass the cache entirely.
pub(crate) fn load_archive(
    source: &SheetSource,
    cache_max_age: Duration,
    refresh: bool,
) -> Result<(Archive, ArchiveOrigin), ArchiveError> {
    let (text, origin) = match source {
        SheetSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| ArchiveError::File {
                path: path.clone(),
                source,
            })?;
            (text, ArchiveOrigin::File)
        }

        SheetSource::Url(url) => fetch_with_cache(url, cache_max_age, refresh)?,

        SheetSource::GoogleSheet {
            sheet_id,
            sheet_name,
        } => {
            let url = fetch::sheet_csv_url(sheet_id, sheet_name);
            fetch_with_cache(&url, cache_max_age, refresh)?
        }
    };

    let archive = parser::parse_archive(&text);
    info!(
        "archive parsed: {} lectures, {} rows dropped ({:?})",
        archive.lectures.len(),
        archive.dropped,
        origin
    );

    if archive.lectures.is_empty() {
        return Err(ArchiveError::Empty {
            dropped: archive.dropped,
        });
    }

    Ok((archive, origin))
}

fn fetch_with_cache(
    url: &str,
    max_age: Duration,
    refresh: bool,
) -> Result<(String, ArchiveOrigin), ArchiveError> {
    if !refresh {
        if let Some(text) = cache::read_fresh(max_age) {
            info!("archive loaded from cache");
            return Ok((text, ArchiveOrigin::Cache));
        }
    }

    match fetch::fetch_csv(url) {
        Ok(text) => {
            if let Err(e) = cache::write(&text) {
                warn!("failed to write archive cache: {}", e);
            }
            Ok((text, ArchiveOrigin::Remote))
        }
        Err(e) => {
            // A stale copy beats no archive at all.
            if let Some(text) = cache::read_any() {
                warn!("archive fetch failed, using stale cache: {}", e);
                return Ok((text, ArchiveOrigin::Cache));
            }
            Err(e)
        }
    }
}
