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

//! Fetched-archive file cache.
//!
//! The last successfully fetched CSV is kept as a single file in the
//! platform cache directory. Freshness is judged by file age against the
//! configured maximum; a stale file is still readable for the fallback
//! path when the network is down.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;

const CACHE_FILE: &str = "archive.csv";

fn cache_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vani").map(|dirs| dirs.cache_dir().join(CACHE_FILE))
}

/// Reads the cached archive if it is younger than `max_age`.
pub(crate) fn read_fresh(max_age: Duration) -> Option<String> {
    cache_path().and_then(|path| read_fresh_from(&path, max_age))
}

/// Reads the cached archive regardless of age.
pub(crate) fn read_any() -> Option<String> {
    cache_path().and_then(|path| fs::read_to_string(path).ok())
}

/// Writes the fetched archive to the cache, creating the directory as
/// needed.
pub(crate) fn write(text: &str) -> io::Result<()> {
    let path = cache_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory available"))?;
    write_to(&path, text)
}

fn read_fresh_from(path: &Path, max_age: Duration) -> Option<String> {
    let age = fs::metadata(path).ok()?.modified().ok()?.elapsed().ok()?;
    if age > max_age {
        return None;
    }
    fs::read_to_string(path).ok()
}

fn write_to(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cache_is_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CACHE_FILE);

        write_to(&path, "Date,Location,Title,Link\n").unwrap();

        let text = read_fresh_from(&path, Duration::from_secs(60)).unwrap();
        assert_eq!(text, "Date,Location,Title,Link\n");
    }

    #[test]
    fn aged_out_cache_is_not_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CACHE_FILE);

        write_to(&path, "stale").unwrap();

        // Any nonzero age exceeds a zero allowance.
        assert_eq!(read_fresh_from(&path, Duration::ZERO), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "stale");
    }

    #[test]
    fn missing_cache_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CACHE_FILE);
        assert_eq!(read_fresh_from(&path, Duration::from_secs(60)), None);
    }
}
