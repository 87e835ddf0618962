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

//! Favourite lectures.
//!
//! Favourites persist across sessions as a flat list of audio links in a
//! `confy` store next to the application config. Links survive refetches
//! and re-orderings of the sheet, unlike row positions; in memory the set
//! is mirrored as lecture ids for cheap membership tests from render code.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Lecture, lecture_id};

const FAVOURITES_NAME: &str = "vani";
const FAVOURITES_FILE: &str = "favourites";

/// The persisted form: just the links.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct FavouritesFile {
    version: u32,
    links: Vec<String>,
}

impl Default for FavouritesFile {
    fn default() -> Self {
        Self {
            version: 1,
            links: vec![],
        }
    }
}

pub(crate) struct Favourites {
    links: HashSet<String>,
    ids: HashSet<u64>,
}

impl Favourites {
    /// Loads the persisted favourites, falling back to an empty set when
    /// the store is missing or unreadable.
    pub(crate) fn load() -> Self {
        let file: FavouritesFile =
            confy::load(FAVOURITES_NAME, Some(FAVOURITES_FILE)).unwrap_or_default();
        Self::from_links(file.links)
    }

    pub(crate) fn from_links(links: Vec<String>) -> Self {
        let ids = links.iter().map(|l| lecture_id(l)).collect();
        Self {
            links: links.into_iter().collect(),
            ids,
        }
    }

    pub(crate) fn save(&self) -> Result<(), confy::ConfyError> {
        let mut links: Vec<String> = self.links.iter().cloned().collect();
        links.sort();
        confy::store(
            FAVOURITES_NAME,
            Some(FAVOURITES_FILE),
            FavouritesFile { version: 1, links },
        )
    }

    /// Adds or removes a lecture; returns whether it is now a favourite.
    pub(crate) fn toggle(&mut self, lecture: &Lecture) -> bool {
        if self.links.remove(&lecture.link) {
            self.ids.remove(&lecture.id);
            false
        } else {
            self.links.insert(lecture.link.clone());
            self.ids.insert(lecture.id);
            true
        }
    }

    pub(crate) fn contains(&self, lecture: &Lecture) -> bool {
        self.contains_id(lecture.id)
    }

    pub(crate) fn contains_id(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture(link: &str) -> Lecture {
        Lecture::new("A Talk", link, String::new(), None, "Unknown")
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut favourites = Favourites::from_links(vec![]);
        let talk = lecture("http://example.com/a.mp3");

        assert!(favourites.toggle(&talk));
        assert!(favourites.contains(&talk));
        assert_eq!(favourites.len(), 1);

        assert!(!favourites.toggle(&talk));
        assert!(!favourites.contains(&talk));
        assert_eq!(favourites.len(), 0);
    }

    #[test]
    fn membership_survives_a_link_round_trip() {
        let mut favourites = Favourites::from_links(vec![]);
        let talk = lecture("http://example.com/a.mp3");
        favourites.toggle(&talk);

        let links: Vec<String> = favourites.links.iter().cloned().collect();
        let restored = Favourites::from_links(links);
        assert!(restored.contains(&talk));
        assert!(restored.contains_id(lecture_id("http://example.com/a.mp3")));
    }

    #[test]
    fn other_lectures_are_not_members() {
        let mut favourites = Favourites::from_links(vec![]);
        favourites.toggle(&lecture("http://example.com/a.mp3"));
        assert!(!favourites.contains(&lecture("http://example.com/b.mp3")));
    }
}
