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

//! Playlist queue management.
//!
//! This module provides state for the play queue: the ordered list of
//! lectures queued for playback. Playback position is an index owned by the
//! application state, so queue mutations stay simple list operations.

use std::collections::HashSet;

use rand::{rng, seq::SliceRandom};

use crate::model::Lecture;

pub(crate) struct Queue {
    lectures: Vec<Lecture>,
}

impl Queue {
    pub(crate) fn new() -> Self {
        Self { lectures: vec![] }
    }

    /// Appends lectures, skipping any whose id is already queued.
    pub(crate) fn add_lectures(&mut self, lectures: Vec<Lecture>) {
        let queued: HashSet<u64> = self.lectures.iter().map(|l| l.id).collect();
        self.lectures
            .extend(lectures.into_iter().filter(|l| !queued.contains(&l.id)));
    }

    pub(crate) fn remove_lectures(&mut self, ids: &HashSet<u64>) {
        self.lectures.retain(|l| !ids.contains(&l.id));
    }

    pub(crate) fn shuffle(&mut self) {
        let mut rng = rng();
        self.lectures.shuffle(&mut rng);
    }

    pub(crate) fn clear(&mut self) {
        self.lectures.clear();
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Lecture> {
        self.lectures.get(index)
    }

    pub(crate) fn position(&self, id: u64) -> Option<usize> {
        self.lectures.iter().position(|l| l.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.lectures.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    pub(crate) fn snapshot(&self) -> Vec<Lecture> {
        self.lectures.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture(n: u32) -> Lecture {
        Lecture::new(
            &format!("Talk {}", n),
            &format!("http://example.com/{}.mp3", n),
            String::new(),
            None,
            "Unknown",
        )
    }

    #[test]
    fn add_skips_duplicates() {
        let mut queue = Queue::new();
        queue.add_lectures(vec![lecture(1), lecture(2)]);
        queue.add_lectures(vec![lecture(2), lecture(3)]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn remove_by_id() {
        let mut queue = Queue::new();
        queue.add_lectures(vec![lecture(1), lecture(2), lecture(3)]);
        let ids: HashSet<u64> = [lecture(2).id].into_iter().collect();
        queue.remove_lectures(&ids);
        assert_eq!(queue.len(), 2);
        assert!(queue.position(lecture(2).id).is_none());
    }

    #[test]
    fn shuffle_preserves_membership() {
        let mut queue = Queue::new();
        queue.add_lectures((0..32).map(lecture).collect());
        let before: HashSet<u64> = queue.snapshot().iter().map(|l| l.id).collect();

        queue.shuffle();

        let after: HashSet<u64> = queue.snapshot().iter().map(|l| l.id).collect();
        assert_eq!(before, after);
        assert_eq!(queue.len(), 32);
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = Queue::new();
        queue.add_lectures(vec![lecture(1)]);
        queue.clear();
        assert!(queue.is_empty());
    }
}
