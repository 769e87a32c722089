//! Fixed-capacity board kept in descending score order.
//!
//! The board has two regimes. While it is *growing* every entry is admitted
//! at its ranked position. Once it is *full*, an entry scoring below the
//! current minimum is turned away and anything else displaces the minimum.
//! The underlying list is sorted descending after every call; there is no
//! intermediate state a caller can observe.
//!
//! # Ties
//!
//! Placement scans backwards from the second-to-last entry and keeps moving
//! while the new score is `>=` the entry in front of it. A new entry therefore
//! lands *ahead of* entries that already hold the same score:
//!
//! ```rust
//! use scoreboard::board::{GameEntry, Scoreboard};
//!
//! let mut board = Scoreboard::new(5).unwrap();
//! board.add(GameEntry::new("first", 10));
//! board.add(GameEntry::new("top", 30));
//! board.add(GameEntry::new("second", 10));
//!
//! let names: Vec<_> = board.iter().map(|e| e.name()).collect();
//! assert_eq!(names, ["top", "second", "first"]);
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use super::entry::Scored;
use crate::errors::{Error, Result};
use crate::structures::{DoublyLinkedList, Iter, List};

/// Whether a board still has free slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Growing,
    Full,
}

/// What [`Scoreboard::add`] did with an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement<E> {
    /// Stored at `index`; nothing left the board.
    Inserted { index: usize },
    /// Stored at `index` after `evicted`, the previous minimum, was dropped.
    Evicted { index: usize, evicted: E },
    /// Scored below the minimum of a full board. The entry is handed back.
    Rejected(E),
}

impl<E> Placement<E> {
    /// Index the entry landed at, if it was admitted.
    pub fn index(&self) -> Option<usize> {
        match self {
            Placement::Inserted { index } | Placement::Evicted { index, .. } => Some(*index),
            Placement::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Placement::Rejected(_))
    }
}

/// An entry together with its 1-based rank, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Standing<'a, E> {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: &'a E,
}

/// Capacity-bounded collection of entries sorted by descending score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard<E> {
    capacity: usize,
    board: DoublyLinkedList<E>,
}

impl<E: Scored> Scoreboard<E> {
    /// Create an empty board holding at most `capacity` entries.
    ///
    /// Fails with [`Error::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            capacity,
            board: DoublyLinkedList::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently on the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.regime() == Regime::Full
    }

    pub fn regime(&self) -> Regime {
        if self.board.size() < self.capacity {
            Regime::Growing
        } else {
            Regime::Full
        }
    }

    /// Entry at `index`, or `None` past the occupied range.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.board.get(index)
    }

    /// Highest-ranked entry.
    pub fn first(&self) -> Option<&E> {
        self.board.first()
    }

    /// Lowest-ranked entry, the one evicted next.
    pub fn last(&self) -> Option<&E> {
        self.board.last()
    }

    /// Entries from highest to lowest score.
    pub fn iter(&self) -> Iter<'_, E> {
        self.board.iter()
    }

    /// Entries paired with their 1-based rank.
    pub fn standings(&self) -> impl Iterator<Item = Standing<'_, E>> + '_ {
        self.board
            .iter()
            .enumerate()
            .map(|(i, entry)| Standing { rank: i + 1, entry })
    }

    /// Offer `entry` to the board.
    ///
    /// While growing, the entry is always stored. When full, an entry scoring
    /// below the current minimum is rejected and handed back; otherwise the
    /// minimum is evicted to make room.
    pub fn add(&mut self, entry: E) -> Placement<E> {
        let score = entry.score();

        match self.regime() {
            Regime::Growing => {
                let index = self.growing_position(score);
                self.board.insert(entry, index);
                trace!(score, index, size = self.board.size(), "inserted entry");
                Placement::Inserted { index }
            }
            Regime::Full => {
                let Some(minimum) = self.board.last().map(Scored::score) else {
                    return Placement::Rejected(entry);
                };
                if score < minimum {
                    debug!(score, minimum, "rejected entry below board minimum");
                    return Placement::Rejected(entry);
                }

                let index = self.ranked_position(score);
                let evicted = self.board.remove_last();
                self.board.insert(entry, index);

                match evicted {
                    Some(evicted) => {
                        debug!(score, index, evicted = evicted.score(), "evicted minimum entry");
                        Placement::Evicted { index, evicted }
                    }
                    None => Placement::Inserted { index },
                }
            }
        }
    }

    /// Remove and return the entry at `index`.
    ///
    /// The bound is the board's *capacity*, not its current size: an index in
    /// `size..capacity` is accepted and yields `Ok(None)`, while anything at
    /// or past capacity fails with [`Error::InvalidIndex`].
    pub fn remove(&mut self, index: usize) -> Result<Option<E>> {
        if index >= self.capacity {
            return Err(Error::InvalidIndex {
                index,
                capacity: self.capacity,
            });
        }

        let removed = if index + 1 == self.board.size() {
            self.board.remove_last()
        } else if index == 0 {
            self.board.remove_first()
        } else {
            self.board.remove(index)
        };

        debug!(
            index,
            removed = removed.is_some(),
            size = self.board.size(),
            "removed entry"
        );
        Ok(removed)
    }

    fn growing_position(&self, score: i64) -> usize {
        let size = self.board.size();
        match (self.board.first(), self.board.last()) {
            (None, _) | (_, None) => 0,
            (Some(only), _) if size == 1 => {
                if score >= only.score() {
                    0
                } else {
                    1
                }
            }
            (_, Some(minimum)) if score < minimum.score() => size,
            _ => self.ranked_position(score),
        }
    }

    /// Scan back from the second-to-last entry past every entry whose score
    /// is `<=` the new one.
    fn ranked_position(&self, score: i64) -> usize {
        let Some(start) = self.board.size().checked_sub(1) else {
            return 0;
        };
        let passed = self
            .board
            .iter()
            .rev()
            .skip(1)
            .take_while(|entry| score >= entry.score())
            .count();
        start - passed
    }
}

impl<E: Scored> Extend<E> for Scoreboard<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl<'a, E: Scored> IntoIterator for &'a Scoreboard<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
