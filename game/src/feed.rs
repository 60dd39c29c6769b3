//! Guess feed: append-only chat and guess log for the current round.
//!
//! DESIGN
//! ======
//! Entries are immutable once pushed. With a capacity set, the oldest entry
//! is evicted on overflow. Display order is a view concern handled by
//! [`GuessFeed::display`]; storage is always oldest-first.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::round::RoundId;

/// Who produced a feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Sender {
    /// Game announcements.
    System,
    /// The local player (the drawer).
    You,
    /// A simulated guesser.
    Player(String),
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("System"),
            Self::You => f.write_str("You"),
            Self::Player(name) => f.write_str(name),
        }
    }
}

/// One line of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessEntry {
    pub id: u64,
    pub round: RoundId,
    pub sender: Sender,
    pub text: String,
    pub correct: bool,
    /// Shell time at creation, in milliseconds.
    pub created_at_ms: u64,
}

/// Order entries are presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedOrder {
    #[default]
    NewestLast,
    NewestFirst,
}

#[derive(Debug, Clone)]
pub struct GuessFeed {
    entries: VecDeque<GuessEntry>,
    capacity: Option<usize>,
    order: FeedOrder,
    next_id: u64,
}

impl Default for GuessFeed {
    fn default() -> Self {
        Self::new(None, FeedOrder::NewestLast)
    }
}

impl GuessFeed {
    /// A feed keeping at most `capacity` entries (`None` = unbounded).
    ///
    /// A capacity of zero is treated as unbounded.
    #[must_use]
    pub fn new(capacity: Option<usize>, order: FeedOrder) -> Self {
        Self { entries: VecDeque::new(), capacity: capacity.filter(|&c| c > 0), order, next_id: 1 }
    }

    /// Append an entry, evicting the oldest on overflow. Returns a copy of the stored entry.
    pub fn push(&mut self, round: RoundId, sender: Sender, text: impl Into<String>, correct: bool, now_ms: u64) -> GuessEntry {
        let entry = GuessEntry { id: self.next_id, round, sender, text: text.into(), correct, created_at_ms: now_ms };
        self.next_id += 1;
        if let Some(cap) = self.capacity {
            while self.entries.len() >= cap {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(entry.clone());
        entry
    }

    /// Drop all entries. Ids keep increasing across clears.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in display order.
    pub fn display(&self) -> Box<dyn Iterator<Item = &GuessEntry> + '_> {
        match self.order {
            FeedOrder::NewestLast => Box::new(self.entries.iter()),
            FeedOrder::NewestFirst => Box::new(self.entries.iter().rev()),
        }
    }

    /// Entries oldest first, regardless of display order.
    pub fn chronological(&self) -> impl Iterator<Item = &GuessEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&GuessEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[must_use]
    pub fn order(&self) -> FeedOrder {
        self.order
    }
}
