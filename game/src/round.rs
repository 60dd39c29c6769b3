//! Round state: target word, countdown, and status transitions.

#[cfg(test)]
#[path = "round_test.rs"]
mod round_test;

use std::fmt;

use serde::Serialize;

use crate::words::WordEntry;

/// Monotonic round identifier. Scheduled tasks and feed entries carry it so a
/// firing from an old round can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RoundId(pub u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    /// Waiting for the player to join.
    #[default]
    Lobby,
    Playing,
    /// A simulated player guessed the word.
    Won,
    /// The countdown reached zero first.
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of advancing a round by one countdown second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Time remains.
    Running(u32),
    /// This tick reached zero; the round is now lost.
    Expired,
    /// The round is not playing; nothing changed.
    Inactive,
}

/// Result of the next simulated guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextGuess {
    Wrong(&'static str),
    /// The scripted guesses are exhausted; this one is the answer and the round is won.
    Correct(&'static str),
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    id: RoundId,
    entry: &'static WordEntry,
    remaining_secs: u32,
    status: RoundStatus,
    guesses_made: usize,
}

impl Round {
    /// A round in `Playing` with `round_secs` on the clock.
    #[must_use]
    pub fn start(id: RoundId, entry: &'static WordEntry, round_secs: u32) -> Self {
        Self { id, entry, remaining_secs: round_secs, status: RoundStatus::Playing, guesses_made: 0 }
    }

    /// Decrement the countdown. Reaching zero moves to `Lost` exactly once.
    pub fn tick(&mut self) -> Countdown {
        if self.status != RoundStatus::Playing {
            return Countdown::Inactive;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.status = RoundStatus::Lost;
            Countdown::Expired
        } else {
            Countdown::Running(self.remaining_secs)
        }
    }

    /// Produce the next scripted guess; after the script the answer wins the round.
    pub fn next_guess(&mut self) -> NextGuess {
        if self.status != RoundStatus::Playing {
            return NextGuess::Inactive;
        }
        let n = self.guesses_made;
        self.guesses_made += 1;
        match self.entry.wrong_guesses.get(n) {
            Some(wrong) => NextGuess::Wrong(wrong),
            None => {
                self.status = RoundStatus::Won;
                NextGuess::Correct(self.entry.word)
            }
        }
    }

    /// Abandon the round, returning to the lobby.
    pub fn abandon(&mut self) {
        self.status = RoundStatus::Lobby;
    }

    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    #[must_use]
    pub fn word(&self) -> &'static str {
        self.entry.word
    }

    /// The word as shown to guessers: one underscore per letter.
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.entry.word.chars().map(|c| if c.is_whitespace() { ' ' } else { '_' }).collect()
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Simulated guesses emitted so far, including the correct one.
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.guesses_made
    }
}

/// `mm:ss` clock display.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
