//! Player roster and session scores.
//!
//! The drawer starts ahead of the simulated guessers. A correct guess scores
//! for the guesser and, at a smaller rate, for the drawer. Scores carry over
//! between rounds.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use serde::Serialize;

use crate::words::PLAYERS;

/// Roster name of the local player.
pub const YOU: &str = "You";
pub const GUESSER_POINTS: u32 = 100;
pub const DRAWER_POINTS: u32 = 50;

const YOU_START: u32 = 1200;
const PLAYER_START: &[u32] = &[700, 600, 500];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerScore>,
}

impl Default for Roster {
    fn default() -> Self {
        let mut players = vec![PlayerScore { name: YOU.to_string(), score: YOU_START }];
        players.extend(
            PLAYERS
                .iter()
                .zip(PLAYER_START)
                .map(|(name, &score)| PlayerScore { name: (*name).to_string(), score }),
        );
        Self { players }
    }
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to `name`. Returns the new score, or `None` if not on the roster.
    pub fn award(&mut self, name: &str, points: u32) -> Option<u32> {
        let player = self.players.iter_mut().find(|p| p.name == name)?;
        player.score = player.score.saturating_add(points);
        Some(player.score)
    }

    /// Score the win for `guesser` and the drawer.
    pub fn record_win(&mut self, guesser: &str) {
        self.award(guesser, GUESSER_POINTS);
        self.award(YOU, DRAWER_POINTS);
    }

    #[must_use]
    pub fn score(&self, name: &str) -> Option<u32> {
        self.players.iter().find(|p| p.name == name).map(|p| p.score)
    }

    /// Players by descending score; ties keep roster order.
    #[must_use]
    pub fn ranked(&self) -> Vec<PlayerScore> {
        let mut ranked = self.players.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerScore] {
        &self.players
    }
}
