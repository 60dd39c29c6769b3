//! Target words and the scripted wrong guesses shown before the right one.

#[cfg(test)]
#[path = "words_test.rs"]
mod words_test;

use rand::Rng;

/// A target word and the wrong guesses the simulated players make first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub wrong_guesses: &'static [&'static str],
}

pub const WORDS: &[WordEntry] = &[
    WordEntry { word: "apple", wrong_guesses: &["ball", "tomato", "cherry", "orange"] },
    WordEntry { word: "house", wrong_guesses: &["box", "tent", "barn"] },
    WordEntry { word: "cat", wrong_guesses: &["dog", "fox", "rabbit", "tiger"] },
    WordEntry { word: "sun", wrong_guesses: &["flower", "wheel", "star"] },
    WordEntry { word: "tree", wrong_guesses: &["broccoli", "cloud", "bush", "mushroom"] },
    WordEntry { word: "car", wrong_guesses: &["bus", "truck", "train"] },
    WordEntry { word: "fish", wrong_guesses: &["bird", "leaf", "boat", "whale"] },
    WordEntry { word: "guitar", wrong_guesses: &["violin", "spoon", "banjo"] },
];

/// Names used for simulated guessers, assigned round-robin.
pub const PLAYERS: &[&str] = &["Player 2", "Player 3", "Player 4"];

/// Pick a word uniformly at random.
pub fn pick<R: Rng>(rng: &mut R) -> &'static WordEntry {
    &WORDS[rng.random_range(0..WORDS.len())]
}

/// Look up a word's entry, case-insensitive.
#[must_use]
pub fn find(word: &str) -> Option<&'static WordEntry> {
    WORDS.iter().find(|entry| entry.word.eq_ignore_ascii_case(word.trim()))
}

/// Simulated player name for the `n`th guess of a round.
#[must_use]
pub fn player_for(n: usize) -> &'static str {
    PLAYERS[n % PLAYERS.len()]
}
