//! Game tuning parsed from environment variables.
//!
//! Numeric knobs fall back to their defaults when unset or unparsable, the
//! same way the service tuning knobs do. Enumerated values are strict: an
//! unknown feed order is an error rather than a silent default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::feed::FeedOrder;

pub const DEFAULT_ROUND_SECS: u32 = 45;
pub const DEFAULT_GUESS_INTERVAL_MS: u64 = 4000;
pub const DEFAULT_GUESS_JITTER_MS: u64 = 1500;

/// Error returned by [`GameConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown SKETCH_FEED_ORDER: {0} (expected 'newest_last' or 'newest_first')")]
    FeedOrder(String),
    #[error("SKETCH_ROUND_SECS must be at least 1")]
    ZeroRoundSecs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Round length in seconds.
    pub round_secs: u32,
    /// Base delay between simulated guesses, in milliseconds.
    pub guess_interval_ms: u64,
    /// Guess delays are drawn uniformly from `interval ± jitter`; 0 means fixed.
    pub guess_jitter_ms: u64,
    /// Maximum retained feed entries; `None` keeps everything.
    pub feed_capacity: Option<usize>,
    pub feed_order: FeedOrder,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_secs: DEFAULT_ROUND_SECS,
            guess_interval_ms: DEFAULT_GUESS_INTERVAL_MS,
            guess_jitter_ms: DEFAULT_GUESS_JITTER_MS,
            feed_capacity: None,
            feed_order: FeedOrder::NewestLast,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SKETCH_ROUND_SECS`: default 45
    /// - `SKETCH_GUESS_INTERVAL_MS`: default 4000
    /// - `SKETCH_GUESS_JITTER_MS`: default 1500
    /// - `SKETCH_FEED_CAPACITY`: default 0 (unbounded)
    /// - `SKETCH_FEED_ORDER`: `newest_last` (default) or `newest_first`
    /// - `SKETCH_SEED`: default unset (random)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown feed order or a zero-length round.
    pub fn from_env() -> Result<Self, ConfigError> {
        let round_secs = env_parse("SKETCH_ROUND_SECS", DEFAULT_ROUND_SECS);
        if round_secs == 0 {
            return Err(ConfigError::ZeroRoundSecs);
        }
        let feed_capacity = match env_parse("SKETCH_FEED_CAPACITY", 0usize) {
            0 => None,
            n => Some(n),
        };
        let feed_order = parse_feed_order(env_var("SKETCH_FEED_ORDER").as_deref())?;
        let seed = env_var("SKETCH_SEED").and_then(|raw| raw.trim().parse::<u64>().ok());

        Ok(Self {
            round_secs,
            guess_interval_ms: env_parse("SKETCH_GUESS_INTERVAL_MS", DEFAULT_GUESS_INTERVAL_MS),
            guess_jitter_ms: env_parse("SKETCH_GUESS_JITTER_MS", DEFAULT_GUESS_JITTER_MS),
            feed_capacity,
            feed_order,
            seed,
        })
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse `key` as `T`, falling back to `default` when unset or invalid.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    env_var(key).and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn parse_feed_order(raw: Option<&str>) -> Result<FeedOrder, ConfigError> {
    match raw.map(str::trim).unwrap_or("newest_last") {
        "newest_last" => Ok(FeedOrder::NewestLast),
        "newest_first" => Ok(FeedOrder::NewestFirst),
        other => Err(ConfigError::FeedOrder(other.to_string())),
    }
}
