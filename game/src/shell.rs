//! Game shell: the explicit application state behind the game screen.
//!
//! DESIGN
//! ======
//! `GameShell` owns the round, the toolbar settings, the guess feed, the
//! roster and the scheduler. The host drives it with elapsed time via
//! [`GameShell::advance`] and forwards toolbar and chat input; everything
//! else happens here.
//!
//! At most one countdown and one guess task exist, both keyed to the current
//! round. [`GameShell::start_round`] cancels every task before scheduling the
//! new round's pair, and any exit from `Playing` cancels the round's tasks
//! before the next firing is pulled. Firings are also checked against the
//! current round id, so a stale task can never touch a newer round.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use canvas::color::Color;
use canvas::tool::{Tool, ToolSettings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::feed::{GuessEntry, GuessFeed, Sender};
use crate::roster::Roster;
use crate::round::{Countdown, NextGuess, Round, RoundId, RoundStatus};
use crate::scheduler::{Fired, Scheduler, TaskKey, TaskKind};
use crate::words;

const COUNTDOWN_PERIOD_MS: u64 = 1000;
const GAME_STARTED: &str = "Game started!";

/// Something the host should render or react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// One countdown second elapsed.
    Tick { round: RoundId, remaining_secs: u32 },
    /// A feed entry was appended by a timer.
    Guess(GuessEntry),
    /// A simulated player guessed the word.
    Won { round: RoundId, word: &'static str, by: String },
    /// The countdown ran out.
    Lost { round: RoundId, word: &'static str },
}

pub struct GameShell<R: Rng = StdRng> {
    config: GameConfig,
    settings: ToolSettings,
    round: Option<Round>,
    feed: GuessFeed,
    roster: Roster,
    scheduler: Scheduler,
    rng: R,
    next_round: u64,
}

impl GameShell<StdRng> {
    /// A shell seeded from `config.seed`, or from the OS when unset.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameShell<R> {
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let feed = GuessFeed::new(config.feed_capacity, config.feed_order);
        Self {
            config,
            settings: ToolSettings::default(),
            round: None,
            feed,
            roster: Roster::new(),
            scheduler: Scheduler::new(),
            rng,
            next_round: 1,
        }
    }

    // --- Round lifecycle ---

    /// Start a fresh round, replacing whatever was running.
    ///
    /// Cancelling the old tasks and scheduling the new ones happen in this one
    /// call, so no firing can observe a half-started round.
    pub fn start_round(&mut self) -> RoundId {
        let cancelled = self.scheduler.cancel_all();
        let id = RoundId(self.next_round);
        self.next_round += 1;

        let entry = words::pick(&mut self.rng);
        self.round = Some(Round::start(id, entry, self.config.round_secs));

        self.feed.clear();
        let now = self.scheduler.now_ms();
        self.feed.push(id, Sender::System, GAME_STARTED, false, now);

        self.scheduler.schedule(TaskKey::new(id, TaskKind::Countdown), COUNTDOWN_PERIOD_MS, COUNTDOWN_PERIOD_MS);
        let first_guess = self.guess_delay();
        self.scheduler.schedule(TaskKey::new(id, TaskKind::Guess), first_guess, self.config.guess_interval_ms.max(1));

        info!(round = %id, word_len = entry.word.len(), round_secs = self.config.round_secs, cancelled, "round started");
        id
    }

    /// Leave the current round, cancelling its timers.
    pub fn return_to_lobby(&mut self) {
        let cancelled = self.scheduler.cancel_all();
        if let Some(round) = self.round.as_mut() {
            round.abandon();
            info!(round = %round.id(), cancelled, "returned to lobby");
        }
    }

    /// Advance shell time by `elapsed_ms`, processing every timer that falls due.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ShellEvent> {
        let until = self.scheduler.now_ms().saturating_add(elapsed_ms);
        let mut events = Vec::new();
        while let Some(fired) = self.scheduler.next_due(until) {
            self.handle_fired(fired, &mut events);
        }
        self.scheduler.set_now(until);
        events
    }

    fn handle_fired(&mut self, fired: Fired, events: &mut Vec<ShellEvent>) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.id() != fired.key.round || round.status() != RoundStatus::Playing {
            debug!(fired_round = %fired.key.round, current = %round.id(), "stale firing dropped");
            self.scheduler.cancel_round(fired.key.round);
            return;
        }
        let id = round.id();

        match fired.key.kind {
            TaskKind::Countdown => match round.tick() {
                Countdown::Running(remaining_secs) => events.push(ShellEvent::Tick { round: id, remaining_secs }),
                Countdown::Expired => {
                    let word = round.word();
                    events.push(ShellEvent::Tick { round: id, remaining_secs: 0 });
                    events.push(ShellEvent::Lost { round: id, word });
                    self.finish(id, RoundStatus::Lost);
                }
                Countdown::Inactive => {}
            },
            TaskKind::Guess => {
                let by = words::player_for(round.guesses_made());
                match round.next_guess() {
                    NextGuess::Wrong(text) => {
                        let entry = self.feed.push(id, Sender::Player(by.to_string()), text, false, fired.at_ms);
                        events.push(ShellEvent::Guess(entry));
                        let delay = self.guess_delay();
                        self.scheduler.rearm(fired.key, delay);
                    }
                    NextGuess::Correct(word) => {
                        let entry = self.feed.push(id, Sender::Player(by.to_string()), word, true, fired.at_ms);
                        events.push(ShellEvent::Guess(entry));
                        self.roster.record_win(by);
                        events.push(ShellEvent::Won { round: id, word, by: by.to_string() });
                        self.finish(id, RoundStatus::Won);
                    }
                    NextGuess::Inactive => {}
                }
            }
        }
    }

    fn finish(&mut self, id: RoundId, status: RoundStatus) {
        let cancelled = self.scheduler.cancel_round(id);
        info!(round = %id, ?status, cancelled, "round finished");
    }

    /// Delay until the next simulated guess: `interval ± jitter`, at least 1 ms.
    fn guess_delay(&mut self) -> u64 {
        let base = self.config.guess_interval_ms;
        let jitter = self.config.guess_jitter_ms;
        let delay = if jitter == 0 {
            base
        } else {
            self.rng.random_range(base.saturating_sub(jitter)..=base.saturating_add(jitter))
        };
        delay.max(1)
    }

    // --- Chat ---

    /// Append the local player's chat line. Blank lines are ignored.
    ///
    /// The drawer's own messages never count as guesses.
    pub fn submit_chat(&mut self, text: &str) -> Option<GuessEntry> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let round = self.round.as_ref().map_or(RoundId(0), Round::id);
        let now = self.scheduler.now_ms();
        Some(self.feed.push(round, Sender::You, text, false, now))
    }

    // --- Toolbar ---

    pub fn select_tool(&mut self, tool: Tool) -> ToolSettings {
        self.settings.select_tool(tool);
        self.settings
    }

    pub fn pick_color(&mut self, color: Color) -> ToolSettings {
        self.settings.pick_color(color);
        self.settings
    }

    pub fn pick_width(&mut self, width: f64) -> ToolSettings {
        self.settings.pick_width(width);
        self.settings
    }

    // --- Queries ---

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.as_ref().map_or(RoundStatus::Lobby, Round::status)
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn feed(&self) -> &GuessFeed {
        &self.feed
    }

    /// Session scores. A win scores for the guesser and the drawer.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn settings(&self) -> ToolSettings {
        self.settings
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Timers currently scheduled (0 outside `Playing`, 2 during it).
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }
}
