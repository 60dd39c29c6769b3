//! Virtual-time scheduler for the round's repeating timers.
//!
//! DESIGN
//! ======
//! Every task is keyed by `(round, kind)`, so starting a new round is one
//! `cancel_all` followed by fresh `schedule` calls, with no per-timer cleanup
//! callbacks. The owner pulls firings one at a time with [`Scheduler::next_due`]
//! and may cancel between pulls; a cancelled task never fires, even if it was
//! due at the same instant as the firing that cancelled it.
//!
//! Time is plain milliseconds supplied by the caller. The scheduler never
//! reads a clock, which keeps rounds deterministic under test.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::collections::HashMap;

use tracing::debug;

use crate::round::RoundId;

/// Which of a round's timers a task drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// One-second round countdown.
    Countdown,
    /// Simulated guess emission.
    Guess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub round: RoundId,
    pub kind: TaskKind,
}

impl TaskKey {
    #[must_use]
    pub fn new(round: RoundId, kind: TaskKind) -> Self {
        Self { round, kind }
    }
}

/// A task firing returned by [`Scheduler::next_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub key: TaskKey,
    pub at_ms: u64,
}

#[derive(Debug, Clone, Copy)]
struct Task {
    next_at: u64,
    /// Re-arm period; 0 makes the task one-shot.
    period_ms: u64,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    tasks: HashMap<TaskKey, Task>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to first fire after `first_delay_ms`, then every `period_ms`.
    ///
    /// Replaces any existing task with the same key.
    pub fn schedule(&mut self, key: TaskKey, first_delay_ms: u64, period_ms: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert(key, Task { next_at: self.now_ms.saturating_add(first_delay_ms), period_ms, seq });
    }

    /// Move the next firing of `key` to `delay_ms` from now. Returns `false` if absent.
    pub fn rearm(&mut self, key: TaskKey, delay_ms: u64) -> bool {
        let now = self.now_ms;
        match self.tasks.get_mut(&key) {
            Some(task) => {
                task.next_at = now.saturating_add(delay_ms);
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self, key: TaskKey) -> bool {
        self.tasks.remove(&key).is_some()
    }

    /// Cancel every task belonging to `round`. Returns how many were removed.
    pub fn cancel_round(&mut self, round: RoundId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|key, _| key.round != round);
        before - self.tasks.len()
    }

    /// Cancel everything. Returns how many tasks were removed.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        n
    }

    /// Pop the earliest task due at or before `until_ms`.
    ///
    /// Ties fire in scheduling order. The clock moves to the firing time and
    /// the task is re-armed by its period (or dropped if one-shot).
    pub fn next_due(&mut self, until_ms: u64) -> Option<Fired> {
        let (key, task) = self
            .tasks
            .iter()
            .filter(|(_, task)| task.next_at <= until_ms)
            .min_by_key(|(_, task)| (task.next_at, task.seq))
            .map(|(key, task)| (*key, *task))?;

        self.now_ms = self.now_ms.max(task.next_at);
        if task.period_ms == 0 {
            self.tasks.remove(&key);
        } else if let Some(slot) = self.tasks.get_mut(&key) {
            slot.next_at = task.next_at.saturating_add(task.period_ms);
        }
        debug!(round = %key.round, kind = ?key.kind, at_ms = task.next_at, "scheduler fired");
        Some(Fired { key, at_ms: task.next_at })
    }

    /// Advance the clock after draining due tasks. The clock never goes backwards.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn is_scheduled(&self, key: TaskKey) -> bool {
        self.tasks.contains_key(&key)
    }

    /// When `key` next fires, if scheduled.
    #[must_use]
    pub fn next_at(&self, key: TaskKey) -> Option<u64> {
        self.tasks.get(&key).map(|t| t.next_at)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}
