use super::*;

const R1: RoundId = RoundId(1);
const R2: RoundId = RoundId(2);

fn countdown(round: RoundId) -> TaskKey {
    TaskKey::new(round, TaskKind::Countdown)
}

fn guess(round: RoundId) -> TaskKey {
    TaskKey::new(round, TaskKind::Guess)
}

fn drain(s: &mut Scheduler, until: u64) -> Vec<Fired> {
    let mut out = Vec::new();
    while let Some(f) = s.next_due(until) {
        out.push(f);
    }
    s.set_now(until);
    out
}

#[test]
fn repeating_task_fires_each_period() {
    let mut s = Scheduler::new();
    s.schedule(countdown(R1), 1000, 1000);
    let fired = drain(&mut s, 3500);
    let times: Vec<u64> = fired.iter().map(|f| f.at_ms).collect();
    assert_eq!(times, vec![1000, 2000, 3000]);
    assert_eq!(s.now_ms(), 3500);
    assert_eq!(s.next_at(countdown(R1)), Some(4000));
}

#[test]
fn nothing_fires_before_due() {
    let mut s = Scheduler::new();
    s.schedule(countdown(R1), 1000, 1000);
    assert!(s.next_due(999).is_none());
    assert_eq!(s.next_due(1000).map(|f| f.at_ms), Some(1000));
}

#[test]
fn ties_fire_in_scheduling_order() {
    let mut s = Scheduler::new();
    s.schedule(guess(R1), 1000, 1000);
    s.schedule(countdown(R1), 1000, 1000);
    let kinds: Vec<TaskKind> = drain(&mut s, 1000).iter().map(|f| f.key.kind).collect();
    assert_eq!(kinds, vec![TaskKind::Guess, TaskKind::Countdown]);
}

#[test]
fn interleaves_tasks_by_time() {
    let mut s = Scheduler::new();
    s.schedule(countdown(R1), 1000, 1000);
    s.schedule(guess(R1), 1500, 1500);
    let order: Vec<(TaskKind, u64)> = drain(&mut s, 3000).iter().map(|f| (f.key.kind, f.at_ms)).collect();
    assert_eq!(
        order,
        vec![
            (TaskKind::Countdown, 1000),
            (TaskKind::Guess, 1500),
            (TaskKind::Countdown, 2000),
            (TaskKind::Countdown, 3000),
            (TaskKind::Guess, 3000),
        ]
    );
}

#[test]
fn cancel_between_pulls_suppresses_same_instant_firing() {
    let mut s = Scheduler::new();
    s.schedule(countdown(R1), 1000, 1000);
    s.schedule(guess(R1), 1000, 1000);
    let first = s.next_due(1000).unwrap();
    assert_eq!(first.key, countdown(R1));
    s.cancel_round(R1);
    assert!(s.next_due(1000).is_none());
}

#[test]
fn one_shot_task_is_dropped_after_firing() {
    let mut s = Scheduler::new();
    s.schedule(guess(R1), 10, 0);
    assert!(s.next_due(10).is_some());
    assert!(!s.is_scheduled(guess(R1)));
    assert_eq!(s.pending(), 0);
}

#[test]
fn rearm_moves_next_firing_relative_to_now() {
    let mut s = Scheduler::new();
    s.schedule(guess(R1), 100, 100);
    let fired = s.next_due(100).unwrap();
    assert_eq!(fired.at_ms, 100);
    assert!(s.rearm(guess(R1), 250));
    assert_eq!(s.next_at(guess(R1)), Some(350));
    assert!(!s.rearm(guess(R2), 5));
}

#[test]
fn schedule_replaces_existing_key() {
    let mut s = Scheduler::new();
    s.schedule(guess(R1), 100, 100);
    s.schedule(guess(R1), 500, 100);
    assert_eq!(s.pending(), 1);
    assert_eq!(s.next_at(guess(R1)), Some(500));
}

#[test]
fn cancel_round_only_touches_that_round() {
    let mut s = Scheduler::new();
    s.schedule(countdown(R1), 1000, 1000);
    s.schedule(guess(R1), 1000, 1000);
    s.schedule(countdown(R2), 1000, 1000);
    assert_eq!(s.cancel_round(R1), 2);
    assert!(s.is_scheduled(countdown(R2)));
    let rounds: Vec<RoundId> = drain(&mut s, 5000).iter().map(|f| f.key.round).collect();
    assert!(rounds.iter().all(|r| *r == R2));
}

#[test]
fn cancel_all_clears_everything() {
    let mut s = Scheduler::new();
    s.schedule(countdown(R1), 1, 1);
    s.schedule(guess(R2), 1, 1);
    assert_eq!(s.cancel_all(), 2);
    assert!(drain(&mut s, 100).is_empty());
    assert!(!s.cancel(guess(R2)));
}

#[test]
fn clock_never_goes_backwards() {
    let mut s = Scheduler::new();
    s.set_now(500);
    s.set_now(100);
    assert_eq!(s.now_ms(), 500);
    s.schedule(guess(R1), 10, 10);
    assert_eq!(s.next_at(guess(R1)), Some(510));
}
