//! Library-level tests for the timer reconciliation logic, with injected
//! timestamps so elapsed values are exact.

use chrono::{DateTime, TimeZone, Utc};
use ticktrack::core::reconcile;
use ticktrack::core::stopwatch::DisplayClock;
use ticktrack::models::time_pair::TimePair;

fn t(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn pair(id: i64, start_s: i64, pause_s: Option<i64>) -> TimePair {
    TimePair {
        id,
        start: t(start_s),
        pause: pause_s.map(t),
    }
}

#[test]
fn test_elapsed_sums_closed_intervals() {
    let pairs = vec![pair(1, 0, Some(5)), pair(2, 10, Some(18)), pair(3, 20, Some(21))];

    // 5 + 8 + 1
    assert_eq!(reconcile::elapsed_seconds(&pairs, t(100)), 14);
}

#[test]
fn test_elapsed_is_order_independent() {
    let ordered = vec![pair(1, 0, Some(5)), pair(2, 10, Some(18))];
    let shuffled = vec![pair(2, 10, Some(18)), pair(1, 0, Some(5))];

    let now = t(100);
    assert_eq!(
        reconcile::elapsed_seconds(&ordered, now),
        reconcile::elapsed_seconds(&shuffled, now)
    );
}

#[test]
fn test_elapsed_of_closed_pairs_ignores_now() {
    let pairs = vec![pair(1, 0, Some(5))];

    assert_eq!(reconcile::elapsed_seconds(&pairs, t(10)), 5);
    assert_eq!(reconcile::elapsed_seconds(&pairs, t(10_000)), 5);
}

#[test]
fn test_elapsed_grows_monotonically_while_running() {
    let pairs = vec![pair(1, 0, Some(5)), pair(2, 10, None)];

    let e1 = reconcile::elapsed_seconds(&pairs, t(11));
    let e2 = reconcile::elapsed_seconds(&pairs, t(30));
    let e3 = reconcile::elapsed_seconds(&pairs, t(90));

    assert_eq!(e1, 6);
    assert!(e1 < e2 && e2 < e3);
}

#[test]
fn test_is_running_with_one_open_newest_pair() {
    let pairs = vec![pair(1, 0, Some(5)), pair(2, 10, None)];
    assert!(reconcile::is_running(&pairs));
}

#[test]
fn test_not_running_when_all_pairs_closed() {
    let pairs = vec![pair(1, 0, Some(5)), pair(2, 10, Some(18))];
    assert!(!reconcile::is_running(&pairs));
    assert_eq!(reconcile::open_start_id(&pairs), None);
}

#[test]
fn test_not_running_when_open_pair_is_not_the_newest() {
    // Inconsistent data: an older interval was left open. The block must
    // not present itself as running.
    let pairs = vec![pair(1, 0, None), pair(2, 10, Some(18))];
    assert!(!reconcile::is_running(&pairs));

    // The open id is still resolvable for the pause path.
    assert_eq!(reconcile::open_start_id(&pairs), Some(1));
}

#[test]
fn test_not_running_with_two_open_pairs() {
    let pairs = vec![pair(1, 0, None), pair(2, 10, None)];
    assert!(!reconcile::is_running(&pairs));

    // Greatest id wins as the pause target.
    assert_eq!(reconcile::open_start_id(&pairs), Some(2));
}

#[test]
fn test_is_running_on_empty_block() {
    assert!(!reconcile::is_running(&[]));
    assert_eq!(reconcile::open_start_id(&[]), None);
    assert_eq!(reconcile::elapsed_seconds(&[], t(0)), 0);
}

#[test]
fn test_worked_example_start_pause_resume_pause() {
    // start at t=0
    let mut pairs = vec![pair(1, 0, None)];

    // at t=5s pause → elapsed 5s
    assert_eq!(reconcile::elapsed_seconds(&pairs, t(5)), 5);
    pairs[0].pause = Some(t(5));
    assert_eq!(reconcile::elapsed_seconds(&pairs, t(5)), 5);

    // resume (new start event) at t=5s, pause at t=8s → total 8s
    pairs.push(pair(2, 5, Some(8)));
    assert_eq!(reconcile::elapsed_seconds(&pairs, t(8)), 8);
}

#[test]
fn test_elapsed_centis_resolution() {
    let pairs = vec![pair(1, 0, Some(5))];
    assert_eq!(reconcile::elapsed_centis(&pairs, t(10)), 500);
}

#[test]
fn test_display_clock_stays_frozen_when_paused() {
    let clock = DisplayClock::sync(1234, false);

    std::thread::sleep(std::time::Duration::from_millis(30));
    assert_eq!(clock.current_cs(), 1234);
    assert!(!clock.is_running());
}

#[test]
fn test_display_clock_free_runs_while_running() {
    let clock = DisplayClock::sync(100, true);

    std::thread::sleep(std::time::Duration::from_millis(50));
    let cs = clock.current_cs();

    // at least a few ticks of 10 ms elapsed, seeded from the base value
    assert!(cs >= 103, "clock did not advance: {}", cs);
}

#[test]
fn test_display_clock_freeze_stops_advancing() {
    let mut clock = DisplayClock::sync(0, true);

    std::thread::sleep(std::time::Duration::from_millis(30));
    clock.freeze();
    let frozen = clock.current_cs();

    std::thread::sleep(std::time::Duration::from_millis(30));
    assert_eq!(clock.current_cs(), frozen);
}
