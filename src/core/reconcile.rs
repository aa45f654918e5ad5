//! Timer reconciliation: turn the authoritative {start, pause?} pairs of a
//! working block into an elapsed duration and a running flag.
//!
//! Pairs arrive ordered by identifier, which is not guaranteed to be
//! chronological order; all functions here are order-independent.

use crate::models::time_pair::TimePair;
use chrono::{DateTime, TimeDelta, Utc};

/// Total elapsed time of a block: Σ (pause ?? now) − start over all pairs.
pub fn elapsed(pairs: &[TimePair], now: DateTime<Utc>) -> TimeDelta {
    pairs
        .iter()
        .fold(TimeDelta::zero(), |acc, p| acc + p.duration_until(now))
}

pub fn elapsed_seconds(pairs: &[TimePair], now: DateTime<Utc>) -> i64 {
    elapsed(pairs, now).num_seconds()
}

/// Elapsed time in centiseconds, the unit the display clock ticks in.
pub fn elapsed_centis(pairs: &[TimePair], now: DateTime<Utc>) -> i64 {
    elapsed(pairs, now).num_milliseconds() / 10
}

/// Identifier of the open start event, if any.
///
/// The greatest id wins: identifiers are the recency proxy. The store only
/// ever keeps one interval open per block, so at most one candidate exists.
pub fn open_start_id(pairs: &[TimePair]) -> Option<i64> {
    pairs
        .iter()
        .filter(|p| p.is_open())
        .map(|p| p.id)
        .max()
}

/// A block is running iff exactly one pair is open and that pair is the one
/// with the greatest identifier of the whole set.
pub fn is_running(pairs: &[TimePair]) -> bool {
    let mut open_ids = pairs.iter().filter(|p| p.is_open()).map(|p| p.id);

    match (open_ids.next(), open_ids.next()) {
        (Some(id), None) => pairs.iter().all(|p| p.id <= id),
        _ => false,
    }
}
