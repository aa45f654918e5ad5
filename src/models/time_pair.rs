use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// One {start, pause?} interval of a working block.
/// The pause timestamp is absent while the interval is still open.
#[derive(Debug, Clone, Serialize)]
pub struct TimePair {
    pub id: i64,                         // ⇔ start_times.id
    pub start: DateTime<Utc>,            // ⇔ start_times.time
    pub pause: Option<DateTime<Utc>>,    // ⇔ pause_times.time (LEFT JOIN)
}

impl TimePair {
    pub fn is_open(&self) -> bool {
        self.pause.is_none()
    }

    /// Interval duration, substituting `now` for a missing pause timestamp.
    pub fn duration_until(&self, now: DateTime<Utc>) -> TimeDelta {
        self.pause.unwrap_or(now) - self.start
    }
}
