use super::time_pair::TimePair;
use chrono::{DateTime, Utc};

/// The active block of a project with its start/pause pairs,
/// as loaded in one read from the database.
#[derive(Debug, Clone)]
pub struct ActiveBlockTimes {
    pub id: i64,
    pub pairs: Vec<TimePair>,
}

/// A closed block reduced to its stored duration.
#[derive(Debug, Clone)]
pub struct ClosedBlock {
    pub id: i64,
    pub seconds: i64,
    pub created_at: DateTime<Utc>,
}

/// Read model for the project list and the stopwatch views:
/// the project, its active-block pairs and its historical durations.
#[derive(Debug, Clone)]
pub struct ProjectWithTimes {
    pub id: i64,
    pub name: String,
    pub active_block: Option<ActiveBlockTimes>,
    pub closed_blocks: Vec<ClosedBlock>,
}

impl ProjectWithTimes {
    /// Sum of the stored durations of all closed blocks.
    pub fn closed_seconds(&self) -> i64 {
        self.closed_blocks.iter().map(|b| b.seconds).sum()
    }

    pub fn active_pairs(&self) -> &[TimePair] {
        match &self.active_block {
            Some(b) => &b.pairs,
            None => &[],
        }
    }
}
