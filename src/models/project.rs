use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,                    // ⇔ projects.id
    pub name: String,               // ⇔ projects.name (TEXT UNIQUE)
    pub active_block_id: Option<i64>, // ⇔ projects.active_block_id (NULL when idle)
    pub created_at: DateTime<Utc>,  // ⇔ projects.created_at (TEXT, RFC 3339)
}

impl Project {
    /// A project is "active" while it owns an open working block,
    /// regardless of whether that block is currently ticking or paused.
    pub fn is_active(&self) -> bool {
        self.active_block_id.is_some()
    }
}
