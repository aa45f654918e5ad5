//! Keyed cache of loaded project snapshots.
//!
//! One entry per project id, invalidated on every mutation of that project.
//! Read paths (status, watch, list) go through here so repeated reads inside
//! one invocation do not re-query, while a mutation always forces a reload.

use crate::db::queries;
use crate::errors::AppResult;
use crate::models::project_times::ProjectWithTimes;
use rusqlite::Connection;
use std::collections::HashMap;

#[derive(Default)]
pub struct ProjectCache {
    entries: HashMap<i64, ProjectWithTimes>,
}

impl ProjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot for a project, loading it on a miss.
    pub fn get(&mut self, conn: &Connection, project_id: i64) -> AppResult<&ProjectWithTimes> {
        if !self.entries.contains_key(&project_id) {
            let loaded = queries::load_project_with_times(conn, project_id)?;
            self.entries.insert(project_id, loaded);
        }
        Ok(&self.entries[&project_id])
    }

    /// Drop one project's entry. Called after every mutation of that project.
    pub fn invalidate(&mut self, project_id: i64) {
        self.entries.remove(&project_id);
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }
}
