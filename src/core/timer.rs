use crate::core::cache::ProjectCache;
use crate::core::reconcile;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use crate::models::project_times::ProjectWithTimes;
use chrono::{DateTime, Utc};

/// High-level business logic for the timer commands.
pub struct TimerLogic;

pub struct StartOutcome {
    pub project: Project,
    pub block_id: i64,
    pub start_id: i64,
    pub new_block: bool,
}

pub struct PauseOutcome {
    pub project: Project,
    pub elapsed_seconds: i64,
}

pub struct StopOutcome {
    pub project: Project,
    pub block_id: i64,
    pub total_seconds: i64,
    pub was_running: bool,
}

/// Reconciled view of one project, for status/list/watch output.
pub struct StatusView {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub running: bool,
    pub current_cs: i64,
    pub total_seconds: i64,
}

impl TimerLogic {
    /// Start (or resume) the timer of a project.
    ///
    /// Creates a working block when the project has none active, then
    /// appends a start event. A second open interval is rejected by the
    /// data layer.
    pub fn start(
        pool: &mut DbPool,
        cache: &mut ProjectCache,
        selector: &str,
    ) -> AppResult<StartOutcome> {
        let now = Utc::now();
        let conn = &pool.conn;

        //
        // 1. Resolve project
        //
        let project = queries::select_project(conn, selector)?;

        //
        // 2. Ensure an active working block
        //
        let (block_id, new_block) = match project.active_block_id {
            Some(id) => (id, false),
            None => {
                let id = queries::insert_block(conn, project.id, now)?;
                queries::set_active_block(conn, project.id, id)?;
                (id, true)
            }
        };

        //
        // 3. Append the start event (open-interval guard lives in the query)
        //
        let start_id = queries::insert_start_time(conn, block_id, now)?;

        ttlog(
            conn,
            "start",
            &project.name,
            &format!("Started block {} (start event {})", block_id, start_id),
        )?;
        cache.invalidate(project.id);

        Ok(StartOutcome {
            project,
            block_id,
            start_id,
            new_block,
        })
    }

    /// Pause the running timer of a project.
    ///
    /// Aborts with a user-visible error when no open start event can be
    /// found; nothing is written in that case.
    pub fn pause(
        pool: &mut DbPool,
        cache: &mut ProjectCache,
        selector: &str,
    ) -> AppResult<PauseOutcome> {
        let now = Utc::now();
        let conn = &pool.conn;

        let project = queries::select_project(conn, selector)?;

        let block_id = project
            .active_block_id
            .ok_or_else(|| AppError::NoActiveBlock(project.name.clone()))?;

        let pairs = queries::load_block_pairs(conn, block_id)?;

        let start_id =
            reconcile::open_start_id(&pairs).ok_or(AppError::MissingStartEvent(block_id))?;

        queries::insert_pause_time(conn, start_id, now)?;

        // Reconcile against the state that now includes the pause write.
        let pairs = queries::load_block_pairs(conn, block_id)?;
        let elapsed_seconds = reconcile::elapsed_seconds(&pairs, now);

        ttlog(
            conn,
            "pause",
            &project.name,
            &format!(
                "Paused start event {} at {}",
                start_id,
                crate::utils::time::format_seconds(elapsed_seconds)
            ),
        )?;
        cache.invalidate(project.id);

        Ok(PauseOutcome {
            project,
            elapsed_seconds,
        })
    }

    /// Stop the timer of a project: close the active block and store its
    /// total working time.
    ///
    /// When the timer is still running, the pause write is issued before
    /// the close write, so no open interval is ever left dangling.
    pub fn stop(
        pool: &mut DbPool,
        cache: &mut ProjectCache,
        selector: &str,
    ) -> AppResult<StopOutcome> {
        let now = Utc::now();
        let conn = &pool.conn;

        let project = queries::select_project(conn, selector)?;

        let block_id = project
            .active_block_id
            .ok_or_else(|| AppError::NoActiveBlock(project.name.clone()))?;

        let pairs = queries::load_block_pairs(conn, block_id)?;
        let was_running = pairs.iter().any(|p| p.is_open());

        //
        // 1. Pause first when running
        //
        if was_running {
            let start_id =
                reconcile::open_start_id(&pairs).ok_or(AppError::MissingStartEvent(block_id))?;
            queries::insert_pause_time(conn, start_id, now)?;
        }

        //
        // 2. Close: total over the (now all closed) pairs, then detach
        //
        let pairs = queries::load_block_pairs(conn, block_id)?;
        let total_seconds = reconcile::elapsed_seconds(&pairs, now);

        queries::close_block(conn, block_id, total_seconds)?;
        queries::clear_active_block(conn, project.id)?;

        ttlog(
            conn,
            "stop",
            &project.name,
            &format!(
                "Closed block {} at {}",
                block_id,
                crate::utils::time::format_seconds(total_seconds)
            ),
        )?;
        cache.invalidate(project.id);

        Ok(StopOutcome {
            project,
            block_id,
            total_seconds,
            was_running,
        })
    }

    /// Reconciled status of one project.
    pub fn status(
        pool: &mut DbPool,
        cache: &mut ProjectCache,
        selector: &str,
    ) -> AppResult<StatusView> {
        let project = queries::select_project(&pool.conn, selector)?;
        let snapshot = cache.get(&pool.conn, project.id)?;
        Ok(Self::view(snapshot, Utc::now()))
    }

    /// Pure projection of a snapshot into the view the UI renders.
    pub fn view(snapshot: &ProjectWithTimes, now: DateTime<Utc>) -> StatusView {
        let pairs = snapshot.active_pairs();
        let current_cs = reconcile::elapsed_centis(pairs, now);
        let running = reconcile::is_running(pairs);

        StatusView {
            id: snapshot.id,
            name: snapshot.name.clone(),
            active: snapshot.active_block.is_some(),
            running,
            current_cs,
            total_seconds: snapshot.closed_seconds() + current_cs / 100,
        }
    }
}
