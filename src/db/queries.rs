use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use crate::models::project_times::{ActiveBlockTimes, ClosedBlock, ProjectWithTimes};
use crate::models::time_pair::TimePair;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Serialize a timestamp the way every table stores it (RFC 3339, UTC).
pub fn ts(t: DateTime<Utc>) -> String {
    t.to_rfc3339()
}

/// Parse a stored timestamp, wrapping failures the rusqlite way so they
/// surface through the normal row-mapping error channel.
fn parse_ts(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(raw.to_string())),
            )
        })
}

pub fn map_project(row: &Row) -> rusqlite::Result<Project> {
    let created_raw: String = row.get("created_at")?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        active_block_id: row.get("active_block_id")?,
        created_at: parse_ts(&created_raw)?,
    })
}

fn map_pair(row: &Row) -> rusqlite::Result<TimePair> {
    let start_raw: String = row.get("time")?;
    let pause_raw: Option<String> = row.get("pause_time")?;

    let pause = match pause_raw {
        Some(raw) => Some(parse_ts(&raw)?),
        None => None,
    };

    Ok(TimePair {
        id: row.get("id")?,
        start: parse_ts(&start_raw)?,
        pause,
    })
}

// ---------------------------------------------------------------
// Projects
// ---------------------------------------------------------------

pub fn insert_project(conn: &Connection, name: &str, now: DateTime<Utc>) -> AppResult<Project> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Other("Project name cannot be empty".into()));
    }

    let exists: Option<i64> = conn
        .query_row(
            "SELECT id FROM projects WHERE name = ?1",
            [trimmed],
            |row| row.get(0),
        )
        .optional()?;

    if exists.is_some() {
        return Err(AppError::DuplicateProject(trimmed.to_string()));
    }

    conn.execute(
        "INSERT INTO projects (name, active_block_id, created_at)
         VALUES (?1, NULL, ?2)",
        params![trimmed, ts(now)],
    )?;

    let id = conn.last_insert_rowid();
    select_project_by_id(conn, id)
}

pub fn select_all_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM projects
         ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], map_project)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn select_project_by_id(conn: &Connection, id: i64) -> AppResult<Project> {
    conn.query_row("SELECT * FROM projects WHERE id = ?1", [id], map_project)
        .optional()?
        .ok_or_else(|| AppError::ProjectNotFound(id.to_string()))
}

/// Resolve a project from a CLI selector: a numeric id, or the exact name.
pub fn select_project(conn: &Connection, selector: &str) -> AppResult<Project> {
    if let Ok(id) = selector.parse::<i64>() {
        return select_project_by_id(conn, id);
    }

    conn.query_row(
        "SELECT * FROM projects WHERE name = ?1",
        [selector],
        map_project,
    )
    .optional()?
    .ok_or_else(|| AppError::ProjectNotFound(selector.to_string()))
}

pub fn update_project_name(conn: &Connection, id: i64, new_name: &str) -> AppResult<()> {
    let trimmed = new_name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Other("Project name cannot be empty".into()));
    }

    let taken: Option<i64> = conn
        .query_row(
            "SELECT id FROM projects WHERE name = ?1 AND id != ?2",
            params![trimmed, id],
            |row| row.get(0),
        )
        .optional()?;

    if taken.is_some() {
        return Err(AppError::DuplicateProject(trimmed.to_string()));
    }

    let changed = conn.execute(
        "UPDATE projects SET name = ?1 WHERE id = ?2",
        params![trimmed, id],
    )?;

    if changed == 0 {
        return Err(AppError::ProjectNotFound(id.to_string()));
    }
    Ok(())
}

pub fn set_active_block(conn: &Connection, project_id: i64, block_id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE projects SET active_block_id = ?1 WHERE id = ?2",
        params![block_id, project_id],
    )?;
    Ok(())
}

pub fn clear_active_block(conn: &Connection, project_id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE projects SET active_block_id = NULL WHERE id = ?1",
        [project_id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------
// Working blocks
// ---------------------------------------------------------------

pub fn insert_block(conn: &Connection, project_id: i64, now: DateTime<Utc>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO working_blocks (project_id, working_time_seconds, created_at)
         VALUES (?1, NULL, ?2)",
        params![project_id, ts(now)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Stamp the block's total and thereby mark it closed.
pub fn close_block(conn: &Connection, block_id: i64, seconds: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE working_blocks SET working_time_seconds = ?1 WHERE id = ?2",
        params![seconds, block_id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------
// Start / pause events
// ---------------------------------------------------------------

/// Append a start event to a block.
///
/// At most one start event per block may be open at any instant; inserting
/// a second open interval is rejected here rather than left to the callers.
pub fn insert_start_time(
    conn: &Connection,
    block_id: i64,
    time: DateTime<Utc>,
) -> AppResult<i64> {
    let open: Option<i64> = conn
        .query_row(
            "SELECT s.id FROM start_times s
             LEFT JOIN pause_times p ON p.start_time_id = s.id
             WHERE s.block_id = ?1 AND p.id IS NULL
             LIMIT 1",
            [block_id],
            |row| row.get(0),
        )
        .optional()?;

    if open.is_some() {
        let name: String = conn.query_row(
            "SELECT p.name FROM projects p
             JOIN working_blocks b ON b.project_id = p.id
             WHERE b.id = ?1",
            [block_id],
            |row| row.get(0),
        )?;
        return Err(AppError::AlreadyRunning(name));
    }

    conn.execute(
        "INSERT INTO start_times (block_id, time, created_at)
         VALUES (?1, ?2, ?3)",
        params![block_id, ts(time), ts(time)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Set the pause timestamp on a start event (exactly once per event).
pub fn insert_pause_time(
    conn: &Connection,
    start_time_id: i64,
    time: DateTime<Utc>,
) -> AppResult<()> {
    let known: Option<i64> = conn
        .query_row(
            "SELECT id FROM start_times WHERE id = ?1",
            [start_time_id],
            |row| row.get(0),
        )
        .optional()?;

    if known.is_none() {
        return Err(AppError::Other(format!(
            "Start event {} not found",
            start_time_id
        )));
    }

    let paused: Option<i64> = conn
        .query_row(
            "SELECT id FROM pause_times WHERE start_time_id = ?1",
            [start_time_id],
            |row| row.get(0),
        )
        .optional()?;

    if paused.is_some() {
        return Err(AppError::Other(format!(
            "Start event {} is already paused",
            start_time_id
        )));
    }

    conn.execute(
        "INSERT INTO pause_times (start_time_id, time)
         VALUES (?1, ?2)",
        params![start_time_id, ts(time)],
    )?;
    Ok(())
}

/// Load the {start, pause?} pairs of a block, ordered by identifier.
pub fn load_block_pairs(conn: &Connection, block_id: i64) -> AppResult<Vec<TimePair>> {
    let mut stmt = conn.prepare(
        "SELECT s.id AS id, s.time AS time, p.time AS pause_time
         FROM start_times s
         LEFT JOIN pause_times p ON p.start_time_id = s.id
         WHERE s.block_id = ?1
         ORDER BY s.id ASC",
    )?;

    let rows = stmt.query_map([block_id], map_pair)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------
// Nested read models
// ---------------------------------------------------------------

/// One project with its active-block pairs and closed-block durations.
pub fn load_project_with_times(conn: &Connection, project_id: i64) -> AppResult<ProjectWithTimes> {
    let project = select_project_by_id(conn, project_id)?;

    let active_block = match project.active_block_id {
        Some(block_id) => Some(ActiveBlockTimes {
            id: block_id,
            pairs: load_block_pairs(conn, block_id)?,
        }),
        None => None,
    };

    let closed_blocks = load_closed_blocks(conn, project_id)?;

    Ok(ProjectWithTimes {
        id: project.id,
        name: project.name,
        active_block,
        closed_blocks,
    })
}

/// All projects ordered by name, each with its nested timer state.
pub fn load_projects_with_times(conn: &Connection) -> AppResult<Vec<ProjectWithTimes>> {
    let projects = select_all_projects(conn)?;

    let mut out = Vec::with_capacity(projects.len());
    for p in projects {
        out.push(load_project_with_times(conn, p.id)?);
    }
    Ok(out)
}

fn load_closed_blocks(conn: &Connection, project_id: i64) -> AppResult<Vec<ClosedBlock>> {
    let mut stmt = conn.prepare(
        "SELECT id, working_time_seconds, created_at
         FROM working_blocks
         WHERE project_id = ?1 AND working_time_seconds IS NOT NULL
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([project_id], |row| {
        let created_raw: String = row.get("created_at")?;
        Ok(ClosedBlock {
            id: row.get("id")?,
            seconds: row.get("working_time_seconds")?,
            created_at: parse_ts(&created_raw)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Closed blocks across all projects, with the owning project name.
/// Feeds the stats aggregation and the export pipeline.
pub fn load_all_closed_blocks(conn: &Connection) -> AppResult<Vec<(String, ClosedBlock)>> {
    let mut stmt = conn.prepare(
        "SELECT b.id AS id, b.working_time_seconds AS working_time_seconds,
                b.created_at AS created_at, p.name AS name
         FROM working_blocks b
         JOIN projects p ON p.id = b.project_id
         WHERE b.working_time_seconds IS NOT NULL
         ORDER BY b.created_at ASC, b.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let created_raw: String = row.get("created_at")?;
        let name: String = row.get("name")?;
        Ok((
            name,
            ClosedBlock {
                id: row.get("id")?,
                seconds: row.get("working_time_seconds")?,
                created_at: parse_ts(&created_raw)?,
            },
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
