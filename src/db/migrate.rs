use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `working_blocks` has the `working_time_seconds` column.
fn blocks_have_duration_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('working_blocks')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "working_time_seconds" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the four timer tables with the modern schema.
fn create_timer_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL UNIQUE,
            active_block_id INTEGER REFERENCES working_blocks(id),
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS working_blocks (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id           INTEGER NOT NULL REFERENCES projects(id),
            working_time_seconds INTEGER,
            created_at           TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS start_times (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            block_id   INTEGER NOT NULL REFERENCES working_blocks(id),
            time       TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS pause_times (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            start_time_id INTEGER NOT NULL UNIQUE REFERENCES start_times(id),
            time          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_blocks_project ON working_blocks(project_id);
        CREATE INDEX IF NOT EXISTS idx_start_times_block ON start_times(block_id);
        CREATE INDEX IF NOT EXISTS idx_pause_times_start ON pause_times(start_time_id);
        "#,
    )?;
    Ok(())
}

/// Early builds stored the block duration on the project row.
/// Move it where it belongs: one duration per closed block.
fn migrate_add_duration_to_blocks(conn: &Connection) -> Result<(), Error> {
    let version = "20260312_0007_add_working_time_seconds";

    // 1) Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Apply
    conn.execute(
        "ALTER TABLE working_blocks ADD COLUMN working_time_seconds INTEGER;",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!(
                "Failed to add 'working_time_seconds' column: {}",
                e
            )),
        )
    })?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added working_time_seconds to working_blocks')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'working_time_seconds' to working_blocks",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create the timer tables if this is a fresh database
    let blocks_exist = table_exists(conn, "working_blocks")?;

    if !blocks_exist {
        create_timer_tables(conn)?;
        success("Created timer tables (modern schema).");
        return Ok(());
    }

    // 3) Existing database: make sure the indexes and late columns are there
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_blocks_project ON working_blocks(project_id);
        CREATE INDEX IF NOT EXISTS idx_start_times_block ON start_times(block_id);
        CREATE INDEX IF NOT EXISTS idx_pause_times_start ON pause_times(start_time_id);
        "#,
    )?;

    if !blocks_have_duration_column(conn)? {
        migrate_add_duration_to_blocks(conn)?;
    }

    Ok(())
}
