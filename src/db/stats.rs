use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let projects: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
    let blocks: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM working_blocks", [], |row| row.get(0))?;
    let open_blocks: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM working_blocks WHERE working_time_seconds IS NULL",
        [],
        |row| row.get(0),
    )?;
    let start_events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM start_times", [], |row| row.get(0))?;

    println!(
        "{}• Projects:{} {}{}{}",
        CYAN, RESET, GREEN, projects, RESET
    );
    println!(
        "{}• Working blocks:{} {}{}{} ({} open)",
        CYAN, RESET, GREEN, blocks, RESET, open_blocks
    );
    println!(
        "{}• Start events:{} {}{}{}",
        CYAN, RESET, GREEN, start_events, RESET
    );

    //
    // 3) FIRST / LAST ACTIVITY
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT time FROM start_times ORDER BY time ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT time FROM start_times ORDER BY time DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Activity range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) TOTAL RECORDED TIME
    //
    let total_secs: i64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(working_time_seconds), 0) FROM working_blocks",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Recorded time:{} {}",
        CYAN,
        RESET,
        crate::utils::time::format_seconds(total_secs)
    );

    println!();
    Ok(())
}
