#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("ticktrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ticktrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB (creates tables via migrations)
pub fn init_db(db_path: &str) {
    tt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and create one project
pub fn init_db_with_project(db_path: &str, name: &str) {
    init_db(db_path);

    tt().args(["--db", db_path, "--test", "add", name])
        .assert()
        .success();
}

/// Open the test database directly for assertions
pub fn open(db_path: &str) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}

pub fn count(conn: &rusqlite::Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |row| row.get(0)).expect("count")
}
