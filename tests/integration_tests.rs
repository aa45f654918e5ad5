use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{count, init_db, init_db_with_project, open, setup_test_db, tt};

#[test]
fn test_add_and_list_projects() {
    let db_path = setup_test_db("add_and_list");

    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "add", "website"])
        .assert()
        .success()
        .stdout(contains("Created project 'website'"));

    tt().args(["--db", &db_path, "--test", "add", "backend"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("website"))
        .stdout(contains("backend"));
}

#[test]
fn test_add_duplicate_project_fails() {
    let db_path = setup_test_db("add_duplicate");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "add", "website"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_list_without_projects_warns() {
    let db_path = setup_test_db("list_empty");

    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No projects yet"));
}

#[test]
fn test_rename_project() {
    let db_path = setup_test_db("rename");

    init_db_with_project(&db_path, "old-name");

    tt().args(["--db", &db_path, "--test", "rename", "old-name", "new-name"])
        .assert()
        .success()
        .stdout(contains("Renamed 'old-name' to 'new-name'"));

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("new-name"))
        .stdout(contains("old-name").not());
}

#[test]
fn test_rename_to_taken_name_fails() {
    let db_path = setup_test_db("rename_taken");

    init_db_with_project(&db_path, "first");

    tt().args(["--db", &db_path, "--test", "add", "second"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "rename", "second", "first"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_start_creates_block_and_start_event() {
    let db_path = setup_test_db("start_creates_block");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success()
        .stdout(contains("Started 'website'"));

    // exactly one block, one start event, no pause
    let conn = open(&db_path);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM working_blocks"), 1);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM start_times"), 1);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM pause_times"), 0);

    // the block is attached to the project and still open
    let active: Option<i64> = conn
        .query_row(
            "SELECT active_block_id FROM projects WHERE name = 'website'",
            [],
            |row| row.get(0),
        )
        .expect("active block");
    assert!(active.is_some());

    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM working_blocks WHERE working_time_seconds IS NULL"
        ),
        1
    );
}

#[test]
fn test_start_twice_is_rejected() {
    let db_path = setup_test_db("start_twice");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .failure()
        .stderr(contains("already running"));

    // no second start event was written
    let conn = open(&db_path);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM start_times"), 1);
}

#[test]
fn test_start_unknown_project_fails() {
    let db_path = setup_test_db("start_unknown");

    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "start", "nope"])
        .assert()
        .failure()
        .stderr(contains("Project not found"));
}

#[test]
fn test_pause_stamps_the_open_start_event() {
    let db_path = setup_test_db("pause_stamps");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "pause", "website"])
        .assert()
        .success()
        .stdout(contains("Paused 'website'"));

    // every start event is paused now, the block stays active
    let conn = open(&db_path);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM pause_times"), 1);

    let active: Option<i64> = conn
        .query_row(
            "SELECT active_block_id FROM projects WHERE name = 'website'",
            [],
            |row| row.get(0),
        )
        .expect("active block");
    assert!(active.is_some());
}

#[test]
fn test_pause_without_active_block_fails() {
    let db_path = setup_test_db("pause_idle");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "pause", "website"])
        .assert()
        .failure()
        .stderr(contains("no active working block"));
}

#[test]
fn test_pause_twice_fails() {
    let db_path = setup_test_db("pause_twice");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "--test", "pause", "website"])
        .assert()
        .success();

    // second pause: no open start event is left to stamp
    tt().args(["--db", &db_path, "--test", "pause", "website"])
        .assert()
        .failure()
        .stderr(contains("No open start event"));
}

#[test]
fn test_resume_appends_a_second_start_event() {
    let db_path = setup_test_db("resume");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "--test", "pause", "website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success()
        .stdout(contains("Resumed 'website'"));

    // same block, two start events, one pause
    let conn = open(&db_path);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM working_blocks"), 1);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM start_times"), 2);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM pause_times"), 1);
}

#[test]
fn test_stop_closes_block_and_leaves_no_open_interval() {
    let db_path = setup_test_db("stop_closes");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "stop", "website"])
        .assert()
        .success()
        .stdout(contains("Stopped 'website'"));

    let conn = open(&db_path);

    // the pause write happened before the close: no dangling interval
    assert_eq!(
        count(&conn, "SELECT COUNT(*) FROM start_times"),
        count(&conn, "SELECT COUNT(*) FROM pause_times")
    );

    // block closed and detached
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM working_blocks WHERE working_time_seconds IS NOT NULL"
        ),
        1
    );

    let active: Option<i64> = conn
        .query_row(
            "SELECT active_block_id FROM projects WHERE name = 'website'",
            [],
            |row| row.get(0),
        )
        .expect("active block");
    assert!(active.is_none());
}

#[test]
fn test_stop_while_paused_does_not_add_pause_rows() {
    let db_path = setup_test_db("stop_paused");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "--test", "pause", "website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "stop", "website"])
        .assert()
        .success();

    let conn = open(&db_path);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM start_times"), 1);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM pause_times"), 1);
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM working_blocks WHERE working_time_seconds IS NOT NULL"
        ),
        1
    );
}

#[test]
fn test_stop_without_active_block_fails() {
    let db_path = setup_test_db("stop_idle");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "stop", "website"])
        .assert()
        .failure()
        .stderr(contains("no active working block"));
}

#[test]
fn test_stop_then_start_opens_a_new_block() {
    let db_path = setup_test_db("stop_then_start");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "--test", "stop", "website"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success()
        .stdout(contains("new block"));

    let conn = open(&db_path);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM working_blocks"), 2);
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM working_blocks WHERE working_time_seconds IS NULL"
        ),
        1
    );
}

#[test]
fn test_status_shows_running_state() {
    let db_path = setup_test_db("status_running");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "status", "website"])
        .assert()
        .success()
        .stdout(contains("website"))
        .stdout(contains("running"));
}

#[test]
fn test_status_all_projects() {
    let db_path = setup_test_db("status_all");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "add", "backend"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("website"))
        .stdout(contains("backend"))
        .stdout(contains("idle"));
}

#[test]
fn test_status_unknown_project_fails() {
    let db_path = setup_test_db("status_unknown");

    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "status", "nope"])
        .assert()
        .failure()
        .stderr(contains("Project not found"));
}

#[test]
fn test_watch_bounded_run() {
    let db_path = setup_test_db("watch_bounded");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "watch", "website", "--seconds", "0"])
        .assert()
        .success()
        .stdout(contains("website"))
        .stdout(contains("running"));
}

#[test]
fn test_select_project_by_numeric_id() {
    let db_path = setup_test_db("numeric_id");

    init_db_with_project(&db_path, "website");

    let conn = open(&db_path);
    let id: i64 = conn
        .query_row("SELECT id FROM projects WHERE name = 'website'", [], |row| {
            row.get(0)
        })
        .expect("id");
    drop(conn);

    tt().args(["--db", &db_path, "--test", "start", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("website"));
}

#[test]
fn test_log_records_timer_operations() {
    let db_path = setup_test_db("log_records");

    init_db_with_project(&db_path, "website");

    tt().args(["--db", &db_path, "--test", "start", "website"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "--test", "pause", "website"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "--test", "stop", "website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("pause"))
        .stdout(contains("stop"))
        .stdout(contains("website"));
}
