#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed "today" used by every test so countdowns are deterministic.
pub const TODAY: &str = "2025-06-01";

pub fn dc() -> Command {
    cargo_bin_cmd!("datecountdown")
}

/// Command bound to a test database and the fixed clock.
pub fn dc_db(db_path: &str) -> Command {
    let mut cmd = dc();
    cmd.args(["--db", db_path, "--today", TODAY]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_datecountdown.sqlite", name));
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

/// Initialize the DB without touching the user's configuration file
pub fn init_db(db_path: &str) {
    dc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// #1 birthday, #2 anniversary, #3 memorial, #4 retirement
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    dc_db(db_path)
        .args([
            "add",
            "birthday",
            "--name",
            "Dupont",
            "--first-name",
            "Marie",
            "--date",
            "15/06/1990",
        ])
        .assert()
        .success();

    dc_db(db_path)
        .args(["add", "anniversary", "--name", "Martin", "--date", "10/06/2000"])
        .assert()
        .success();

    dc_db(db_path)
        .args([
            "add",
            "memorial",
            "--name",
            "Durand",
            "--date",
            "20/08/1930",
            "--death-date",
            "05/03/2010",
        ])
        .assert()
        .success();

    dc_db(db_path)
        .args([
            "add",
            "retirement",
            "--name",
            "Bernard",
            "--start-date",
            "01/09/1990",
            "--penible",
        ])
        .assert()
        .success();
}
