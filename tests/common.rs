#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    // keep tests away from the user's real configuration
    cmd.env(
        rattendance::config::HOME_ENV,
        env::temp_dir().join("rattendance_test_home"),
    );
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write `content` to a temp file and return its path
pub fn temp_file(name: &str, ext: &str, content: &[u8]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.{}", name, ext));
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}

/// Fresh store for library-level tests
pub fn open_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::new(&db_path).expect("open test db")
}

/// Initialize DB via the CLI and add a small dataset useful for many tests:
/// class 1 with students 21CS001 and 21CS002, and period 1.
pub fn init_db_with_data(db_path: &str) {
    rat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", db_path, "class", "add", "1", "CSE-A", "--dept", "CSE"])
        .assert()
        .success();

    for (reg, name) in [("21CS001", "Asha"), ("21CS002", "Bruno")] {
        rat()
            .args(["--db", db_path, "student", "add", reg, name, "1"])
            .assert()
            .success();
    }

    rat()
        .args([
            "--db",
            db_path,
            "period",
            "create",
            "1",
            "Mathematics",
            "2025-12-15",
            "1",
        ])
        .assert()
        .success();
}
