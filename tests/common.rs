#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bb() -> Command {
    cargo_bin_cmd!("bridgebook")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bridgebook.sqlite", name));
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

/// Initialize the DB schema and load the demo catalog
pub fn init_seeded_db(db_path: &str) {
    bb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    bb().args(["--db", db_path, "seed"]).assert().success();
}

/// Book a fixture appointment via the CLI (Leon, Signature Cut)
pub fn book_fixture(db_path: &str, date: &str, time: &str) {
    bb().args([
        "--db",
        db_path,
        "book",
        date,
        time,
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--name",
        "Casey Morgan",
        "--email",
        "casey@example.com",
        "--phone",
        "+1 587-555-0101",
    ])
    .assert()
    .success();
}

/// First booking id in the test DB, straight from SQLite
pub fn first_booking_id(db_path: &str) -> String {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT id FROM bookings ORDER BY created_at ASC LIMIT 1", [], |row| {
        row.get(0)
    })
    .expect("booking id")
}
