#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rpunchclock::core::clock::ManualClock;
use rpunchclock::core::session::{Session, Settings};
use rpunchclock::store::memory::MemoryStore;
use rpunchclock::ui::render::RecordingSink;
use std::env;
use std::fs;
use std::path::PathBuf;

pub type TestSession = Session<MemoryStore, ManualClock, RecordingSink>;

/// Binary under test, with HOME pointed at a private temp dir so the
/// user's real configuration is never read.
pub fn rpc(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_rpunchclock_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rpunchclock");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB through the CLI.
pub fn init_db(name: &str, db_path: &str) {
    rpc(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Local date-time helper for tests.
pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("unambiguous local time")
}

pub fn settings(auto_register: bool) -> Settings {
    Settings {
        auto_register,
        ..Settings::default()
    }
}

/// Session over a fresh in-memory store, with handles on its store, clock and sink.
pub fn session_at(
    at: DateTime<Local>,
    auto_register: bool,
) -> (TestSession, MemoryStore, ManualClock, RecordingSink) {
    let store = MemoryStore::new();
    reopen(&store, at, auto_register)
}

/// Open a new session on an existing store, as a restarted process would.
pub fn reopen(
    store: &MemoryStore,
    at: DateTime<Local>,
    auto_register: bool,
) -> (TestSession, MemoryStore, ManualClock, RecordingSink) {
    let clock = ManualClock::at(at);
    let sink = RecordingSink::new();
    let session = Session::open(
        store.clone(),
        clock.clone(),
        sink.clone(),
        settings(auto_register),
    );
    (session, store.clone(), clock, sink)
}
