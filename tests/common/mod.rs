use std::{path::PathBuf, sync::Mutex};

use budget_tracker::{FixedClock, Session};
use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique data directory for one test.
pub fn test_base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a session under `base` whose clock is pinned to 2024-07-04 08:15 UTC.
pub fn open_session(base: &PathBuf) -> Session {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 7, 4, 8, 15, 0).unwrap());
    Session::open_with_clock(base.clone(), Box::new(clock)).expect("open session")
}
