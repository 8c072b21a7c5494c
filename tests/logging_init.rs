//! Logging bootstrap smoke test. Runs in its own test binary so the global
//! subscriber it installs cannot interfere with other tests.

use tempfile::tempdir;

#[test]
fn init_creates_the_log_dir_and_tolerates_reinit() {
    let dir = tempdir().unwrap();
    let log_dir = dir.path().join("logs");

    ragtool::logging::init(Some(&log_dir));
    // A second call must be a no-op, not a panic.
    ragtool::logging::init(None);

    assert!(log_dir.is_dir());
}
