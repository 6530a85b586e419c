//! Integration tests for saving and reloading sessions

use wingman_foundation::{ErrorKind, Item};
use wingman_runtime::{Session, SessionConfig, load_from_file};

#[test]
fn explicit_save_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ops.msgpack");
    let config = SessionConfig::ephemeral().with_data_path(&path);

    let mut session = Session::open(config.clone()).unwrap();
    session.eval("add pilot Amelia captain 39 12000").unwrap();
    session.eval("add flight SQ25").unwrap();
    session.eval("link pilot 1 flight 1 as flying").unwrap();
    assert!(!path.exists());

    let message = session.eval("save").unwrap().message;
    assert!(message.starts_with("Saved to "));

    let mut reopened = Session::open(config).unwrap();
    let shown = reopened.eval("show flight 1").unwrap().message;
    assert!(shown.contains("Pilot Flying: Amelia (Captain)"), "{shown}");

    let pilots = reopened.eval("list pilots").unwrap().message;
    assert!(pilots.contains("Status: Unavailable"), "{pilots}");
}

#[test]
fn auto_save_persists_every_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ops.msgpack");
    let config = SessionConfig::ephemeral()
        .with_data_path(&path)
        .with_auto_save(true);

    let mut session = Session::open(config).unwrap();
    session.eval("add plane A380 3").unwrap();
    session.eval("add flight SQ25").unwrap();
    session.eval("link plane 1 flight 1").unwrap();

    let mut model = load_from_file(&path).unwrap();
    let plane = model.planes().iter().next().unwrap().id().clone();
    assert_eq!(model.plane_flights(&plane, true).unwrap().len(), 1);
}

#[test]
fn corrupt_data_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ops.msgpack");
    std::fs::write(&path, b"not messagepack").unwrap();

    let err = Session::open(SessionConfig::ephemeral().with_data_path(&path)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}

#[test]
fn stale_links_survive_reload_and_heal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ops.msgpack");
    let config = SessionConfig::ephemeral()
        .with_data_path(&path)
        .with_auto_save(true);

    let mut session = Session::open(config.clone()).unwrap();
    session.eval("add plane A380 3").unwrap();
    session.eval("add flight SQ25").unwrap();
    session.eval("add flight SQ26").unwrap();
    session.eval("link plane 1 flight 1").unwrap();
    session.eval("link plane 1 flight 2").unwrap();
    session.eval("delete flight 1").unwrap();

    let mut reopened = Session::open(config).unwrap();
    let shown = reopened.eval("show plane 1").unwrap().message;
    assert!(shown.contains("Flights: SQ26"), "{shown}");
}
