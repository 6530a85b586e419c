//! Integration tests for running command files

use std::fs;

use wingman_foundation::{ErrorKind, Result};
use wingman_runtime::{LineEditor, ReadResult, Repl, Session, SessionConfig};

/// An editor with no input, for driving a REPL from files only.
struct NoInput;

impl LineEditor for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn batch_repl(config: SessionConfig) -> Repl<NoInput> {
    Repl::with_editor(NoInput).with_session(Session::new(config))
}

/// Batch settings without a data file.
fn in_memory() -> SessionConfig {
    SessionConfig {
        data_path: None,
        ..SessionConfig::batch()
    }
}

const ROSTER: &str = "\
# Morning rotation
add pilot \"Amelia Earhart\" captain 39 12000
add pilot \"Bert Hinkler\" first-officer 30 900
add crew Sam cabin-service-director
add plane A380 3
add flight SQ25
add location Singapore

link pilot 1 flight 1 as flying
link pilot 2 flight 1 as monitoring
link crew 1 flight 1 as cabin-service-director
link plane 1 flight 1
link location 1 flight 1 as departure
";

#[test]
fn roster_file_builds_a_crewed_flight() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.wing");
    fs::write(&path, ROSTER).unwrap();

    let mut repl = batch_repl(in_memory());
    repl.eval_file(&path).unwrap();

    let mut session = repl.into_session();
    assert_eq!(session.model().pilots().len(), 2);
    let shown = session.eval("show flight 1").unwrap().message;
    assert!(shown.contains("Pilot Monitoring: Bert Hinkler (First Officer)"), "{shown}");
    assert!(shown.contains("Departure: Singapore"), "{shown}");
}

#[test]
fn failing_line_carries_its_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.wing");
    fs::write(
        &path,
        "add pilot Amelia captain 39 12000\nadd pilot Bert captain 41 8000\nadd flight SQ25\n\
         link pilot 1 flight 1 as flying\nlink pilot 2 flight 1 as flying\nadd flight SQ26\n",
    )
    .unwrap();

    let mut repl = batch_repl(in_memory());
    let err = repl.eval_file(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CommandFailed(_)));

    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("link pilot 2 flight 1 as flying"));
    assert!(context.stack[0].ends_with("roster.wing:5"), "{:?}", context.stack);

    // Nothing after the failing line ran
    assert_eq!(repl.session().model().flights().len(), 1);
}

#[test]
fn exit_ends_the_file_early() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.wing");
    fs::write(&path, "add flight SQ25\nexit\nadd flight SQ26\n").unwrap();

    let mut repl = batch_repl(in_memory());
    repl.eval_file(&path).unwrap();
    assert_eq!(repl.session().model().flights().len(), 1);
}

#[test]
fn batch_with_data_file_auto_saves() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("setup.wing");
    let data = dir.path().join("ops.msgpack");
    fs::write(&script, "add flight SQ25\nadd location Sydney\n").unwrap();

    let config = SessionConfig::batch().with_data_path(&data);
    let mut repl = batch_repl(config.clone());
    repl.eval_file(&script).unwrap();

    let reopened = Session::open(config).unwrap();
    assert_eq!(reopened.model().flights().len(), 1);
    assert_eq!(reopened.model().locations().len(), 1);
}
