//! Cross-layer integration tests
//!
//! Drives the model through the command layer the way the CLI does, and
//! checks persistence and batch files end to end.

mod batch;
mod commands;
mod persistence;

use wingman_runtime::{Session, SessionConfig};

/// Runs lines against a fresh in-memory session, failing on the first error.
pub fn session_with(lines: &[&str]) -> Session {
    let mut session = Session::new(SessionConfig::ephemeral());
    for line in lines {
        if let Err(e) = session.eval(line) {
            panic!("'{line}' failed: {e}");
        }
    }
    session
}
