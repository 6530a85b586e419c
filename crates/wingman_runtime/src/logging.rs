//! Log subscriber setup.
//!
//! Library crates only emit `tracing` events. The binary installs a
//! subscriber here, writing to stderr so command output on stdout stays
//! clean.

use tracing_subscriber::EnvFilter;
use wingman_foundation::{Error, ErrorKind, Result};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "WINGMAN_LOG";

/// Builds the filter: `WINGMAN_LOG` if set, `directives` otherwise.
///
/// # Errors
///
/// Returns `ParseError` if the directives are malformed.
pub fn filter(directives: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    EnvFilter::try_new(directives)
        .map_err(|e| Error::parse(format!("invalid log filter '{directives}': {e}")))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is malformed or a subscriber is already
/// installed.
pub fn init(directives: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directives)?)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to install logger: {e}"))))
}
