//! Error types for fixture startup and configuration

use thiserror::Error;

/// Errors surfaced while building a benchmark fixture.
///
/// Startup failures are never handled locally. They propagate to the
/// harness, which treats them as fatal.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("unknown database profile: '{0}'")]
    UnknownProfile(String),

    #[error("failed to load config '{path}': {reason}")]
    Config { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("fixture startup timed out after {secs}s")]
    StartupTimeout { secs: u64 },
}
