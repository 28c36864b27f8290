//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::errors::RoadmapError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Roadmap(#[from] RoadmapError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Roadmap(_) => crate::exitcode::DATAERR,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}
