use thiserror::Error;

use crate::paths::PathError;

/// Fatal errors: the run is aborted and no invocation is produced.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Test executable must not be empty")]
    MissingExecutable,

    #[error("File or directory '{path}' does not exist")]
    PathNotFound { path: String },

    #[error("'{path}' is not a valid directory path")]
    NotADirectory { path: String },

    #[error("'{path}' is not a valid {what}: absolute paths are not allowed here")]
    InvalidPath { path: String, what: &'static str },

    #[error("TestRail integration is enabled but no {missing} was given")]
    MissingCredentials { missing: &'static str },

    #[error(transparent)]
    Path(#[from] PathError),
}
