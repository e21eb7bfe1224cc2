//! Error types for Stagehand
//!
//! Uses `thiserror` for library errors. A management command that runs and
//! exits non-zero is not an error value here: the runner records it as a step
//! outcome so advisory steps can continue. These variants cover the cases
//! where the procedure itself cannot proceed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stagehand operations
pub type StagehandResult<T> = Result<T, StagehandError>;

/// Main error type for Stagehand operations
#[derive(Error, Debug)]
pub enum StagehandError {
    /// A step's command could not be launched at all
    #[error("step '{step}' could not launch '{program}': {source}")]
    Spawn {
        step: String,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file exists but does not parse
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Project root has no manage.py where the config points
    #[error("no manage.py found at {path} - is this a Django project root?")]
    ManagePyNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
