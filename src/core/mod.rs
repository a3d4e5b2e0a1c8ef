use thiserror::Error;

use crate::{config::ConfigError, store::StoreError};

/// Error types for the application core.
///
/// Wraps the errors of the individual components so start-up code can
/// propagate any of them with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Profile selection or resolution failed
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A store operation was rejected
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The tracing subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// A specialized `Result` type for application core operations.
pub type Result<T> = std::result::Result<T, AppError>;
