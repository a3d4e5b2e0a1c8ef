use std::{env, io};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{AppError, Result, config::LoggingConfig};

/// Initialize tracing for the application
///
/// Uses the RUST_LOG environment variable if set, otherwise the profile's
/// logging level. Output goes to stderr so command output on stdout stays
/// clean. Supports pretty and JSON output based on APPCORE_LOG_FORMAT.
///
/// Nothing is installed when the profile disables console logging and
/// RUST_LOG is unset.
///
/// # Errors
/// * `AppError::Logging` - If a global subscriber is already installed
pub fn init(logging: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if !logging.enable_console => return Ok(()),
        Err(_) => EnvFilter::new(logging.level.to_string()),
    };

    let format = env::var("APPCORE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))?;
        }
    }

    Ok(())
}
