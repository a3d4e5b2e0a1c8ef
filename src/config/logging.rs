use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from critical errors only
/// to detailed trace information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Detailed trace information, including observer registration.
    Trace,

    /// Debug information such as every published snapshot.
    Debug,

    /// Informational messages, warnings, and errors (default level).
    #[default]
    Info,

    /// Warnings and errors.
    Warn,

    /// Errors only.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Where and how much the application logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Minimum level that is emitted.
    pub level: LogLevel,

    /// Emit log lines to the console.
    pub enable_console: bool,

    /// Ship log lines to a remote collector. Carried for consumers; this
    /// crate never sends anything over the network.
    pub enable_remote: bool,
}
