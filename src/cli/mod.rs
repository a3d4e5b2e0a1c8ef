//! Command-line interface over the application core.
//!
//! Parses arguments with clap, builds nothing itself, and runs commands
//! against an [`AppContext`](crate::app_context::AppContext) handed to
//! [`CliService`].

pub mod formatting;
mod service;
mod types;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};

pub use service::CliService;
pub use types::{CliError, CommandResult};

use crate::config::ProfileName;

/// Top-level arguments of the `appcore` binary.
#[derive(Parser, Debug)]
#[command(name = "appcore")]
#[command(about = "Inspect configuration profiles and the user store")]
pub struct Cli {
    /// Profile to load: development, test, staging or production.
    #[arg(short, long, default_value = "development")]
    pub profile: ProfileName,

    /// Extra TOML layer applied on top of the profile. Repeatable; later
    /// layers win.
    #[arg(long = "set", value_name = "TOML")]
    pub overrides: Vec<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands understood by [`CliService`].
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show identity and endpoints of the active environment.
    Info,

    /// Report whether a feature flag is enabled.
    Feature {
        /// Flag name, e.g. darkMode.
        name: String,
    },

    /// Print the full URL of an API endpoint.
    Endpoint {
        /// Endpoint path, with or without a leading slash.
        path: String,
    },

    /// Dump every setting as JSON (refused in production builds).
    Settings,

    /// Print the JSON schema of a profile.
    Schema,

    /// Apply user changes and list the resulting users.
    Users {
        /// User to add as [ID:]NAME:EMAIL:ROLE. Without an ID the next free
        /// one is used.
        #[arg(long, value_name = "[ID:]NAME:EMAIL:ROLE")]
        add: Vec<String>,

        /// Id of a user to remove.
        #[arg(long, value_name = "ID")]
        remove: Vec<u32>,
    },
}
