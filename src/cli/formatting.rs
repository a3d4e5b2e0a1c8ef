//! Formatting utilities for CLI output.

use crate::users::User;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats a labelled value, padding labels to a common width
pub fn format_field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{}{:<12}{} {}", Colors::BOLD, label, Colors::RESET, value)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats warnings with yellow styling
pub fn format_warning(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::YELLOW, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats one user as a single table row.
pub fn format_user(user: &User) -> String {
    format!(
        "{}{:>4}{}  {:<20} {:<28} {}",
        Colors::CYAN,
        user.id,
        Colors::RESET,
        user.name,
        user.email,
        user.role
    )
}
