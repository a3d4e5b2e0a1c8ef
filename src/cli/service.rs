use std::{cell::RefCell, rc::Rc};

use schemars::schema_for;
use tracing::instrument;

use crate::{
    app_context::AppContext,
    config::Profile,
    store::Snapshot,
    users::{Role, User, next_user_id},
};

use super::{
    CliError, Command, CommandResult,
    formatting::{format_description, format_field, format_user, format_warning},
};

/// Runs parsed [`Command`]s against an application context.
pub struct CliService {
    context: AppContext,
}

impl CliService {
    /// Creates a CLI service over `context`.
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    /// Executes `command` and returns the text to print.
    ///
    /// # Errors
    /// * `CliError::InvalidArguments` - If a user entry is malformed
    /// * `CliError::Store` - If the store rejects a change
    /// * `CliError::Serialization` - If JSON output cannot be produced
    #[instrument(skip(self))]
    pub fn execute(&self, command: &Command) -> CommandResult {
        match command {
            Command::Info => Ok(self.info()),
            Command::Feature { name } => Ok(self.context.config.feature_enabled(name).to_string()),
            Command::Endpoint { path } => Ok(self.context.config.api_endpoint(path)),
            Command::Settings => self.settings(),
            Command::Schema => Ok(serde_json::to_string_pretty(&schema_for!(Profile))?),
            Command::Users { add, remove } => self.users(add, remove),
        }
    }

    fn info(&self) -> String {
        let info = self.context.config.environment_info();
        [
            format_field("Environment", &info.name),
            format_field("Production", info.production),
            format_field("Version", &info.version),
            format_field("API URL", &info.api_url),
            format_field("App URL", &info.app_url),
            format_field("Build Date", &info.build_date),
        ]
        .join("\n")
    }

    fn settings(&self) -> CommandResult {
        match self.context.config.full_profile_snapshot() {
            Some(profile) => Ok(serde_json::to_string_pretty(profile)?),
            None => Ok(format_warning(
                "Full settings are not available in production builds",
            )),
        }
    }

    fn users(&self, add: &[String], remove: &[u32]) -> CommandResult {
        let store = &self.context.users;
        let mut lines = Vec::new();

        let published = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let published = Rc::clone(&published);
            store.observe(move |snapshot: &Snapshot<User>| {
                published.borrow_mut().push(snapshot.len());
            })
        };

        for entry in add {
            let user = parse_user(entry, &store.current())?;
            store.add(user)?;
        }

        for &id in remove {
            if !store.remove(id)? {
                lines.push(format_warning(&format!("No user with id {id}")));
            }
        }

        subscription.cancel();

        let changes = published.borrow().len().saturating_sub(1);
        lines.push(format_description(&format!("{changes} change(s) published")));
        lines.extend(store.current().iter().map(format_user));

        Ok(lines.join("\n"))
    }
}

/// Parses `[ID:]NAME:EMAIL:ROLE` into a user, picking the next free id
/// when none is given.
fn parse_user(entry: &str, existing: &[User]) -> Result<User, CliError> {
    let parts: Vec<&str> = entry.split(':').collect();

    let (id, name, email, role) = match parts.as_slice() {
        [id, name, email, role] => {
            let id = id.parse::<u32>().map_err(|_| {
                CliError::InvalidArguments(format!("Invalid user id '{id}' in '{entry}'"))
            })?;
            (id, *name, *email, *role)
        }
        [name, email, role] => (next_user_id(existing), *name, *email, *role),
        _ => {
            return Err(CliError::InvalidArguments(format!(
                "Expected [ID:]NAME:EMAIL:ROLE, got '{entry}'"
            )));
        }
    };

    if name.trim().is_empty() {
        return Err(CliError::InvalidArguments(format!(
            "User name must not be empty in '{entry}'"
        )));
    }

    Ok(User::new(
        id,
        name.trim(),
        email.trim(),
        Role::from(role.trim().to_string()),
    ))
}
