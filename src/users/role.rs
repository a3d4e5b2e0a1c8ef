use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// Access role of a [`User`](super::User).
///
/// Unknown role names are kept verbatim in [`Role::Other`] rather than
/// rejected. Known names are matched exactly, so `"ADMIN"` stays
/// `Other("ADMIN")` and converts back to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Can moderate content of other users.
    Moderator,
    /// Regular account.
    User,
    /// Any role this build does not know about.
    ///
    /// Never holds `admin`, `moderator` or `user`; build roles through
    /// [`Role::from`] to keep string round trips exact.
    Other(String),
}

impl Role {
    /// Lowercase name of the role.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
            Role::Other(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from(s.to_string()))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Role::Admin,
            "moderator" => Role::Moderator,
            "user" => Role::User,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl JsonSchema for Role {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("Role")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}
