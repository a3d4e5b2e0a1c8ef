use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Name of one of the built-in profiles.
///
/// Chosen once at process start; the set is closed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    /// Local development.
    #[default]
    Development,
    /// Automated test runs.
    Test,
    /// Pre-release server.
    Staging,
    /// Live deployment.
    Production,
}

impl ProfileName {
    /// Every built-in profile, in promotion order.
    pub const ALL: [ProfileName; 4] = [
        ProfileName::Development,
        ProfileName::Test,
        ProfileName::Staging,
        ProfileName::Production,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileName::Development => "development",
            ProfileName::Test => "test",
            ProfileName::Staging => "staging",
            ProfileName::Production => "production",
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "development" | "dev" => Ok(ProfileName::Development),
            "test" => Ok(ProfileName::Test),
            "staging" => Ok(ProfileName::Staging),
            "production" | "prod" => Ok(ProfileName::Production),
            other => Err(ConfigError::UnknownProfile {
                name: other.to_string(),
            }),
        }
    }
}
