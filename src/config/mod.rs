//! Environment profiles and the resolver that serves them.
//!
//! A [`Profile`] is one complete, typed configuration record. Profiles are
//! assembled from embedded TOML layers (shared base, named profile, caller
//! overrides) and served read-only by a [`ConfigResolver`] that is built
//! once at process start.

mod error;
mod external;
mod features;
mod loading;
mod logging;
mod profile_name;
mod resolver;
mod sections;


pub use error::ConfigError;
pub use external::{ExternalServicesConfig, FirebaseConfig};
pub use features::{Feature, FeatureFlags};
pub use logging::{LogLevel, LoggingConfig};
pub use profile_name::ProfileName;
pub use resolver::{ConfigResolver, EnvironmentInfo, ResolverBuilder};
pub use sections::{AnalyticsConfig, AuthConfig, CacheConfig, HttpConfig, I18nConfig};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A complete configuration profile.
///
/// Field names serialize in camelCase so the embedded TOML layers and the
/// JSON debug output share one vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Environment name, e.g. "staging".
    pub name: String,

    /// Whether the build is optimised and hardened for production use.
    ///
    /// Independent of `name`: a staging profile may set this to `true`.
    pub production: bool,

    /// Application version string.
    pub version: String,

    /// RFC 3339 timestamp of when the profile was resolved, unless a layer
    /// pins it.
    pub build_date: String,

    /// Base URL of the backend API, without the version segment.
    pub api_url: String,

    /// API version segment inserted between `api_url` and endpoint paths.
    pub api_version: String,

    /// Public URL of the application itself.
    pub app_url: String,

    /// Log verbosity and sinks.
    pub logging: LoggingConfig,

    /// Analytics trackers.
    pub analytics: AnalyticsConfig,

    /// Feature toggles.
    pub features: FeatureFlags,

    /// Response cache settings.
    pub cache: CacheConfig,

    /// Token storage keys and auth routes.
    pub auth: AuthConfig,

    /// Outgoing request behaviour.
    pub http: HttpConfig,

    /// Credentials for third-party services.
    pub external: ExternalServicesConfig,

    /// Localisation settings.
    pub i18n: I18nConfig,
}

impl Profile {
    /// Checks cross-field constraints that the type system does not cover.
    ///
    /// # Errors
    /// * `ConfigError::InvalidField` - If a field holds an unusable value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid_field("name", "must not be empty"));
        }

        if self.api_url.trim().is_empty() {
            return Err(ConfigError::invalid_field("apiUrl", "must not be empty"));
        }

        if self.api_version.trim().trim_matches('/').is_empty() {
            return Err(ConfigError::invalid_field("apiVersion", "must not be empty"));
        }

        self.i18n.validate()
    }
}
