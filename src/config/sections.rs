use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Analytics tracker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Whether trackers are loaded at all.
    pub enabled: bool,
    /// Google Analytics measurement id.
    pub google_analytics_id: String,
    /// Yandex Metrika counter id.
    pub yandex_metrika_id: String,
}

/// Response cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    /// Whether responses are cached.
    pub enabled: bool,
    /// Time-to-live of a cache entry, in milliseconds.
    pub ttl: u64,
}

/// Authentication storage keys and routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Storage key of the access token.
    pub token_key: String,
    /// Storage key of the refresh token.
    pub refresh_token_key: String,
    /// Access token lifetime, in seconds.
    pub token_expiry: u64,
    /// Route of the login page.
    pub login_url: String,
    /// Route of the logout action.
    pub logout_url: String,
}

/// Outgoing HTTP request behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    /// Request timeout, in milliseconds.
    pub timeout: u64,
    /// How many times a failed request is retried.
    pub retry_attempts: u32,
    /// Pause between retries, in milliseconds.
    pub retry_delay: u64,
}

/// Localisation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    /// Language used when the user has not chosen one.
    pub default_language: String,
    /// Languages the application ships translations for.
    pub available_languages: BTreeSet<String>,
    /// Language used for strings missing from the active translation.
    pub fallback_language: String,
}

impl I18nConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, language) in [
            ("i18n.defaultLanguage", &self.default_language),
            ("i18n.fallbackLanguage", &self.fallback_language),
        ] {
            if !self.available_languages.contains(language) {
                return Err(ConfigError::invalid_field(
                    field,
                    format!("'{language}' is not in i18n.availableLanguages"),
                ));
            }
        }
        Ok(())
    }
}
