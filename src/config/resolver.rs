use serde::Serialize;
use tracing::{info, warn};

use super::{
    AnalyticsConfig, AuthConfig, CacheConfig, ConfigError, ExternalServicesConfig, HttpConfig,
    I18nConfig, LoggingConfig, Profile, ProfileName,
};

/// Read-only view over the profile selected at process start.
///
/// Construction is the only fallible step; every query afterwards is a pure
/// read over the loaded [`Profile`]. The resolver is immutable, so it can be
/// shared freely (e.g. behind an `Arc`) without synchronisation.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    profile: Profile,
}

/// Identity and endpoints of the active environment.
///
/// Holds nothing secret, so it is available in every profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    /// Environment name.
    pub name: String,
    /// Explicit production flag of the profile.
    pub production: bool,
    /// Application version.
    pub version: String,
    /// Build timestamp.
    pub build_date: String,
    /// Base API URL.
    pub api_url: String,
    /// Application URL.
    pub app_url: String,
}

/// Builder for a [`ConfigResolver`] with caller-supplied override layers.
#[derive(Debug, Clone)]
pub struct ResolverBuilder {
    profile: ProfileName,
    overrides: Vec<String>,
}

impl ResolverBuilder {
    /// Adds a TOML override layer. Later layers win over earlier ones.
    pub fn with_override(mut self, layer: impl Into<String>) -> Self {
        self.overrides.push(layer.into());
        self
    }

    /// Adds several TOML override layers in order.
    pub fn with_overrides<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides.extend(layers.into_iter().map(Into::into));
        self
    }

    /// Resolves the profile and builds the resolver.
    ///
    /// # Errors
    /// See [`Profile::resolve`].
    pub fn build(self) -> Result<ConfigResolver, ConfigError> {
        let profile = Profile::resolve(self.profile, &self.overrides)?;
        Ok(ConfigResolver::with_profile(profile))
    }
}

impl ConfigResolver {
    /// Loads the built-in profile `name` without overrides.
    ///
    /// # Errors
    /// See [`Profile::resolve`].
    pub fn load(name: ProfileName) -> Result<Self, ConfigError> {
        Self::builder(name).build()
    }

    /// Starts building a resolver for the built-in profile `name`.
    pub fn builder(name: ProfileName) -> ResolverBuilder {
        ResolverBuilder {
            profile: name,
            overrides: Vec::new(),
        }
    }

    /// Wraps an already assembled profile, e.g. one built in a test.
    ///
    /// # Errors
    /// * `ConfigError::InvalidField` - If the profile fails validation
    pub fn from_profile(profile: Profile) -> Result<Self, ConfigError> {
        profile.validate()?;
        Ok(Self::with_profile(profile))
    }

    fn with_profile(profile: Profile) -> Self {
        let resolver = Self { profile };
        if resolver.profile.logging.enable_console {
            resolver.log_environment_info();
        }
        resolver
    }

    /// Name of the active environment.
    pub fn environment_name(&self) -> &str {
        &self.profile.name
    }

    /// The profile's explicit production flag.
    ///
    /// Not derived from the name: staging builds usually report `true` here
    /// while [`is_staging`](Self::is_staging) is also `true`.
    pub fn is_production(&self) -> bool {
        self.profile.production
    }

    /// Whether the environment is named "development".
    pub fn is_development(&self) -> bool {
        self.environment_name() == ProfileName::Development.as_str()
    }

    /// Whether the environment is named "staging".
    pub fn is_staging(&self) -> bool {
        self.environment_name() == ProfileName::Staging.as_str()
    }

    /// Whether the environment is named "test".
    pub fn is_test(&self) -> bool {
        self.environment_name() == ProfileName::Test.as_str()
    }

    /// Base URL of the backend API.
    pub fn api_url(&self) -> &str {
        &self.profile.api_url
    }

    /// Public URL of the application.
    pub fn app_url(&self) -> &str {
        &self.profile.app_url
    }

    /// Application version.
    pub fn version(&self) -> &str {
        &self.profile.version
    }

    /// Build timestamp.
    pub fn build_date(&self) -> &str {
        &self.profile.build_date
    }

    /// Full URL of an API endpoint.
    ///
    /// Joins the API URL, the API version and `path` with exactly one `/`
    /// between segments, so `"/users"` and `"users"` yield the same URL.
    pub fn api_endpoint(&self, path: &str) -> String {
        let base = self.profile.api_url.trim_end_matches('/');
        let version = self.profile.api_version.trim_matches('/');
        let path = path.strip_prefix('/').unwrap_or(path);

        format!("{base}/{version}/{path}")
    }

    /// Whether the feature flag `name` is switched on.
    ///
    /// Unknown names report `false`.
    pub fn feature_enabled(&self, name: impl AsRef<str>) -> bool {
        self.profile.features.is_enabled(name.as_ref())
    }

    /// Alias of [`feature_enabled`](Self::feature_enabled).
    pub fn has_feature(&self, name: impl AsRef<str>) -> bool {
        self.feature_enabled(name)
    }

    /// Logging settings.
    pub fn logging_config(&self) -> &LoggingConfig {
        &self.profile.logging
    }

    /// Analytics settings.
    pub fn analytics_config(&self) -> &AnalyticsConfig {
        &self.profile.analytics
    }

    /// Cache settings.
    pub fn cache_config(&self) -> &CacheConfig {
        &self.profile.cache
    }

    /// Authentication settings.
    pub fn auth_config(&self) -> &AuthConfig {
        &self.profile.auth
    }

    /// HTTP client settings.
    pub fn http_config(&self) -> &HttpConfig {
        &self.profile.http
    }

    /// Third-party service credentials.
    pub fn external_services_config(&self) -> &ExternalServicesConfig {
        &self.profile.external
    }

    /// Localisation settings.
    pub fn i18n_config(&self) -> &I18nConfig {
        &self.profile.i18n
    }

    /// Identity and endpoints of the environment.
    pub fn environment_info(&self) -> EnvironmentInfo {
        EnvironmentInfo {
            name: self.profile.name.clone(),
            production: self.profile.production,
            version: self.profile.version.clone(),
            build_date: self.profile.build_date.clone(),
            api_url: self.profile.api_url.clone(),
            app_url: self.profile.app_url.clone(),
        }
    }

    /// The whole profile, for debugging surfaces.
    ///
    /// Returns `None` and logs a warning when
    /// [`is_production`](Self::is_production) is true, so production
    /// credentials never reach a debug view.
    pub fn full_profile_snapshot(&self) -> Option<&Profile> {
        if self.is_production() {
            warn!(
                environment = %self.profile.name,
                "full settings are not exposed in production builds"
            );
            return None;
        }
        Some(&self.profile)
    }

    fn log_environment_info(&self) {
        info!(
            environment = %self.profile.name,
            production = self.profile.production,
            version = %self.profile.version,
            api_url = %self.profile.api_url,
            app_url = %self.profile.app_url,
            build_date = %self.profile.build_date,
            "environment configuration"
        );
    }
}
