use std::{collections::BTreeMap, fmt};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Feature toggles shipped with every built-in profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Dark colour scheme.
    DarkMode,
    /// In-app notifications.
    Notifications,
    /// Unreleased functionality.
    ExperimentalFeatures,
    /// Developer debug panel.
    DebugPanel,
    /// Serve canned data instead of calling the API.
    MockApi,
}

impl Feature {
    /// Every known feature.
    pub const ALL: [Feature; 5] = [
        Feature::DarkMode,
        Feature::Notifications,
        Feature::ExperimentalFeatures,
        Feature::DebugPanel,
        Feature::MockApi,
    ];

    /// Flag name as it appears in profile layers.
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::DarkMode => "darkMode",
            Feature::Notifications => "notifications",
            Feature::ExperimentalFeatures => "experimentalFeatures",
            Feature::DebugPanel => "debugPanel",
            Feature::MockApi => "mockApi",
        }
    }
}

impl AsRef<str> for Feature {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named boolean toggles.
///
/// Lookups of names that are not present report `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeMap<String, bool>);

impl FeatureFlags {
    /// Whether the flag `name` is present and switched on.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    /// All flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, enabled)| (name.as_str(), *enabled))
    }

    /// Number of declared flags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no flags are declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, enabled)| (name.into(), enabled))
                .collect(),
        )
    }
}
