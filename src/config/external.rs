use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Client-side credentials for third-party services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalServicesConfig {
    /// Google Maps JavaScript API key.
    pub google_maps_api_key: String,
    /// Stripe publishable key.
    pub stripe_public_key: String,
    /// Firebase web app registration.
    pub firebase_config: FirebaseConfig,
}

/// Firebase web app registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    /// Browser API key.
    pub api_key: String,
    /// Auth domain, usually `<project>.firebaseapp.com`.
    pub auth_domain: String,
    /// Project identifier.
    pub project_id: String,
    /// Cloud Storage bucket.
    pub storage_bucket: String,
    /// Cloud Messaging sender id.
    pub messaging_sender_id: String,
    /// Registered web app id.
    pub app_id: String,
}
