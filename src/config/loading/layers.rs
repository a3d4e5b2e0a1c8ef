use crate::config::ProfileName;

const BASE: &str = include_str!("../profiles/base.toml");
const DEVELOPMENT: &str = include_str!("../profiles/development.toml");
const TEST: &str = include_str!("../profiles/test.toml");
const STAGING: &str = include_str!("../profiles/staging.toml");
const PRODUCTION: &str = include_str!("../profiles/production.toml");

/// Settings shared by every profile.
pub fn base_layer() -> &'static str {
    BASE
}

/// Settings specific to `name`, applied on top of the base layer.
pub fn profile_layer(name: ProfileName) -> &'static str {
    match name {
        ProfileName::Development => DEVELOPMENT,
        ProfileName::Test => TEST,
        ProfileName::Staging => STAGING,
        ProfileName::Production => PRODUCTION,
    }
}
