mod layers;
mod merging;

use chrono::{SecondsFormat, Utc};
use toml::{Table, Value};
use tracing::debug;

use super::{ConfigError, Profile, ProfileName};
use layers::{base_layer, profile_layer};
use merging::merge_layers;

const BUILD_DATE_KEY: &str = "buildDate";

impl Profile {
    /// Assembles the built-in profile `name` with optional override layers.
    ///
    /// Layers are merged in increasing precedence: the shared base layer,
    /// the profile's own layer, then each entry of `overrides` in order.
    /// Tables merge key by key; scalars and arrays from a higher layer
    /// replace the lower value. When no layer sets `buildDate`, it is
    /// stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An override layer is not valid TOML
    /// - The merged layers are missing fields or hold mistyped values
    /// - The resulting profile fails [`Profile::validate`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use appcore::config::{Profile, ProfileName};
    ///
    /// let overrides = vec![r#"apiUrl = "http://127.0.0.1:8080/api""#.to_string()];
    /// let profile = Profile::resolve(ProfileName::Development, &overrides).unwrap();
    /// assert_eq!(profile.api_url, "http://127.0.0.1:8080/api");
    /// ```
    pub fn resolve(name: ProfileName, overrides: &[String]) -> Result<Profile, ConfigError> {
        let mut layers = Vec::with_capacity(overrides.len() + 2);
        layers.push(parse_layer(base_layer(), "base")?);
        layers.push(parse_layer(profile_layer(name), name.as_str())?);

        for (index, source) in overrides.iter().enumerate() {
            layers.push(parse_layer(source, &format!("override #{}", index + 1))?);
        }

        let mut merged = merge_layers(layers);
        stamp_build_date(&mut merged);

        let profile: Profile = merged
            .try_into()
            .map_err(|e| ConfigError::Deserialization {
                details: e.to_string(),
            })?;
        profile.validate()?;

        debug!(
            profile = %name,
            overrides = overrides.len(),
            "resolved configuration profile"
        );

        Ok(profile)
    }
}

fn parse_layer(source: &str, layer: &str) -> Result<Value, ConfigError> {
    let table: Table =
        toml::from_str(source).map_err(|e| ConfigError::toml_parse(e, layer))?;
    Ok(Value::Table(table))
}

fn stamp_build_date(merged: &mut Value) {
    if let Value::Table(table) = merged {
        if !table.contains_key(BUILD_DATE_KEY) {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            table.insert(BUILD_DATE_KEY.to_string(), Value::String(now));
        }
    }
}
