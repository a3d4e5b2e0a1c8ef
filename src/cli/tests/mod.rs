//! Unit tests for CLI module
//!
//! Runs commands against in-memory contexts; nothing is printed.

#![allow(clippy::unwrap_used)]

use clap::Parser;

use crate::{
    app_context::AppContext,
    cli::{Cli, CliError, CliService, Command},
    config::ProfileName,
    store::StoreError,
};

fn service(profile: ProfileName) -> CliService {
    CliService::new(AppContext::new(profile, &[]).unwrap())
}

#[test]
fn parses_profile_overrides_and_subcommand() {
    let cli = Cli::try_parse_from([
        "appcore",
        "--profile",
        "staging",
        "--set",
        "version = \"9\"",
        "endpoint",
        "/users",
    ])
    .unwrap();

    assert_eq!(cli.profile, ProfileName::Staging);
    assert_eq!(cli.overrides, vec!["version = \"9\"".to_string()]);
    assert_eq!(
        cli.command,
        Command::Endpoint {
            path: "/users".to_string()
        }
    );
}

#[test]
fn profile_defaults_to_development() {
    let cli = Cli::try_parse_from(["appcore", "info"]).unwrap();

    assert_eq!(cli.profile, ProfileName::Development);
}

#[test]
fn unknown_profile_is_rejected_at_parse_time() {
    let result = Cli::try_parse_from(["appcore", "--profile", "qa", "info"]);

    assert!(result.is_err());
}

#[test]
fn info_lists_environment_identity() {
    let output = service(ProfileName::Staging).execute(&Command::Info).unwrap();

    assert!(output.contains("staging"));
    assert!(output.contains("1.0.0-staging"));
    assert!(output.contains("https://staging-api.your-domain.com/api"));
}

#[test]
fn feature_reports_flag_state() {
    let service = service(ProfileName::Development);

    let enabled = service
        .execute(&Command::Feature {
            name: "mockApi".to_string(),
        })
        .unwrap();
    let unknown = service
        .execute(&Command::Feature {
            name: "doesNotExist".to_string(),
        })
        .unwrap();

    assert_eq!(enabled, "true");
    assert_eq!(unknown, "false");
}

#[test]
fn endpoint_composes_url() {
    let output = service(ProfileName::Production)
        .execute(&Command::Endpoint {
            path: "users".to_string(),
        })
        .unwrap();

    assert_eq!(output, "https://api.your-domain.com/api/v1/users");
}

#[test]
fn settings_are_json_outside_production() {
    let output = service(ProfileName::Test).execute(&Command::Settings).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["name"], "test");
}

#[test]
fn settings_are_withheld_in_production() {
    let output = service(ProfileName::Production)
        .execute(&Command::Settings)
        .unwrap();

    assert!(output.contains("not available in production"));
    assert!(serde_json::from_str::<serde_json::Value>(&output).is_err());
}

#[test]
fn schema_is_valid_json() {
    let output = service(ProfileName::Development)
        .execute(&Command::Schema)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(json["properties"]["apiUrl"].is_object());
}

#[test]
fn users_applies_changes_in_order() {
    let service = service(ProfileName::Development);

    let output = service
        .execute(&Command::Users {
            add: vec![
                "Anna Smirnova:anna@example.com:moderator".to_string(),
                "10:Oleg:oleg@example.com:auditor".to_string(),
            ],
            remove: vec![2, 77],
        })
        .unwrap();

    assert!(output.contains("3 change(s) published"));
    assert!(output.contains("No user with id 77"));
    assert!(output.contains("anna@example.com"));
    assert!(output.contains("auditor"));
    assert!(!output.contains("petr@example.com"));
}

#[test]
fn users_rejects_duplicate_id() {
    let error = service(ProfileName::Development)
        .execute(&Command::Users {
            add: vec!["1:Clone:clone@example.com:user".to_string()],
            remove: Vec::new(),
        })
        .unwrap_err();

    assert!(matches!(
        error,
        CliError::Store(StoreError::DuplicateId { ref id }) if id == "1"
    ));
}

#[test]
fn users_rejects_malformed_entry() {
    let error = service(ProfileName::Test)
        .execute(&Command::Users {
            add: vec!["just-a-name".to_string()],
            remove: Vec::new(),
        })
        .unwrap_err();

    assert!(matches!(error, CliError::InvalidArguments(_)));
}

#[test]
fn production_store_starts_empty() {
    let output = service(ProfileName::Production)
        .execute(&Command::Users {
            add: vec!["Root:root@example.com:admin".to_string()],
            remove: Vec::new(),
        })
        .unwrap();

    assert!(output.contains("1 change(s) published"));
    assert!(output.contains("root@example.com"));
}
