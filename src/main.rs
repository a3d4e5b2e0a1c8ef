//! appcore - prints configuration and user-store information for one
//! environment profile.
//!
//! The profile is chosen on the command line and resolved once, before
//! anything else runs.

use std::{error::Error, process};

use appcore::{
    app_context::AppContext,
    cli::{Cli, CliService, formatting::format_error},
    config::{ConfigResolver, Profile},
    tracing_config,
};
use clap::Parser;
use tracing::{Level, span};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let profile = Profile::resolve(cli.profile, &cli.overrides)?;
    tracing_config::init(&profile.logging)?;

    let _span = span!(Level::INFO, "appcore", profile = %cli.profile).entered();

    let config = ConfigResolver::from_profile(profile)?;
    let context = AppContext::from_resolver(config)?;
    let cli_service = CliService::new(context);

    match cli_service.execute(&cli.command) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
