//! appcore - Application state and configuration core.
//!
//! Two independent pieces that view code builds on:
//!
//! - [`store::ReactiveStore`], an observable in-memory record collection
//!   that publishes an immutable snapshot on every change
//! - [`config::ConfigResolver`], a read-only view over one environment
//!   profile assembled from layered TOML settings
//!
//! Both are constructed explicitly at start-up and passed to consumers,
//! usually bundled in an [`app_context::AppContext`].
//!
//! # Quick Start
//!
//! ```rust
//! use appcore::config::{ConfigResolver, ProfileName};
//! use appcore::store::ReactiveStore;
//! use appcore::users::{Role, User, demo_users};
//!
//! let config = ConfigResolver::load(ProfileName::Staging).unwrap();
//! assert!(config.is_production());
//! assert_eq!(config.api_endpoint("/users"), config.api_endpoint("users"));
//!
//! let users = ReactiveStore::new(demo_users()).unwrap();
//! let subscription = users.observe(|snapshot| println!("{} users", snapshot.len()));
//! users.add(User::new(4, "Olga", "olga@example.com", Role::User)).unwrap();
//! subscription.cancel();
//! ```

/// Crate-level error type and result alias.
pub mod core;

/// Reactive record store with explicit subscriptions.
pub mod store;

/// The user record held by the application store.
pub mod users;

/// Environment profiles and the configuration resolver.
pub mod config;

/// Explicitly constructed container for the store and the resolver.
pub mod app_context;

/// Command-line interface for inspecting profiles and users.
pub mod cli;

/// Tracing subscriber setup driven by the active profile.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{AppError, Result};
