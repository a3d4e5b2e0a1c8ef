use std::{rc::Rc, sync::Arc};

use tracing::debug;

use crate::{
    Result,
    config::{ConfigResolver, Feature, ProfileName},
    store::ReactiveStore,
    users::{User, demo_users},
};

/// The application's shared state, constructed once at start-up and passed
/// to every consumer that needs it.
///
/// There are no global instances: whoever builds the context decides which
/// profile is active and what the store starts with.
pub struct AppContext {
    /// Users shown by the user list.
    pub users: Rc<ReactiveStore<User>>,
    /// Active configuration profile.
    pub config: Arc<ConfigResolver>,
}

impl AppContext {
    /// Resolves `profile` with `overrides` and builds the user store.
    ///
    /// # Errors
    /// Returns error if the profile cannot be resolved
    pub fn new(profile: ProfileName, overrides: &[String]) -> Result<Self> {
        let config = ConfigResolver::builder(profile)
            .with_overrides(overrides.iter().cloned())
            .build()?;

        Self::from_resolver(config)
    }

    /// Builds the user store for an already loaded resolver.
    ///
    /// The store is seeded with [`demo_users`] when the profile enables the
    /// `mockApi` feature and starts empty otherwise.
    ///
    /// # Errors
    /// Returns error if the seed holds duplicate ids
    pub fn from_resolver(config: ConfigResolver) -> Result<Self> {
        let seed = if config.feature_enabled(Feature::MockApi) {
            demo_users()
        } else {
            Vec::new()
        };
        debug!(
            environment = config.environment_name(),
            seeded = seed.len(),
            "building application context"
        );

        let users = ReactiveStore::new(seed)?;
        Ok(Self::with_parts(users, config))
    }

    /// Assembles a context from already constructed parts.
    pub fn with_parts(users: ReactiveStore<User>, config: ConfigResolver) -> Self {
        Self {
            users: Rc::new(users),
            config: Arc::new(config),
        }
    }
}
