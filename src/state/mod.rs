use std::sync::Arc;

use crate::{
    config::AppConfig,
    dao::{user_store::UserStore, users::UserRepository},
};

/// Handle passed to every route.
pub type SharedState = Arc<AppState>;

/// Central application state: the user repository and the runtime configuration.
pub struct AppState {
    users: UserRepository,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: Arc<dyn UserStore>, config: AppConfig) -> SharedState {
        Arc::new(Self {
            users: UserRepository::new(store),
            config,
        })
    }

    /// Repository serializing every access to the user collection.
    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
