use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    dao::{
        models::{UserCollection, UserEntity},
        storage::StorageResult,
        user_store::UserStore,
    },
    error::{AccountError, ServiceError},
};

/// Data Access Object running every account operation as one locked
/// load / mutate / save cycle over a [`UserStore`].
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn UserStore>,
    gate: Arc<Mutex<()>>,
}

impl UserRepository {
    /// Repository over `store` with its own write gate.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Fresh copy of the whole collection.
    pub async fn users(&self) -> UserCollection {
        let _gate = self.gate.lock().await;
        self.store.load().await
    }

    /// Load the collection, let `mutate` edit it and save it back when the
    /// closure reports a change. The gate is held for the whole cycle so
    /// concurrent writers never work on stale snapshots.
    async fn modify<T, F>(&self, mutate: F) -> StorageResult<T>
    where
        F: FnOnce(&mut UserCollection) -> (T, bool),
    {
        let _gate = self.gate.lock().await;
        let mut users = self.store.load().await;
        let (outcome, changed) = mutate(&mut users);
        if changed {
            self.store.save(users).await?;
        }
        Ok(outcome)
    }

    /// Register a new user with a zero best score.
    ///
    /// Presence of both fields is checked by the caller.
    pub async fn signup(&self, username: &str, password: &str) -> Result<(), ServiceError> {
        let outcome = self
            .modify(|users| {
                if users.contains_key(username) {
                    return (Err(AccountError::DuplicateUsername), false);
                }
                users.insert(username.to_owned(), UserEntity::new(username, password));
                (Ok(()), true)
            })
            .await?;

        match outcome {
            Ok(()) => {
                info!(username, "user signed up");
                Ok(())
            }
            Err(reason) => {
                debug!(username, "signup rejected: username taken");
                Err(reason.into())
            }
        }
    }

    /// Return the stored record when `password` matches exactly.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserEntity, ServiceError> {
        let users = self.users().await;
        match users.get(username) {
            Some(user) if user.password == password => {
                info!(username, "user logged in");
                Ok(user.clone())
            }
            _ => {
                debug!(username, "login rejected");
                Err(AccountError::InvalidCredentials.into())
            }
        }
    }

    /// Raise the user's best score when `score` beats it.
    ///
    /// Returns whether the record changed. Unknown users are ignored.
    pub async fn submit_score(&self, username: &str, score: i64) -> Result<bool, ServiceError> {
        let updated = self
            .modify(|users| match users.get_mut(username) {
                Some(user) if score > user.best_score => {
                    user.best_score = score;
                    (true, true)
                }
                _ => (false, false),
            })
            .await?;

        if updated {
            info!(username, score, "best score updated");
        }
        Ok(updated)
    }

    /// Delegate to the store's health check.
    pub async fn health_check(&self) -> StorageResult<()> {
        self.store.health_check().await
    }
}
