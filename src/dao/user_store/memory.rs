use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{
    models::UserCollection,
    storage::{StorageError, StorageResult},
    user_store::UserStore,
};

/// Volatile store used by tests and local experiments.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<UserCollection>>,
    saves: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
}

impl InMemoryUserStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing collection.
    pub fn with_users(users: UserCollection) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail, mimicking a full disk.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of the currently stored collection.
    pub async fn snapshot(&self) -> UserCollection {
        self.users.read().await.clone()
    }
}

impl UserStore for InMemoryUserStore {
    fn load(&self) -> BoxFuture<'static, UserCollection> {
        let users = self.users.clone();
        Box::pin(async move { users.read().await.clone() })
    }

    fn save(&self, users: UserCollection) -> BoxFuture<'static, StorageResult<()>> {
        let slot = self.users.clone();
        let saves = self.saves.clone();
        let fail = self.fail_saves.load(Ordering::SeqCst);
        Box::pin(async move {
            if fail {
                return Err(StorageError::unavailable(
                    "in-memory save disabled".into(),
                    io::Error::other("save failure injected"),
                ));
            }
            *slot.write().await = users;
            saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
