/// JSON document on disk.
pub mod json_file;
/// In-process store used by tests.
pub mod memory;

use crate::dao::{models::UserCollection, storage::StorageResult};
use futures::future::BoxFuture;

pub use self::json_file::JsonFileStore;
pub use self::memory::InMemoryUserStore;

/// Abstraction over the medium holding the user collection.
///
/// Stores only know how to move the whole collection in and out; callers are
/// responsible for serializing read-modify-write cycles.
pub trait UserStore: Send + Sync {
    /// Read the whole collection. Missing or unreadable data yields an empty collection.
    fn load(&self) -> BoxFuture<'static, UserCollection>;
    /// Overwrite the persisted collection with `users`.
    fn save(&self, users: UserCollection) -> BoxFuture<'static, StorageResult<()>>;
    /// Report whether a save could currently reach the backing medium.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
