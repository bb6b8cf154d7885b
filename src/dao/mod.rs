/// Persisted record definitions.
pub mod models;
/// Storage error types shared by every backend.
pub mod storage;
/// Backends able to load and save the whole user collection.
pub mod user_store;
/// Account operations serialized over a user store.
pub mod users;
