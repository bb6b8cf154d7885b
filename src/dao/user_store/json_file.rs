//! User store persisting the whole collection as one pretty-printed JSON document.

use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::dao::{
    models::UserCollection,
    storage::{StorageError, StorageResult},
    user_store::UserStore,
};

/// File-backed store. Every save rewrites the full document in place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<Path>,
}

impl JsonFileStore {
    /// Store backed by the document at `path`; the file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self {
            path: Arc::from(path),
        }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStore for JsonFileStore {
    fn load(&self) -> BoxFuture<'static, UserCollection> {
        let path = self.path.clone();
        Box::pin(async move {
            let contents = match tokio::fs::read_to_string(&path).await {
                Ok(contents) => contents,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "user file not found; starting empty");
                    return UserCollection::new();
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to read user file; treating as empty"
                    );
                    return UserCollection::new();
                }
            };

            // Only a document that is not a JSON object fails here; odd
            // records are kept unrecognized by the collection itself.
            match serde_json::from_str::<UserCollection>(&contents) {
                Ok(users) => users,
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "user file is not a JSON object; treating as empty"
                    );
                    UserCollection::new()
                }
            }
        })
    }

    fn save(&self, users: UserCollection) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move {
            // serde_json keeps non-ASCII characters literal and indents by two spaces.
            let document = serde_json::to_string_pretty(&users)
                .map_err(|source| StorageError::Serialize { source })?;

            tokio::fs::write(&path, document)
                .await
                .map_err(|source| StorageError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;

            debug!(path = %path.display(), count = users.len(), "user file saved");
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };

            let metadata = tokio::fs::metadata(&dir).await.map_err(|err| {
                StorageError::unavailable(format!("cannot access `{}`", dir.display()), err)
            })?;

            if metadata.is_dir() {
                Ok(())
            } else {
                Err(StorageError::unavailable(
                    format!("`{}` is not a directory", dir.display()),
                    io::Error::from(ErrorKind::NotADirectory),
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::models::UserEntity;
    use tempfile::tempdir;

    fn user(name: &str, score: i64) -> UserEntity {
        let mut user = UserEntity::new(name, "secret");
        user.best_score = score;
        user
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn corrupted_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_writes_pretty_utf8_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(&path);

        let mut users = UserCollection::new();
        users.insert("과일".into(), user("과일", 12));
        store.save(users).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"과일\""));
        assert!(written.contains("\n  \"과일\": {\n    \"username\""));
    }

    #[tokio::test]
    async fn load_preserves_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(&path);

        let mut users = UserCollection::new();
        for (name, score) in [("zed", 1), ("amy", 2), ("mia", 3)] {
            users.insert(name.into(), user(name, score));
        }
        store.save(users.clone()).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, users);
        let order: Vec<_> = loaded.keys().map(String::as_str).collect();
        assert_eq!(order, ["zed", "amy", "mia"]);
    }

    #[tokio::test]
    async fn saving_what_was_loaded_keeps_the_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(&path);

        let mut users = UserCollection::new();
        users.insert("alice".into(), user("alice", 50));
        users.insert("bob".into(), user("bob", 20));
        store.save(users).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let loaded = store.load().await;
        store.save(loaded).await.unwrap();
        let after = std::fs::read_to_string(&path).unwrap();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn records_of_unexpected_shape_survive_a_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(
            &path,
            r#"{
  "bob": {"username": "bob", "password": "pw", "bestScore": 900, "joinDate": ""},
  "old": {"username": "old", "password": "pw", "bestScore": 12.0, "joinDate": ""},
  "odd": {"username": "odd", "bestScore": "lots"}
}"#,
        )
        .unwrap();
        let store = JsonFileStore::new(&path);

        let mut users = store.load().await;
        assert_eq!(users["bob"].best_score, 900);
        assert_eq!(users["old"].best_score, 12);
        users.insert("alice".into(), UserEntity::new("alice", "pw1"));
        store.save(users).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["bob"]["bestScore"], 900);
        assert_eq!(written["old"]["bestScore"], 12);
        assert_eq!(
            written["odd"],
            serde_json::json!({"username": "odd", "bestScore": "lots"})
        );
        assert_eq!(written["alice"]["password"], "pw1");
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope").join("users.json"));

        let err = store.save(UserCollection::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(store.health_check().await.is_err());
    }

    #[tokio::test]
    async fn health_check_passes_for_existing_directory() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));

        assert!(store.health_check().await.is_ok());
    }
}
