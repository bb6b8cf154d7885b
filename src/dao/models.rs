use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Number, Value};
use tracing::warn;

/// User record as persisted in the backing JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    /// Unique key of the record, duplicated from the collection key.
    pub username: String,
    /// Password stored in clear text.
    pub password: String,
    /// Highest score ever submitted for this user.
    #[serde(default, deserialize_with = "whole_number")]
    pub best_score: i64,
    /// Registration date; never populated by the server.
    #[serde(default)]
    pub join_date: String,
    /// Keys written by other tools, carried through untouched on save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserEntity {
    /// Fresh record created on signup.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            best_score: 0,
            join_date: String::new(),
            extra: Map::new(),
        }
    }
}

/// Accept `12` as well as `12.0`, which older servers wrote for float scores.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    number
        .as_i64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0 && value.abs() < i64::MAX as f64)
                .map(|value| value as i64)
        })
        .ok_or_else(|| D::Error::custom(format!("expected a whole number, got {number}")))
}

/// One entry of the user document.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StoredUser {
    /// Record matching [`UserEntity`].
    Known(UserEntity),
    /// Record the server cannot interpret; written back exactly as read.
    Unrecognized(Value),
}

/// Whole user collection keyed by username, kept in file order.
///
/// Iteration order matters: it is the tie-break order of the ranking.
/// Unrecognized records still occupy their username but are invisible to
/// lookups and iteration.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct UserCollection {
    records: IndexMap<String, StoredUser>,
}

impl UserCollection {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records, recognized or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `username` is taken by any record.
    pub fn contains_key(&self, username: &str) -> bool {
        self.records.contains_key(username)
    }

    /// Recognized user stored under `username`.
    pub fn get(&self, username: &str) -> Option<&UserEntity> {
        match self.records.get(username)? {
            StoredUser::Known(user) => Some(user),
            StoredUser::Unrecognized(_) => None,
        }
    }

    /// Mutable access to a recognized user.
    pub fn get_mut(&mut self, username: &str) -> Option<&mut UserEntity> {
        match self.records.get_mut(username)? {
            StoredUser::Known(user) => Some(user),
            StoredUser::Unrecognized(_) => None,
        }
    }

    /// Add or replace the record stored under `username`.
    pub fn insert(&mut self, username: String, user: UserEntity) {
        self.records.insert(username, StoredUser::Known(user));
    }

    /// All usernames in collection order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.records.keys()
    }

    /// Recognized users in collection order.
    pub fn values(&self) -> impl Iterator<Item = &UserEntity> {
        self.records.values().filter_map(|record| match record {
            StoredUser::Known(user) => Some(user),
            StoredUser::Unrecognized(_) => None,
        })
    }
}

impl Index<&str> for UserCollection {
    type Output = UserEntity;

    fn index(&self, username: &str) -> &UserEntity {
        self.get(username)
            .unwrap_or_else(|| panic!("no recognized user `{username}`"))
    }
}

impl FromIterator<(String, UserEntity)> for UserCollection {
    fn from_iter<I: IntoIterator<Item = (String, UserEntity)>>(iter: I) -> Self {
        let mut users = Self::new();
        for (username, user) in iter {
            users.insert(username, user);
        }
        users
    }
}

impl<'de> Deserialize<'de> for UserCollection {
    /// Records are interpreted one by one so a single odd entry never
    /// invalidates the rest of the document.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let records = raw
            .into_iter()
            .map(|(username, value)| {
                let record = match UserEntity::deserialize(&value) {
                    Ok(user) => StoredUser::Known(user),
                    Err(err) => {
                        warn!(%username, error = %err, "keeping unrecognized user record as is");
                        StoredUser::Unrecognized(value)
                    }
                };
                (username, record)
            })
            .collect();
        Ok(Self { records })
    }
}
