use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::models::UserEntity;

/// Username/password pair sent to the signup and login endpoints.
///
/// Absent fields deserialize as empty strings so that presence checks are
/// reported through the API rather than as a rejected body.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsRequest {
    /// Account name; required for signup.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,
    /// Clear-text password; required for signup.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Best-score submission for a user.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreRequest {
    /// Player the score belongs to.
    #[serde(default)]
    pub username: String,
    /// Score reached in the finished game. Missing scores never update anything.
    #[serde(default)]
    pub score: Option<i64>,
}

/// Outcome of an operation that only reports a message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Whether the operation went through.
    pub success: bool,
    /// Human readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Successful outcome carrying `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Successful login payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Always `true`; failures use [`MessageResponse`].
    pub success: bool,
    /// Human readable outcome.
    pub message: String,
    /// Stored record of the logged-in user.
    pub user: UserProfile,
}

/// Stored user record as returned to the client after login.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Account name.
    pub username: String,
    /// Plaintext password, echoed unless disabled in configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Highest score submitted so far.
    pub best_score: i64,
    /// Registration date, empty in practice.
    pub join_date: String,
    /// Any other keys found in the stored record.
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Project a stored record, keeping the password only when `expose_password` is set.
    pub fn from_entity(user: UserEntity, expose_password: bool) -> Self {
        Self {
            username: user.username,
            password: expose_password.then_some(user.password),
            best_score: user.best_score,
            join_date: user.join_date,
            extra: user.extra,
        }
    }
}

/// Result of a score submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreResponse {
    /// Always `true` unless the user file could not be written.
    pub success: bool,
    /// Whether the submitted score became the new best score.
    pub updated: bool,
}
