//! Account workflows: signup, login and best-score submission.

use validator::Validate;

use crate::{
    dto::account::{
        CredentialsRequest, LoginResponse, MessageResponse, ScoreRequest, ScoreResponse,
        UserProfile,
    },
    error::{AccountError, ServiceError},
    state::SharedState,
};

/// Create an account after checking both credentials are present.
pub async fn signup(
    state: &SharedState,
    request: CredentialsRequest,
) -> Result<MessageResponse, ServiceError> {
    request.validate().map_err(|_| AccountError::MissingFields)?;

    state
        .users()
        .signup(&request.username, &request.password)
        .await?;
    Ok(MessageResponse::ok("Signup successful"))
}

/// Check credentials and return the stored profile.
pub async fn login(
    state: &SharedState,
    request: CredentialsRequest,
) -> Result<LoginResponse, ServiceError> {
    let user = state
        .users()
        .login(&request.username, &request.password)
        .await?;

    Ok(LoginResponse {
        success: true,
        message: "Login successful".into(),
        user: UserProfile::from_entity(user, state.config().expose_password()),
    })
}

/// Record a finished game. Always succeeds unless persisting fails.
pub async fn submit_score(
    state: &SharedState,
    request: ScoreRequest,
) -> Result<ScoreResponse, ServiceError> {
    let updated = match request.score {
        Some(score) => state.users().submit_score(&request.username, score).await?,
        None => false,
    };

    Ok(ScoreResponse {
        success: true,
        updated,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::user_store::InMemoryUserStore,
        services::ranking_service,
        state::AppState,
    };

    fn state_with(config: AppConfig) -> (SharedState, InMemoryUserStore) {
        let store = InMemoryUserStore::new();
        (AppState::new(Arc::new(store.clone()), config), store)
    }

    fn credentials(username: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    fn score(username: &str, score: i64) -> ScoreRequest {
        ScoreRequest {
            username: username.into(),
            score: Some(score),
        }
    }

    fn rejection<T: std::fmt::Debug>(result: Result<T, ServiceError>) -> AccountError {
        match result.unwrap_err() {
            ServiceError::Rejected(reason) => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_fields_are_rejected_without_creating_records() {
        let (state, store) = state_with(AppConfig::default());

        for (username, password) in [("", "pw"), ("alice", ""), ("", "")] {
            let result = signup(&state, credentials(username, password)).await;
            assert_eq!(rejection(result), AccountError::MissingFields);
        }
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn alice_plays_a_couple_of_games() {
        let (state, _) = state_with(AppConfig::default());

        let created = signup(&state, credentials("alice", "pw1")).await.unwrap();
        assert!(created.success);
        assert_eq!(created.message, "Signup successful");

        let duplicate = signup(&state, credentials("alice", "pw2")).await;
        assert_eq!(rejection(duplicate), AccountError::DuplicateUsername);

        let logged_in = login(&state, credentials("alice", "pw1")).await.unwrap();
        assert!(logged_in.success);
        assert_eq!(logged_in.user.best_score, 0);
        assert_eq!(logged_in.user.password.as_deref(), Some("pw1"));

        assert!(submit_score(&state, score("alice", 50)).await.unwrap().updated);
        assert!(!submit_score(&state, score("alice", 30)).await.unwrap().updated);

        let rankings = ranking_service::get_rankings(&state).await;
        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].username, "alice");
        assert_eq!(rankings[0].score, 50);
    }

    #[tokio::test]
    async fn login_can_hide_the_password() {
        let (state, _) = state_with(AppConfig::default().with_expose_password(false));
        signup(&state, credentials("alice", "pw1")).await.unwrap();

        let logged_in = login(&state, credentials("alice", "pw1")).await.unwrap();
        assert!(logged_in.user.password.is_none());
    }

    #[tokio::test]
    async fn missing_score_is_not_an_update() {
        let (state, store) = state_with(AppConfig::default());
        signup(&state, credentials("alice", "pw1")).await.unwrap();

        let response = submit_score(
            &state,
            ScoreRequest {
                username: "alice".into(),
                score: None,
            },
        )
        .await
        .unwrap();

        assert!(response.success);
        assert!(!response.updated);
        assert_eq!(store.snapshot().await["alice"].best_score, 0);
    }

    #[tokio::test]
    async fn unknown_user_score_reports_success_without_update() {
        let (state, store) = state_with(AppConfig::default());

        let response = submit_score(&state, score("ghost", 10)).await.unwrap();
        assert!(response.success);
        assert!(!response.updated);
        assert!(store.snapshot().await.is_empty());
    }
}
