use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Fruit Catcher Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::account::signup,
        crate::routes::account::login,
        crate::routes::account::submit_score,
        crate::routes::ranking::get_rankings,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::account::CredentialsRequest,
            crate::dto::account::ScoreRequest,
            crate::dto::account::MessageResponse,
            crate::dto::account::LoginResponse,
            crate::dto::account::UserProfile,
            crate::dto::account::ScoreResponse,
            crate::dto::ranking::RankingEntry,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "account", description = "Signup, login and score submission"),
        (name = "ranking", description = "Leaderboard"),
    )
)]
pub struct ApiDoc;
