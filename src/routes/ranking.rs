use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::ranking::RankingEntry, services::ranking_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/api/ranking",
    tag = "ranking",
    responses((status = 200, description = "Best players, highest score first", body = [RankingEntry]))
)]
/// Return the leaderboard.
pub async fn get_rankings(State(state): State<SharedState>) -> Json<Vec<RankingEntry>> {
    Json(ranking_service::get_rankings(&state).await)
}

/// Configure the ranking routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/ranking", get(get_rankings))
}
