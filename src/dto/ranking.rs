use serde::Serialize;
use utoipa::ToSchema;

/// One leaderboard line; never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RankingEntry {
    /// Player name.
    pub username: String,
    /// Best score of the player.
    pub score: i64,
}
