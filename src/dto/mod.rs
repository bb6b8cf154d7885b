/// Signup, login and score payloads.
pub mod account;
/// Health check payload.
pub mod health;
/// Leaderboard payload.
pub mod ranking;
