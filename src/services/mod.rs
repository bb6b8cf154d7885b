/// Signup, login and score submission workflows.
pub mod account_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Leaderboard computation.
pub mod ranking_service;
