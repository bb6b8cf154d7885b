use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

/// Browsable API reference for the signup, login, score and ranking calls.
///
/// The interactive page lives under `/docs` and loads the raw OpenAPI JSON
/// from `/api-doc/openapi.json`, which client generators can fetch directly.
pub fn router(state: SharedState) -> Router<SharedState> {
    let ui: Router<SharedState> = SwaggerUi::new("/docs")
        .url("/api-doc/openapi.json", ApiDoc::openapi())
        .into();

    ui.with_state(state)
}
