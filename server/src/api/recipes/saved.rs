use crate::api::ErrorResponse;
use crate::user::DEFAULT_USER;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use skillet_core::types::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes/saved",
    tag = "recipes",
    responses(
        (status = 200, description = "The user's saved recipes, most recently saved first", body = Vec<Recipe>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_saved_recipes(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.saved_recipes(&DEFAULT_USER).await {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list saved recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch saved recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
