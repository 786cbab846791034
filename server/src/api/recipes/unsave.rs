use crate::api::ErrorResponse;
use crate::user::DEFAULT_USER;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    delete,
    path = "/api/recipes/saved/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID to unsave")
    ),
    responses(
        (status = 204, description = "Saved association removed (or was never there)"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn unsave_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.unsave_recipe(&DEFAULT_USER, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to unsave recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to remove saved recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
