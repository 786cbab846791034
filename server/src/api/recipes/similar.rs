use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use skillet_core::matching;
use skillet_core::types::Recipe;
use utoipa::IntoParams;

const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SimilarParams {
    /// Maximum number of results (default: 3)
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/similar",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID"),
        SimilarParams
    ),
    responses(
        (status = 200, description = "Recipes ranked by shared tags; empty for an unknown id", body = Vec<Recipe>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn similar_recipes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<SimilarParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    match state.store.list_recipes().await {
        Ok(recipes) => {
            let results = matching::similar_recipes(&recipes, id, limit);
            (StatusCode::OK, Json(results)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch similar recipes for {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch similar recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
