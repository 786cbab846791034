use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use skillet_core::matching;
use skillet_core::types::Recipe;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Substring matched against title, description, and ingredients.
    /// Empty or absent matches everything.
    pub q: Option<String>,
    /// Comma-separated tags; a recipe must carry every one of them.
    pub filters: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/search",
    tag = "recipes",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching recipes", body = Vec<Recipe>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let filters: Vec<String> = params
        .filters
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    match state.store.list_recipes().await {
        Ok(recipes) => {
            let results = matching::search_recipes(&recipes, &query, &filters);
            (StatusCode::OK, Json(results)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to search recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to search recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
