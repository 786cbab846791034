use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use skillet_core::ai;
use skillet_core::types::RecipeIdea;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SuggestParams {
    /// Free-text query to base the ideas on.
    pub query: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/suggest",
    tag = "recipes",
    params(SuggestParams),
    responses(
        (status = 200, description = "Exactly three recipe ideas; the fixed fallback trio when the AI service is unavailable", body = Vec<RecipeIdea>)
    )
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> impl IntoResponse {
    let query = params.query.unwrap_or_default();
    let ideas = ai::suggest_recipes(state.provider(), &query).await;
    (StatusCode::OK, Json(ideas))
}
