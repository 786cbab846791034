use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use skillet_core::ai::generate_week_plan;
use skillet_core::types::WeekPlan;

/// Generate a full week of meals, one day at a time.
///
/// The seven per-day generations run sequentially; the first failure aborts
/// the batch and the whole request fails. A week that mixes generated and
/// fallback days is never returned.
#[utoipa::path(
    post,
    path = "/api/meal-planner/generate-week",
    tag = "meal_planner",
    responses(
        (status = 200, description = "A fully generated week", body = WeekPlan),
        (status = 502, description = "One of the per-day generations failed", body = ErrorResponse)
    )
)]
pub async fn generate_week(State(state): State<AppState>) -> impl IntoResponse {
    match generate_week_plan(state.provider()).await {
        Ok(week) => (StatusCode::OK, Json(week)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "week generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to generate week plan".to_string(),
                }),
            )
                .into_response()
        }
    }
}
