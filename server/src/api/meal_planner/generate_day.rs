use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use skillet_core::ai::{fallback_day_meals, generate_day_meals};
use skillet_core::types::{DayPlan, Weekday};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct GenerateDayRequest {
    pub day: Weekday,
}

/// Generate one day's breakfast, lunch, and dinner.
///
/// Generation failures of any kind answer with the fixed three-meal day;
/// this endpoint never surfaces an AI failure as an error.
#[utoipa::path(
    post,
    path = "/api/meal-planner/generate-day",
    tag = "meal_planner",
    request_body = GenerateDayRequest,
    responses(
        (status = 200, description = "Three meal slots for the day", body = DayPlan)
    )
)]
pub async fn generate_day(
    State(state): State<AppState>,
    Json(request): Json<GenerateDayRequest>,
) -> impl IntoResponse {
    let plan = match state.provider() {
        Some(provider) => match generate_day_meals(provider, request.day).await {
            Ok(plan) => plan,
            Err(e) => {
                tracing::warn!(day = %request.day, error = %e, "day generation failed, using fallback meals");
                fallback_day_meals(request.day)
            }
        },
        None => {
            tracing::warn!(day = %request.day, "no AI provider configured, using fallback meals");
            fallback_day_meals(request.day)
        }
    };

    (StatusCode::OK, Json(plan))
}
