pub mod generate_day;
pub mod generate_week;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/meal-planner endpoints (mounted at /api/meal-planner)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-day", post(generate_day::generate_day))
        .route("/generate-week", post(generate_week::generate_week))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate_day::generate_day, generate_week::generate_week),
    components(schemas(
        generate_day::GenerateDayRequest,
        skillet_core::types::Meal,
        skillet_core::types::DayPlan,
        skillet_core::types::WeekPlan,
        skillet_core::types::Weekday,
    ))
)]
pub struct ApiDoc;
