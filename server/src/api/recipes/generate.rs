use crate::api::{ErrorResponse, FieldError, ValidationErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use skillet_core::ai::generate_recipe_draft;
use skillet_core::types::{Recipe, RecipeGenerationRequest};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    pub description: Option<String>,
    pub dietary_preferences: Option<Vec<String>>,
    /// Upper bound on cook time, in minutes.
    pub cooking_time: Option<u32>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 201, description = "Generated recipe, persisted and AI-marked", body = Recipe),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> impl IntoResponse {
    let description = request.description.unwrap_or_default();
    if description.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse::new(vec![FieldError {
                field: "description".to_string(),
                message: "description is required".to_string(),
            }])),
        )
            .into_response();
    }

    let generation_request = RecipeGenerationRequest {
        description,
        dietary_preferences: request.dietary_preferences,
        cooking_time: request.cooking_time,
    };

    let mut rng = StdRng::from_entropy();
    let draft = generate_recipe_draft(state.provider(), &generation_request, &mut rng).await;

    match state.store.create_recipe(draft).await {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => {
            tracing::error!("Failed to persist generated recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
