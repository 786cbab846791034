use crate::api::{ErrorResponse, FieldError, ValidationErrorResponse};
use crate::store::StoreError;
use crate::user::DEFAULT_USER;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use skillet_core::types::SavedRecipe;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeRequest {
    pub recipe_id: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/saved",
    tag = "recipes",
    request_body = SaveRecipeRequest,
    responses(
        (status = 201, description = "Recipe saved", body = SavedRecipe),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 409, description = "Recipe is already saved", body = ErrorResponse)
    )
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    Json(request): Json<SaveRecipeRequest>,
) -> impl IntoResponse {
    let Some(recipe_id) = request.recipe_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse::new(vec![FieldError {
                field: "recipeId".to_string(),
                message: "recipeId is required".to_string(),
            }])),
        )
            .into_response();
    };

    // The recipe must exist before an association can point at it.
    match state.store.get_recipe(recipe_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to verify recipe {}: {}", recipe_id, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save recipe".to_string(),
                }),
            )
                .into_response();
        }
    }

    match state.store.save_recipe(&DEFAULT_USER, recipe_id).await {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(StoreError::DuplicateSave) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Recipe is already saved".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to save recipe {}: {}", recipe_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
