use crate::api::{FieldError, ValidationErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use skillet_core::ai::{chat_reply, ChatReply};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/chat",
    tag = "recipes",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply plus related recipes; canned reply when the AI service is unavailable", body = ChatReply),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse)
    )
)]
pub async fn chat_with_chef(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let message = request.message.unwrap_or_default();
    if message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse::new(vec![FieldError {
                field: "message".to_string(),
                message: "message is required".to_string(),
            }])),
        )
            .into_response();
    }

    // Related-recipe lookup is best-effort; a store failure only costs the
    // suggestions, not the reply.
    let recipes = match state.store.list_recipes().await {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::warn!("Could not load recipes for chat suggestions: {}", e);
            Vec::new()
        }
    };

    let reply = chat_reply(state.provider(), &recipes, &message).await;
    (StatusCode::OK, Json(reply)).into_response()
}
