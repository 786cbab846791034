pub mod chat;
pub mod generate;
pub mod get;
pub mod list;
pub mod save;
pub mod saved;
pub mod search;
pub mod similar;
pub mod suggest;
pub mod unsave;

use crate::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes))
        .route("/search", get(search::search_recipes))
        .route("/suggest", get(suggest::suggest_recipes))
        .route("/generate", post(generate::generate_recipe))
        .route("/chat", post(chat::chat_with_chef))
        .route(
            "/saved",
            get(saved::list_saved_recipes).post(save::save_recipe),
        )
        .route("/saved/{id}", delete(unsave::unsave_recipe))
        .route("/{id}", get(get::get_recipe))
        .route("/{id}/similar", get(similar::similar_recipes))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        search::search_recipes,
        similar::similar_recipes,
        saved::list_saved_recipes,
        save::save_recipe,
        unsave::unsave_recipe,
        generate::generate_recipe,
        suggest::suggest_recipes,
        chat::chat_with_chef,
    ),
    components(schemas(
        save::SaveRecipeRequest,
        generate::GenerateRecipeRequest,
        chat::ChatRequest,
        skillet_core::types::Recipe,
        skillet_core::types::RecipeIdea,
        skillet_core::types::SavedRecipe,
        skillet_core::ai::ChatReply,
    ))
)]
pub struct ApiDoc;
