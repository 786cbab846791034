//! Recipe storage.
//!
//! Handlers depend on the `RecipeStore` trait only; the in-memory
//! implementation in `memory` can be replaced by a database-backed one
//! without touching the core components.

mod memory;
mod seed;

pub use memory::MemStore;
pub use seed::sample_recipes;

use async_trait::async_trait;
use thiserror::Error;

use skillet_core::types::{Recipe, RecipeDraft, SavedRecipe};

use crate::user::UserContext;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The (user, recipe) pair is already saved. At most one association
    /// per pair is allowed.
    #[error("recipe is already saved")]
    DuplicateSave,

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Storage operations for recipes and saved-recipe associations.
///
/// Recipes are immutable once created and never deleted; only the saved
/// association can be removed.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All recipes, ordered by ascending id (creation order).
    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError>;

    /// A single recipe by id.
    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, StoreError>;

    /// Persist a draft, assigning a fresh id and creation timestamp.
    async fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    /// The user's saved recipes, most recently saved first, each marked
    /// with `is_saved`.
    async fn saved_recipes(&self, user: &UserContext) -> Result<Vec<Recipe>, StoreError>;

    /// Create a saved association. Fails with `DuplicateSave` if one
    /// already exists for this (user, recipe) pair.
    async fn save_recipe(
        &self,
        user: &UserContext,
        recipe_id: i64,
    ) -> Result<SavedRecipe, StoreError>;

    /// Remove the saved association, if any. Removing a non-existent
    /// association is not an error.
    async fn unsave_recipe(&self, user: &UserContext, recipe_id: i64) -> Result<(), StoreError>;

    /// Whether the user has saved this recipe.
    async fn is_recipe_saved(&self, user: &UserContext, recipe_id: i64)
        -> Result<bool, StoreError>;
}
