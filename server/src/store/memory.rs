//! In-memory store implementation.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use skillet_core::types::{Recipe, RecipeDraft, SavedRecipe};

use crate::user::UserContext;

use super::{sample_recipes, RecipeStore, StoreError};

/// Map-backed store keyed by id, with atomic id counters.
///
/// BTreeMaps keep iteration in ascending-id order, so listing order matches
/// creation order without an extra sort. Locks are never held across an
/// await point.
pub struct MemStore {
    recipes: RwLock<BTreeMap<i64, Recipe>>,
    saved: RwLock<BTreeMap<i64, SavedRecipe>>,
    recipe_counter: AtomicI64,
    saved_counter: AtomicI64,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            recipes: RwLock::new(BTreeMap::new()),
            saved: RwLock::new(BTreeMap::new()),
            recipe_counter: AtomicI64::new(1),
            saved_counter: AtomicI64::new(1),
        }
    }

    /// Create a store pre-populated with the sample recipes.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut recipes = store.recipes.write().unwrap();
            for draft in sample_recipes() {
                let id = store.recipe_counter.fetch_add(1, Ordering::SeqCst);
                recipes.insert(id, materialize(id, draft));
            }
        }
        store
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

fn materialize(id: i64, draft: RecipeDraft) -> Recipe {
    Recipe {
        id,
        title: draft.title,
        description: draft.description,
        image_url: draft.image_url,
        ingredients: draft.ingredients,
        instructions: draft.instructions,
        prep_time: draft.prep_time,
        cook_time: draft.cook_time,
        servings: draft.servings,
        difficulty: draft.difficulty,
        tags: draft.tags,
        nutrition_facts: draft.nutrition_facts,
        is_ai_generated: draft.is_ai_generated,
        is_saved: None,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl RecipeStore for MemStore {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        let recipes = self.recipes.read().unwrap();
        Ok(recipes.values().cloned().collect())
    }

    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, StoreError> {
        let recipes = self.recipes.read().unwrap();
        Ok(recipes.get(&id).cloned())
    }

    async fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let id = self.recipe_counter.fetch_add(1, Ordering::SeqCst);
        let recipe = materialize(id, draft);
        self.recipes
            .write()
            .unwrap()
            .insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn saved_recipes(&self, user: &UserContext) -> Result<Vec<Recipe>, StoreError> {
        let saved = self.saved.read().unwrap();
        let recipes = self.recipes.read().unwrap();

        let mut associations: Vec<&SavedRecipe> = saved
            .values()
            .filter(|sr| sr.user_id == user.user_id)
            .collect();
        associations.sort_by(|a, b| b.saved_at.cmp(&a.saved_at).then(b.id.cmp(&a.id)));

        Ok(associations
            .into_iter()
            .filter_map(|sr| recipes.get(&sr.recipe_id))
            .map(|recipe| Recipe {
                is_saved: Some(true),
                ..recipe.clone()
            })
            .collect())
    }

    async fn save_recipe(
        &self,
        user: &UserContext,
        recipe_id: i64,
    ) -> Result<SavedRecipe, StoreError> {
        let mut saved = self.saved.write().unwrap();

        let already = saved
            .values()
            .any(|sr| sr.user_id == user.user_id && sr.recipe_id == recipe_id);
        if already {
            return Err(StoreError::DuplicateSave);
        }

        let id = self.saved_counter.fetch_add(1, Ordering::SeqCst);
        let association = SavedRecipe {
            id,
            user_id: user.user_id,
            recipe_id,
            saved_at: Utc::now(),
        };
        saved.insert(id, association.clone());
        Ok(association)
    }

    async fn unsave_recipe(&self, user: &UserContext, recipe_id: i64) -> Result<(), StoreError> {
        let mut saved = self.saved.write().unwrap();
        let existing = saved
            .values()
            .find(|sr| sr.user_id == user.user_id && sr.recipe_id == recipe_id)
            .map(|sr| sr.id);
        if let Some(id) = existing {
            saved.remove(&id);
        }
        Ok(())
    }

    async fn is_recipe_saved(
        &self,
        user: &UserContext,
        recipe_id: i64,
    ) -> Result<bool, StoreError> {
        let saved = self.saved.read().unwrap();
        Ok(saved
            .values()
            .any(|sr| sr.user_id == user.user_id && sr.recipe_id == recipe_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::DEFAULT_USER;
    use skillet_core::types::{Difficulty, NutritionFacts};

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            description: "test".to_string(),
            image_url: None,
            ingredients: vec!["water".to_string()],
            instructions: vec!["boil".to_string()],
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            difficulty: Difficulty::Easy,
            tags: vec![],
            nutrition_facts: NutritionFacts::default(),
            is_ai_generated: false,
        }
    }

    #[tokio::test]
    async fn seeded_store_has_three_recipes_with_sequential_ids() {
        let store = MemStore::seeded();
        let recipes = store.list_recipes().await.unwrap();
        assert_eq!(recipes.len(), 3);
        assert_eq!(
            recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(recipes[0].title, "Mediterranean Chicken Salad");
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_after_the_seeds() {
        let store = MemStore::seeded();
        let recipe = store.create_recipe(draft("New Dish")).await.unwrap();
        assert_eq!(recipe.id, 4);
        assert!(store.get_recipe(4).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn get_unknown_recipe_is_none() {
        let store = MemStore::seeded();
        assert!(store.get_recipe(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_resave_is_a_duplicate() {
        let store = MemStore::seeded();

        store.save_recipe(&DEFAULT_USER, 1).await.unwrap();
        let err = store.save_recipe(&DEFAULT_USER, 1).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSave));
    }

    #[tokio::test]
    async fn unsave_then_resave_succeeds() {
        let store = MemStore::seeded();

        store.save_recipe(&DEFAULT_USER, 2).await.unwrap();
        store.unsave_recipe(&DEFAULT_USER, 2).await.unwrap();
        assert!(!store.is_recipe_saved(&DEFAULT_USER, 2).await.unwrap());

        store.save_recipe(&DEFAULT_USER, 2).await.unwrap();
        assert!(store.is_recipe_saved(&DEFAULT_USER, 2).await.unwrap());
    }

    #[tokio::test]
    async fn unsave_of_unsaved_recipe_is_a_no_op() {
        let store = MemStore::seeded();
        store.unsave_recipe(&DEFAULT_USER, 3).await.unwrap();
    }

    #[tokio::test]
    async fn saved_listing_marks_recipes_and_orders_by_recency() {
        let store = MemStore::seeded();
        store.save_recipe(&DEFAULT_USER, 1).await.unwrap();
        store.save_recipe(&DEFAULT_USER, 3).await.unwrap();

        let saved = store.saved_recipes(&DEFAULT_USER).await.unwrap();
        assert_eq!(saved.len(), 2);
        assert!(saved.iter().all(|r| r.is_saved == Some(true)));
        // Most recently saved first; timestamps can tie, so the newer
        // association id wins.
        assert_eq!(saved[0].id, 3);
    }

    #[tokio::test]
    async fn saved_lists_are_per_user() {
        let store = MemStore::seeded();
        let other = UserContext { user_id: 2 };

        store.save_recipe(&DEFAULT_USER, 1).await.unwrap();
        assert!(store.saved_recipes(&other).await.unwrap().is_empty());
        assert!(!store.is_recipe_saved(&other, 1).await.unwrap());
    }
}
