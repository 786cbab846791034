//! Keyword search and tag-overlap similarity ranking.
//!
//! These are pure functions over recipe slices; the store hands us its
//! current view and we never touch it directly. Ties break by ascending id
//! so result order is stable across store implementations.

use crate::types::{Recipe, RecipeRef};

/// Search recipes by substring query and conjunctive tag filters.
///
/// A recipe matches when the lowercased query is a substring of its title,
/// description, or any ingredient. The empty query matches everything
/// (browse-all). When `filters` is non-empty the recipe must carry every
/// filter as a tag, compared case-insensitively.
pub fn search_recipes(recipes: &[Recipe], query: &str, filters: &[String]) -> Vec<Recipe> {
    let query = query.to_lowercase();

    let mut matches: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| {
            let matches_query = query.is_empty()
                || recipe.title.to_lowercase().contains(&query)
                || recipe.description.to_lowercase().contains(&query)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| ingredient.to_lowercase().contains(&query));

            let matches_filters = filters.is_empty()
                || filters.iter().all(|filter| {
                    recipe.tags.iter().any(|tag| tag.eq_ignore_ascii_case(filter))
                });

            matches_query && matches_filters
        })
        .cloned()
        .collect();

    matches.sort_by_key(|recipe| recipe.id);
    matches
}

/// Rank other recipes by how many tags they share with the target.
///
/// Unknown `recipe_id` is not an error; the result is simply empty. The
/// target itself is never included. Equal scores order by ascending id.
pub fn similar_recipes(recipes: &[Recipe], recipe_id: i64, limit: usize) -> Vec<Recipe> {
    let Some(target) = recipes.iter().find(|recipe| recipe.id == recipe_id) else {
        return Vec::new();
    };

    let mut scored: Vec<(usize, &Recipe)> = recipes
        .iter()
        .filter(|recipe| recipe.id != recipe_id)
        .map(|recipe| (shared_tag_count(target, recipe), recipe))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.id.cmp(&b.1.id)));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, recipe)| recipe.clone())
        .collect()
}

/// Find recipes whose searchable text contains the free-text message.
///
/// Same substring rule as `search_recipes` but without tag filters, and the
/// result carries only id and title for the chat surface.
pub fn related_for_chat(recipes: &[Recipe], free_text: &str, limit: usize) -> Vec<RecipeRef> {
    let needle = free_text.to_lowercase();

    let mut matches: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| {
            let searchable = format!(
                "{} {} {}",
                recipe.title,
                recipe.description,
                recipe.ingredients.join(" ")
            )
            .to_lowercase();
            searchable.contains(&needle)
        })
        .collect();

    matches.sort_by_key(|recipe| recipe.id);

    matches
        .into_iter()
        .take(limit)
        .map(|recipe| RecipeRef {
            id: recipe.id,
            title: recipe.title.clone(),
        })
        .collect()
}

fn shared_tag_count(a: &Recipe, b: &Recipe) -> usize {
    b.tags
        .iter()
        .filter(|tag| a.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, NutritionFacts};
    use chrono::Utc;

    fn recipe(id: i64, title: &str, description: &str, ingredients: &[&str], tags: &[&str]) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image_url: None,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec!["Cook.".to_string()],
            prep_time: 10,
            cook_time: 20,
            servings: 2,
            difficulty: Difficulty::Easy,
            tags: tags.iter().map(|s| s.to_string()).collect(),
            nutrition_facts: NutritionFacts::default(),
            is_ai_generated: false,
            is_saved: None,
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe(
                1,
                "Mediterranean Chicken Salad",
                "Light salad with grilled chicken",
                &["chicken breast", "mixed greens", "feta"],
                &["Healthy", "Protein", "Salad"],
            ),
            recipe(
                2,
                "Baked Salmon",
                "Salmon with asparagus",
                &["salmon fillets", "asparagus"],
                &["High Protein", "Seafood"],
            ),
            recipe(
                3,
                "Vegetable Stir Fry",
                "Quick tofu stir fry",
                &["tofu", "broccoli", "soy sauce"],
                &["Vegan", "Quick", "Healthy"],
            ),
        ]
    }

    #[test]
    fn empty_query_matches_everything() {
        let recipes = sample();
        let results = search_recipes(&recipes, "", &[]);
        assert_eq!(results.len(), recipes.len());
    }

    #[test]
    fn query_matches_title_description_and_ingredients() {
        let recipes = sample();

        assert_eq!(search_recipes(&recipes, "salmon", &[]).len(), 1);
        assert_eq!(search_recipes(&recipes, "grilled", &[]).len(), 1);
        // "tofu" only appears in an ingredient list
        let by_ingredient = search_recipes(&recipes, "tofu", &[]);
        assert_eq!(by_ingredient.len(), 1);
        assert_eq!(by_ingredient[0].id, 3);
    }

    #[test]
    fn query_is_case_insensitive() {
        let recipes = sample();
        assert_eq!(search_recipes(&recipes, "CHICKEN", &[]).len(), 1);
    }

    #[test]
    fn filters_are_conjunctive() {
        let recipes = sample();

        let healthy = search_recipes(&recipes, "", &["healthy".to_string()]);
        assert_eq!(healthy.len(), 2);

        let healthy_vegan =
            search_recipes(&recipes, "", &["healthy".to_string(), "vegan".to_string()]);
        assert_eq!(healthy_vegan.len(), 1);
        assert_eq!(healthy_vegan[0].id, 3);
    }

    #[test]
    fn filtered_results_are_a_subset_of_unfiltered() {
        let recipes = sample();
        let unfiltered: Vec<i64> = search_recipes(&recipes, "salad", &[])
            .into_iter()
            .map(|r| r.id)
            .collect();
        let filtered = search_recipes(&recipes, "salad", &["Protein".to_string()]);
        assert!(filtered.iter().all(|r| unfiltered.contains(&r.id)));
    }

    #[test]
    fn similar_ranks_by_shared_tags() {
        let recipes = sample();
        // Recipe 1 shares "Healthy" with 3 and nothing with 2.
        let results = similar_recipes(&recipes, 1, 3);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 3);
        assert_eq!(results[1].id, 2);
    }

    #[test]
    fn similar_never_includes_target_and_respects_limit() {
        let recipes = sample();
        let results = similar_recipes(&recipes, 2, 1);
        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|r| r.id != 2));
    }

    #[test]
    fn similar_with_unknown_id_is_empty() {
        let recipes = sample();
        assert!(similar_recipes(&recipes, 999, 3).is_empty());
    }

    #[test]
    fn similar_with_no_shared_tags_still_excludes_target() {
        let mut recipes = sample();
        recipes.push(recipe(4, "Plain Rice", "Just rice", &["rice"], &[]));
        let results = similar_recipes(&recipes, 4, 3);
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.id != 4));
        // Zero-score ties fall back to ascending id.
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn related_for_chat_returns_refs() {
        let recipes = sample();
        let refs = related_for_chat(&recipes, "chicken", 3);
        assert_eq!(refs.len(), 1);
        assert_eq!(
            refs[0],
            RecipeRef {
                id: 1,
                title: "Mediterranean Chicken Salad".to_string()
            }
        );
    }

    #[test]
    fn related_for_chat_respects_limit() {
        let recipes = sample();
        let refs = related_for_chat(&recipes, "", 2);
        assert_eq!(refs.len(), 2);
    }
}
