//! Deterministic synthetic recipe generation.
//!
//! Used whenever the external service is unavailable or returns something
//! unusable. The RNG is injected so tests can seed it and assert exact
//! bounds.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Difficulty, NutritionFacts, RecipeDraft, RecipeGenerationRequest};

/// Image pool for generated recipes.
pub const DEFAULT_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c",
    "https://images.unsplash.com/photo-1512621776951-a57141f2eefd",
    "https://images.unsplash.com/photo-1593906930848-a79daafbdcda",
    "https://images.unsplash.com/photo-1540420773420-3366772f4999",
];

/// Maximum number of tags on a generated recipe.
pub const MAX_TAGS: usize = 5;

const CUISINE_TAGS: &[&str] = &[
    "Italian",
    "Mexican",
    "Asian",
    "Mediterranean",
    "Indian",
    "American",
    "French",
];

const MEAL_TYPE_TAGS: &[&str] = &["Breakfast", "Lunch", "Dinner", "Snack", "Dessert"];

const CHARACTERISTIC_TAGS: &[&str] = &[
    "Quick",
    "Healthy",
    "High-Protein",
    "Budget-Friendly",
    "One-Pot",
];

const FALLBACK_INGREDIENTS: &[&str] = &[
    "2 tablespoons olive oil",
    "1 onion, diced",
    "2 cloves garlic, minced",
    "1 pound protein of choice",
    "1 bell pepper, sliced",
    "1 cup vegetables of choice",
    "1 can (14 oz) diced tomatoes",
    "2 cups broth or stock",
    "1 teaspoon mixed herbs",
    "Salt and pepper to taste",
];

const FALLBACK_INSTRUCTIONS: &[&str] = &[
    "Prepare all ingredients before cooking.",
    "Heat oil in a large pan over medium heat.",
    "Add onion and cook until translucent, about 3-4 minutes.",
    "Add garlic and cook for 30 seconds until fragrant.",
    "Add protein and cook until browned.",
    "Add vegetables and cook for 3-5 minutes.",
    "Add remaining ingredients and simmer for 15-20 minutes.",
    "Season with salt and pepper to taste.",
    "Serve hot with your favorite sides.",
];

/// Pick a title from the keyword rule table.
fn fallback_title(description: &str) -> &'static str {
    let description = description.to_lowercase();
    if description.contains("vegetarian") {
        "Hearty Vegetarian Chili"
    } else if description.contains("chicken") {
        "Lemon Herb Roasted Chicken"
    } else if description.contains("quick") {
        "15-Minute Shrimp Pasta"
    } else if description.contains("healthy") {
        "Super Green Nutrient Bowl"
    } else {
        "Homestyle Comfort Casserole"
    }
}

/// Pick a random image from the pool.
pub fn random_image<R: Rng>(rng: &mut R) -> String {
    DEFAULT_IMAGES
        .choose(rng)
        .unwrap_or(&DEFAULT_IMAGES[0])
        .to_string()
}

/// Build a synthetic recipe draft for the request.
///
/// Guarantees: cook time never exceeds the requested ceiling; the tag list
/// has 1 to 5 entries with no duplicates; dietary preferences survive
/// verbatim, with randomly-added category tags dropped first when over the
/// cap; all nutrition values are non-negative integers within realistic
/// bounds.
pub fn fallback_recipe<R: Rng>(request: &RecipeGenerationRequest, rng: &mut R) -> RecipeDraft {
    let title = fallback_title(&request.description);

    let prep_time = rng.gen_range(5..25);
    let cook_time = match request.cooking_time {
        Some(ceiling) => ceiling.min(60),
        None => rng.gen_range(15..60),
    };
    let servings = rng.gen_range(2..6);
    let difficulty = *Difficulty::ALL.choose(rng).unwrap_or(&Difficulty::Easy);

    // Dietary preferences first, deduplicated, then one tag per category.
    let mut tags: Vec<String> = Vec::new();
    if let Some(prefs) = &request.dietary_preferences {
        for pref in prefs {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(pref)) {
                tags.push(pref.clone());
            }
        }
    }

    let add_random_tag = |category: &[&str], tags: &mut Vec<String>, rng: &mut R| {
        if let Some(tag) = category.choose(rng) {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                tags.push(tag.to_string());
            }
        }
    };

    add_random_tag(CUISINE_TAGS, &mut tags, rng);
    add_random_tag(MEAL_TYPE_TAGS, &mut tags, rng);
    add_random_tag(CHARACTERISTIC_TAGS, &mut tags, rng);

    // The category tags sit at the end, so capping drops them before any
    // requested preference.
    tags.truncate(MAX_TAGS);

    let nutrition_facts = NutritionFacts {
        calories: rng.gen_range(200..600),
        protein: rng.gen_range(10..40),
        carbs: rng.gen_range(10..50),
        fat: rng.gen_range(5..25),
    };

    RecipeDraft {
        title: title.to_string(),
        description: format!(
            "{} - Based on your request: \"{}\"",
            title, request.description
        ),
        image_url: Some(random_image(rng)),
        ingredients: FALLBACK_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
        instructions: FALLBACK_INSTRUCTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        prep_time,
        cook_time,
        servings,
        difficulty,
        tags,
        nutrition_facts,
        is_ai_generated: true,
    }
}
