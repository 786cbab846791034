pub mod ai;
pub mod extract;
pub mod llm;
pub mod matching;
pub mod types;

pub use extract::{extract_json_array, extract_json_object};
pub use llm::{create_provider_from_env, FakeProvider, GeminiProvider, LlmError, LlmProvider};
pub use matching::{related_for_chat, search_recipes, similar_recipes};
pub use types::{
    DayPlan, Difficulty, Meal, NutritionFacts, Recipe, RecipeDraft, RecipeGenerationRequest,
    RecipeIdea, RecipeRef, SavedRecipe, WeekPlan, Weekday,
};
