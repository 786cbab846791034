//! AI generation pipeline and chat orchestration.
//!
//! Every entry point degrades to a deterministic fallback when the external
//! service is unavailable or returns something unusable; only the week-plan
//! flow is deliberately fallible (whole-batch contract).

pub mod chat;
pub mod fallback;
pub mod generate;
pub mod meal_plan;
pub mod prompts;
pub mod suggest;

pub use chat::{chat_reply, fallback_chat, ChatReply};
pub use fallback::{fallback_recipe, DEFAULT_IMAGES, MAX_TAGS};
pub use generate::{generate_recipe_draft, parse_generated_recipe, GeneratedRecipe};
pub use meal_plan::{fallback_day_meals, generate_day_meals, generate_week_plan};
pub use suggest::{fallback_suggestions, suggest_recipes, AI_SUGGESTION_ID_BASE};
