//! Recipe idea suggestions.

use serde::Deserialize;

use crate::extract::extract_json_array;
use crate::llm::{LlmError, LlmProvider};
use crate::types::RecipeIdea;

use super::prompts::suggest::render_suggest_prompt;

/// Base id for ideas parsed from a model reply. The store never hands out
/// ids this high, so suggestion ids cannot collide with stored recipes.
pub const AI_SUGGESTION_ID_BASE: i64 = 1000;

#[derive(Debug, Deserialize)]
struct SuggestedIdea {
    title: String,
    description: String,
}

/// Parse the model's JSON array of ideas, assigning reserved-range ids.
fn parse_suggestions(reply: &str) -> Result<Vec<RecipeIdea>, LlmError> {
    let json = extract_json_array(reply)
        .ok_or_else(|| LlmError::ParseError("No JSON array found in the response".to_string()))?;

    let ideas: Vec<SuggestedIdea> = serde_json::from_str(json)
        .map_err(|e| LlmError::ParseError(format!("Invalid suggestions JSON: {}", e)))?;

    Ok(ideas
        .into_iter()
        .enumerate()
        .map(|(index, idea)| RecipeIdea {
            id: AI_SUGGESTION_ID_BASE + index as i64,
            title: idea.title,
            description: idea.description,
        })
        .collect())
}

/// The fixed trio served when the external service is unavailable.
pub fn fallback_suggestions() -> Vec<RecipeIdea> {
    vec![
        RecipeIdea {
            id: 101,
            title: "Lemon Herb Grilled Chicken".to_string(),
            description: "Tender chicken breasts marinated in lemon, garlic and fresh herbs."
                .to_string(),
        },
        RecipeIdea {
            id: 102,
            title: "One-Pot Vegetable Quinoa".to_string(),
            description: "Protein-packed quinoa with seasonal vegetables and herbs.".to_string(),
        },
        RecipeIdea {
            id: 103,
            title: "Sheet Pan Salmon & Veggies".to_string(),
            description: "Easy cleanup dinner with omega-rich salmon and roasted vegetables."
                .to_string(),
        },
    ]
}

/// Ask the model for 3 recipe ideas matching the query.
///
/// Any failure (no provider, transport error, unusable reply) returns the
/// fixed fallback trio. Never fails.
pub async fn suggest_recipes(provider: Option<&dyn LlmProvider>, query: &str) -> Vec<RecipeIdea> {
    let Some(provider) = provider else {
        tracing::warn!("no AI provider configured, using fallback suggestions");
        return fallback_suggestions();
    };

    let prompt = render_suggest_prompt(query);

    match provider.complete(&prompt).await {
        Ok(reply) => match parse_suggestions(&reply) {
            Ok(ideas) => ideas,
            Err(e) => {
                tracing::warn!(error = %e, "could not parse suggestions, using fallback");
                fallback_suggestions()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "suggestion call failed, using fallback");
            fallback_suggestions()
        }
    }
}
