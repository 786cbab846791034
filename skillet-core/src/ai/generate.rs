//! Recipe generation pipeline: prompt, provider call, JSON parse, fallback.

use rand::Rng;
use serde::Deserialize;

use crate::extract::extract_json_object;
use crate::llm::{LlmError, LlmProvider};
use crate::types::{Difficulty, NutritionFacts, RecipeDraft, RecipeGenerationRequest};

use super::fallback::{fallback_recipe, random_image, MAX_TAGS};
use super::prompts::generate::render_generate_prompt;

/// The JSON shape the model is asked to produce.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub nutrition_facts: NutritionFacts,
}

/// Parse a model reply into a recipe draft.
///
/// The reply may wrap the JSON in prose or code fences; we take the first
/// balanced object. Missing or malformed fields are a `ParseError`, which
/// the caller treats as any other generation failure.
pub fn parse_generated_recipe(reply: &str) -> Result<GeneratedRecipe, LlmError> {
    let json = extract_json_object(reply)
        .ok_or_else(|| LlmError::ParseError("No JSON object found in the response".to_string()))?;

    let mut recipe: GeneratedRecipe = serde_json::from_str(json)
        .map_err(|e| LlmError::ParseError(format!("Invalid recipe JSON: {}", e)))?;

    recipe.tags.truncate(MAX_TAGS);
    Ok(recipe)
}

/// Turn a generation request into a recipe draft.
///
/// Tries the external model first; any failure along the way (no provider
/// configured, transport error, non-success status, unusable reply) falls
/// back to deterministic synthetic generation. This function never fails;
/// the caller always gets a draft to persist.
pub async fn generate_recipe_draft<R: Rng>(
    provider: Option<&dyn LlmProvider>,
    request: &RecipeGenerationRequest,
    rng: &mut R,
) -> RecipeDraft {
    let Some(provider) = provider else {
        tracing::warn!("no AI provider configured, using fallback recipe generation");
        return fallback_recipe(request, rng);
    };

    let prompt = render_generate_prompt(request);

    let fields = match provider.complete(&prompt).await {
        Ok(reply) => match parse_generated_recipe(&reply) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::warn!(error = %e, "could not parse generated recipe, using fallback");
                return fallback_recipe(request, rng);
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "recipe generation call failed, using fallback");
            return fallback_recipe(request, rng);
        }
    };

    RecipeDraft {
        title: fields.title,
        description: fields.description,
        image_url: Some(random_image(rng)),
        ingredients: fields.ingredients,
        instructions: fields.instructions,
        prep_time: fields.prep_time,
        cook_time: fields.cook_time,
        servings: fields.servings,
        difficulty: fields.difficulty,
        tags: fields.tags,
        nutrition_facts: fields.nutrition_facts,
        is_ai_generated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VALID_REPLY: &str = r#"Here is your recipe:
```json
{
  "title": "Miso Ramen",
  "description": "A rich noodle soup",
  "ingredients": ["noodles", "miso paste", "scallions"],
  "instructions": ["Simmer broth.", "Cook noodles.", "Assemble."],
  "prepTime": 10,
  "cookTime": 25,
  "servings": 2,
  "difficulty": "Medium",
  "tags": ["Asian", "Soup", "Comfort", "Noodles", "Umami", "Extra"],
  "nutritionFacts": {"calories": 480, "protein": 18, "carbs": 62, "fat": 14}
}
```
Enjoy!"#;

    fn request() -> RecipeGenerationRequest {
        RecipeGenerationRequest {
            description: "a warming noodle soup".to_string(),
            dietary_preferences: None,
            cooking_time: None,
        }
    }

    #[test]
    fn parses_recipe_from_fenced_reply_and_caps_tags() {
        let fields = parse_generated_recipe(VALID_REPLY).unwrap();
        assert_eq!(fields.title, "Miso Ramen");
        assert_eq!(fields.difficulty, Difficulty::Medium);
        assert_eq!(fields.tags.len(), 5);
        assert_eq!(fields.nutrition_facts.calories, 480);
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let reply = r#"{"title": "Soup", "description": "no other fields"}"#;
        assert!(matches!(
            parse_generated_recipe(reply),
            Err(LlmError::ParseError(_))
        ));
    }

    #[test]
    fn prose_without_json_is_a_parse_error() {
        assert!(parse_generated_recipe("I can't help with that.").is_err());
    }

    #[tokio::test]
    async fn uses_model_output_when_parseable() {
        let provider = FakeProvider::with_response("noodle soup", VALID_REPLY);
        let mut rng = StdRng::seed_from_u64(1);

        let draft = generate_recipe_draft(Some(&provider), &request(), &mut rng).await;
        assert_eq!(draft.title, "Miso Ramen");
        assert!(draft.is_ai_generated);
        assert!(draft.image_url.is_some());
    }

    #[tokio::test]
    async fn falls_back_when_provider_errors() {
        // No registered response and no default: every call errors.
        let provider = FakeProvider::new();
        let mut rng = StdRng::seed_from_u64(1);

        let draft = generate_recipe_draft(Some(&provider), &request(), &mut rng).await;
        assert_eq!(draft.title, "Homestyle Comfort Casserole");
        assert!(draft.is_ai_generated);
    }

    #[tokio::test]
    async fn falls_back_when_reply_is_unparseable() {
        let provider = FakeProvider::new().with_default_response("Sorry, no JSON today.");
        let mut rng = StdRng::seed_from_u64(1);

        let draft = generate_recipe_draft(Some(&provider), &request(), &mut rng).await;
        assert_eq!(draft.title, "Homestyle Comfort Casserole");
    }

    #[tokio::test]
    async fn falls_back_without_a_provider() {
        let mut rng = StdRng::seed_from_u64(1);
        let draft = generate_recipe_draft(None, &request(), &mut rng).await;
        assert_eq!(draft.title, "Homestyle Comfort Casserole");
    }
}
