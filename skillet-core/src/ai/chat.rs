//! Chat orchestrator: one message in, one reply plus related recipes out.
//!
//! Stateless per request; no conversation history is kept server-side.

use serde::Serialize;
use utoipa::ToSchema;

use crate::llm::LlmProvider;
use crate::matching::related_for_chat;
use crate::types::{Recipe, RecipeRef};

use super::prompts::chat::render_chat_prompt;

/// Number of related recipes surfaced alongside a reply.
const RELATED_LIMIT: usize = 3;

/// An assistant reply plus related recipe references.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatReply {
    pub response: String,
    pub recipes: Vec<RecipeRef>,
}

/// Produce a reply for a user message.
///
/// On provider success the model text is used verbatim and the matching
/// engine supplies related recipes (best-effort; may be empty). Any failure
/// resolves to the keyword rule table with an empty recipe list. Never
/// returns an error.
pub async fn chat_reply(
    provider: Option<&dyn LlmProvider>,
    recipes: &[Recipe],
    message: &str,
) -> ChatReply {
    let Some(provider) = provider else {
        tracing::warn!("no AI provider configured, using fallback chat reply");
        return fallback_chat(message);
    };

    let prompt = render_chat_prompt(message);

    match provider.complete(&prompt).await {
        Ok(response) if !response.is_empty() => ChatReply {
            recipes: related_for_chat(recipes, message, RELATED_LIMIT),
            response,
        },
        Ok(_) => {
            tracing::warn!("chat reply was empty, using fallback");
            fallback_chat(message)
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat call failed, using fallback");
            fallback_chat(message)
        }
    }
}

/// Keyword rule table used when the external service is unavailable.
pub fn fallback_chat(message: &str) -> ChatReply {
    let message = message.to_lowercase();

    let response = if message.contains("chicken") {
        "I'd recommend a simple roast chicken with herbs. Season a whole chicken with salt, \
         pepper, and herbs like rosemary and thyme. Stuff with lemon and garlic, then roast at \
         375°F for about 1 hour and 15 minutes or until the internal temperature reaches 165°F. \
         Let it rest for 10 minutes before carving."
    } else if message.contains("pasta") || message.contains("spaghetti") {
        "How about a classic spaghetti carbonara? Cook spaghetti according to package \
         instructions. In a bowl, mix 4 egg yolks, 1 whole egg, and 1 cup grated Parmesan. In a \
         pan, cook diced pancetta until crispy. Toss hot pasta with the egg mixture and pancetta. \
         The heat from the pasta cooks the eggs into a creamy sauce. Finish with black pepper and \
         more cheese."
    } else if message.contains("vegetarian") || message.contains("vegan") {
        "I suggest a hearty vegetable curry. Sauté onions, garlic, and ginger in oil, then add \
         curry powder and cook until fragrant. Add diced vegetables like potatoes, carrots, and \
         bell peppers, then pour in coconut milk and simmer until vegetables are tender. Serve \
         with rice or naan bread."
    } else if message.contains("dessert") || message.contains("sweet") {
        "A simple apple crumble is always delicious. Slice 4-5 apples and toss with cinnamon, \
         sugar, and lemon juice. For the topping, mix oats, flour, butter, and brown sugar until \
         crumbly. Spread the topping over the apples and bake at 350°F for 45 minutes until \
         golden and bubbly. Serve warm with ice cream."
    } else {
        "I'd be happy to help you find a recipe! To get started, could you tell me what kind of \
         dish you're looking to make? Or do you have specific ingredients you'd like to use?"
    };

    ChatReply {
        response: response.to_string(),
        recipes: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use crate::types::{Difficulty, NutritionFacts};
    use chrono::Utc;

    fn recipes() -> Vec<Recipe> {
        vec![Recipe {
            id: 1,
            title: "Mediterranean Chicken Salad".to_string(),
            description: "Light salad with grilled chicken".to_string(),
            image_url: None,
            ingredients: vec!["chicken breast".to_string()],
            instructions: vec!["Grill.".to_string()],
            prep_time: 15,
            cook_time: 15,
            servings: 4,
            difficulty: Difficulty::Easy,
            tags: vec!["Healthy".to_string()],
            nutrition_facts: NutritionFacts::default(),
            is_ai_generated: false,
            is_saved: None,
            created_at: Utc::now(),
        }]
    }

    #[tokio::test]
    async fn success_uses_model_text_and_related_recipes() {
        let provider = FakeProvider::with_response("chef assistant", "Try searing it hot.");
        let reply = chat_reply(Some(&provider), &recipes(), "chicken tips?").await;

        assert_eq!(reply.response, "Try searing it hot.");
        assert_eq!(reply.recipes.len(), 1);
        assert_eq!(reply.recipes[0].id, 1);
    }

    #[tokio::test]
    async fn chicken_message_gets_the_chicken_fallback() {
        let provider = FakeProvider::new();
        let reply = chat_reply(Some(&provider), &recipes(), "I want a chicken dinner").await;

        assert!(reply.response.contains("roast chicken"));
        assert!(reply.recipes.is_empty());
    }

    #[tokio::test]
    async fn empty_reply_takes_the_fallback_path() {
        let provider = FakeProvider::new().with_default_response("");
        let reply = chat_reply(Some(&provider), &recipes(), "pasta tonight").await;
        assert!(reply.response.contains("carbonara"));
        assert!(reply.recipes.is_empty());
    }

    #[test]
    fn fallback_rule_table_covers_the_keywords() {
        assert!(fallback_chat("vegan ideas").response.contains("vegetable curry"));
        assert!(fallback_chat("something sweet").response.contains("apple crumble"));
        assert!(fallback_chat("spaghetti!").response.contains("carbonara"));
        assert!(fallback_chat("hello").response.contains("happy to help"));
    }

    #[tokio::test]
    async fn no_provider_means_fallback() {
        let reply = chat_reply(None, &[], "dessert please").await;
        assert!(reply.response.contains("apple crumble"));
        assert!(reply.recipes.is_empty());
    }
}
