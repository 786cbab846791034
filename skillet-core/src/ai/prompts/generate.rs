//! Recipe generation prompt.

use crate::types::RecipeGenerationRequest;

/// Render the generation prompt for a request.
///
/// The model is asked for a single JSON object with a fixed field set; the
/// reply may still wrap it in prose or code fences, which the extraction
/// layer handles.
pub fn render_generate_prompt(request: &RecipeGenerationRequest) -> String {
    let dietary_str = match &request.dietary_preferences {
        Some(prefs) if !prefs.is_empty() => {
            format!("Dietary preferences: {}. ", prefs.join(", "))
        }
        _ => String::new(),
    };
    let time_str = match request.cooking_time {
        Some(minutes) => format!("The cooking time should be around {} minutes. ", minutes),
        None => String::new(),
    };

    format!(
        r#"Create a detailed recipe based on this request: "{description}". {dietary_str}{time_str}

Format the response as JSON with these fields:
{{
  "title": "Recipe title",
  "description": "Brief description",
  "ingredients": ["ingredient 1", "ingredient 2", ...],
  "instructions": ["step 1", "step 2", ...],
  "prepTime": (preparation time in minutes),
  "cookTime": (cooking time in minutes),
  "servings": (number of servings),
  "difficulty": "Easy" or "Medium" or "Hard",
  "tags": ["tag1", "tag2", ...] (up to 5 tags),
  "nutritionFacts": {{
    "calories": number,
    "protein": grams,
    "carbs": grams,
    "fat": grams
  }}
}}

Ensure all fields are populated. Keep ingredients and instructions concise but clear. Make sure the recipe is realistic and delicious."#,
        description = request.description,
        dietary_str = dietary_str,
        time_str = time_str,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_description_and_constraints() {
        let prompt = render_generate_prompt(&RecipeGenerationRequest {
            description: "a cozy soup".to_string(),
            dietary_preferences: Some(vec!["Vegan".to_string(), "Gluten-Free".to_string()]),
            cooking_time: Some(30),
        });

        assert!(prompt.contains("a cozy soup"));
        assert!(prompt.contains("Dietary preferences: Vegan, Gluten-Free."));
        assert!(prompt.contains("around 30 minutes"));
        assert!(prompt.contains("nutritionFacts"));
    }

    #[test]
    fn omits_absent_constraints() {
        let prompt = render_generate_prompt(&RecipeGenerationRequest {
            description: "anything".to_string(),
            dietary_preferences: None,
            cooking_time: None,
        });

        assert!(!prompt.contains("Dietary preferences"));
        assert!(!prompt.contains("cooking time should be"));
    }
}
