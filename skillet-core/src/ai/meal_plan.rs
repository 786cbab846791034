//! Meal-plan generation: one day's three meals, or a whole week.

use serde::Deserialize;

use crate::extract::extract_json_array;
use crate::llm::{LlmError, LlmProvider};
use crate::types::{DayPlan, Meal, WeekPlan, Weekday};

use super::prompts::meal_plan::render_day_plan_prompt;
use super::suggest::AI_SUGGESTION_ID_BASE;

#[derive(Debug, Deserialize)]
struct SuggestedMeal {
    title: String,
    description: String,
}

/// Ask the model for one day's breakfast, lunch, and dinner.
///
/// Unlike the other pipeline entry points this is fallible: the week-plan
/// flow needs to distinguish a generated day from a failed one. The HTTP
/// layer applies `fallback_day_meals` where a failure must not surface.
pub async fn generate_day_meals(
    provider: &dyn LlmProvider,
    day: Weekday,
) -> Result<DayPlan, LlmError> {
    let prompt = render_day_plan_prompt(day);
    let reply = provider.complete(&prompt).await?;

    let json = extract_json_array(&reply)
        .ok_or_else(|| LlmError::ParseError("No JSON array found in the response".to_string()))?;

    let meals: Vec<SuggestedMeal> = serde_json::from_str(json)
        .map_err(|e| LlmError::ParseError(format!("Invalid meal JSON: {}", e)))?;

    if meals.len() < 3 {
        return Err(LlmError::ParseError(format!(
            "Expected 3 meals, got {}",
            meals.len()
        )));
    }

    let mut meals = meals.into_iter().enumerate().map(|(index, meal)| Meal {
        id: AI_SUGGESTION_ID_BASE + index as i64,
        title: meal.title,
        description: meal.description,
        image_url: None,
    });

    Ok(DayPlan {
        breakfast: meals.next(),
        lunch: meals.next(),
        dinner: meals.next(),
    })
}

/// Fixed three-meal day used when generation is unavailable.
///
/// Ids sit in the reserved range (>= 100) like the suggestion fallbacks.
pub fn fallback_day_meals(_day: Weekday) -> DayPlan {
    DayPlan {
        breakfast: Some(Meal {
            id: 201,
            title: "Overnight Oats with Berries".to_string(),
            description: "Rolled oats soaked in milk with fresh berries and honey.".to_string(),
            image_url: None,
        }),
        lunch: Some(Meal {
            id: 202,
            title: "Mediterranean Grain Bowl".to_string(),
            description: "Quinoa with chickpeas, cucumber, feta and lemon dressing.".to_string(),
            image_url: None,
        }),
        dinner: Some(Meal {
            id: 203,
            title: "Garlic Butter Salmon".to_string(),
            description: "Pan-seared salmon with garlic butter and steamed greens.".to_string(),
            image_url: None,
        }),
    }
}

/// Generate a full week, one day at a time.
///
/// The seven calls run strictly sequentially to avoid hammering the
/// external service. The first failed day aborts the rest and fails the
/// whole batch; partial results are discarded, never returned.
pub async fn generate_week_plan(provider: Option<&dyn LlmProvider>) -> Result<WeekPlan, LlmError> {
    let provider = provider.ok_or_else(|| {
        LlmError::NotConfigured("no AI provider configured for week planning".to_string())
    })?;

    let mut week = WeekPlan::default();

    for &day in Weekday::ALL {
        let plan = generate_day_meals(provider, day).await?;
        *week.day_mut(day) = plan;
    }

    Ok(week)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;

    const DAY_REPLY: &str = r#"[
  {"title": "Veggie Omelette", "description": "Eggs with peppers and spinach."},
  {"title": "Chicken Wrap", "description": "Grilled chicken in a whole-wheat wrap."},
  {"title": "Beef Stir Fry", "description": "Flank steak with broccoli over rice."}
]"#;

    #[tokio::test]
    async fn parses_a_day_into_three_slots() {
        let provider = FakeProvider::with_response("meals for monday", DAY_REPLY);
        let plan = generate_day_meals(&provider, Weekday::Monday).await.unwrap();

        assert_eq!(plan.breakfast.as_ref().unwrap().title, "Veggie Omelette");
        assert_eq!(plan.lunch.as_ref().unwrap().title, "Chicken Wrap");
        assert_eq!(plan.dinner.as_ref().unwrap().title, "Beef Stir Fry");
        assert_eq!(plan.breakfast.unwrap().id, AI_SUGGESTION_ID_BASE);
    }

    #[tokio::test]
    async fn too_few_meals_is_a_parse_error() {
        let provider =
            FakeProvider::new().with_default_response(r#"[{"title": "A", "description": "B"}]"#);
        let result = generate_day_meals(&provider, Weekday::Friday).await;
        assert!(matches!(result, Err(LlmError::ParseError(_))));
    }

    #[test]
    fn fallback_day_has_all_three_slots_in_reserved_range() {
        let plan = fallback_day_meals(Weekday::Tuesday);
        for meal in [&plan.breakfast, &plan.lunch, &plan.dinner] {
            assert!(meal.as_ref().unwrap().id >= 100);
        }
    }

    #[tokio::test]
    async fn week_plan_fills_all_seven_days() {
        let provider = FakeProvider::new().with_default_response(DAY_REPLY);
        let week = generate_week_plan(Some(&provider)).await.unwrap();

        for day in [&week.monday, &week.thursday, &week.sunday] {
            assert!(day.breakfast.is_some());
            assert!(day.lunch.is_some());
            assert!(day.dinner.is_some());
        }
    }

    #[tokio::test]
    async fn week_plan_fails_wholesale_when_a_day_fails() {
        // Thursday (the 4th day) has no registered response, so the
        // sequence aborts there and no partial week escapes.
        let mut provider = FakeProvider::new();
        for day in ["monday", "tuesday", "wednesday"] {
            provider.add_response(&format!("meals for {}", day), DAY_REPLY);
        }

        let result = generate_week_plan(Some(&provider)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn week_plan_without_provider_is_not_configured() {
        let result = generate_week_plan(None).await;
        assert!(matches!(result, Err(LlmError::NotConfigured(_))));
    }
}
