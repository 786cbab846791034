//! Meal-planner prompt.

use crate::types::Weekday;

/// Render the prompt for one day's breakfast/lunch/dinner ideas.
pub fn render_day_plan_prompt(day: Weekday) -> String {
    format!(
        r#"Suggest three meals for {day}: one breakfast, one lunch, and one dinner.
Provide the response as a JSON array in that exact order, with each meal having a title and short description:
[
  {{
    "title": "Breakfast title",
    "description": "Brief description"
  }},
  {{
    "title": "Lunch title",
    "description": "Brief description"
  }},
  {{
    "title": "Dinner title",
    "description": "Brief description"
  }}
]"#,
        day = day
    )
}
