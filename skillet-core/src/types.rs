//! Domain types shared by the matching engine, the AI pipeline, and the server.
//!
//! Wire names are camelCase to match the web client's contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Recipe difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, in display order.
    pub const ALL: &'static [Difficulty] = &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

/// Per-serving nutrition facts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A stored recipe. Immutable once created; identity and creation timestamp
/// are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub nutrition_facts: NutritionFacts,
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    /// Set only on the saved-recipes listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_saved: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Insertion value object for a recipe; the store assigns id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub nutrition_facts: NutritionFacts,
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
}

/// Association between a user and a recipe they saved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub id: i64,
    pub user_id: i64,
    pub recipe_id: i64,
    pub saved_at: DateTime<Utc>,
}

/// Transient input for AI recipe generation. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGenerationRequest {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<Vec<String>>,
    /// Upper bound on cook time, in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
}

/// A lightweight recipe idea: suggestions and generated meals use this shape.
/// Ids outside the store's range (>= 100) mark ideas that are not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeIdea {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Minimal recipe reference surfaced alongside chat replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRef {
    pub id: i64,
    pub title: String,
}

/// One meal slot in a day plan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A day's three meal slots. Empty slots serialize as explicit nulls so the
/// client can distinguish "no meal" from a missing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    pub breakfast: Option<Meal>,
    pub lunch: Option<Meal>,
    pub dinner: Option<Meal>,
}

/// A full week of day plans, keyed by weekday name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WeekPlan {
    pub monday: DayPlan,
    pub tuesday: DayPlan,
    pub wednesday: DayPlan,
    pub thursday: DayPlan,
    pub friday: DayPlan,
    pub saturday: DayPlan,
    pub sunday: DayPlan,
}

impl WeekPlan {
    /// Mutable access to the plan for a given day.
    pub fn day_mut(&mut self, day: Weekday) -> &mut DayPlan {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }
}

/// Weekday names as the client uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in week order.
    pub const ALL: &'static [Weekday] = &[
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_wire_names_are_camel_case() {
        let recipe = Recipe {
            id: 1,
            title: "Test".to_string(),
            description: "A test".to_string(),
            image_url: None,
            ingredients: vec!["salt".to_string()],
            instructions: vec!["season".to_string()],
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            difficulty: Difficulty::Easy,
            tags: vec!["Quick".to_string()],
            nutrition_facts: NutritionFacts::default(),
            is_ai_generated: true,
            is_saved: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json.get("prepTime").is_some());
        assert!(json.get("nutritionFacts").is_some());
        assert_eq!(json["isAIGenerated"], serde_json::json!(true));
        assert!(json.get("isSaved").is_none());
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn empty_meal_slots_serialize_as_null() {
        let plan = DayPlan {
            breakfast: Some(Meal {
                id: 201,
                title: "Oatmeal".to_string(),
                description: "Warm oats".to_string(),
                image_url: None,
            }),
            lunch: None,
            dinner: None,
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert!(json["breakfast"].is_object());
        assert!(json["lunch"].is_null());
        assert!(json["dinner"].is_null());
    }

    #[test]
    fn weekday_round_trips_lowercase() {
        let day: Weekday = serde_json::from_str("\"wednesday\"").unwrap();
        assert_eq!(day, Weekday::Wednesday);
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"wednesday\"");
    }
}
