//! Sample recipes loaded into a fresh store.

use skillet_core::types::{Difficulty, NutritionFacts, RecipeDraft};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The three sample recipes every fresh store starts with.
pub fn sample_recipes() -> Vec<RecipeDraft> {
    vec![
        RecipeDraft {
            title: "Mediterranean Chicken Salad".to_string(),
            description: "A light and fresh salad with grilled chicken, mixed greens, feta \
                          cheese, and a lemon vinaigrette."
                .to_string(),
            image_url: Some("https://images.unsplash.com/photo-1546069901-ba9599a7e63c".to_string()),
            ingredients: strings(&[
                "2 boneless, skinless chicken breasts (about 1 pound)",
                "6 cups mixed salad greens",
                "1 cup cherry tomatoes, halved",
                "1 cucumber, diced",
                "1/2 red onion, thinly sliced",
                "1/2 cup kalamata olives, pitted",
                "4 oz feta cheese, crumbled",
                "2 tbsp extra virgin olive oil",
                "1 lemon, juiced",
                "1 tsp dried oregano",
                "Salt and pepper to taste",
            ]),
            instructions: strings(&[
                "Season chicken breasts with salt, pepper, and a pinch of oregano.",
                "Grill chicken over medium-high heat for 6-7 minutes per side or until internal \
                 temperature reaches 165°F (74°C).",
                "Allow chicken to rest for 5 minutes, then slice into strips.",
                "In a large bowl, whisk together olive oil, lemon juice, oregano, salt, and \
                 pepper to make the dressing.",
                "In a large salad bowl, combine mixed greens, cherry tomatoes, cucumber, red \
                 onion, and olives.",
                "Add the sliced chicken on top of the salad.",
                "Drizzle with the dressing and sprinkle crumbled feta cheese on top.",
                "Toss gently and serve immediately.",
            ]),
            prep_time: 15,
            cook_time: 15,
            servings: 4,
            difficulty: Difficulty::Easy,
            tags: strings(&["Healthy", "Protein", "Salad", "Gluten-Free"]),
            nutrition_facts: NutritionFacts {
                calories: 420,
                protein: 32,
                carbs: 18,
                fat: 24,
            },
            is_ai_generated: false,
        },
        RecipeDraft {
            title: "Baked Salmon with Asparagus".to_string(),
            description: "Perfectly baked salmon fillets with roasted asparagus and sweet potato \
                          mash."
                .to_string(),
            image_url: Some("https://images.unsplash.com/photo-1593906930848-a79daafbdcda".to_string()),
            ingredients: strings(&[
                "4 salmon fillets (about 6 oz each)",
                "1 bunch asparagus, trimmed",
                "2 large sweet potatoes, peeled and cubed",
                "3 tbsp olive oil, divided",
                "1 lemon, sliced",
                "2 cloves garlic, minced",
                "2 tbsp fresh dill, chopped",
                "1/4 cup milk",
                "2 tbsp butter",
                "Salt and pepper to taste",
            ]),
            instructions: strings(&[
                "Preheat oven to 400°F (200°C).",
                "Place salmon fillets on a baking sheet lined with parchment paper.",
                "Arrange asparagus around the salmon.",
                "Drizzle salmon and asparagus with 2 tbsp olive oil.",
                "Season with salt, pepper, and sprinkle with minced garlic and dill.",
                "Place lemon slices on top of the salmon.",
                "Bake for 12-15 minutes until salmon is cooked through and asparagus is tender.",
                "Meanwhile, boil sweet potatoes in salted water until tender, about 15 minutes.",
                "Drain sweet potatoes and return to pot. Add milk, butter, salt, and pepper.",
                "Mash until smooth and creamy.",
                "Serve salmon and asparagus with sweet potato mash on the side.",
            ]),
            prep_time: 15,
            cook_time: 30,
            servings: 4,
            difficulty: Difficulty::Medium,
            tags: strings(&["High Protein", "Seafood", "Gluten-Free", "Omega-3"]),
            nutrition_facts: NutritionFacts {
                calories: 380,
                protein: 28,
                carbs: 22,
                fat: 18,
            },
            is_ai_generated: false,
        },
        RecipeDraft {
            title: "Quick Vegetable Stir Fry".to_string(),
            description: "A colorful and nutrient-packed vegetable stir fry with tofu and brown \
                          rice."
                .to_string(),
            image_url: Some("https://images.unsplash.com/photo-1512621776951-a57141f2eefd".to_string()),
            ingredients: strings(&[
                "1 block (14 oz) extra-firm tofu, pressed and cubed",
                "2 cups brown rice, cooked",
                "1 red bell pepper, sliced",
                "1 yellow bell pepper, sliced",
                "1 cup broccoli florets",
                "1 cup snap peas",
                "1 carrot, julienned",
                "1 tbsp ginger, minced",
                "2 cloves garlic, minced",
                "3 tbsp soy sauce or tamari",
                "1 tbsp rice vinegar",
                "1 tbsp sesame oil",
                "1 tbsp vegetable oil",
                "1 tbsp cornstarch",
                "2 tbsp water",
                "2 green onions, sliced",
                "1 tbsp sesame seeds",
            ]),
            instructions: strings(&[
                "In a small bowl, whisk together soy sauce, rice vinegar, and cornstarch \
                 dissolved in water.",
                "Heat vegetable oil in a large wok or skillet over high heat.",
                "Add tofu cubes and cook until golden brown on all sides, about 5 minutes. \
                 Remove and set aside.",
                "In the same pan, add sesame oil, ginger, and garlic. Stir for 30 seconds until \
                 fragrant.",
                "Add all vegetables and stir fry for 4-5 minutes until crisp-tender.",
                "Return tofu to the pan and pour in the sauce mixture.",
                "Cook for another 2 minutes until sauce thickens and coats everything.",
                "Serve over brown rice, garnished with green onions and sesame seeds.",
            ]),
            prep_time: 15,
            cook_time: 15,
            servings: 4,
            difficulty: Difficulty::Easy,
            tags: strings(&["Vegan", "Plant-Based", "Vegetarian", "Quick"]),
            nutrition_facts: NutritionFacts {
                calories: 310,
                protein: 14,
                carbs: 42,
                fat: 12,
            },
            is_ai_generated: false,
        },
    ]
}
