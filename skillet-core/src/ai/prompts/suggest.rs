//! Recipe suggestion prompt.

/// Render the suggestion prompt: exactly 3 ideas as a JSON array.
pub fn render_suggest_prompt(query: &str) -> String {
    format!(
        r#"Based on the query "{query}", suggest 3 recipe ideas.
Provide the response as a JSON array with each recipe having a title and short description:
[
  {{
    "title": "Recipe Title 1",
    "description": "Brief description of recipe 1"
  }},
  {{
    "title": "Recipe Title 2",
    "description": "Brief description of recipe 2"
  }},
  {{
    "title": "Recipe Title 3",
    "description": "Brief description of recipe 3"
  }}
]"#,
        query = query
    )
}
