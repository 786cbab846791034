//! JSON extraction from free-text model replies.
//!
//! Models frequently wrap their JSON in prose or code fences. These helpers
//! find the first *balanced* object or array substring, tracking string
//! literals and escapes so braces inside strings don't confuse the scan.

/// Extract the first balanced `{...}` object substring, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    extract_balanced(text, '{', '}')
}

/// Extract the first balanced `[...]` array substring, if any.
pub fn extract_json_array(text: &str) -> Option<&str> {
    extract_balanced(text, '[', ']')
}

fn extract_balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bare_object() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn extracts_object_wrapped_in_prose() {
        let text = "Sure! Here's your recipe:\n{\"title\": \"Soup\"}\nEnjoy!";
        assert_eq!(extract_json_object(text), Some("{\"title\": \"Soup\"}"));
    }

    #[test]
    fn extracts_object_from_code_fence() {
        let text = "```json\n{\"title\": \"Soup\", \"tags\": [\"easy\"]}\n```";
        assert_eq!(
            extract_json_object(text),
            Some("{\"title\": \"Soup\", \"tags\": [\"easy\"]}")
        );
    }

    #[test]
    fn handles_nested_objects() {
        let text = r#"prefix {"a": {"b": {"c": 1}}} suffix {"d": 2}"#;
        assert_eq!(extract_json_object(text), Some(r#"{"a": {"b": {"c": 1}}}"#));
    }

    #[test]
    fn braces_inside_strings_do_not_count() {
        let text = r#"{"note": "use a } brace and a \" quote"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn unbalanced_object_is_none() {
        assert_eq!(extract_json_object(r#"{"a": 1"#), None);
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn extracts_array() {
        let text = "Here you go:\n[{\"title\": \"A\"}, {\"title\": \"B\"}]";
        assert_eq!(
            extract_json_array(text),
            Some("[{\"title\": \"A\"}, {\"title\": \"B\"}]")
        );
    }

    #[test]
    fn array_extraction_ignores_brackets_in_strings() {
        let text = r#"[ "a ] bracket", "b" ]"#;
        assert_eq!(extract_json_array(text), Some(text));
    }
}
