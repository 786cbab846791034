//! Chef chat prompt.

/// Render the chef-assistant prompt for a user message.
///
/// Asks for lightweight markup (headers, bold/italic, list markers) so the
/// client can render structure without a full markdown stack.
pub fn render_chat_prompt(message: &str) -> String {
    format!(
        "You are a helpful chef assistant providing recipe ideas and cooking advice. \
         The user is asking about: {message}\n\n\
         Provide a helpful, detailed response with cooking instructions if they're asking for a recipe. \
         If they're asking for cooking advice, give clear, practical tips. \
         Focus exclusively on food and cooking topics.\n\n\
         You may structure the reply with '#' for headers, '**bold**' and '*italic*' spans, \
         and '-' for list items.",
        message = message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_the_user_message() {
        let prompt = render_chat_prompt("how do I sear scallops?");
        assert!(prompt.contains("how do I sear scallops?"));
        assert!(prompt.contains("chef assistant"));
    }
}
