//! Opening assistant messages.

use coiffe_core::user::HairProfile;
use minijinja::{Environment, context};
use tracing::warn;

pub const GENERIC_GREETING: &str = "Hello! I'm your AI hair consultant. I can help you find a \
hairstyle that suits you. What would you like to know?";

const PERSONALIZED_TEMPLATE: &str = "Hello {{ name }}! 👋

I'm your AI hair consultant. Based on your hair information:
{% for label, value in fields %}- {{ label }}: {{ value }}
{% endfor %}
I can help you:
1. Find a hairstyle that suits you
2. Recommend hair care products
3. Answer questions about your hair

What would you like advice on?";

/// Greeting that summarizes the customer's hair profile.
///
/// Falls back to [`GENERIC_GREETING`] if the template cannot be rendered.
pub fn personalized_greeting(profile: &HairProfile) -> String {
    let name = profile
        .full_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("there");
    let fields: Vec<(&str, &str)> = profile
        .display_fields()
        .into_iter()
        .filter(|(label, _)| *label != "Name")
        .collect();

    let env = Environment::new();
    match env.render_str(PERSONALIZED_TEMPLATE, context! { name, fields }) {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "Failed to render greeting");
            GENERIC_GREETING.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coiffe_core::user::NOT_SET;

    #[test]
    fn test_greeting_lists_profile() {
        let profile = HairProfile {
            full_name: Some("An".into()),
            hair_style: Some("wavy".into()),
            hair_concerns: Some("frizz".into()),
            ..HairProfile::default()
        };
        let text = personalized_greeting(&profile);
        assert!(text.starts_with("Hello An!"));
        assert!(text.contains("- Hair style: wavy\n"));
        assert!(text.contains("- Hair concerns: frizz\n"));
        assert!(text.contains(&format!("- Hair color: {NOT_SET}\n")));
        assert!(!text.contains("- Name:"));
    }

    #[test]
    fn test_greeting_without_name() {
        let text = personalized_greeting(&HairProfile::default());
        assert!(text.starts_with("Hello there!"));
    }
}
