//! Prompt construction.
//!
//! Every function here is pure. The prompt is a plain concatenation:
//!
//! ```text
//! <system instruction><profile section><catalog section>User: <text>
//! ```
//!
//! Sections end with a blank line so they can be appended in sequence. No
//! truncation is applied.

use coiffe_core::catalog::Product;
use coiffe_core::user::HairProfile;

const PROFILE_HEADING: &str = "## Customer hair profile";
const CATALOG_HEADING: &str = "## Available products";
const EMPTY_CATALOG: &str = "No products are currently available.";

/// Fixed consultant instruction, answering in `language`.
pub fn system_prompt(language: &str) -> String {
    format!(
        "You are a friendly and professional hair consultant. \
         Keep your answers short and clear, and reply in {language}.\n\
         When giving advice:\n\
         - Address the customer by name when you know it\n\
         - Base your advice on the customer's current hair condition\n\
         - Only recommend products from the available products list, when one is given\n\
         - Explain why a product suits the customer's hair\n\
         - If nothing suitable is available, say so and suggest an alternative\n\
         - Stay friendly and professional\n\n"
    )
}

/// One `Label: value` line per profile attribute.
pub fn profile_text(profile: &HairProfile) -> String {
    profile
        .display_fields()
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Catalog projection used in prompts, one block per product.
pub fn catalog_text(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| {
            let brand = if p.brand.is_empty() {
                String::new()
            } else {
                format!(" ({})", p.brand)
            };
            format!(
                "- {}{}\n  Description: {}\n  Price: {:.2}\n  Category: {}\n  Availability: {}",
                p.name,
                brand,
                p.description,
                p.price,
                p.category,
                p.availability_label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Profile section, or nothing when there is no profile text.
pub fn profile_section(profile_text: &str) -> String {
    if profile_text.trim().is_empty() {
        String::new()
    } else {
        format!("{PROFILE_HEADING}\n{profile_text}\n\n")
    }
}

pub fn catalog_section(catalog_text: &str) -> String {
    let body = if catalog_text.trim().is_empty() {
        EMPTY_CATALOG
    } else {
        catalog_text
    };
    format!("{CATALOG_HEADING}\n{body}\n\n")
}

/// Builds the generation prompt.
///
/// The catalog section is present iff `catalog_text` is `Some`.
pub fn build_prompt(
    system_prompt: &str,
    profile_text: &str,
    catalog_text: Option<&str>,
    user_text: &str,
) -> String {
    let mut prompt = String::with_capacity(
        system_prompt.len()
            + profile_text.len()
            + catalog_text.map_or(0, str::len)
            + user_text.len()
            + 96,
    );
    prompt.push_str(system_prompt);
    prompt.push_str(&profile_section(profile_text));
    if let Some(catalog) = catalog_text {
        prompt.push_str(&catalog_section(catalog));
    }
    prompt.push_str("User: ");
    prompt.push_str(user_text);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shampoo_x() -> Product {
        Product {
            id: "p1".into(),
            name: "Shampoo X".into(),
            description: "Gentle daily shampoo".into(),
            price: 9.5,
            stock_amount: 4,
            category: "Shampoo".into(),
            brand: String::new(),
            image_url: String::new(),
            is_available: true,
        }
    }

    #[test]
    fn test_without_catalog_is_exact_concatenation() {
        let sys = "SYSTEM\n\n";
        let profile = "Name: An\nHair style: wavy";
        assert_eq!(
            build_prompt(sys, profile, None, "hello"),
            format!("{sys}{}User: hello", profile_section(profile))
        );
    }

    #[test]
    fn test_empty_profile_is_omitted() {
        assert_eq!(build_prompt("S\n\n", "", None, "hi"), "S\n\nUser: hi");
        assert_eq!(build_prompt("S\n\n", "  ", None, "hi"), "S\n\nUser: hi");
    }

    #[test]
    fn test_catalog_section_order() {
        let catalog = catalog_text(&[shampoo_x()]);
        let prompt = build_prompt("S\n\n", "Name: An", Some(&catalog), "any shampoo?");
        let profile_at = prompt.find(PROFILE_HEADING).unwrap();
        let catalog_at = prompt.find("Shampoo X").unwrap();
        let user_at = prompt.find("User: any shampoo?").unwrap();
        assert!(profile_at < catalog_at && catalog_at < user_at);
        assert!(prompt.ends_with("User: any shampoo?"));
    }

    #[test]
    fn test_catalog_text_lists_availability_and_brand() {
        let mut serum = shampoo_x();
        serum.name = "Silk Serum".into();
        serum.brand = "SilkPro".into();
        serum.is_available = false;

        let text = catalog_text(&[shampoo_x(), serum]);
        assert!(text.starts_with("- Shampoo X\n"));
        assert!(text.contains("- Silk Serum (SilkPro)"));
        assert!(text.contains("Price: 9.50"));
        assert!(text.contains("Availability: Out of stock"));
        assert_eq!(catalog_text(&[]), "");
    }

    #[test]
    fn test_empty_catalog_still_gets_a_section() {
        let prompt = build_prompt("S\n\n", "", Some(""), "hi");
        assert_eq!(prompt, format!("S\n\n{CATALOG_HEADING}\n{EMPTY_CATALOG}\n\nUser: hi"));
    }

    #[test]
    fn test_system_prompt_names_language() {
        let sys = system_prompt("Vietnamese");
        assert!(sys.contains("reply in Vietnamese"));
        assert!(sys.ends_with("\n\n"));
    }
}
