//! Starter catalog.

use super::model::Product;

/// (name, description, price, stock, category, brand, image slug)
const SAMPLES: [(&str, &str, f64, u32, &str, &str, &str); 14] = [
    (
        "Moisture Boost Shampoo",
        "Hydrating shampoo for dry and damaged hair with argan oil and shea butter",
        19.99,
        50,
        "Shampoo",
        "HairCare Pro",
        "moisture-shampoo",
    ),
    (
        "Volume Lift Shampoo",
        "Adds volume and body to fine hair with natural ingredients",
        24.99,
        35,
        "Shampoo",
        "HairCare Pro",
        "volume-shampoo",
    ),
    (
        "Anti-Dandruff Shampoo",
        "Medicated shampoo for dandruff control with zinc pyrithione",
        16.99,
        45,
        "Shampoo",
        "ScalpCare",
        "anti-dandruff",
    ),
    (
        "Deep Repair Conditioner",
        "Intensive repair for damaged hair with keratin and amino acids",
        22.99,
        40,
        "Conditioner",
        "HairCare Pro",
        "repair-conditioner",
    ),
    (
        "Color Protect Conditioner",
        "Extends hair color vibrancy and prevents fading",
        21.99,
        30,
        "Conditioner",
        "ColorGuard",
        "color-protect",
    ),
    (
        "Heat Protectant Spray",
        "Protects hair from heat damage up to 450°F with natural oils",
        18.99,
        60,
        "Styling",
        "StyleGuard",
        "heat-protectant",
    ),
    (
        "Texturizing Sea Salt Spray",
        "Creates beachy waves and texture with natural sea salt",
        16.99,
        45,
        "Styling",
        "StyleGuard",
        "sea-salt-spray",
    ),
    (
        "Strong Hold Hair Gel",
        "Maximum hold gel for all hair types",
        14.99,
        55,
        "Styling",
        "StyleGuard",
        "hair-gel",
    ),
    (
        "Keratin Treatment Kit",
        "Professional-grade keratin treatment for home use",
        49.99,
        25,
        "Treatment",
        "HairCare Pro",
        "keratin-kit",
    ),
    (
        "Hair Growth Serum",
        "Promotes hair growth with biotin and caffeine",
        29.99,
        40,
        "Treatment",
        "HairGrowth",
        "growth-serum",
    ),
    (
        "Professional Hair Dryer",
        "Ionic hair dryer with multiple heat settings",
        89.99,
        20,
        "Tools",
        "StyleTools",
        "hair-dryer",
    ),
    (
        "Ceramic Flat Iron",
        "1-inch ceramic flat iron with adjustable temperature",
        59.99,
        30,
        "Tools",
        "StyleTools",
        "flat-iron",
    ),
    (
        "Silk Hair Scarf",
        "100% silk hair scarf for protection and styling",
        24.99,
        50,
        "Accessories",
        "StyleGuard",
        "silk-scarf",
    ),
    (
        "Professional Hair Clips",
        "Set of 12 durable hair clips",
        12.99,
        100,
        "Accessories",
        "StyleTools",
        "hair-clips",
    ),
];

/// Products inserted into an empty catalog on first run.
pub fn sample_products() -> Vec<Product> {
    SAMPLES
        .iter()
        .map(
            |&(name, description, price, stock_amount, category, brand, slug)| Product {
                id: String::new(),
                name: name.to_string(),
                description: description.to_string(),
                price,
                stock_amount,
                category: category.to_string(),
                brand: brand.to_string(),
                image_url: format!("https://example.com/{slug}.jpg"),
                is_available: true,
            },
        )
        .collect()
}
