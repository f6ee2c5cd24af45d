//! Variant generation: targeted single-substitution alternatives.
//!
//! Each rule rewrites the first match of its pattern in the base prompt.
//! A rule whose pattern does not match leaves the prompt unchanged; that
//! is a valid variant, not an error.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// An alternative final prompt produced by one targeted substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub prompt: String,
    pub differences: Vec<String>,
}

struct VariantRule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
    differences: [&'static str; 2],
}

lazy_static! {
    static ref VARIANT_RULES: [VariantRule; 3] = [
        VariantRule {
            name: "Composition Alternative",
            pattern: Regex::new(r"composition with \w+").unwrap(),
            replacement: "composition with dynamic diagonal lines",
            differences: ["composition", "framing"],
        },
        VariantRule {
            name: "Lighting Variation",
            pattern: Regex::new(r"lighting, \w+").unwrap(),
            replacement: "lighting with cinematic shadows and highlights",
            differences: ["lighting", "mood"],
        },
        VariantRule {
            name: "Color Palette Shift",
            pattern: Regex::new(r"palette, \w+").unwrap(),
            replacement: "palette with vibrant complementary colors",
            differences: ["color palette", "atmosphere"],
        },
    ];
}

/// Apply the three variant rules to a base prompt, in order.
pub fn generate_variants(base_prompt: &str) -> Vec<Variant> {
    VARIANT_RULES
        .iter()
        .map(|rule| Variant {
            name: rule.name.to_string(),
            prompt: rule
                .pattern
                .replace(base_prompt, rule.replacement)
                .into_owned(),
            differences: rule.differences.iter().map(|d| d.to_string()).collect(),
        })
        .collect()
}
