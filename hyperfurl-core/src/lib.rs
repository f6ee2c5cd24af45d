//! Unfurl engine: expands a short seed phrase into a rich image-generation prompt.
//!
//! The engine is a single-shot pure transformation. Given a seed like
//! "a cat sitting on the roof" and an optional style hint, it produces:
//! - a layered final prompt (three "ripple" stages plus style fusion)
//! - a fixed negative prompt
//! - three single-substitution variants
//! - an inspector block with the intermediate ripples and heuristic scores
//!
//! It never fails: empty or degenerate seeds fall back to generic filler
//! text rather than returning an error.
//!
//! # Quick Start
//!
//! ```
//! use hyperfurl_core::unfurl;
//!
//! let result = unfurl("a lighthouse on a stormy coast", Some("cinematic"));
//! assert!(result.final_prompt.contains("in the style of cinematic"));
//! assert_eq!(result.variants.len(), 3);
//! ```
//!
//! Ripple stages two and three draw from fixed phrase pools at random, so
//! repeated calls vary. Use [`unfurl_with_rng`] to pin the random source.

pub mod engine;
pub mod normalize;
pub mod pools;
pub mod ripple;
pub mod score;
pub mod variant;

// Primary public API
pub use engine::{unfurl, unfurl_with_rng, Inspector, Ripples, UnfurlResult};
pub use normalize::{normalize_input, NormalizedInput};
pub use score::Scores;
pub use variant::Variant;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_result_shape() {
        let result = unfurl("a cat sitting on the roof", None);
        assert!(!result.final_prompt.is_empty());
        assert!(!result.negative_prompt.is_empty());
        assert_eq!(result.variants.len(), 3);
        assert_eq!(result.inspector.seed, "a cat sitting on the roof");
        assert!(result.inspector.style_hint.is_none());
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let result = unfurl("a cat", Some("cyberpunk"));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["final_prompt"].is_string());
        assert!(json["negative_prompt"].is_string());
        assert_eq!(json["variants"].as_array().unwrap().len(), 3);
        assert_eq!(json["inspector"]["style_hint"], "cyberpunk");
        assert!(json["inspector"]["ripples"]["r1"].is_string());
        assert!(json["inspector"]["scores"]["total"].is_number());
    }
}
