//! Heuristic quality scores for an assembled prompt.
//!
//! These are cheap vocabulary probes, not a model of image quality. Each
//! detector is a small disjunction of trigger substrings tested against
//! the final prompt.

use serde::{Deserialize, Serialize};

const LIGHTING_TERMS: [&str; 5] = ["lighting", "light", "shadow", "glow", "illuminate"];
const COMPOSITION_TERMS: [&str; 4] = ["composition", "framing", "angle", "perspective"];
const TEXTURE_TERMS: [&str; 4] = ["texture", "material", "surface", "detail"];
const COLOR_TERMS: [&str; 4] = ["palette", "color", "hue", "tone"];
const STORY_TERMS: [&str; 5] = ["moment", "story", "emotion", "mood", "atmosphere"];
const TECHNICAL_TERMS: [&str; 5] = ["lens", "focal", "bokeh", "depth", "sharp"];

/// Seven named heuristics in [0,1] plus their arithmetic mean.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scores {
    pub clarity: f64,
    pub edge: f64,
    pub lighting: f64,
    pub palette: f64,
    pub depth: f64,
    pub narrative: f64,
    pub style: f64,
    pub total: f64,
}

/// Score a final prompt.
pub fn calculate_scores(prompt: &str) -> Scores {
    let has_lighting = contains_any(prompt, &LIGHTING_TERMS);
    let has_composition = contains_any(prompt, &COMPOSITION_TERMS);
    let has_texture = contains_any(prompt, &TEXTURE_TERMS);
    let has_color = contains_any(prompt, &COLOR_TERMS);
    let has_story = contains_any(prompt, &STORY_TERMS);
    let has_technical = contains_any(prompt, &TECHNICAL_TERMS);

    // Split on single spaces, not runs: a doubled space in the raw seed
    // carries through R1 and still counts toward clarity.
    let word_count = prompt.split(' ').count() as f64;

    let clarity = (word_count / 100.0 + 0.3).min(1.0);
    let edge = if has_technical { 0.9 } else { 0.7 };
    let lighting = if has_lighting { 0.9 } else { 0.6 };
    let palette = if has_color { 0.9 } else { 0.6 };
    let depth = if has_composition && has_texture { 0.9 } else { 0.6 };
    let narrative = if has_story { 0.9 } else { 0.6 };
    let style = 0.8;

    let total = (clarity + edge + lighting + palette + depth + narrative + style) / 7.0;

    Scores {
        clarity,
        edge,
        lighting,
        palette,
        depth,
        narrative,
        style,
        total,
    }
}

fn contains_any(prompt: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| prompt.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_of_seven(s: &Scores) -> f64 {
        (s.clarity + s.edge + s.lighting + s.palette + s.depth + s.narrative + s.style) / 7.0
    }

    #[test]
    fn total_is_mean_of_named_scores() {
        let scores = calculate_scores("soft natural lighting with rim light, 85mm lens, palette");
        assert!((scores.total - mean_of_seven(&scores)).abs() < 1e-12);

        let bare = calculate_scores("nothing relevant here");
        assert!((bare.total - mean_of_seven(&bare)).abs() < 1e-12);
    }

    #[test]
    fn detectors_raise_their_scores() {
        let scores = calculate_scores(
            "dynamic composition with leading lines, 85mm lens, dramatic chiaroscuro lighting, \
             with intricate texture details, cool blue and cyan palette, \
             suggesting a moment of quiet contemplation",
        );
        assert_eq!(scores.edge, 0.9);
        assert_eq!(scores.lighting, 0.9);
        assert_eq!(scores.palette, 0.9);
        assert_eq!(scores.depth, 0.9);
        assert_eq!(scores.narrative, 0.9);
    }

    #[test]
    fn missing_vocabulary_uses_floor_values() {
        let scores = calculate_scores("a cat");
        assert_eq!(scores.edge, 0.7);
        assert_eq!(scores.lighting, 0.6);
        assert_eq!(scores.palette, 0.6);
        assert_eq!(scores.depth, 0.6);
        assert_eq!(scores.narrative, 0.6);
        assert_eq!(scores.style, 0.8);
    }

    #[test]
    fn clarity_scales_with_length_and_caps_at_one() {
        let short = calculate_scores("one two three four");
        assert!((short.clarity - 0.34).abs() < 1e-12);

        let long_prompt = vec!["word"; 200].join(" ");
        let long = calculate_scores(&long_prompt);
        assert_eq!(long.clarity, 1.0);
    }

    #[test]
    fn clarity_counts_empty_tokens_from_doubled_spaces() {
        // "a  b" splits into three tokens on single spaces
        let scores = calculate_scores("a  b");
        assert!((scores.clarity - 0.33).abs() < 1e-12);
    }

    #[test]
    fn depth_requires_both_composition_and_texture() {
        let only_composition = calculate_scores("centered hero composition");
        assert_eq!(only_composition.depth, 0.6);

        let both = calculate_scores("composition with intricate texture");
        assert_eq!(both.depth, 0.9);
    }
}
