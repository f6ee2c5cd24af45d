//! Orchestration: seed in, complete [`UnfurlResult`] out.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_input;
use crate::pools::STYLE_MODULES;
use crate::ripple::{generate_ripple1, generate_ripple2, generate_ripple3};
use crate::score::{calculate_scores, Scores};
use crate::variant::{generate_variants, Variant};

/// Quality enhancers appended to every final prompt.
const QUALITY_SUFFIX: &str =
    "Highly detailed, professional, coherent lighting, clean edges, balanced contrast, sharp focus";

/// Common generation artifacts the image model should avoid.
const NEGATIVE_PROMPT: &str = "low-res, oversharpening, compression artifacts, extra limbs, \
     deformed anatomy, watermark, text artifacts, bad hands, bad eyes, crooked horizon, \
     heavy banding, duplicate subjects, frame cutoffs";

/// The three expansion stages, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ripples {
    pub r1: String,
    pub r2: String,
    pub r3: String,
}

/// Transparency block: the inputs, intermediate ripples, and scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspector {
    pub seed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_hint: Option<String>,
    pub ripples: Ripples,
    pub scores: Scores,
}

/// Everything the engine produces for one seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnfurlResult {
    pub final_prompt: String,
    pub negative_prompt: String,
    pub variants: Vec<Variant>,
    pub inspector: Inspector,
}

/// Expand a seed phrase into a full prompt package.
///
/// Total over all inputs: an empty seed produces fallback filler text, not
/// an error. Ripples two and three are randomized, so repeated calls with
/// the same seed differ there; R1 and the style fusion are deterministic.
pub fn unfurl(seed: &str, style_hint: Option<&str>) -> UnfurlResult {
    unfurl_with_rng(seed, style_hint, &mut rand::thread_rng())
}

/// [`unfurl`] with a caller-supplied random source, for reproducible output.
pub fn unfurl_with_rng<R: Rng>(seed: &str, style_hint: Option<&str>, rng: &mut R) -> UnfurlResult {
    let normalized = normalize_input(seed, style_hint);

    let r1 = generate_ripple1(seed, &normalized.entities);
    let r2 = generate_ripple2(rng);
    let r3 = generate_ripple3(rng);

    let style_fusion = apply_style_fusion(style_hint);

    let mut final_prompt = format!("{r1}. {r2}. {r3}");
    if !style_fusion.is_empty() {
        final_prompt.push_str(". ");
        final_prompt.push_str(&style_fusion);
    }
    final_prompt.push_str(". ");
    final_prompt.push_str(QUALITY_SUFFIX);

    let variants = generate_variants(&final_prompt);
    let scores = calculate_scores(&final_prompt);

    UnfurlResult {
        final_prompt,
        negative_prompt: NEGATIVE_PROMPT.to_string(),
        variants,
        inspector: Inspector {
            seed: seed.to_string(),
            style_hint: style_hint.map(str::to_string),
            ripples: Ripples { r1, r2, r3 },
            scores,
        },
    }
}

/// Map a style hint to its fusion clause. Unknown hints yield an empty
/// string and are otherwise ignored.
pub fn apply_style_fusion(style_hint: Option<&str>) -> String {
    let Some(hint) = style_hint else {
        return String::new();
    };
    match STYLE_MODULES.get(hint.to_lowercase().as_str()) {
        Some(descriptor) => format!("in the style of {descriptor}"),
        None => String::new(),
    }
}
