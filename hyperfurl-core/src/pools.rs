//! Fixed phrase pools and the style descriptor table.
//!
//! These are immutable lookup tables fixed at compile time. Ripple two
//! draws from the composition/lens/lighting/atmosphere/palette pools,
//! ripple three from the texture/micro-detail/prop/story pools.

use std::collections::HashMap;

pub const COMPOSITIONS: [&str; 5] = [
    "centered hero composition with rule of thirds",
    "dynamic composition with leading lines",
    "close-up macro shot",
    "wide angle environmental shot",
    "over-the-shoulder perspective",
];

pub const LENSES: [&str; 5] = [
    "35mm lens",
    "50mm lens",
    "85mm lens",
    "24mm wide-angle lens",
    "100mm macro lens",
];

pub const LIGHTING: [&str; 5] = [
    "soft natural lighting with rim light",
    "dramatic chiaroscuro lighting",
    "neon-lit atmosphere with backlighting",
    "golden hour sunlight",
    "moody overcast sky",
];

pub const ATMOSPHERES: [&str; 5] = [
    "with volumetric fog and light rays",
    "with rain and wet reflections",
    "with dust motes in the air",
    "with dramatic shadows",
    "with ethereal glow",
];

pub const PALETTES: [&str; 5] = [
    "warm golden and amber tones",
    "cool blue and cyan palette",
    "vibrant magenta and purple hues",
    "monochrome with silver highlights",
    "pastel pink and mint colors",
];

pub const TEXTURES: [&str; 5] = [
    "with intricate texture details and fine surface imperfections",
    "with realistic material properties and subsurface scattering",
    "with detailed craftsmanship and artisanal quality",
    "with organic textures and natural weathering",
    "with polished surfaces and mirror-like reflections",
];

pub const MICRO_DETAILS: [&str; 5] = [
    "micro-droplets beading on surfaces",
    "subtle fingerprints and smudges",
    "fine dust particles in the air",
    "delicate edge highlights and fresnel effects",
    "intricate shadow patterns",
];

pub const PROPS: [&str; 5] = [
    "scattered personal artifacts and mementos",
    "atmospheric particles and floating elements",
    "architectural details and structural elements",
    "natural elements like leaves, water, or stone",
    "mysterious objects hinting at deeper meaning",
];

pub const STORY_CUES: [&str; 5] = [
    "suggesting a moment of quiet contemplation",
    "evoking a sense of wonder and discovery",
    "capturing the essence of human connection",
    "telling a story of transformation and growth",
    "creating an atmosphere of mystery and intrigue",
];

lazy_static::lazy_static! {
    /// Style key (lowercase) to descriptor phrase. Looked up case-insensitively.
    pub static ref STYLE_MODULES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(
            "realism",
            "photorealistic, highly detailed, professional photography, natural lighting, sharp focus",
        );
        m.insert(
            "cyberpunk",
            "cyberpunk aesthetic, neon lights, futuristic city, holographic elements, dark atmosphere",
        );
        m.insert(
            "impressionism",
            "impressionist painting style, visible brush strokes, broken color, plein-air lighting",
        );
        m.insert(
            "line-art",
            "clean line art, minimal colors, graphic novel style, vector illustration",
        );
        m.insert(
            "abstract",
            "abstract art, non-representational, geometric forms, bold colors, artistic composition",
        );
        m.insert(
            "cartoon",
            "cartoon style, animated, colorful, exaggerated features, comic book aesthetic",
        );
        m.insert(
            "baroque",
            "baroque painting style, dramatic lighting, ornate details, theatrical composition",
        );
        m.insert(
            "graphic-poster",
            "graphic design, flat colors, bold typography, minimalist composition",
        );
        m.insert(
            "watercolor",
            "watercolor painting, soft edges, bleeding colors, artistic brushwork",
        );
        m.insert(
            "surrealist",
            "surrealist art, dream-like, impossible scenes, symbolic elements",
        );
        m.insert(
            "photojournalistic",
            "documentary photography, natural lighting, candid moments, realistic",
        );
        m.insert(
            "macro",
            "macro photography, extreme close-up, sharp details, bokeh background",
        );
        m.insert(
            "cinematic",
            "cinematic lighting, movie still, dramatic composition, professional cinematography",
        );
        m
    };
}
