//! The three ripple stages that build up the prompt.
//!
//! R1 is a literal what/where/when clause built from the seed and its
//! entities. R2 (composition and light) and R3 (material and detail) are
//! independent draws from fixed phrase pools; they deliberately do not
//! read the earlier stages' text. The stages layer by position in the
//! final prompt, not by textual composition.

use rand::Rng;

use crate::pools;

/// R1 - literal core: describe what, where, when plainly.
///
/// The subject is the raw seed when non-empty, else the first entity, else
/// generic filler. Environment and time windows overlap on entity index 2;
/// that reuse is intentional and load-bearing for short seeds.
pub fn generate_ripple1(seed: &str, entities: &[String]) -> String {
    let subject = if !seed.is_empty() {
        seed
    } else if let Some(first) = entities.first() {
        first
    } else {
        "a mysterious scene"
    };

    let environment = join_window(entities, 1, 3, " and ")
        .unwrap_or_else(|| "an interesting environment".to_string());
    let time = join_window(entities, 2, 4, " ")
        .unwrap_or_else(|| "at a dramatic moment".to_string());

    format!("{subject} in {environment} during {time}")
}

/// R2 - composition and light: camera, framing, atmosphere, palette.
///
/// One uniform pick from each of five pools. Independent of R1 by design.
pub fn generate_ripple2<R: Rng>(rng: &mut R) -> String {
    let composition = pick(rng, &pools::COMPOSITIONS);
    let lens = pick(rng, &pools::LENSES);
    let light = pick(rng, &pools::LIGHTING);
    let atmosphere = pick(rng, &pools::ATMOSPHERES);
    let palette = pick(rng, &pools::PALETTES);

    format!("{composition} with {lens}, {light}, {atmosphere}, {palette}")
}

/// R3 - material and detail: surface qualities, micro details, props, story cues.
pub fn generate_ripple3<R: Rng>(rng: &mut R) -> String {
    let texture = pick(rng, &pools::TEXTURES);
    let micro = pick(rng, &pools::MICRO_DETAILS);
    let prop = pick(rng, &pools::PROPS);
    let story = pick(rng, &pools::STORY_CUES);

    format!("{texture}, {micro}, {prop}, {story}")
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Join `entities[start..end)` (clamped to length) with `sep`, or `None`
/// when the window is empty.
fn join_window(entities: &[String], start: usize, end: usize, sep: &str) -> Option<String> {
    let window = entities.get(start..end.min(entities.len()))?;
    if window.is_empty() {
        None
    } else {
        Some(window.join(sep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entities(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ripple1_uses_seed_as_subject() {
        let r1 = generate_ripple1("A Cat", &entities(&["sitting", "roof"]));
        assert!(r1.starts_with("A Cat in "));
    }

    #[test]
    fn ripple1_falls_back_to_first_entity() {
        let r1 = generate_ripple1("", &entities(&["lighthouse", "coast", "storm"]));
        assert!(r1.starts_with("lighthouse in "));
    }

    #[test]
    fn ripple1_all_fallbacks_for_empty_input() {
        let r1 = generate_ripple1("", &[]);
        assert_eq!(
            r1,
            "a mysterious scene in an interesting environment during at a dramatic moment"
        );
    }

    #[test]
    fn ripple1_windows_overlap_on_index_two() {
        let r1 = generate_ripple1(
            "seed",
            &entities(&["alpha", "bravo", "charlie", "delta", "echo"]),
        );
        // environment = entities[1..3], time = entities[2..4]
        assert_eq!(r1, "seed in bravo and charlie during charlie delta");
    }

    #[test]
    fn ripple1_single_entity_window() {
        let r1 = generate_ripple1("seed", &entities(&["alpha", "bravo"]));
        assert_eq!(r1, "seed in bravo during at a dramatic moment");
    }

    #[test]
    fn ripple1_is_deterministic() {
        let ents = entities(&["sitting", "roof"]);
        assert_eq!(
            generate_ripple1("a cat", &ents),
            generate_ripple1("a cat", &ents)
        );
    }

    #[test]
    fn ripple2_draws_from_every_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let r2 = generate_ripple2(&mut rng);
        assert!(crate::pools::COMPOSITIONS
            .iter()
            .any(|c| r2.starts_with(c)));
        assert!(crate::pools::PALETTES.iter().any(|p| r2.ends_with(p)));
    }

    #[test]
    fn ripple2_is_reproducible_with_seeded_rng() {
        let a = generate_ripple2(&mut StdRng::seed_from_u64(42));
        let b = generate_ripple2(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn ripple3_draws_from_every_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let r3 = generate_ripple3(&mut rng);
        assert!(crate::pools::TEXTURES.iter().any(|t| r3.starts_with(t)));
        assert!(crate::pools::STORY_CUES.iter().any(|s| r3.ends_with(s)));
    }
}
