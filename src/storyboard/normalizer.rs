// Storyboard Length Normalizer
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Pads short descriptions with filler clauses and trims long ones back to a
// sentence boundary. Word count is whitespace-separated tokens.

use crate::storyboard::length::WordRange;
use crate::storyboard::pick;
use rand::Rng;
use tracing::debug;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The four filler clauses, each with its theme words already drawn.
fn filler_pool<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    vec![
        format!(
            " {} plays a crucial role, creating a {} visual rhythm.",
            pick(rng, &["Light", "Shadow", "Color", "Texture", "Movement"]),
            pick(rng, &["dynamic", "subtle", "striking", "nuanced"]),
        ),
        format!(
            " The {} emphasizes the {} weight of the moment.",
            pick(rng, &["composition", "framing", "perspective", "visual flow"]),
            pick(rng, &["emotional", "thematic", "symbolic", "narrative"]),
        ),
        format!(
            " {} feels {} in this interpretation.",
            pick(rng, &["Time", "Space", "Perspective", "Scale"]),
            pick(rng, &["distorted", "amplified", "intimate", "expansive"]),
        ),
        format!(
            " The {} {} the central imagery.",
            pick(rng, &["foreground", "background", "lighting", "color palette"]),
            pick(rng, &["contrasts with", "complements", "enhances", "defines"]),
        ),
    ]
}

/// Bring `text` into `range`.
///
/// Expansion appends filler clauses (drawn without replacement) until the
/// minimum is met or the pool runs dry; a short result is an accepted
/// outcome. Truncation keeps the first `max` tokens and cuts after the last
/// period in them, or appends a period when there is none.
pub fn normalize_length<R: Rng + ?Sized>(rng: &mut R, text: String, range: WordRange) -> String {
    let mut current = word_count(&text);

    if current < range.min {
        let mut scene = text;
        let mut pool = filler_pool(rng);
        while current < range.min && !pool.is_empty() {
            let detail = pool.remove(rng.gen_range(0..pool.len()));
            scene.push_str(&detail);
            current = word_count(&scene);
        }
        if current < range.min {
            debug!(
                "[NORMALIZE] Filler pool exhausted at {} words (min {}).",
                current, range.min
            );
        }
        scene
    } else if current > range.max {
        truncate_to_sentence(&text, range.max)
    } else {
        text
    }
}

fn truncate_to_sentence(text: &str, max_words: usize) -> String {
    let trimmed = text
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ");

    match trimmed.rfind('.') {
        Some(idx) if idx > 0 => trimmed[..=idx].to_string(),
        _ => format!("{}.", trimmed),
    }
}
