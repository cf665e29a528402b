// Storyboard Scene Composer
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Weaves one phrase per category through a fixed sentence template, then
// hands the draft to the length normalizer. Output varies from call to call
// unless the caller supplies a seeded RNG.

use crate::storyboard::length::{LengthCategory, WordRange};
use crate::storyboard::mood::{Mood, MoodSelector};
use crate::storyboard::normalizer::normalize_length;
use crate::storyboard::pick;
use crate::storyboard::vocabulary::{self, Category, CONNECTING_PHRASES, DESCRIPTIVE_VERBS};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Returned verbatim for empty or whitespace-only lyrics.
pub const EMPTY_LYRIC_MESSAGE: &str = "Please enter a lyric to generate a scene.";

/// Phrases chosen for one scene, one per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneElements {
    pub setting: &'static str,
    pub atmosphere: &'static str,
    pub character: &'static str,
    pub visual_style: &'static str,
    pub nature: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct SceneComposer {
    selector: MoodSelector,
}

impl SceneComposer {
    pub fn new(selector: MoodSelector) -> Self {
        Self { selector }
    }

    /// Compose a description for `lyric` sized to `length`.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        lyric: &str,
        mood: Mood,
        length: LengthCategory,
    ) -> String {
        self.compose_within(rng, lyric, mood, length.range())
    }

    /// Same as [`compose`](Self::compose) with an explicit word range.
    pub fn compose_within<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        lyric: &str,
        mood: Mood,
        range: WordRange,
    ) -> String {
        let lyric = lyric.trim();
        if lyric.is_empty() {
            return EMPTY_LYRIC_MESSAGE.to_string();
        }

        let draft = self.draft(rng, lyric, mood);
        debug!(
            "[COMPOSER] Draft for \"{}\" ({}): {} words",
            lyric,
            mood,
            crate::storyboard::word_count(&draft)
        );
        normalize_length(rng, draft, range)
    }

    pub fn select_elements<R: Rng + ?Sized>(&self, rng: &mut R, mood: Mood) -> SceneElements {
        SceneElements {
            setting: self.selector.select(rng, mood, Category::Setting),
            atmosphere: self.selector.select(rng, mood, Category::Atmosphere),
            character: self.selector.select(rng, mood, Category::Character),
            visual_style: self.selector.select(rng, mood, Category::VisualStyle),
            nature: self.selector.select(rng, mood, Category::Nature),
        }
    }

    /// The unnormalized template text. `lyric` is used as given.
    pub fn draft<R: Rng + ?Sized>(&self, rng: &mut R, lyric: &str, mood: Mood) -> String {
        let el = self.select_elements(rng, mood);
        let adjective = pick(rng, vocabulary::adjectives(mood));

        let mut scene = format!("Scene inspired by \"{}\": ", lyric);
        scene.push_str(&format!(
            "A {} {} {} ",
            adjective,
            el.setting,
            pick(rng, CONNECTING_PHRASES)
        ));
        scene.push_str(&format!("a {} {} ", el.character, pick(rng, DESCRIPTIVE_VERBS)));
        scene.push_str(&format!("in a {}. ", el.atmosphere));
        scene.push_str(&format!(
            "The scene {} with {}, ",
            pick(rng, DESCRIPTIVE_VERBS),
            el.visual_style
        ));
        scene.push_str(&format!("{} {}. ", pick(rng, CONNECTING_PHRASES), el.nature));

        scene.push_str(&choose_variant(interpretations(rng), rng));
        scene.push_str(&choose_variant(transitions(rng), rng));
        scene
    }
}

fn choose_variant<R: Rng + ?Sized>(variants: Vec<String>, rng: &mut R) -> String {
    variants.choose(rng).cloned().unwrap_or_default()
}

fn interpretations<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    vec![
        format!(
            "The visual metaphor reinforces the lyric's sentiment of {}.",
            pick(rng, &["longing", "hope", "transformation", "reflection", "connection"])
        ),
        format!(
            "This imagery {} the emotional undercurrent of the words.",
            pick(rng, &["amplifies", "echoes", "contrasts with", "complements", "reinterprets"])
        ),
        format!(
            "The scene {} the {} inherent in the lyric.",
            pick(rng, &["evokes", "suggests", "highlights", "mirrors", "enhances"]),
            pick(rng, &["vulnerability", "strength", "ambiguity", "clarity", "tension"])
        ),
    ]
}

fn transitions<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    vec![
        format!(
            " The frame could {} to the next scene.",
            pick(rng, &["slowly dissolve", "cut sharply", "fade gently", "transition smoothly"])
        ),
        format!(
            " As the scene {}, it leaves a {} impression.",
            pick(rng, &["fades", "lingers", "dissolves", "transitions"]),
            pick(rng, &["poignant", "powerful", "subtle", "striking"])
        ),
        format!(
            " This moment {} what comes next in the visual narrative.",
            pick(rng, &["bridges", "connects", "contrasts with", "complements"])
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storyboard::word_count;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn whitespace_lyric_yields_sentinel() {
        let composer = SceneComposer::default();
        let mut rng = StdRng::seed_from_u64(1);
        for lyric in ["", "   ", "\t\n"] {
            assert_eq!(
                composer.compose(&mut rng, lyric, Mood::Dramatic, LengthCategory::Elaborate),
                EMPTY_LYRIC_MESSAGE
            );
        }
    }

    #[test]
    fn draft_follows_template() {
        let composer = SceneComposer::default();
        let mut rng = StdRng::seed_from_u64(9);
        let draft = composer.draft(&mut rng, "hold on", Mood::Energetic);
        assert!(draft.starts_with("Scene inspired by \"hold on\": A "));
        assert!(draft.contains(" in a "));
        assert!(draft.contains(". The scene "));
        assert!(draft.ends_with('.'));
        let adjective = draft["Scene inspired by \"hold on\": A ".len()..]
            .split_whitespace()
            .next()
            .unwrap();
        assert!(vocabulary::adjectives(Mood::Energetic).contains(&adjective));
    }

    #[test]
    fn lyric_is_trimmed_before_quoting() {
        let composer = SceneComposer::default();
        let mut rng = StdRng::seed_from_u64(4);
        let out = composer.compose(&mut rng, "  midnight train  ", Mood::Random, LengthCategory::Standard);
        assert!(out.contains("\"midnight train\""));
    }

    #[test]
    fn same_seed_same_scene() {
        let composer = SceneComposer::default();
        let a = composer.compose(&mut StdRng::seed_from_u64(77), "echoes", Mood::Dreamy, LengthCategory::Standard);
        let b = composer.compose(&mut StdRng::seed_from_u64(77), "echoes", Mood::Dreamy, LengthCategory::Standard);
        assert_eq!(a, b);
    }

    #[test]
    fn elements_respect_mood_profile() {
        let composer = SceneComposer::default();
        let mut rng = StdRng::seed_from_u64(21);
        let allowed: Vec<&str> = [1, 3, 5, 7, 9]
            .iter()
            .map(|&i| vocabulary::phrases(Category::Character)[i])
            .collect();
        for _ in 0..50 {
            let el = composer.select_elements(&mut rng, Mood::Uplifting);
            assert!(allowed.contains(&el.character));
        }
    }

    #[test]
    fn standard_length_is_respected() {
        let composer = SceneComposer::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let out = composer.compose(&mut rng, "we were young", Mood::Melancholic, LengthCategory::Standard);
            let n = word_count(&out);
            assert!((50..=80).contains(&n), "word count {n} outside 50-80: {out}");
        }
    }
}
