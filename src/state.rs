// Storyboard Server State
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use crate::config::SynthConfig;
use crate::storyboard::{LengthCategory, Mood, SceneComposer};
use crate::storyboard::vocabulary;
use serde::Serialize;

/// Read-only state shared by every request. Generated storyboards are never
/// stored here; each request carries its own lyrics and gets its own RNG.
pub struct ServerState {
    pub config: SynthConfig,
    pub composer: SceneComposer,
}

impl ServerState {
    pub fn new(config: SynthConfig) -> Self {
        let composer = config.composer();
        Self { config, composer }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}

#[derive(Serialize)]
pub struct MoodOption {
    pub name: &'static str,
    pub adjectives: &'static [&'static str],
}

#[derive(Serialize)]
pub struct LengthOption {
    pub name: &'static str,
    pub label: String,
    pub min_words: usize,
    pub max_words: usize,
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub moods: Vec<MoodOption>,
    pub lengths: Vec<LengthOption>,
    pub default_mood: Mood,
    pub default_length: LengthCategory,
}

impl OptionsResponse {
    pub fn from_config(config: &SynthConfig) -> Self {
        Self {
            moods: Mood::ALL
                .into_iter()
                .map(|m| MoodOption {
                    name: m.name(),
                    adjectives: vocabulary::adjectives(m),
                })
                .collect(),
            lengths: LengthCategory::ALL
                .into_iter()
                .map(|l| {
                    let range = l.range();
                    LengthOption {
                        name: l.name(),
                        label: l.label(),
                        min_words: range.min,
                        max_words: range.max,
                    }
                })
                .collect(),
            default_mood: config.default_mood,
            default_length: config.default_length,
        }
    }
}
