// Storyboard Scene Synthesizer
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Turns lyric lines into bounded-length scene descriptions for text-to-video
// prompts. Every random decision draws from a caller-supplied `rand::Rng`, so
// an entropy-seeded generator gives fresh variety per call while a seeded
// `StdRng` reproduces the same storyboard.

pub mod batch;
pub mod composer;
pub mod length;
pub mod mood;
pub mod normalizer;
pub mod vocabulary;

pub use batch::{generate_storyboard, split_lyrics, LogProgress, NoProgress, ProgressObserver, SceneRecord};
pub use composer::{SceneComposer, EMPTY_LYRIC_MESSAGE};
pub use length::{LengthCategory, WordRange};
pub use mood::{Mood, MoodSelector};
pub use normalizer::{normalize_length, word_count};
pub use vocabulary::Category;

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform pick from a static word pool. Empty pools yield "".
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
