// Storyboard Batch Driver
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use crate::storyboard::composer::SceneComposer;
use crate::storyboard::length::LengthCategory;
use crate::storyboard::mood::Mood;
use crate::storyboard::normalizer::word_count;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One storyboard row: the source lyric and its generated scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRecord {
    #[serde(rename = "Lyric", alias = "lyric")]
    pub lyric: String,
    #[serde(rename = "Scene Description", alias = "description")]
    pub description: String,
}

impl SceneRecord {
    pub fn word_count(&self) -> usize {
        word_count(&self.description)
    }
}

/// Receives `(current, total)` after each record is produced. Purely
/// observational.
pub trait ProgressObserver {
    fn on_progress(&mut self, current: usize, total: usize);
}

pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _current: usize, _total: usize) {}
}

/// Logs progress through `tracing`.
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, current: usize, total: usize) {
        info!(
            "[BATCH] Scene {}/{} ({:.0}%)",
            current,
            total,
            current as f64 / total.max(1) as f64 * 100.0
        );
    }
}

impl<F: FnMut(usize, usize)> ProgressObserver for F {
    fn on_progress(&mut self, current: usize, total: usize) {
        self(current, total)
    }
}

/// Split raw multi-line input into lines (`\n` or `\r\n`). Blank lines are
/// kept; the driver skips them.
pub fn split_lyrics(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Generate one record per non-blank line, in input order.
pub fn generate_storyboard<R, I, S, P>(
    composer: &SceneComposer,
    rng: &mut R,
    lines: I,
    mood: Mood,
    length: LengthCategory,
    progress: &mut P,
) -> Vec<SceneRecord>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: ProgressObserver + ?Sized,
{
    let lyrics: Vec<S> = lines
        .into_iter()
        .filter(|l| !l.as_ref().trim().is_empty())
        .collect();
    let total = lyrics.len();

    info!(
        "[BATCH] Generating storyboard: {} scenes (mood: {}, length: {})",
        total,
        mood,
        length.label()
    );

    let mut scenes = Vec::with_capacity(total);
    for (i, lyric) in lyrics.into_iter().enumerate() {
        let lyric = lyric.as_ref();
        let description = composer.compose(rng, lyric, mood, length);
        scenes.push(SceneRecord {
            lyric: lyric.to_string(),
            description,
        });
        progress.on_progress(i + 1, total);
    }
    scenes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn blank_lines_are_skipped_in_order() {
        let composer = SceneComposer::default();
        let mut rng = StdRng::seed_from_u64(3);
        let lines = ["first light", "", "  ", "last call"];
        let scenes = generate_storyboard(
            &composer,
            &mut rng,
            lines,
            Mood::Random,
            LengthCategory::Concise,
            &mut NoProgress,
        );
        let lyrics: Vec<&str> = scenes.iter().map(|s| s.lyric.as_str()).collect();
        assert_eq!(lyrics, vec!["first light", "last call"]);
    }

    #[test]
    fn progress_reports_each_record() {
        let composer = SceneComposer::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut seen = Vec::new();
        let mut observer = |current: usize, total: usize| seen.push((current, total));
        generate_storyboard(
            &composer,
            &mut rng,
            split_lyrics("a\n\nb\nc\n"),
            Mood::Dreamy,
            LengthCategory::Standard,
            &mut observer,
        );
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn split_handles_crlf() {
        assert_eq!(split_lyrics("one\r\ntwo\r\n\r\nthree"), vec!["one", "two", "", "three"]);
    }

    #[test]
    fn empty_input_produces_no_records() {
        let composer = SceneComposer::default();
        let mut rng = StdRng::seed_from_u64(5);
        let scenes = generate_storyboard(
            &composer,
            &mut rng,
            Vec::<String>::new(),
            Mood::Uplifting,
            LengthCategory::Standard,
            &mut LogProgress,
        );
        assert!(scenes.is_empty());
    }
}
