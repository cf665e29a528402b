// Storyboard Mood Selector
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Mood profiles narrow each category to a preferred subset of phrase indices.
// Selection always yields a phrase: a preferred index that falls outside the
// category's list resolves to the fallback index and logs a warning.

use crate::error::ConfigError;
use crate::storyboard::pick;
use crate::storyboard::vocabulary::{self, Category};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Index used when a preferred index is out of range.
pub const DEFAULT_FALLBACK_INDEX: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    #[serde(alias = "uplifting")]
    Uplifting,
    #[serde(alias = "melancholic")]
    Melancholic,
    #[serde(alias = "energetic")]
    Energetic,
    #[serde(alias = "dreamy")]
    Dreamy,
    #[serde(alias = "dramatic")]
    Dramatic,
    /// No index restriction, generic adjectives.
    #[serde(alias = "random")]
    Random,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Uplifting,
        Mood::Melancholic,
        Mood::Energetic,
        Mood::Dreamy,
        Mood::Dramatic,
        Mood::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mood::Uplifting => "Uplifting",
            Mood::Melancholic => "Melancholic",
            Mood::Energetic => "Energetic",
            Mood::Dreamy => "Dreamy",
            Mood::Dramatic => "Dramatic",
            Mood::Random => "Random",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownMood(s.to_string()))
    }
}

pub type ProfileMap = BTreeMap<Category, Vec<usize>>;

fn builtin_profile(mood: Mood) -> Option<ProfileMap> {
    use Category::*;
    // A repeated 3 stands in for a slot that has always resolved to the
    // fallback phrase, which doubles its weight.
    let rows: [(Category, [usize; 5]); 5] = match mood {
        Mood::Uplifting => [
            (Setting, [1, 2, 4, 8, 9]),
            (Atmosphere, [3, 4, 6, 8, 3]),
            (Character, [1, 3, 5, 7, 9]),
            (VisualStyle, [3, 4, 5, 7, 3]),
            (Nature, [1, 2, 4, 6, 8]),
        ],
        Mood::Melancholic => [
            (Setting, [0, 6, 7, 8, 9]),
            (Atmosphere, [1, 2, 4, 7, 8]),
            (Character, [0, 1, 7, 8, 9]),
            (VisualStyle, [0, 2, 5, 8, 9]),
            (Nature, [2, 4, 6, 7, 9]),
        ],
        Mood::Energetic => [
            (Setting, [2, 3, 5, 6, 9]),
            (Atmosphere, [2, 3, 5, 9, 3]),
            (Character, [2, 3, 4, 6, 9]),
            (VisualStyle, [3, 4, 6, 7, 8]),
            (Nature, [2, 3, 7, 8, 9]),
        ],
        Mood::Dreamy => [
            (Setting, [0, 1, 3, 7, 9]),
            (Atmosphere, [0, 3, 4, 7, 8]),
            (Character, [0, 2, 4, 5, 6]),
            (VisualStyle, [1, 4, 8, 9, 3]),
            (Nature, [0, 1, 4, 5, 6]),
        ],
        Mood::Dramatic => [
            (Setting, [0, 2, 3, 4, 8]),
            (Atmosphere, [2, 4, 5, 8, 9]),
            (Character, [1, 5, 6, 8, 9]),
            (VisualStyle, [0, 4, 5, 8, 9]),
            (Nature, [2, 3, 7, 8, 9]),
        ],
        Mood::Random => return None,
    };
    Some(rows.into_iter().map(|(c, idx)| (c, idx.to_vec())).collect())
}

/// Mood profiles plus the out-of-range fallback policy.
#[derive(Debug, Clone)]
pub struct MoodSelector {
    profiles: BTreeMap<Mood, ProfileMap>,
    fallback_index: usize,
}

impl Default for MoodSelector {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MoodSelector {
    /// The stock profiles for every non-`Random` mood.
    pub fn builtin() -> Self {
        let profiles = Mood::ALL
            .into_iter()
            .filter_map(|mood| builtin_profile(mood).map(|p| (mood, p)))
            .collect();
        Self {
            profiles,
            fallback_index: DEFAULT_FALLBACK_INDEX,
        }
    }

    pub fn with_fallback_index(mut self, index: usize) -> Self {
        self.fallback_index = index;
        self
    }

    /// Replace (or add) the preferred indices for one mood/category pair.
    /// Overrides on `Random` are stored but never consulted.
    pub fn with_preferred(mut self, mood: Mood, category: Category, indices: Vec<usize>) -> Self {
        self.profiles.entry(mood).or_default().insert(category, indices);
        self
    }

    /// Drop a category from a mood's profile so it becomes unconstrained.
    pub fn without_preferred(mut self, mood: Mood, category: Category) -> Self {
        if let Some(profile) = self.profiles.get_mut(&mood) {
            profile.remove(&category);
        }
        self
    }

    pub fn fallback_index(&self) -> usize {
        self.fallback_index
    }

    pub fn preferred(&self, mood: Mood, category: Category) -> Option<&[usize]> {
        if mood == Mood::Random {
            return None;
        }
        self.profiles
            .get(&mood)
            .and_then(|p| p.get(&category))
            .map(Vec::as_slice)
    }

    /// Pick one phrase for `category` under `mood`.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R, mood: Mood, category: Category) -> &'static str {
        let options = vocabulary::phrases(category);

        let chosen = match self.preferred(mood, category).and_then(|idx| idx.choose(rng)) {
            Some(&index) => index,
            None => return pick(rng, options),
        };

        match options.get(chosen) {
            Some(phrase) => *phrase,
            None => {
                warn!(
                    "[MOOD] Invalid index {} for category '{}' (mood {}), using default {}.",
                    chosen, category, mood, self.fallback_index
                );
                options
                    .get(self.fallback_index)
                    .or_else(|| options.first())
                    .copied()
                    .unwrap_or_default()
            }
        }
    }

    /// Every (mood, category, index) triple that does not resolve to a phrase.
    pub fn out_of_range_indices(&self) -> Vec<(Mood, Category, usize)> {
        let mut bad = Vec::new();
        for (mood, profile) in &self.profiles {
            for (category, indices) in profile {
                let len = vocabulary::phrases(*category).len();
                bad.extend(
                    indices
                        .iter()
                        .filter(|&&i| i >= len)
                        .map(|&i| (*mood, *category, i)),
                );
            }
        }
        bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::{Arc, Mutex};

    #[test]
    fn phrase_lists_support_fallback_index() {
        for category in Category::ALL {
            assert!(vocabulary::phrases(category).len() > DEFAULT_FALLBACK_INDEX);
        }
    }

    #[test]
    fn builtin_indices_are_in_bounds() {
        let selector = MoodSelector::builtin();
        assert!(selector.out_of_range_indices().is_empty());
        for mood in Mood::ALL.into_iter().filter(|m| *m != Mood::Random) {
            for category in Category::ALL {
                assert!(selector.preferred(mood, category).is_some());
            }
        }
    }

    #[test]
    fn fallback_weighted_rows_are_pinned() {
        let selector = MoodSelector::builtin();
        let rows = [
            (Mood::Uplifting, Category::Atmosphere, [3, 4, 6, 8, 3]),
            (Mood::Uplifting, Category::VisualStyle, [3, 4, 5, 7, 3]),
            (Mood::Energetic, Category::Atmosphere, [2, 3, 5, 9, 3]),
            (Mood::Dreamy, Category::VisualStyle, [1, 4, 8, 9, 3]),
        ];
        for (mood, category, expected) in rows {
            assert_eq!(selector.preferred(mood, category), Some(&expected[..]));
        }
    }

    #[test]
    fn uplifting_atmosphere_never_reaches_index_nine() {
        let selector = MoodSelector::builtin();
        let options = vocabulary::phrases(Category::Atmosphere);
        let mut rng = StdRng::seed_from_u64(2024);
        let (mut hits3, mut hits9) = (0, 0);
        for _ in 0..5000 {
            let phrase = selector.select(&mut rng, Mood::Uplifting, Category::Atmosphere);
            if phrase == options[3] {
                hits3 += 1;
            }
            if phrase == options[9] {
                hits9 += 1;
            }
        }
        assert_eq!(hits9, 0);
        assert!((1700..=2300).contains(&hits3), "index 3 drawn {hits3} times");
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn out_of_range_index_logs_warning() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let selector = MoodSelector::builtin().with_preferred(Mood::Melancholic, Category::Setting, vec![12]);
        let phrase = tracing::subscriber::with_default(subscriber, || {
            selector.select(&mut StdRng::seed_from_u64(5), Mood::Melancholic, Category::Setting)
        });
        assert_eq!(phrase, vocabulary::phrases(Category::Setting)[3]);

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("[MOOD] Invalid index 12"), "{output}");
        assert!(output.contains("using default 3"), "{output}");
    }

    #[test]
    fn random_mood_has_no_preferences() {
        let selector = MoodSelector::builtin();
        for category in Category::ALL {
            assert!(selector.preferred(Mood::Random, category).is_none());
        }
    }

    #[test]
    fn selection_stays_within_preferred_set() {
        let selector = MoodSelector::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let phrase = selector.select(&mut rng, Mood::Melancholic, Category::Setting);
            let idx = vocabulary::phrases(Category::Setting)
                .iter()
                .position(|p| *p == phrase)
                .unwrap();
            assert!([0, 6, 7, 8, 9].contains(&idx), "index {idx} not preferred");
        }
    }

    #[test]
    fn out_of_range_index_falls_back_to_index_three() {
        let selector = MoodSelector::builtin().with_preferred(Mood::Dreamy, Category::Nature, vec![42]);
        assert_eq!(selector.out_of_range_indices(), vec![(Mood::Dreamy, Category::Nature, 42)]);

        let mut rng = StdRng::seed_from_u64(1);
        let phrase = selector.select(&mut rng, Mood::Dreamy, Category::Nature);
        assert_eq!(phrase, "Reflections in still water");
    }

    #[test]
    fn fallback_index_is_configurable() {
        let selector = MoodSelector::builtin()
            .with_preferred(Mood::Dramatic, Category::Character, vec![10])
            .with_fallback_index(0);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            selector.select(&mut rng, Mood::Dramatic, Category::Character),
            "Woman in flowing white dress"
        );
    }

    #[test]
    fn empty_preference_list_is_unconstrained() {
        let selector = MoodSelector::builtin().with_preferred(Mood::Energetic, Category::Setting, vec![]);
        let mut rng = StdRng::seed_from_u64(11);
        let phrase = selector.select(&mut rng, Mood::Energetic, Category::Setting);
        assert!(vocabulary::phrases(Category::Setting).contains(&phrase));
    }

    #[test]
    fn missing_category_entry_is_unconstrained() {
        let selector = MoodSelector::builtin().without_preferred(Mood::Dramatic, Category::Atmosphere);
        assert!(selector.preferred(Mood::Dramatic, Category::Atmosphere).is_none());
        let mut rng = StdRng::seed_from_u64(13);
        let seen: std::collections::BTreeSet<&str> = (0..300)
            .map(|_| selector.select(&mut rng, Mood::Dramatic, Category::Atmosphere))
            .collect();
        // Dramatic prefers five atmospheres; unconstrained picks reach the rest.
        assert!(seen.len() > 5);
    }

    #[test]
    fn mood_parses_case_insensitively() {
        assert_eq!("dreamy".parse::<Mood>().unwrap(), Mood::Dreamy);
        assert_eq!(" RANDOM ".parse::<Mood>().unwrap(), Mood::Random);
        assert!(matches!("Gloomy".parse::<Mood>(), Err(ConfigError::UnknownMood(_))));
    }
}
