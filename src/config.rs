// Storyboard Configuration
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use crate::error::ConfigError;
use crate::storyboard::mood::{Mood, MoodSelector, DEFAULT_FALLBACK_INDEX};
use crate::storyboard::vocabulary::Category;
use crate::storyboard::{LengthCategory, SceneComposer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "storyboard.json";
pub const CONFIG_ENV_VAR: &str = "STORYBOARD_CONFIG";

/// Synthesizer settings. Every field has a default so a partial JSON file is
/// enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub default_mood: Mood,
    pub default_length: LengthCategory,
    /// Phrase index used when a mood profile points past a category's list.
    pub fallback_index: usize,
    /// Fixed seed for reproducible storyboards. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Per-mood preferred phrase indices replacing the built-in profile rows.
    pub mood_overrides: BTreeMap<Mood, BTreeMap<Category, Vec<usize>>>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            default_mood: Mood::default(),
            default_length: LengthCategory::default(),
            fallback_index: DEFAULT_FALLBACK_INDEX,
            seed: None,
            mood_overrides: BTreeMap::new(),
        }
    }
}

impl SynthConfig {
    /// Load from `$STORYBOARD_CONFIG` if set, else `storyboard.json` if it
    /// exists, else defaults. Only an explicitly named file is required to
    /// exist.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }
        info!("[CONFIG] Using default synthesizer config");
        Ok(Self::default())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
        info!("[CONFIG] Loaded synthesizer config from {:?}", path);
        Ok(config)
    }

    pub fn mood_selector(&self) -> MoodSelector {
        let mut selector = MoodSelector::builtin().with_fallback_index(self.fallback_index);
        for (mood, rows) in &self.mood_overrides {
            for (category, indices) in rows {
                selector = selector.with_preferred(*mood, *category, indices.clone());
            }
        }
        selector
    }

    pub fn composer(&self) -> SceneComposer {
        SceneComposer::new(self.mood_selector())
    }

    /// RNG for one run: seeded when a seed is given (argument wins over the
    /// configured seed), entropy otherwise.
    pub fn rng(&self, seed: Option<u64>) -> StdRng {
        match seed.or(self.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
