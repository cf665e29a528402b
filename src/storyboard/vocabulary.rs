// Storyboard Vocabulary Store
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Static, read-only phrase tables the composer draws from. Nothing in here
// mutates; every accessor hands out a `'static` slice.

use crate::error::ConfigError;
use crate::storyboard::mood::Mood;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five thematic phrase buckets used to build a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Scenic & Environmental Settings", alias = "setting")]
    Setting,
    #[serde(rename = "Mood & Atmosphere", alias = "atmosphere")]
    Atmosphere,
    #[serde(rename = "Character Descriptors", alias = "character")]
    Character,
    #[serde(rename = "Visual Style & Techniques", alias = "visual_style")]
    VisualStyle,
    #[serde(rename = "Nature & Elements", alias = "nature")]
    Nature,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Setting,
        Category::Atmosphere,
        Category::Character,
        Category::VisualStyle,
        Category::Nature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Setting => "Scenic & Environmental Settings",
            Category::Atmosphere => "Mood & Atmosphere",
            Category::Character => "Character Descriptors",
            Category::VisualStyle => "Visual Style & Techniques",
            Category::Nature => "Nature & Elements",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .or(match wanted.to_lowercase().as_str() {
                "setting" => Some(Category::Setting),
                "atmosphere" => Some(Category::Atmosphere),
                "character" => Some(Category::Character),
                "visual_style" | "style" => Some(Category::VisualStyle),
                "nature" => Some(Category::Nature),
                _ => None,
            })
            .ok_or_else(|| ConfigError::UnknownCategory(s.to_string()))
    }
}

const SETTINGS: &[&str] = &[
    "Misty forest at dawn",
    "Sun-drenched valley",
    "Neon-lit cityscape at night",
    "Ocean waves crashing at sunset",
    "Snow-covered mountain peak",
    "Desert with golden dunes",
    "Rainy alley with reflections",
    "Twilight over a quiet lake",
    "Abandoned warehouse with dust beams",
    "Star-filled sky over rolling hills",
];

const ATMOSPHERES: &[&str] = &[
    "Dreamlike haze",
    "Melancholic silence",
    "Electric anticipation",
    "Whimsical serenity",
    "Tense and foreboding",
    "Radiant joy",
    "Somber and still",
    "Ethereal glow",
    "Cinematic melancholy",
    "Pulsing with energy",
];

const CHARACTERS: &[&str] = &[
    "Woman in flowing white dress",
    "Mysterious figure in a hooded cloak",
    "Child chasing butterflies",
    "Man walking in slow motion",
    "Girl spinning in a flower field",
    "Astronaut floating weightlessly",
    "Dancer under spotlight",
    "Elder sitting by the fire",
    "Lovers holding hands under rain",
    "Warrior standing in ruins",
];

const VISUAL_STYLES: &[&str] = &[
    "Black and white film grain",
    "Watercolor painting aesthetic",
    "VHS retro distortion",
    "Cinematic lens flare",
    "Slow-motion camera pan",
    "Close-up with shallow depth of field",
    "Time-lapse sunset",
    "Glitch art overlays",
    "Sepia-toned flashback",
    "Surreal double exposure",
];

const NATURE: &[&str] = &[
    "Cherry blossoms falling",
    "Leaves swirling in wind",
    "Thunderstorm in distance",
    "Reflections in still water",
    "Fog creeping over hills",
    "Fireflies glowing at dusk",
    "Raindrops on glass",
    "Lightning flashing across sky",
    "Ember sparks rising",
    "Ice cracking underfoot",
];

/// Verbs woven between the character and style clauses.
pub const DESCRIPTIVE_VERBS: &[&str] = &[
    "unfolds", "reveals", "emerges", "transforms", "transitions",
    "drifts", "glides", "cascades", "illuminates", "radiates",
    "echoes", "resonates", "shimmers", "fades", "dissolves",
    "intensifies", "envelops", "surrounds", "embraces", "captivates",
];

/// Prepositions/conjunctions that join two scene elements.
pub const CONNECTING_PHRASES: &[&str] = &[
    "as", "while", "where", "beneath", "above",
    "amidst", "alongside", "through", "within", "beyond",
    "against", "between", "throughout", "under", "over",
];

const UPLIFTING_ADJECTIVES: &[&str] = &[
    "radiant", "vibrant", "joyful", "bright", "gleaming", "hopeful", "warm", "inspiring",
];
const MELANCHOLIC_ADJECTIVES: &[&str] = &[
    "faded", "distant", "somber", "wistful", "weathered", "lonely", "haunting", "subdued",
];
const ENERGETIC_ADJECTIVES: &[&str] = &[
    "vivid", "dynamic", "pulsing", "electric", "powerful", "intense", "bold", "striking",
];
const DREAMY_ADJECTIVES: &[&str] = &[
    "ethereal", "misty", "surreal", "hazy", "floating", "delicate", "soft", "enchanted",
];
const DRAMATIC_ADJECTIVES: &[&str] = &[
    "stark", "towering", "fierce", "imposing", "stormy", "shadowed", "profound", "majestic",
];
const GENERIC_ADJECTIVES: &[&str] = &[
    "random", "varied", "eclectic", "diverse", "unexpected", "surprising", "unpredictable",
    "unpredictable",
];

/// Candidate phrases for a category, in index order.
pub fn phrases(category: Category) -> &'static [&'static str] {
    match category {
        Category::Setting => SETTINGS,
        Category::Atmosphere => ATMOSPHERES,
        Category::Character => CHARACTERS,
        Category::VisualStyle => VISUAL_STYLES,
        Category::Nature => NATURE,
    }
}

/// Mood-specific adjectives. `Random` gets the generic list.
pub fn adjectives(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Uplifting => UPLIFTING_ADJECTIVES,
        Mood::Melancholic => MELANCHOLIC_ADJECTIVES,
        Mood::Energetic => ENERGETIC_ADJECTIVES,
        Mood::Dreamy => DREAMY_ADJECTIVES,
        Mood::Dramatic => DRAMATIC_ADJECTIVES,
        Mood::Random => GENERIC_ADJECTIVES,
    }
}

/// Adjectives looked up by a free-form mood name, falling back to the generic
/// list for names outside the known set.
pub fn adjectives_by_name(name: &str) -> &'static [&'static str] {
    name.parse::<Mood>()
        .map(adjectives)
        .unwrap_or(GENERIC_ADJECTIVES)
}
