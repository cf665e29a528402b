// Storyboard Length Categories
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive word-count band for a finished description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRange {
    pub min: usize,
    pub max: usize,
}

impl WordRange {
    pub fn new(min: usize, max: usize) -> Self {
        debug_assert!(min <= max, "WordRange: min must be <= max");
        Self { min, max }
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// Named description length preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthCategory {
    #[serde(alias = "concise")]
    Concise,
    #[default]
    #[serde(alias = "standard")]
    Standard,
    #[serde(alias = "detailed")]
    Detailed,
    #[serde(alias = "elaborate")]
    Elaborate,
}

impl LengthCategory {
    pub const ALL: [LengthCategory; 4] = [
        LengthCategory::Concise,
        LengthCategory::Standard,
        LengthCategory::Detailed,
        LengthCategory::Elaborate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LengthCategory::Concise => "Concise",
            LengthCategory::Standard => "Standard",
            LengthCategory::Detailed => "Detailed",
            LengthCategory::Elaborate => "Elaborate",
        }
    }

    pub fn range(self) -> WordRange {
        match self {
            LengthCategory::Concise => WordRange::new(30, 50),
            LengthCategory::Standard => WordRange::new(50, 80),
            LengthCategory::Detailed => WordRange::new(80, 120),
            LengthCategory::Elaborate => WordRange::new(120, 150),
        }
    }

    /// Human label, e.g. `Concise (30-50 words)`.
    pub fn label(self) -> String {
        let r = self.range();
        format!("{} ({}-{} words)", self.name(), r.min, r.max)
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthCategory {
    type Err = ConfigError;

    /// Accepts the bare name or the labelled form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let head = s.split('(').next().unwrap_or_default().trim();
        LengthCategory::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(head))
            .ok_or_else(|| ConfigError::UnknownLength(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_match_presets() {
        assert_eq!(LengthCategory::Concise.range(), WordRange::new(30, 50));
        assert_eq!(LengthCategory::Standard.range(), WordRange::new(50, 80));
        assert_eq!(LengthCategory::Detailed.range(), WordRange::new(80, 120));
        assert_eq!(LengthCategory::Elaborate.range(), WordRange::new(120, 150));
    }

    #[test]
    fn parses_names_and_labels() {
        assert_eq!("detailed".parse::<LengthCategory>().unwrap(), LengthCategory::Detailed);
        assert_eq!(
            "Concise (30-50 words)".parse::<LengthCategory>().unwrap(),
            LengthCategory::Concise
        );
        for l in LengthCategory::ALL {
            assert_eq!(l.label().parse::<LengthCategory>().unwrap(), l);
        }
        assert!(matches!(
            "Epic".parse::<LengthCategory>(),
            Err(ConfigError::UnknownLength(_))
        ));
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(LengthCategory::default(), LengthCategory::Standard);
    }
}
