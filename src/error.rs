// Storyboard Configuration Errors
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Per-line synthesis never fails. The only hard errors live at the call
// boundary: names that are not in the closed mood/length sets, and config
// files that cannot be read or parsed.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown mood '{0}' (expected one of: Uplifting, Melancholic, Energetic, Dreamy, Dramatic, Random)")]
    UnknownMood(String),

    #[error("unknown length category '{0}' (expected one of: Concise, Standard, Detailed, Elaborate)")]
    UnknownLength(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
