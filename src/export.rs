// Storyboard Export
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Renders a generated storyboard as CSV, plain text or JSON.

use crate::storyboard::SceneRecord;
use anyhow::{Context, Result};
use csv_async::AsyncSerializer;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const CSV_FILE_NAME: &str = "storyboard_scenes.csv";
pub const TEXT_FILE_NAME: &str = "storyboard_scenes.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Text => TEXT_FILE_NAME,
            ExportFormat::Csv => CSV_FILE_NAME,
            ExportFormat::Json => "storyboard_scenes.json",
        }
    }
}

pub async fn render(scenes: &[SceneRecord], format: ExportFormat) -> Result<Vec<u8>> {
    info!("[EXPORT] Rendering {} scenes as {:?}", scenes.len(), format);
    match format {
        ExportFormat::Text => Ok(to_text(scenes).into_bytes()),
        ExportFormat::Csv => to_csv(scenes).await,
        ExportFormat::Json => Ok(to_json(scenes)?.into_bytes()),
    }
}

/// `Lyric,Scene Description` header followed by one row per scene.
pub async fn to_csv(scenes: &[SceneRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut serializer = AsyncSerializer::from_writer(&mut buf);
        for scene in scenes {
            serializer
                .serialize(scene)
                .await
                .context("Failed to serialize scene to CSV")?;
        }
        serializer.flush().await.context("Failed to flush CSV output")?;
    }
    Ok(buf)
}

pub fn to_text(scenes: &[SceneRecord]) -> String {
    let mut out = String::new();
    for (i, scene) in scenes.iter().enumerate() {
        out.push_str(&format!("SCENE {}\n", i + 1));
        out.push_str(&format!("LYRIC: {}\n", scene.lyric));
        out.push_str(&format!("DESCRIPTION: {}\n", scene.description));
        out.push_str(&"=".repeat(80));
        out.push_str("\n\n");
    }
    out
}

pub fn to_json(scenes: &[SceneRecord]) -> Result<String> {
    serde_json::to_string_pretty(scenes).context("Failed to serialize storyboard to JSON")
}

/// Collapse whitespace and cut at a word boundary so the result, including
/// the `...` placeholder, fits in `width` characters.
pub fn shorten(text: &str, width: usize) -> String {
    const PLACEHOLDER: &str = "...";

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let mut kept = String::new();
    for word in collapsed.split(' ') {
        let extra = if kept.is_empty() { 0 } else { 1 };
        let needed = kept.chars().count() + extra + word.chars().count() + PLACEHOLDER.len();
        if needed > width {
            break;
        }
        if extra == 1 {
            kept.push(' ');
        }
        kept.push_str(word);
    }
    kept.push_str(PLACEHOLDER);
    kept
}

/// `Scene {n}: {shortened lyric}` heading used in listings.
pub fn scene_heading(index: usize, scene: &SceneRecord) -> String {
    format!("Scene {}: {}", index + 1, shorten(&scene.lyric, 50))
}
