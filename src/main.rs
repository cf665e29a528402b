// Storyboard Main Entry Point
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use storyboard_core::export::{self, ExportFormat};
use storyboard_core::server;
use storyboard_core::state::{OptionsResponse, ServerState};
use storyboard_core::storyboard::{
    generate_storyboard, split_lyrics, LengthCategory, LogProgress, Mood,
};
use storyboard_core::SynthConfig;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::info;

#[derive(Parser)]
#[command(name = "storyboard")]
#[command(about = "Lyric-to-Storyboard scene generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a storyboard from a lyrics file (one scene per line)
    Generate {
        /// Lyrics file, or "-" for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Scene mood (Uplifting, Melancholic, Energetic, Dreamy, Dramatic, Random)
        #[arg(short, long)]
        mood: Option<Mood>,

        /// Description length (Concise, Standard, Detailed, Elaborate)
        #[arg(short, long)]
        length: Option<LengthCategory>,

        /// Seed for a reproducible storyboard
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a single scene description
    Scene {
        /// Lyric line
        #[arg(long)]
        lyric: String,

        #[arg(short, long)]
        mood: Option<Mood>,

        #[arg(short, long)]
        length: Option<LengthCategory>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// List moods and description lengths
    Options,

    /// Start the storyboard HTTP API
    Serve {
        /// Port to run the server on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

async fn read_lyrics(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read lyrics from stdin")?;
        return Ok(text);
    }
    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read lyrics file {:?}", input))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Cli::parse();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = SynthConfig::load().context("Failed to load storyboard config")?;

    match args.command {
        Commands::Generate {
            input,
            mood,
            length,
            seed,
            format,
            output,
        } => {
            let lyrics = read_lyrics(&input).await?;
            if lyrics.trim().is_empty() {
                anyhow::bail!("Please enter some lyrics to generate scenes.");
            }

            let composer = config.composer();
            let mut rng = config.rng(seed);
            let scenes = generate_storyboard(
                &composer,
                &mut rng,
                split_lyrics(&lyrics),
                mood.unwrap_or(config.default_mood),
                length.unwrap_or(config.default_length),
                &mut LogProgress,
            );
            for (i, scene) in scenes.iter().enumerate() {
                info!("{} ({} words)", export::scene_heading(i, scene), scene.word_count());
            }

            let body = export::render(&scenes, format).await?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, &body)
                        .await
                        .with_context(|| format!("Failed to write storyboard to {:?}", path))?;
                    info!("Storyboard saved: {:?} ({} scenes)", path, scenes.len());
                }
                None => print!("{}", String::from_utf8_lossy(&body)),
            }
        }
        Commands::Scene {
            lyric,
            mood,
            length,
            seed,
        } => {
            let composer = config.composer();
            let mut rng = config.rng(seed);
            let description = composer.compose(
                &mut rng,
                &lyric,
                mood.unwrap_or(config.default_mood),
                length.unwrap_or(config.default_length),
            );
            println!("{}", description);
        }
        Commands::Options => {
            let options = OptionsResponse::from_config(&config);
            println!("Moods:");
            for mood in &options.moods {
                println!("  {:<12} {}", mood.name, mood.adjectives.join(", "));
            }
            println!("\nDescription lengths:");
            for length in &options.lengths {
                println!("  {}", length.label);
            }
        }
        Commands::Serve { port } => {
            info!("Starting Storyboard API on port {}...", port);
            let state = Arc::new(ServerState::new(config));
            server::start_server(port, state).await?;
        }
    }

    Ok(())
}
